// Demo configuration, read from TOML
//
// Every field has a default, so an empty file reproduces the built-in walkthrough.

use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::{Result, WorkshopError};
use crate::proxy::problem::MAX_OPERANDS;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorkshopConfig {
    pub flyweight: FlyweightConfig,
    pub proxy: ProxyConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FlyweightConfig {
    pub names: Vec<String>,
    pub text: String,
    /// Inclusive `[start, end]` character ranges to capitalise.
    pub capitalize: Vec<[usize; 2]>,
    /// First and last names generated for the memory comparison (squared users).
    pub random_users: usize,
}

impl Default for FlyweightConfig {
    fn default() -> Self {
        Self {
            names: ["John Doe", "Jane Doe", "John Smith", "Alice Johnson"]
                .map(String::from)
                .to_vec(),
            text: "This is a brave new world".to_string(),
            capitalize: vec![[10, 15], [16, 19]],
            random_users: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProxyConfig {
    pub driver_age: u32,
    pub minimum_driving_age: u32,
    pub creature_count: usize,
    pub overdraft_limit: i64,
    pub puzzle_numbers: Vec<i64>,
    pub target_min: i64,
    pub target_max: i64,
}

impl Default for ProxyConfig {
    fn default() -> Self {
        Self {
            driver_age: 16,
            minimum_driving_age: 16,
            creature_count: 100,
            overdraft_limit: -500,
            puzzle_numbers: vec![1, 3, 5, 7],
            target_min: 0,
            target_max: 10,
        }
    }
}

impl WorkshopConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: WorkshopConfig = toml::from_str(content)?;
        config.validate().map_err(|message| WorkshopError::config("<inline>", message))?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|err| WorkshopError::config(path, format!("failed to read: {err}")))?;
        let config: WorkshopConfig = toml::from_str(&content)
            .map_err(|err| WorkshopError::config(path, err.to_string()))?;
        config
            .validate()
            .map_err(|message| WorkshopError::config(path, message))?;
        debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> std::result::Result<(), String> {
        let proxy = &self.proxy;
        if proxy.target_min > proxy.target_max {
            return Err(format!(
                "target_min {} is greater than target_max {}",
                proxy.target_min, proxy.target_max
            ));
        }
        if proxy.puzzle_numbers.is_empty() {
            return Err("puzzle_numbers must not be empty".to_string());
        }
        if proxy.puzzle_numbers.len() > MAX_OPERANDS {
            return Err(format!(
                "puzzle_numbers holds at most {MAX_OPERANDS} operands, got {}",
                proxy.puzzle_numbers.len()
            ));
        }
        let reversed = self.flyweight.capitalize.iter().find(|range| range[0] > range[1]);
        if let Some([start, end]) = reversed {
            return Err(format!("capitalize range [{start}, {end}] is reversed"));
        }
        Ok(())
    }
}
