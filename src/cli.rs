use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::WorkshopConfig;
use crate::error::Result;

/// Arguments shared by the demo binaries.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct DemoArgs {
    /// TOML file overriding the demo inputs
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl DemoArgs {
    /// Initialises logging and loads the configuration.
    pub fn setup(&self) -> Result<WorkshopConfig> {
        crate::logging::init(self.verbose);
        log::debug!("args: {self:?}");
        WorkshopConfig::load_or_default(self.config.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flags() {
        let args = DemoArgs::parse_from(["proxy", "-vv", "--config", "demo.toml"]);
        assert_eq!(args.verbose, 2);
        assert_eq!(args.config, Some(PathBuf::from("demo.toml")));
    }

    #[test]
    fn test_defaults() {
        let args = DemoArgs::parse_from(["flyweight"]);
        assert_eq!(args.verbose, 0);
        assert!(args.config.is_none());
    }
}
