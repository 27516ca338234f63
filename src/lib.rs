//! Flyweight and Proxy pattern workshop.
//!
//! - [`flyweight`]: a shared string table for names, range-based text styling.
//! - [`proxy`]: protection, property, value, logging and view-model proxies, a
//!   structure-of-arrays creature table, and a bit-packed operator search.

pub mod cli;
pub mod config;
pub mod error;
pub mod flyweight;
pub mod logging;
pub mod proxy;

pub use config::WorkshopConfig;
pub use error::{Result, WorkshopError};
