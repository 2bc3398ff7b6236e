//! Configuration loading and validation
//!
//! Rockpool reads an optional TOML configuration file; every field has a
//! working default, and CLI flags override file values.

mod parser;
mod types;
mod validation;

pub use parser::load_config;
pub use types::{Config, CrawlerConfig, OutputConfig, UserAgentConfig};
pub use validation::validate;
