//! Configuration module for Kosh-Harvester
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every section has defaults, so the crawler also runs without a file.
//!
//! # Example
//!
//! ```no_run
//! use kosh_harvester::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvest.toml")).unwrap();
//! println!("Harvesting at most {} authors", config.crawler.max_authors);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, FilterConfig, OutputConfig, SiteConfig, UserAgentConfig,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};
pub use validation::validate;
