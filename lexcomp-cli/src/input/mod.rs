//! Input handling module

pub mod config_loader;
pub mod source_discovery;

pub use config_loader::load_config;
pub use source_discovery::discover_sources;
