//! Configuration loading
//!
//! Settings come from a TOML document compiled into the firmware image.

pub mod loader;

pub use loader::{load_config, parse_config, DEFAULT_CONFIG};
