//! `.homeprint.toml` discovery and parsing.

mod core;
mod loader;

pub use self::core::{HomeprintConfig, OutputConfig};
pub use self::loader::{
    directory_ancestors, load_config, load_config_from, parse_config, CONFIG_FILE_NAME,
};
