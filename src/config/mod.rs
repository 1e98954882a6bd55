//! Configuration for the concrete checks.
//!
//! - [`schema`] - The `.conformity.yml` structure
//! - [`loader`] - File discovery and parsing

pub mod loader;
pub mod schema;

pub use loader::{default_config_path, load_config, load_config_file, parse_config, CONFIG_FILE_NAME};
pub use schema::ChecksConfig;
