pub mod config;
pub mod output_format;

pub use config::{AppConfig, ConfigSource, CONFIG_ENV_VAR};
pub use output_format::OutputFormat;
