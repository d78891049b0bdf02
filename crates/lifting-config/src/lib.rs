#![deny(unsafe_code)]

pub mod error;
pub mod loaders;
pub mod paths;

pub use crate::error::ConfigError;
pub use crate::loaders::{load_default_schema, load_schema, parse_schema, validate_schema};
pub use crate::paths::{CONFIG_ENV_VAR, config_override};
