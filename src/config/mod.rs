//! Configuration resolution and validation.

pub mod loader;
pub mod resolver;
pub mod schema;
pub mod validation;

pub use loader::load_config;
pub use resolver::{resolve_config, ConfigOverrides};
pub use schema::RegistryConfig;
pub use validation::validate_config;
