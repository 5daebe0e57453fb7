mod configuration_error;
mod route_mapping_config;

pub use configuration_error::ConfigurationError;
pub use route_mapping_config::RouteMappingConfig;
