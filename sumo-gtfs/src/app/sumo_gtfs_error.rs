use crate::{config::ConfigurationError, network::NetworkError, table::TableError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SumoGtfsError {
    #[error(transparent)]
    NetworkError(#[from] NetworkError),
    #[error(transparent)]
    TableError(#[from] TableError),
    #[error(transparent)]
    ConfigurationError(#[from] ConfigurationError),
}
