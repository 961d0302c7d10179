use crate::config::ConfigError;
use crate::datasource::DataSourceError;
use crate::engine::FeeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Input(#[from] DataSourceError),
    #[error(transparent)]
    Fee(#[from] FeeError),
}
