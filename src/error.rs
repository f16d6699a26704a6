use thiserror::Error;

use crate::api::ApiError;
use crate::config::ConfigError;

/// Failures that stop the console from starting or keep running.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
