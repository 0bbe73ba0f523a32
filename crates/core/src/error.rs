use sitekit_api::BoxError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("No public modules for navigation ({registered} registered)")]
    NoPublicModules { registered: usize },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Mount error: {0}")]
    Mount(#[source] BoxError),
    #[error("Dispatch registration error: {0}")]
    Dispatch(#[source] BoxError),
}

impl SiteError {
    /// Configuration errors must stop the server before it starts serving.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            SiteError::NoPublicModules { .. } | SiteError::InvalidConfig(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
