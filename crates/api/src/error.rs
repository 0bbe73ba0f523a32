/// Error type returned by application-supplied collaborators.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failures a collaborator can report through the narrow interfaces in [`crate::env`].
#[derive(Debug, thiserror::Error)]
pub enum CollaboratorError {
    #[error("Attach point not found: {0}")]
    AttachPointMissing(String),
    #[error("Handler rejected by collaborator: {0}")]
    Rejected(String),
    #[error("Collaborator unavailable: {0}")]
    Unavailable(String),
}

pub type CollaboratorResult<T> = std::result::Result<T, BoxError>;
