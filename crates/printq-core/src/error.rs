use thiserror::Error;

#[derive(Debug, Error)]
pub enum QueueError {
    #[error("invalid credentials: check your e-mail and password")]
    InvalidCredentials,

    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("only the administrator can change order status")]
    NotAdministrator,

    #[error("order not found: {0}")]
    OrderNotFound(String),

    #[error("failed to persist order queue: {0}")]
    Persistence(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, QueueError>;
