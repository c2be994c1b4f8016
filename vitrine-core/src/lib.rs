pub mod clients;
pub mod repository;
pub mod search;

pub use clients::{QuestionClient, ReviewClient, SellerClient};
pub use repository::ProductRepository;
pub use search::{SearchPage, SearchQuery};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Collaborator unavailable: {0}")]
    Unavailable(String),
    #[error("Deadline exceeded while calling {0}")]
    DeadlineExceeded(&'static str),
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),
    #[error("Malformed data: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("Internal service error: {0}")]
    InternalError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
