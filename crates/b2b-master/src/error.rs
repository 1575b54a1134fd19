use std::sync::Arc;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MasterApiError {
    #[error("Internal server error")]
    InternalServerError,

    #[error("Invalid upstream URL: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Failure of a fetch that several callers were waiting on.
    #[error("{0}")]
    Shared(Arc<MasterApiError>),
}

impl MasterApiError {
    /// The underlying error, looking through shared fetch failures.
    pub fn root(&self) -> &Self {
        match self {
            Self::Shared(inner) => inner.root(),
            other => other,
        }
    }
}

impl From<Arc<Self>> for MasterApiError {
    fn from(err: Arc<Self>) -> Self {
        Arc::try_unwrap(err).unwrap_or_else(Self::Shared)
    }
}
