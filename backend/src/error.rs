use common::contact::SubmissionError;
use common::query::QueryEncodingError;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("CMS returned {status}: {body}")]
    Server { status: u16, body: String },

    #[error("Could not decode CMS response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid filter query: {0}")]
    Query(#[from] QueryEncodingError),

    #[error("{0}")]
    Rejected(SubmissionError),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl CatalogError {
    pub fn status_code(&self) -> u16 {
        match self {
            CatalogError::Server { status, .. } => *status,
            CatalogError::Query(_) | CatalogError::Rejected(_) => 400,
            CatalogError::NotFound(_) => 404,
            CatalogError::Request(_) | CatalogError::Decode(_) => 502,
        }
    }
}
