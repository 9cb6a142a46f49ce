use thiserror::Error;

/// Failures while turning raw contract orders into display values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A price or quantity that is not a non-negative integer.
    #[error("invalid {field} amount: {value:?}")]
    InvalidAmount { field: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The node answered with a JSON-RPC error object.
    #[error("RPC error ({name}): {message}")]
    Rpc { name: String, message: String },

    /// The view call reached the contract but execution failed.
    #[error("contract call {method} failed: {message}")]
    Contract { method: String, message: String },

    #[error(transparent)]
    Book(#[from] BookError),

    #[error("no account is signed in")]
    NotSignedIn,

    #[error("invalid account id: {0:?}")]
    InvalidAccountId(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
