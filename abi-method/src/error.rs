use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Serialization error
    #[error("Serialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
    #[error(transparent)]
    Type(#[from] abi_types::Error),
    #[error("Missing components for tuple type: {0}")]
    MissingComponents(String),
    #[error("Invalid selector: {0}")]
    InvalidSelector(String),
}
