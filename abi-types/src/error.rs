use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The descriptor does not name a known type.
    #[error("Invalid type: {0}")]
    InvalidType(String),
    /// An integer, fixed bytes or fixed array type with a width it cannot have.
    #[error("Invalid size {size} for type `{ty}`")]
    InvalidSize { ty: String, size: usize },
    #[error("Unbalanced brackets in type: {0}")]
    UnbalancedBrackets(String),
    #[error("Type nests {depth} levels deep, at most {max} are allowed")]
    TooDeep { depth: usize, max: usize },
}
