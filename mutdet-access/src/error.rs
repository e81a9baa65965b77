use thiserror::Error;

use crate::ElementKind;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("Empty flag expression")]
    Empty,

    #[error("Unknown {kind} modifier: {name:?}")]
    UnknownModifier { name: String, kind: ElementKind },

    #[error("Invalid integer literal {0:?}")]
    InvalidLiteral(String),

    #[error("Unknown element kind {0:?} (expected type, field or method)")]
    UnknownKind(String),
}

pub type Result<T> = std::result::Result<T, Error>;
