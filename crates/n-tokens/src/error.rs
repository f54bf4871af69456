//! Errors for parsing catalog identifiers.

use thiserror::Error;

/// A family or variant name that the catalogs don't know.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ParseTokenError {
    #[error("unknown component family: {0:?}")]
    UnknownFamily(String),

    #[error("unknown variant: {0:?}")]
    UnknownVariant(String),
}
