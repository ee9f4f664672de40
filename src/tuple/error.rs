use std::fmt;

use crate::cell::CellError;

use super::item::ItemKind;

/// Errors emitted by the tuple reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TupleError {
    /// The reader was asked for an item with none remaining.
    Eof,
    /// The popped item does not carry the shape the accessor requires.
    TypeMismatch {
        expected: &'static str,
        found: ItemKind,
    },
    /// A buffer-shaped read found a cell that cannot hold a plain buffer.
    FormatViolation { reason: &'static str },
    /// A strict address read found no address.
    AddressMissing,
    /// A failure surfaced from the cell layer.
    Cell(CellError),
}

impl fmt::Display for TupleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TupleError::Eof => write!(f, "no items remaining"),
            TupleError::TypeMismatch { expected, found } => {
                write!(f, "expected {}, found {}", expected, found)
            }
            TupleError::FormatViolation { reason } => write!(f, "{}", reason),
            TupleError::AddressMissing => write!(f, "no address present"),
            TupleError::Cell(err) => write!(f, "cell error: {}", err),
        }
    }
}

impl std::error::Error for TupleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TupleError::Cell(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CellError> for TupleError {
    fn from(err: CellError) -> Self {
        TupleError::Cell(err)
    }
}

/// Convenient alias for reader results.
pub type TupleResult<T> = core::result::Result<T, TupleError>;
