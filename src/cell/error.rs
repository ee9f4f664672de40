use std::fmt;

/// Errors emitted by the cell layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellError {
    /// A write would exceed the cell's payload bit capacity.
    CapacityExceeded { requested: usize, available: usize },
    /// A write would exceed the cell's reference capacity.
    RefCapacityExceeded,
    /// A read asked for more payload bits than the view still holds.
    UnderflowBits { requested: usize, remaining: usize },
    /// A read asked for a reference the view no longer holds.
    UnderflowRefs,
    /// A byte-granular read found a bit count that is not a multiple of 8.
    NotByteAligned { bits: usize },
    /// A snake chain node carries more than one continuation reference.
    MalformedChain { refs: usize },
    /// The view encodes no address where one is required.
    AddressMissing,
    /// The address tag byte is neither the absent nor the standard marker.
    UnknownAddressTag { tag: u8 },
    /// The concatenated payload is not valid UTF-8.
    InvalidUtf8,
}

impl fmt::Display for CellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellError::CapacityExceeded {
                requested,
                available,
            } => write!(
                f,
                "payload capacity exceeded: requested {} bits, {} available",
                requested, available
            ),
            CellError::RefCapacityExceeded => write!(f, "reference capacity exceeded"),
            CellError::UnderflowBits {
                requested,
                remaining,
            } => write!(
                f,
                "payload underflow: requested {} bits, {} remaining",
                requested, remaining
            ),
            CellError::UnderflowRefs => write!(f, "reference underflow"),
            CellError::NotByteAligned { bits } => {
                write!(f, "bit count {} is not byte aligned", bits)
            }
            CellError::MalformedChain { refs } => {
                write!(f, "malformed snake chain: {} continuation references", refs)
            }
            CellError::AddressMissing => write!(f, "no address present"),
            CellError::UnknownAddressTag { tag } => {
                write!(f, "unknown address tag {:#04x}", tag)
            }
            CellError::InvalidUtf8 => write!(f, "payload is not valid utf-8"),
        }
    }
}

impl std::error::Error for CellError {}

/// Convenient alias for cell-layer results.
pub type CellResult<T> = core::result::Result<T, CellError>;
