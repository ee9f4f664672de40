use serde::{Deserialize, Serialize};
use std::fmt;

use super::slice::CellSlice;

/// Maximum number of payload bits a single cell can hold.
pub const MAX_BITS: usize = 1023;

/// Maximum number of outgoing references a single cell can hold.
pub const MAX_REFS: usize = 4;

/// Immutable bounded container node.
///
/// A cell owns up to [`MAX_BITS`] bits of payload and up to [`MAX_REFS`]
/// child cells. Payload bytes are stored densely; `bit_len` records the
/// exact bit count so that non-byte-aligned payloads remain representable.
/// Cells are only constructed through [`CellBuilder`](super::CellBuilder).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    data: Vec<u8>,
    bit_len: usize,
    refs: Vec<Cell>,
}

impl Cell {
    pub(crate) fn new(data: Vec<u8>, bit_len: usize, refs: Vec<Cell>) -> Self {
        debug_assert!(bit_len <= MAX_BITS);
        debug_assert!(data.len() * 8 >= bit_len);
        debug_assert!(refs.len() <= MAX_REFS);
        Self {
            data,
            bit_len,
            refs,
        }
    }

    /// Number of payload bits stored in this cell.
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// Raw payload bytes. The final byte may be partially occupied when
    /// [`bit_len`](Self::bit_len) is not a multiple of 8.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Child cells in storage order.
    pub fn refs(&self) -> &[Cell] {
        &self.refs
    }

    /// Opens a read cursor over the full payload and reference list.
    pub fn begin_parse(&self) -> CellSlice<'_> {
        CellSlice::new(&self.data, self.bit_len, &self.refs)
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell({} bits, {} refs, 0x", self.bit_len, self.refs.len())?;
        for byte in &self.data {
            write!(f, "{:02x}", byte)?;
        }
        write!(f, ")")
    }
}
