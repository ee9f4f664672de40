//! Snake chunking of byte payloads across a cell chain.
//!
//! A payload longer than one cell's capacity is split into byte-aligned
//! chunks of at most 127 bytes (the whole-byte capacity of a single cell).
//! The last chunk lands in a cell
//! with no references; every earlier chunk lands in a cell holding the chunk
//! plus exactly one reference to its successor. Decoding walks the chain
//! head-to-tail and concatenates, so UTF-8 text survives chunk borders that
//! fall inside a multi-byte sequence.

use super::builder::CellBuilder;
use super::error::{CellError, CellResult};
use super::slice::CellSlice;
use super::types::{Cell, MAX_BITS};

/// Largest whole-byte chunk a single cell can carry.
const CHUNK_BYTES: usize = MAX_BITS / 8;

/// Encodes a byte payload into a snake chain and returns the head cell.
///
/// A zero-length payload yields a single cell with no payload and no
/// references.
pub fn bytes_to_cell(data: &[u8]) -> CellResult<Cell> {
    let mut chunks = data.chunks(CHUNK_BYTES).rev();
    let mut builder = CellBuilder::new();
    builder.store_bytes(chunks.next().unwrap_or(&[]))?;
    let mut tail = builder.build();
    for chunk in chunks {
        let mut builder = CellBuilder::new();
        builder.store_bytes(chunk)?;
        builder.store_ref(tail)?;
        tail = builder.build();
    }
    Ok(tail)
}

/// Encodes UTF-8 text into a snake chain.
pub fn string_to_cell(text: &str) -> CellResult<Cell> {
    bytes_to_cell(text.as_bytes())
}

/// Decodes a snake chain starting at the given view.
///
/// Reads every remaining byte of the current view, then descends while
/// exactly one reference remains. The traversal is iterative so chain length
/// is bounded by memory, not stack depth.
pub(super) fn read_tail(slice: CellSlice<'_>) -> CellResult<Vec<u8>> {
    let mut out = Vec::new();
    let mut current = slice;
    loop {
        let bits = current.remaining_bits();
        if bits % 8 != 0 {
            return Err(CellError::NotByteAligned { bits });
        }
        out.extend_from_slice(current.load_bytes(bits / 8)?);
        match current.remaining_refs() {
            0 => break,
            1 => current = current.load_ref()?.begin_parse(),
            refs => return Err(CellError::MalformedChain { refs }),
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_payload_is_a_single_bare_cell() {
        let cell = bytes_to_cell(&[]).unwrap();
        assert_eq!(cell.bit_len(), 0);
        assert!(cell.refs().is_empty());
        assert_eq!(cell.begin_parse().load_bytes_tail().unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn chunking_reserves_one_continuation_per_link() {
        let payload = vec![0x5au8; CHUNK_BYTES * 2 + 1];
        let head = bytes_to_cell(&payload).unwrap();

        assert_eq!(head.data().len(), CHUNK_BYTES);
        assert_eq!(head.refs().len(), 1);
        let mid = &head.refs()[0];
        assert_eq!(mid.data().len(), CHUNK_BYTES);
        assert_eq!(mid.refs().len(), 1);
        let last = &mid.refs()[0];
        assert_eq!(last.data().len(), 1);
        assert!(last.refs().is_empty());
    }

    #[test]
    fn fork_in_the_chain_is_rejected() {
        let mut builder = CellBuilder::new();
        builder.store_bytes(b"ab").unwrap();
        builder.store_ref(bytes_to_cell(b"x").unwrap()).unwrap();
        builder.store_ref(bytes_to_cell(b"y").unwrap()).unwrap();
        let cell = builder.build();

        let err = cell.begin_parse().load_bytes_tail().unwrap_err();
        assert_eq!(err, CellError::MalformedChain { refs: 2 });
    }
}
