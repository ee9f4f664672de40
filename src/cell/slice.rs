use crate::address::Address;

use super::builder::{ADDR_TAG_NONE, ADDR_TAG_STD};
use super::error::{CellError, CellResult};
use super::snake;
use super::types::Cell;

/// Read cursor over a cell's payload and reference list.
///
/// The counters shrink as payload and references are consumed; a rejected
/// read leaves the cursor unchanged. Payload consumption is byte-granular,
/// so the cursor offset always sits on a byte boundary even when the cell's
/// total bit length does not.
#[derive(Debug, Clone, Copy)]
pub struct CellSlice<'a> {
    data: &'a [u8],
    bit_len: usize,
    bits_consumed: usize,
    refs: &'a [Cell],
    refs_consumed: usize,
}

impl<'a> CellSlice<'a> {
    pub(crate) fn new(data: &'a [u8], bit_len: usize, refs: &'a [Cell]) -> Self {
        Self {
            data,
            bit_len,
            bits_consumed: 0,
            refs,
            refs_consumed: 0,
        }
    }

    /// Payload bits not yet consumed.
    pub fn remaining_bits(&self) -> usize {
        self.bit_len - self.bits_consumed
    }

    /// References not yet consumed.
    pub fn remaining_refs(&self) -> usize {
        self.refs.len() - self.refs_consumed
    }

    /// Consumes `n` whole bytes of payload and returns them as a borrowed
    /// slice.
    pub fn load_bytes(&mut self, n: usize) -> CellResult<&'a [u8]> {
        let requested = n * 8;
        if requested > self.remaining_bits() {
            return Err(CellError::UnderflowBits {
                requested,
                remaining: self.remaining_bits(),
            });
        }
        let start = self.bits_consumed / 8;
        self.bits_consumed += requested;
        Ok(&self.data[start..start + n])
    }

    /// Consumes `n` whole bytes of payload and returns them as an owned
    /// buffer.
    pub fn load_buffer(&mut self, n: usize) -> CellResult<Vec<u8>> {
        Ok(self.load_bytes(n)?.to_vec())
    }

    /// Consumes and returns the next reference.
    pub fn load_ref(&mut self) -> CellResult<&'a Cell> {
        let cell = self
            .refs
            .get(self.refs_consumed)
            .ok_or(CellError::UnderflowRefs)?;
        self.refs_consumed += 1;
        Ok(cell)
    }

    /// Consumes an address, failing when the absent-address tag is found.
    pub fn load_address(&mut self) -> CellResult<Address> {
        self.load_maybe_address()?.ok_or(CellError::AddressMissing)
    }

    /// Consumes an optional address. Absence is a valid result, never an
    /// error.
    pub fn load_maybe_address(&mut self) -> CellResult<Option<Address>> {
        let tag = self.load_bytes(1)?[0];
        match tag {
            ADDR_TAG_NONE => Ok(None),
            ADDR_TAG_STD => {
                let body = self.load_bytes(33)?;
                let workchain = body[0] as i8;
                let mut hash = [0u8; 32];
                hash.copy_from_slice(&body[1..]);
                Ok(Some(Address::new(workchain, hash)))
            }
            tag => Err(CellError::UnknownAddressTag { tag }),
        }
    }

    /// Consumes the remaining payload and the snake continuation chain,
    /// returning the concatenated bytes.
    pub fn load_bytes_tail(self) -> CellResult<Vec<u8>> {
        snake::read_tail(self)
    }

    /// Consumes the remaining payload and the snake continuation chain,
    /// decoding the concatenated bytes as UTF-8.
    pub fn load_string_tail(self) -> CellResult<String> {
        String::from_utf8(self.load_bytes_tail()?).map_err(|_| CellError::InvalidUtf8)
    }
}
