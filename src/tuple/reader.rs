use num_bigint::{BigInt, Sign};
use num_traits::ToPrimitive;

use crate::address::Address;
use crate::cell::Cell;

use super::error::{TupleError, TupleResult};
use super::item::{ItemKind, TupleItem};

/// Single-pass typed cursor over an execution-result sequence.
///
/// The reader owns its items; the caller's sequence is moved in at
/// construction and cannot be observed or mutated from outside afterwards.
/// Every accessor that reaches the pop step consumes exactly one front item,
/// shape check succeeding or not (see the module docs).
#[derive(Debug, Clone)]
pub struct TupleReader {
    items: std::vec::IntoIter<TupleItem>,
}

impl TupleReader {
    /// Creates a reader owning the given sequence.
    pub fn new(items: Vec<TupleItem>) -> Self {
        Self {
            items: items.into_iter(),
        }
    }

    /// Count of items not yet consumed.
    pub fn remaining(&self) -> usize {
        self.items.len()
    }

    /// Returns the front item without consuming it.
    pub fn peek(&self) -> TupleResult<&TupleItem> {
        self.items.as_slice().first().ok_or(TupleError::Eof)
    }

    /// Removes and returns the front item.
    pub fn pop(&mut self) -> TupleResult<TupleItem> {
        self.items.next().ok_or(TupleError::Eof)
    }

    /// Reads an arbitrary-precision integer.
    pub fn read_big_number(&mut self) -> TupleResult<BigInt> {
        match self.pop()? {
            TupleItem::Int(value) => Ok(value),
            other => Err(TupleError::TypeMismatch {
                expected: "int",
                found: other.kind(),
            }),
        }
    }

    /// Reads an arbitrary-precision integer, accepting null as absence.
    pub fn read_big_number_opt(&mut self) -> TupleResult<Option<BigInt>> {
        match self.pop()? {
            TupleItem::Null => Ok(None),
            TupleItem::Int(value) => Ok(Some(value)),
            other => Err(TupleError::TypeMismatch {
                expected: "int",
                found: other.kind(),
            }),
        }
    }

    /// Reads an integer narrowed to `i64`.
    ///
    /// Values outside the `i64` range saturate to `i64::MIN` / `i64::MAX`.
    /// Saturation never turns a nonzero value into zero, so downstream
    /// zero-tests (notably [`read_boolean`](Self::read_boolean)) stay exact.
    pub fn read_number(&mut self) -> TupleResult<i64> {
        Ok(narrow(&self.read_big_number()?))
    }

    /// Reads an integer narrowed to `i64`, accepting null as absence.
    pub fn read_number_opt(&mut self) -> TupleResult<Option<i64>> {
        Ok(self.read_big_number_opt()?.map(|value| narrow(&value)))
    }

    /// Reads a boolean: zero maps to `false`, every other value to `true`.
    pub fn read_boolean(&mut self) -> TupleResult<bool> {
        Ok(self.read_number()? != 0)
    }

    /// Reads a boolean, accepting null as absence.
    pub fn read_boolean_opt(&mut self) -> TupleResult<Option<bool>> {
        Ok(self.read_number_opt()?.map(|value| value != 0))
    }

    /// Reads a cell. Finished, slice-wrapped and builder-wrapped cells all
    /// qualify.
    pub fn read_cell(&mut self) -> TupleResult<Cell> {
        match self.pop()? {
            TupleItem::Cell(cell) | TupleItem::Slice(cell) | TupleItem::Builder(cell) => Ok(cell),
            other => Err(TupleError::TypeMismatch {
                expected: "cell",
                found: other.kind(),
            }),
        }
    }

    /// Reads a cell, accepting null as absence.
    pub fn read_cell_opt(&mut self) -> TupleResult<Option<Cell>> {
        match self.pop()? {
            TupleItem::Null => Ok(None),
            TupleItem::Cell(cell) | TupleItem::Slice(cell) | TupleItem::Builder(cell) => {
                Ok(Some(cell))
            }
            other => Err(TupleError::TypeMismatch {
                expected: "cell",
                found: other.kind(),
            }),
        }
    }

    /// Reads a cell and parses the address it encodes.
    pub fn read_address(&mut self) -> TupleResult<Address> {
        let cell = self.read_cell()?;
        match cell.begin_parse().load_maybe_address()? {
            Some(address) => Ok(address),
            None => Err(TupleError::AddressMissing),
        }
    }

    /// Reads an optional address. Both a null item and a cell encoding the
    /// absent-address tag yield `None`; this path never fails on absence.
    pub fn read_address_opt(&mut self) -> TupleResult<Option<Address>> {
        match self.read_cell_opt()? {
            Some(cell) => Ok(cell.begin_parse().load_maybe_address()?),
            None => Ok(None),
        }
    }

    /// Reads a nested tuple as a new independent reader.
    pub fn read_tuple(&mut self) -> TupleResult<TupleReader> {
        match self.pop()? {
            TupleItem::Tuple(items) => Ok(TupleReader::new(items)),
            other => Err(TupleError::TypeMismatch {
                expected: "tuple",
                found: other.kind(),
            }),
        }
    }

    /// Reads a nested tuple, accepting null as absence.
    pub fn read_tuple_opt(&mut self) -> TupleResult<Option<TupleReader>> {
        match self.pop()? {
            TupleItem::Null => Ok(None),
            TupleItem::Tuple(items) => Ok(Some(TupleReader::new(items))),
            other => Err(TupleError::TypeMismatch {
                expected: "tuple",
                found: other.kind(),
            }),
        }
    }

    /// Reads a byte buffer from a cell holding a whole number of bytes and
    /// no references.
    pub fn read_buffer(&mut self) -> TupleResult<Vec<u8>> {
        let cell = self.read_cell()?;
        let mut slice = cell.begin_parse();
        if slice.remaining_refs() != 0 {
            return Err(TupleError::FormatViolation {
                reason: "buffer cell has outgoing references",
            });
        }
        let bits = slice.remaining_bits();
        if bits % 8 != 0 {
            return Err(TupleError::FormatViolation {
                reason: "buffer payload is not byte aligned",
            });
        }
        Ok(slice.load_buffer(bits / 8)?)
    }

    /// Reads a byte buffer, accepting null as absence.
    pub fn read_buffer_opt(&mut self) -> TupleResult<Option<Vec<u8>>> {
        if self.peek()?.kind() == ItemKind::Null {
            self.pop()?;
            return Ok(None);
        }
        self.read_buffer().map(Some)
    }

    /// Reads UTF-8 text spread over a snake chain.
    pub fn read_string(&mut self) -> TupleResult<String> {
        let cell = self.read_cell()?;
        Ok(cell.begin_parse().load_string_tail()?)
    }

    /// Reads UTF-8 text, accepting null as absence.
    pub fn read_string_opt(&mut self) -> TupleResult<Option<String>> {
        if self.peek()?.kind() == ItemKind::Null {
            self.pop()?;
            return Ok(None);
        }
        self.read_string().map(Some)
    }
}

/// Saturating narrowing of an arbitrary-precision integer to `i64`.
fn narrow(value: &BigInt) -> i64 {
    value.to_i64().unwrap_or(match value.sign() {
        Sign::Minus => i64::MIN,
        _ => i64::MAX,
    })
}
