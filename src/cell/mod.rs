//! Bounded binary cells and the snake payload codec.
//!
//! The module fixes the following container knobs:
//!
//! * **Capacity:** a cell stores at most [`MAX_BITS`] (1023) payload bits
//!   and at most [`MAX_REFS`] (4) outgoing references. Both limits are
//!   enforced by [`CellBuilder`], never checked by callers.
//! * **Granularity:** the write/read surface works in whole bytes
//!   ([`CellBuilder::store_bytes`], [`CellSlice::load_bytes`]). A raw write
//!   path exists for payloads whose bit length is not a byte multiple;
//!   consumers that require byte alignment reject such cells.
//! * **Snake chaining:** payloads longer than one cell's capacity are spread
//!   across a chain in which every non-terminal cell carries its chunk plus
//!   exactly one continuation reference ([`bytes_to_cell`],
//!   [`CellSlice::load_bytes_tail`]).
//!
//! Hashing, deduplication and the outer tree-to-byte-stream format are
//! deliberately absent; cells here exist to carry payloads and references.

mod builder;
mod error;
mod slice;
mod snake;
mod types;

pub use builder::CellBuilder;
pub use error::{CellError, CellResult};
pub use slice::CellSlice;
pub use snake::{bytes_to_cell, string_to_cell};
pub use types::{Cell, MAX_BITS, MAX_REFS};
