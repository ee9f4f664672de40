//! Decoding layer for ledger-VM execution results.
//!
//! The crate covers two tightly coupled pieces:
//!
//! * [`tuple`]: a single-pass typed reader over the tagged value sequence a
//!   contract call returns. Accessors narrow items to numbers, booleans,
//!   cells, addresses, buffers, strings and nested tuples, in strict and
//!   null-tolerant flavours.
//! * [`cell`]: the bounded binary container those values reference (at most
//!   1023 payload bits and 4 outgoing references per node), together with
//!   the snake codec that chains arbitrary byte payloads across cells.
//!
//! Everything here is synchronous value transformation: no I/O, no shared
//! state, no retries. Failures surface immediately through the per-layer
//! error enums ([`cell::CellError`], [`tuple::TupleError`]).

pub mod address;
pub mod cell;
pub mod tuple;
