//! Typed reading of execution-result sequences.
//!
//! A contract call returns an ordered sequence of tagged values
//! ([`TupleItem`]). [`TupleReader`] consumes such a sequence front to back,
//! narrowing each item to the shape the caller expects. Two rules shape the
//! whole API:
//!
//! * **Consume before validate.** Every accessor that reaches the pop step
//!   advances the cursor by one, whether or not the shape check that follows
//!   succeeds. A failed read cannot be retried at the same position; callers
//!   abandon the reader or move on.
//! * **Strict vs `_opt`.** Strict accessors demand the exact shape and fail
//!   with [`TupleError::TypeMismatch`] on anything else, null included. The
//!   `_opt` variants additionally accept a null item as a well-formed
//!   absence and return `None` for it.

mod error;
mod item;
mod reader;

pub use error::{TupleError, TupleResult};
pub use item::{ItemKind, TupleItem};
pub use reader::TupleReader;
