use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cell::Cell;

/// One value in an execution-result sequence.
///
/// The discriminant fully determines which payload is carried; the reader
/// matches on it exhaustively, so an item can never claim a shape it does
/// not hold. The three cell-shaped variants record how the execution layer
/// produced the cell (finished, being read, under construction) but all
/// expose the same underlying [`Cell`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TupleItem {
    /// Absence marker.
    Null,
    /// Arbitrary-precision signed integer.
    Int(BigInt),
    /// A finished cell.
    Cell(Cell),
    /// A cell observed through a read cursor.
    Slice(Cell),
    /// A cell still under construction.
    Builder(Cell),
    /// Nested ordered sequence.
    Tuple(Vec<TupleItem>),
}

impl TupleItem {
    /// Returns the bare discriminant of this item.
    pub fn kind(&self) -> ItemKind {
        match self {
            TupleItem::Null => ItemKind::Null,
            TupleItem::Int(_) => ItemKind::Int,
            TupleItem::Cell(_) => ItemKind::Cell,
            TupleItem::Slice(_) => ItemKind::Slice,
            TupleItem::Builder(_) => ItemKind::Builder,
            TupleItem::Tuple(_) => ItemKind::Tuple,
        }
    }
}

/// Discriminant of a [`TupleItem`], used in mismatch reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Null,
    Int,
    Cell,
    Slice,
    Builder,
    Tuple,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemKind::Null => write!(f, "null"),
            ItemKind::Int => write!(f, "int"),
            ItemKind::Cell => write!(f, "cell"),
            ItemKind::Slice => write!(f, "slice"),
            ItemKind::Builder => write!(f, "builder"),
            ItemKind::Tuple => write!(f, "tuple"),
        }
    }
}
