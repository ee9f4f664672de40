//! Ledger account addresses.
//!
//! An address is a workchain identifier plus a 32-byte account hash. The
//! cell layer owns the wire layout; this module only carries the value and
//! its canonical `workchain:hex` rendering. No semantic validation is
//! performed beyond shape.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Standard account address: signed workchain plus 32-byte hash.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Address {
    workchain: i8,
    hash: [u8; 32],
}

impl Address {
    /// Creates an address from its parts.
    pub fn new(workchain: i8, hash: [u8; 32]) -> Self {
        Self { workchain, hash }
    }

    /// Workchain identifier.
    pub fn workchain(&self) -> i8 {
        self.workchain
    }

    /// Account hash.
    pub fn hash(&self) -> &[u8; 32] {
        &self.hash
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.workchain)?;
        for byte in &self.hash {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}
