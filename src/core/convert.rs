//! Fallible conversions between table indices and board enums
//!
//! `Side` and `UnitKind` derive their primitive mappings via
//! `num-derive`; these traits wrap that plumbing in a `Result` so a bad
//! index surfaces as an error instead of a silent `None`.

use anyhow::Result;

/// Build a value from its table index
pub trait FromIndex: Sized {
    fn from_index(index: usize) -> Result<Self>;
}

/// Position of a value in its table
pub trait ToIndex {
    fn to_index(&self) -> Result<usize>;
}
