//! Unit kinds and the units that occupy board cells

use anyhow::{anyhow, Result};
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};

use super::{
    convert::{FromIndex, ToIndex},
    side::Side,
};

/// The six unit kinds of the final ruleset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, ToPrimitive)]
pub enum UnitKind {
    Hero,
    Horseman,
    Archer,
    Axeman,
    Bomber,
    ShieldBearer,
}

pub const NUM_KINDS: usize = 6;

impl UnitKind {
    pub fn all() -> [UnitKind; NUM_KINDS] {
        [
            UnitKind::Hero,
            UnitKind::Horseman,
            UnitKind::Archer,
            UnitKind::Axeman,
            UnitKind::Bomber,
            UnitKind::ShieldBearer,
        ]
    }

    /// Convert a unit kind to its FEN character representation
    pub fn to_fen_char(self) -> char {
        match self {
            UnitKind::Hero => 'H',
            UnitKind::Horseman => 'C',
            UnitKind::Archer => 'A',
            UnitKind::Axeman => 'X',
            UnitKind::Bomber => 'B',
            UnitKind::ShieldBearer => 'S',
        }
    }

    /// Convert a FEN character to its unit kind
    pub fn from_fen_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'H' => Some(UnitKind::Hero),
            'C' => Some(UnitKind::Horseman),
            'A' => Some(UnitKind::Archer),
            'X' => Some(UnitKind::Axeman),
            'B' => Some(UnitKind::Bomber),
            'S' => Some(UnitKind::ShieldBearer),
            _ => None,
        }
    }
}

impl FromIndex for UnitKind {
    fn from_index(idx: usize) -> Result<Self> {
        FromPrimitive::from_usize(idx).ok_or_else(|| anyhow!("Invalid unit index: {}", idx))
    }
}

impl ToIndex for UnitKind {
    fn to_index(&self) -> Result<usize> {
        ToPrimitive::to_usize(self).ok_or_else(|| anyhow!("Invalid unit kind"))
    }
}

/// A unit occupying a board cell.
///
/// `kind` and `side` are fixed for the unit's lifetime. `evolved` is a
/// one-way transition; `defending` is only ever set on a ShieldBearer and
/// is cleared whenever the unit relocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unit {
    pub kind: UnitKind,
    pub side: Side,
    pub evolved: bool,
    pub defending: bool,
}

impl Unit {
    pub fn new(kind: UnitKind, side: Side) -> Self {
        Self {
            kind,
            side,
            evolved: false,
            defending: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_indices_round_trip() {
        for (i, kind) in UnitKind::all().into_iter().enumerate() {
            assert_eq!(kind.to_index().unwrap(), i);
            assert_eq!(UnitKind::from_index(i).unwrap(), kind);
        }
        assert!(UnitKind::from_index(NUM_KINDS).is_err());
    }

    #[test]
    fn test_fen_chars_unique() {
        let chars: Vec<char> = UnitKind::all().iter().map(|k| k.to_fen_char()).collect();
        for (i, c) in chars.iter().enumerate() {
            assert!(!chars[i + 1..].contains(c), "Duplicate FEN char: {}", c);
            assert_eq!(UnitKind::from_fen_char(*c), Some(UnitKind::all()[i]));
            assert_eq!(
                UnitKind::from_fen_char(c.to_ascii_lowercase()),
                Some(UnitKind::all()[i])
            );
        }
        assert_eq!(UnitKind::from_fen_char('Z'), None);
    }

    #[test]
    fn test_new_unit_flags() {
        let unit = Unit::new(UnitKind::ShieldBearer, Side::Black);
        assert!(!unit.evolved);
        assert!(!unit.defending);
        assert_eq!(unit.side, Side::Black);
    }
}
