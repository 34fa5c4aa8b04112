//! Board coordinates and directions

use std::{
    fmt::Display,
    ops::{Add, Mul},
    str::FromStr,
};

use anyhow::Context;

/// Side length of the board. The final ruleset is 6x6.
pub const BOARD_SIZE: usize = 6;

/// A cell coordinate on the board, 0-indexed from the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Loc {
    pub row: i32,
    pub col: i32,
}

impl Loc {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub const fn in_bounds(&self) -> bool {
        self.row >= 0
            && self.row < BOARD_SIZE as i32
            && self.col >= 0
            && self.col < BOARD_SIZE as i32
    }

    /// Chebyshev distance, the natural metric for 8-direction movement
    pub fn dist(&self, other: &Loc) -> i32 {
        (self.row - other.row).abs().max((self.col - other.col).abs())
    }

    /// In-bounds cells at distance 1 in any of the eight directions
    pub fn neighbors(&self) -> Vec<Loc> {
        DIRS.into_iter()
            .map(|dir| *self + dir)
            .filter(Loc::in_bounds)
            .collect()
    }
}

impl From<(i32, i32)> for Loc {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl FromStr for Loc {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s.split_once(',').context("Invalid loc")?;

        Ok(Loc {
            row: row.parse()?,
            col: col.parse()?,
        })
    }
}

impl Display for Loc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Offset between two cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Delta {
    pub dr: i32,
    pub dc: i32,
}

impl Add<Delta> for Loc {
    type Output = Loc;

    fn add(self, other: Delta) -> Self::Output {
        Loc {
            row: self.row + other.dr,
            col: self.col + other.dc,
        }
    }
}

impl Mul<i32> for Delta {
    type Output = Delta;

    fn mul(self, k: i32) -> Self::Output {
        Delta {
            dr: self.dr * k,
            dc: self.dc * k,
        }
    }
}

/// The eight compass directions, clockwise from north-west
pub const DIRS: [Delta; 8] = [
    Delta { dr: -1, dc: -1 },
    Delta { dr: -1, dc: 0 },
    Delta { dr: -1, dc: 1 },
    Delta { dr: 0, dc: 1 },
    Delta { dr: 1, dc: 1 },
    Delta { dr: 1, dc: 0 },
    Delta { dr: 1, dc: -1 },
    Delta { dr: 0, dc: -1 },
];
