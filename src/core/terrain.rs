//! Fixed terrain layout

use lazy_static::lazy_static;

use super::loc::{Loc, BOARD_SIZE};

/// Terrain kind of a board cell, fixed at match start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Terrain {
    Normal,
    /// Impassable; never holds a unit and is never a legal target
    Rock,
    /// Relocating onto this cell permanently evolves the arriving unit
    Evolution,
}

/// Rock cells, symmetric under 180-degree rotation
pub const ROCK_LOCS: [Loc; 4] = [
    Loc { row: 2, col: 0 },
    Loc { row: 2, col: 5 },
    Loc { row: 3, col: 0 },
    Loc { row: 3, col: 5 },
];

/// Evolution cells, one reachable from each side
pub const EVOLUTION_LOCS: [Loc; 2] = [Loc { row: 2, col: 3 }, Loc { row: 3, col: 2 }];

lazy_static! {
    static ref TERRAIN_LAYOUT: [[Terrain; BOARD_SIZE]; BOARD_SIZE] = {
        let mut layout = [[Terrain::Normal; BOARD_SIZE]; BOARD_SIZE];
        for loc in ROCK_LOCS {
            layout[loc.row as usize][loc.col as usize] = Terrain::Rock;
        }
        for loc in EVOLUTION_LOCS {
            layout[loc.row as usize][loc.col as usize] = Terrain::Evolution;
        }
        layout
    };
}

/// Terrain at an in-bounds cell. Out-of-bounds is a programmer error.
pub fn terrain_at(loc: Loc) -> Terrain {
    assert!(loc.in_bounds(), "terrain query out of bounds: {}", loc);
    TERRAIN_LAYOUT[loc.row as usize][loc.col as usize]
}
