//! Board representation
//!
//! A `Board` is an immutable snapshot: every mutator returns a new value and
//! leaves the input untouched, so history and undo are plain snapshot
//! storage. In-bounds coordinates are the caller's responsibility; an
//! out-of-bounds access is a programmer error and panics.

use super::{
    loc::{Loc, BOARD_SIZE},
    side::{Side, SideArray},
    units::{Unit, UnitKind},
};

/// A 6x6 grid of cells, each holding at most one unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Unit>; BOARD_SIZE]; BOARD_SIZE],
}

/// Back-row deployment order for Black on row 0, columns 0..6.
/// White gets the same order rotated 180 degrees on row 5.
const BACK_ROW: [UnitKind; BOARD_SIZE] = [
    UnitKind::Hero,
    UnitKind::Horseman,
    UnitKind::Archer,
    UnitKind::Axeman,
    UnitKind::Bomber,
    UnitKind::ShieldBearer,
];

impl Board {
    /// Create a board with no units
    pub fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// The fixed initial layout of a match
    pub fn initial() -> Self {
        let mut board = Self::empty();
        let last = BOARD_SIZE - 1;
        for (col, kind) in BACK_ROW.into_iter().enumerate() {
            board.cells[0][col] = Some(Unit::new(kind, Side::Black));
            board.cells[last][last - col] = Some(Unit::new(kind, Side::White));
        }
        board
    }

    fn cell(&self, loc: Loc) -> &Option<Unit> {
        assert!(loc.in_bounds(), "board access out of bounds: {}", loc);
        &self.cells[loc.row as usize][loc.col as usize]
    }

    fn cell_mut(&mut self, loc: Loc) -> &mut Option<Unit> {
        assert!(loc.in_bounds(), "board access out of bounds: {}", loc);
        &mut self.cells[loc.row as usize][loc.col as usize]
    }

    pub fn unit_at(&self, loc: Loc) -> Option<Unit> {
        *self.cell(loc)
    }

    /// New snapshot with the occupant of `from` relocated to `to`,
    /// overwriting whatever occupied `to`
    pub fn with_unit_moved(&self, from: Loc, to: Loc) -> Self {
        let mut next = self.clone();
        let unit = next.cell_mut(from).take();
        *next.cell_mut(to) = unit;
        next
    }

    /// New snapshot with the cell at `loc` emptied
    pub fn with_unit_removed(&self, loc: Loc) -> Self {
        let mut next = self.clone();
        next.cell_mut(loc).take();
        next
    }

    /// New snapshot with `unit` placed at `loc`
    pub fn with_unit_placed(&self, loc: Loc, unit: Unit) -> Self {
        let mut next = self.clone();
        *next.cell_mut(loc) = Some(unit);
        next
    }

    /// Number of live units for a side
    pub fn count(&self, side: Side) -> usize {
        self.counts()[side]
    }

    /// Live unit counts for both sides in one pass
    pub fn counts(&self) -> SideArray<usize> {
        let mut counts = SideArray::new(0, 0);
        for (_, unit) in self.units() {
            counts[unit.side] += 1;
        }
        counts
    }

    /// Iterate over all occupied cells in row-major order
    pub fn units(&self) -> impl Iterator<Item = (Loc, Unit)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                cell.map(|unit| (Loc::new(row as i32, col as i32), unit))
            })
        })
    }
}
