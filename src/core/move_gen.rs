//! Legal-move and ability-target generation
//!
//! Pure functions over a board snapshot. The per-kind tables live here;
//! the resolver revalidates against these sets before applying an action.

use super::{
    board::Board,
    loc::{Loc, DIRS},
    side::Side,
    terrain::{terrain_at, Terrain},
    units::UnitKind,
};

/// What a relocation may land on
#[derive(Clone, Copy, PartialEq, Eq)]
enum Landing {
    EmptyOnly,
    EmptyOrEnemy,
}

fn add_move(board: &Board, side: Side, to: Loc, landing: Landing, out: &mut Vec<Loc>) {
    if !to.in_bounds() || terrain_at(to) == Terrain::Rock {
        return;
    }
    match board.unit_at(to) {
        None => out.push(to),
        Some(occupant) => {
            if landing == Landing::EmptyOrEnemy && occupant.side != side {
                out.push(to);
            }
        }
    }
}

/// Cells the unit at `from` may relocate to.
///
/// Horseman and evolved units jump: occupancy of intervening cells is
/// never consulted.
pub fn moves(board: &Board, from: Loc) -> Vec<Loc> {
    let Some(unit) = board.unit_at(from) else {
        return Vec::new();
    };
    let mut out = Vec::new();

    if unit.evolved {
        // Uniform evolved rule: 1 or 2 cells in any direction, jumping
        for dir in DIRS {
            add_move(board, unit.side, from + dir, Landing::EmptyOrEnemy, &mut out);
            add_move(board, unit.side, from + dir * 2, Landing::EmptyOrEnemy, &mut out);
        }
        return out;
    }

    match unit.kind {
        UnitKind::Hero | UnitKind::Archer => {
            for dir in DIRS {
                add_move(board, unit.side, from + dir, Landing::EmptyOnly, &mut out);
            }
        }
        UnitKind::Axeman | UnitKind::Bomber | UnitKind::ShieldBearer => {
            for dir in DIRS {
                add_move(board, unit.side, from + dir, Landing::EmptyOrEnemy, &mut out);
            }
        }
        UnitKind::Horseman => {
            for dir in DIRS {
                add_move(board, unit.side, from + dir * 2, Landing::EmptyOrEnemy, &mut out);
            }
        }
    }
    out
}

/// Cells the unit at `from` may act against with its stationary ability.
///
/// Only Hero (distance 1) and Archer (distance 2) have targeted
/// abilities; the Axeman swing and ShieldBearer stance are triggered by
/// re-selecting the unit itself and produce no target set.
pub fn ability_targets(board: &Board, from: Loc) -> Vec<Loc> {
    let Some(unit) = board.unit_at(from) else {
        return Vec::new();
    };
    if unit.evolved {
        // Evolution trades the kind ability for the uniform move rule
        return Vec::new();
    }

    let range = match unit.kind {
        UnitKind::Hero => 1,
        UnitKind::Archer => 2,
        _ => return Vec::new(),
    };

    let mut out = Vec::new();
    for dir in DIRS {
        let to = from + dir * range;
        if !to.in_bounds() {
            continue;
        }
        if let Some(target) = board.unit_at(to) {
            if target.side != unit.side {
                out.push(to);
            }
        }
    }
    out
}

/// Whether the Axeman at `at` may trigger its area swing: at least one
/// enemy in the surrounding 3x3 neighborhood
pub fn can_swing(board: &Board, at: Loc) -> bool {
    let Some(unit) = board.unit_at(at) else {
        return false;
    };
    if unit.kind != UnitKind::Axeman || unit.evolved {
        return false;
    }
    at.neighbors()
        .into_iter()
        .filter_map(|loc| board.unit_at(loc))
        .any(|neighbor| neighbor.side != unit.side)
}
