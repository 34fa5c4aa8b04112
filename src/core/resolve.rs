//! Turn resolution
//!
//! Applies one action to a board snapshot and produces the next snapshot
//! plus the animation intent the presentation layer should play before
//! the commit. The resolver never mutates its input; the session owns the
//! commit step and the at-most-one-in-flight guarantee.

use anyhow::{ensure, Context, Result};

use super::{
    action::Action,
    board::Board,
    loc::Loc,
    move_gen,
    side::Side,
    terrain::{terrain_at, Terrain},
    units::UnitKind,
};

/// Animation intent emitted alongside a resolution. The engine never
/// renders; the presentation layer consumes these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Animation {
    Explosion { at: Loc },
    SwordThrust { from: Loc, to: Loc },
    ArrowShot { from: Loc, to: Loc },
    AxeSwing { at: Loc },
}

/// Result of resolving one action.
///
/// `intermediate`, when present, is the snapshot to show while the
/// animation plays (the mover arriving on a bomber before both are
/// removed). `board` is the snapshot to commit when the animation window
/// closes.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub intermediate: Option<Board>,
    pub board: Board,
    pub animation: Option<Animation>,
}

impl Resolution {
    fn committed(board: Board) -> Self {
        Self {
            intermediate: None,
            board,
            animation: None,
        }
    }

    fn animated(board: Board, animation: Animation) -> Self {
        Self {
            intermediate: None,
            board,
            animation: Some(animation),
        }
    }
}

/// Overall game status after a committed action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    GameOver(Side),
    Draw,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        *self != GameStatus::Playing
    }

    pub fn winner(&self) -> Option<Side> {
        match self {
            GameStatus::GameOver(side) => Some(*side),
            _ => None,
        }
    }
}

/// Apply `action` to `board`. The action must be legal for the unit it
/// names; the side-to-move check is the session's job.
pub fn resolve(board: &Board, action: Action) -> Result<Resolution> {
    match action {
        Action::Move { from, to } => resolve_move(board, from, to),
        Action::HeroStab { from, to } => {
            resolve_targeted(board, from, to, UnitKind::Hero, Animation::SwordThrust { from, to })
        }
        Action::ArcherShot { from, to } => {
            resolve_targeted(board, from, to, UnitKind::Archer, Animation::ArrowShot { from, to })
        }
        Action::AxemanSwing { at } => resolve_swing(board, at),
        Action::ToggleDefense { at } => resolve_toggle(board, at),
    }
}

fn resolve_move(board: &Board, from: Loc, to: Loc) -> Result<Resolution> {
    let mut mover = board.unit_at(from).context("No unit to move")?;
    ensure!(
        move_gen::moves(board, from).contains(&to),
        "Illegal move from {} to {}",
        from,
        to
    );

    // Relocation always drops a shield-bearer's stance
    mover.defending = false;

    // Destination occupant is inspected before the move: a non-evolved
    // bomber takes the capturing unit down with it.
    let occupant = board.unit_at(to);
    let explodes = occupant
        .map(|unit| unit.kind == UnitKind::Bomber && !unit.evolved && unit.side != mover.side)
        .unwrap_or(false);

    if explodes {
        let intermediate = board.with_unit_removed(from).with_unit_placed(to, mover);
        let committed = intermediate.with_unit_removed(to);
        return Ok(Resolution {
            intermediate: Some(intermediate),
            board: committed,
            animation: Some(Animation::Explosion { at: to }),
        });
    }

    if terrain_at(to) == Terrain::Evolution {
        mover.evolved = true;
    }
    Ok(Resolution::committed(
        board.with_unit_removed(from).with_unit_placed(to, mover),
    ))
}

fn resolve_targeted(
    board: &Board,
    from: Loc,
    to: Loc,
    kind: UnitKind,
    animation: Animation,
) -> Result<Resolution> {
    let attacker = board.unit_at(from).context("No attacker")?;
    ensure!(attacker.kind == kind, "Wrong unit kind for ability");
    ensure!(
        move_gen::ability_targets(board, from).contains(&to),
        "Illegal ability target {}",
        to
    );

    let target = board.unit_at(to).context("No target")?;
    // A defending shield-bearer shrugs the ability off; the turn is
    // still consumed.
    let next = if target.defending {
        board.clone()
    } else {
        board.with_unit_removed(to)
    };
    Ok(Resolution::animated(next, animation))
}

fn resolve_swing(board: &Board, at: Loc) -> Result<Resolution> {
    let axeman = board.unit_at(at).context("No axeman")?;
    ensure!(
        move_gen::can_swing(board, at),
        "Swing requires an adjacent enemy"
    );

    let mut next = board.clone();
    for loc in at.neighbors() {
        if let Some(unit) = next.unit_at(loc) {
            if unit.side != axeman.side && !unit.defending {
                next = next.with_unit_removed(loc);
            }
        }
    }
    Ok(Resolution::animated(next, Animation::AxeSwing { at }))
}

fn resolve_toggle(board: &Board, at: Loc) -> Result<Resolution> {
    let mut unit = board.unit_at(at).context("No unit")?;
    ensure!(
        unit.kind == UnitKind::ShieldBearer && !unit.evolved,
        "Only an unevolved shield-bearer can toggle defense"
    );
    unit.defending = !unit.defending;
    Ok(Resolution::committed(board.with_unit_placed(at, unit)))
}

/// Terminal-state detection after a committed action, in resolution
/// order: elimination first, then the move limit.
pub fn status_after(board: &Board, move_count: u32, move_limit: Option<u32>) -> GameStatus {
    let counts = board.counts();
    if counts[Side::White] == 0 {
        return GameStatus::GameOver(Side::Black);
    }
    if counts[Side::Black] == 0 {
        return GameStatus::GameOver(Side::White);
    }
    match move_limit {
        Some(limit) if move_count >= limit => GameStatus::Draw,
        _ => GameStatus::Playing,
    }
}
