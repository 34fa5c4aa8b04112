//! Interactive game session
//!
//! `GameSession` wraps the pure rules core with the click-driven state
//! machine a frontend talks to: selection, action dispatch, the
//! animation window, history, and the persisted tally. Input that does
//! not map to a legal transition is silently dropped; nothing here
//! returns an error to the caller.

use anyhow::{ensure, Context, Result};

use crate::core::{
    action::Action,
    board::Board,
    loc::Loc,
    move_gen,
    resolve::{resolve, status_after, Animation, GameStatus},
    side::Side,
    terrain::{terrain_at, Terrain},
    units::UnitKind,
};
use crate::store::{Tally, TallyStore};

/// One committed position, enough to rewind a full turn
#[derive(Debug, Clone)]
struct Snapshot {
    board: Board,
    side_to_move: Side,
    move_count: u32,
}

/// An action whose animation window is still open. `board` is the
/// position to commit when the window closes.
#[derive(Debug, Clone)]
struct Pending {
    board: Board,
    animation: Animation,
}

pub struct GameSession {
    board: Board,
    side_to_move: Side,
    selected: Option<Loc>,
    moves: Vec<Loc>,
    targets: Vec<Loc>,
    status: GameStatus,
    move_count: u32,
    move_limit: Option<u32>,
    pending: Option<Pending>,
    history: Vec<Snapshot>,
    tally: Tally,
    store: Box<dyn TallyStore>,
}

impl GameSession {
    pub fn new(mut store: Box<dyn TallyStore>) -> Self {
        let tally = store.load();
        Self {
            board: Board::initial(),
            side_to_move: Side::White,
            selected: None,
            moves: Vec::new(),
            targets: Vec::new(),
            status: GameStatus::Playing,
            move_count: 0,
            move_limit: None,
            pending: None,
            history: Vec::new(),
            tally,
            store,
        }
    }

    /// Start a fresh match. The tally carries over.
    pub fn new_game(&mut self, move_limit: Option<u32>) {
        self.board = Board::initial();
        self.side_to_move = Side::White;
        self.status = GameStatus::Playing;
        self.move_count = 0;
        self.move_limit = move_limit;
        self.pending = None;
        self.history.clear();
        self.clear_selection();
    }

    /// Load an arbitrary position, dropping history and selection. The
    /// move counter restarts at zero; the configured move limit stays.
    pub fn set_position(&mut self, board: Board, side_to_move: Side) {
        self.board = board;
        self.side_to_move = side_to_move;
        self.move_count = 0;
        self.status = status_after(&self.board, self.move_count, self.move_limit);
        self.pending = None;
        self.history.clear();
        self.clear_selection();
    }

    /// Feed one cell click into the state machine. Clicks that do not
    /// correspond to a legal transition are dropped without effect.
    pub fn handle_cell_select(&mut self, row: i32, col: i32) {
        if self.status.is_terminal() || self.pending.is_some() {
            return;
        }
        let loc = Loc::new(row, col);
        if !loc.in_bounds() {
            return;
        }
        // Rock cells never hold units and are never targets; the click
        // leaves the session untouched, selection included.
        if terrain_at(loc) == Terrain::Rock {
            return;
        }

        let Some(from) = self.selected else {
            self.try_select(loc);
            return;
        };

        if loc == from {
            self.handle_reclick(from);
        } else if self.moves.contains(&loc) {
            self.apply_click(Action::Move { from, to: loc });
        } else if self.targets.contains(&loc) {
            let action = match self.board.unit_at(from).map(|unit| unit.kind) {
                Some(UnitKind::Hero) => Action::HeroStab { from, to: loc },
                Some(UnitKind::Archer) => Action::ArcherShot { from, to: loc },
                _ => return,
            };
            self.apply_click(action);
        } else if self.is_friendly(loc) {
            self.try_select(loc);
        } else {
            self.clear_selection();
        }
    }

    /// Apply an action directly, bypassing the selection state machine.
    /// Unlike clicks, illegal actions are reported to the caller.
    pub fn do_action(&mut self, action: Action) -> Result<()> {
        ensure!(!self.status.is_terminal(), "the game is over");
        ensure!(self.pending.is_none(), "an animation is in flight");
        ensure!(action.actor().in_bounds(), "acting cell out of bounds");
        let unit = self
            .board
            .unit_at(action.actor())
            .context("no unit on the acting cell")?;
        ensure!(
            unit.side == self.side_to_move,
            "it is not that unit's turn"
        );
        self.apply(action)
    }

    /// Close the animation window and commit the pending position.
    /// No-op when no animation is in flight.
    pub fn finish_animation(&mut self) {
        if let Some(pending) = self.pending.take() {
            self.board = pending.board;
            self.end_turn();
        }
    }

    /// Rewind to the previous committed position. Allowed after a
    /// terminal state: the game resumes from the rewound position, but
    /// any tally already recorded stands.
    pub fn undo(&mut self) -> bool {
        if self.pending.is_some() {
            return false;
        }
        match self.history.pop() {
            Some(snapshot) => {
                self.board = snapshot.board;
                self.side_to_move = snapshot.side_to_move;
                self.move_count = snapshot.move_count;
                self.status = GameStatus::Playing;
                self.clear_selection();
                true
            }
            None => false,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.pending.is_none() && !self.history.is_empty()
    }

    /// Zero the persisted tally
    pub fn reset_tally(&mut self) {
        self.tally = Tally::default();
        self.store.save(&self.tally);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    pub fn selected(&self) -> Option<Loc> {
        self.selected
    }

    /// Relocation targets highlighted for the current selection
    pub fn valid_moves(&self) -> &[Loc] {
        &self.moves
    }

    /// Ability targets highlighted for the current selection
    pub fn ability_targets(&self) -> &[Loc] {
        &self.targets
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn winner(&self) -> Option<Side> {
        self.status.winner()
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn move_limit(&self) -> Option<u32> {
        self.move_limit
    }

    /// The animation the frontend should play before the next commit
    pub fn pending_animation(&self) -> Option<Animation> {
        self.pending.as_ref().map(|pending| pending.animation)
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    fn is_friendly(&self, loc: Loc) -> bool {
        self.board
            .unit_at(loc)
            .map(|unit| unit.side == self.side_to_move)
            .unwrap_or(false)
    }

    fn try_select(&mut self, loc: Loc) {
        if !self.is_friendly(loc) {
            self.clear_selection();
            return;
        }
        self.selected = Some(loc);
        self.moves = move_gen::moves(&self.board, loc);
        self.targets = move_gen::ability_targets(&self.board, loc);
    }

    /// Re-clicking the selected unit triggers its in-place action when
    /// it has one, otherwise deselects.
    fn handle_reclick(&mut self, at: Loc) {
        let Some(unit) = self.board.unit_at(at) else {
            self.clear_selection();
            return;
        };
        if unit.kind == UnitKind::ShieldBearer && !unit.evolved {
            self.apply_click(Action::ToggleDefense { at });
        } else if unit.kind == UnitKind::Axeman && move_gen::can_swing(&self.board, at) {
            self.apply_click(Action::AxemanSwing { at });
        } else {
            self.clear_selection();
        }
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.moves.clear();
        self.targets.clear();
    }

    /// Clicks never report errors; an illegal action just drops the
    /// selection.
    fn apply_click(&mut self, action: Action) {
        if self.apply(action).is_err() {
            self.clear_selection();
        }
    }

    fn apply(&mut self, action: Action) -> Result<()> {
        let resolution = resolve(&self.board, action)?;

        self.history.push(Snapshot {
            board: self.board.clone(),
            side_to_move: self.side_to_move,
            move_count: self.move_count,
        });
        self.clear_selection();

        match resolution.animation {
            Some(animation) => {
                // Show the intermediate position (if any) while the
                // animation plays; commit happens in finish_animation.
                if let Some(intermediate) = resolution.intermediate {
                    self.board = intermediate;
                }
                self.pending = Some(Pending {
                    board: resolution.board,
                    animation,
                });
            }
            None => {
                self.board = resolution.board;
                self.end_turn();
            }
        }
        Ok(())
    }

    fn end_turn(&mut self) {
        self.move_count += 1;
        self.status = status_after(&self.board, self.move_count, self.move_limit);
        if self.status.is_terminal() {
            self.record_result();
        }
        // The side flips even on a terminal move so undo resumes from a
        // consistent position.
        self.side_to_move = !self.side_to_move;
    }

    /// Called exactly once per finished game, when the status first
    /// turns terminal
    fn record_result(&mut self) {
        match self.status {
            GameStatus::GameOver(side) => self.tally.record_win(side),
            GameStatus::Draw => self.tally.record_draw(),
            GameStatus::Playing => return,
        }
        self.store.save(&self.tally);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::units::Unit;
    use crate::store::MemoryTallyStore;

    fn session() -> GameSession {
        GameSession::new(Box::new(MemoryTallyStore::default()))
    }

    #[test]
    fn test_select_then_deselect() {
        let mut session = session();
        // White horseman at (5, 4)
        session.handle_cell_select(5, 4);
        assert_eq!(session.selected(), Some(Loc::new(5, 4)));
        assert!(!session.valid_moves().is_empty());

        // Clicking an empty non-target cell deselects
        session.handle_cell_select(4, 0);
        assert_eq!(session.selected(), None);
        assert!(session.valid_moves().is_empty());
    }

    #[test]
    fn test_enemy_unit_cannot_be_selected() {
        let mut session = session();
        session.handle_cell_select(0, 0);
        assert_eq!(session.selected(), None);
    }

    #[test]
    fn test_move_commits_and_flips_side() {
        let mut session = session();
        session.handle_cell_select(5, 4);
        session.handle_cell_select(3, 2);

        assert_eq!(session.side_to_move(), Side::Black);
        assert_eq!(session.move_count(), 1);
        assert_eq!(session.selected(), None);
        let horseman = session.board().unit_at(Loc::new(3, 2)).unwrap();
        assert_eq!(horseman.kind, UnitKind::Horseman);
        // Landed on an evolution cell
        assert!(horseman.evolved);
    }

    #[test]
    fn test_reselect_friendly_unit() {
        let mut session = session();
        session.handle_cell_select(5, 4);
        session.handle_cell_select(5, 5);
        assert_eq!(session.selected(), Some(Loc::new(5, 5)));
    }

    #[test]
    fn test_shield_bearer_reclick_toggles_defense() {
        let mut session = session();
        session.handle_cell_select(5, 0);
        session.handle_cell_select(5, 0);

        assert!(session.board().unit_at(Loc::new(5, 0)).unwrap().defending);
        // The toggle consumed the turn
        assert_eq!(session.side_to_move(), Side::Black);
    }

    #[test]
    fn test_plain_reclick_deselects() {
        let mut session = session();
        // Axeman with no adjacent enemy: re-click just deselects
        session.handle_cell_select(5, 2);
        session.handle_cell_select(5, 2);
        assert_eq!(session.selected(), None);
        assert_eq!(session.side_to_move(), Side::White);
    }

    #[test]
    fn test_pending_animation_blocks_input() {
        let mut session = session();
        let board = Board::empty()
            .with_unit_placed(Loc::new(4, 2), Unit::new(UnitKind::Hero, Side::White))
            .with_unit_placed(Loc::new(4, 3), Unit::new(UnitKind::Archer, Side::Black))
            .with_unit_placed(Loc::new(0, 0), Unit::new(UnitKind::Hero, Side::Black));
        session.set_position(board, Side::White);

        session.handle_cell_select(4, 2);
        session.handle_cell_select(4, 3);
        assert!(matches!(
            session.pending_animation(),
            Some(Animation::SwordThrust { .. })
        ));
        // Target still on the board while the animation plays
        assert!(session.board().unit_at(Loc::new(4, 3)).is_some());
        // Turn not yet over
        assert_eq!(session.side_to_move(), Side::White);

        // Clicks and undo are dropped until the window closes
        session.handle_cell_select(4, 2);
        assert_eq!(session.selected(), None);
        assert!(!session.undo());

        session.finish_animation();
        assert!(session.pending_animation().is_none());
        assert!(session.board().unit_at(Loc::new(4, 3)).is_none());
        assert_eq!(session.side_to_move(), Side::Black);
    }

    #[test]
    fn test_bomber_capture_shows_intermediate_position() {
        let mut session = session();
        let board = Board::empty()
            .with_unit_placed(Loc::new(4, 2), Unit::new(UnitKind::Horseman, Side::White))
            .with_unit_placed(Loc::new(4, 4), Unit::new(UnitKind::Bomber, Side::Black))
            .with_unit_placed(Loc::new(0, 0), Unit::new(UnitKind::Hero, Side::White))
            .with_unit_placed(Loc::new(0, 5), Unit::new(UnitKind::Hero, Side::Black));
        session.set_position(board, Side::White);

        session.handle_cell_select(4, 2);
        session.handle_cell_select(4, 4);

        // The horseman is shown on the bomber's cell mid-explosion
        assert_eq!(
            session.board().unit_at(Loc::new(4, 4)).unwrap().kind,
            UnitKind::Horseman
        );
        session.finish_animation();
        assert!(session.board().unit_at(Loc::new(4, 4)).is_none());
    }

    #[test]
    fn test_undo_restores_previous_turn() {
        let mut session = session();
        session.handle_cell_select(5, 4);
        session.handle_cell_select(3, 2);
        assert!(session.can_undo());

        assert!(session.undo());
        assert_eq!(session.side_to_move(), Side::White);
        assert_eq!(session.move_count(), 0);
        assert_eq!(*session.board(), Board::initial());
        assert!(!session.can_undo());
        assert!(!session.undo());
    }

    #[test]
    fn test_win_recorded_and_survives_undo() {
        let mut session = session();
        let board = Board::empty()
            .with_unit_placed(Loc::new(4, 2), Unit::new(UnitKind::Hero, Side::White))
            .with_unit_placed(Loc::new(4, 3), Unit::new(UnitKind::Archer, Side::Black));
        session.set_position(board, Side::White);

        session.handle_cell_select(4, 2);
        session.handle_cell_select(4, 3);
        session.finish_animation();

        assert_eq!(session.status(), GameStatus::GameOver(Side::White));
        assert_eq!(session.winner(), Some(Side::White));
        assert_eq!(session.tally().white_wins, 1);

        // A terminal position drops further clicks but still allows undo
        session.handle_cell_select(4, 2);
        assert_eq!(session.selected(), None);

        assert!(session.undo());
        assert_eq!(session.status(), GameStatus::Playing);
        // The recorded win stands
        assert_eq!(session.tally().white_wins, 1);
    }

    #[test]
    fn test_move_limit_draw() {
        let mut session = session();
        session.new_game(Some(2));

        session.handle_cell_select(5, 4);
        session.handle_cell_select(3, 2);
        assert_eq!(session.status(), GameStatus::Playing);

        session.handle_cell_select(0, 1);
        session.handle_cell_select(2, 3);
        assert_eq!(session.status(), GameStatus::Draw);
        assert_eq!(session.tally().draws, 1);
    }

    #[test]
    fn test_set_position_restarts_move_count() {
        let mut session = session();
        session.new_game(Some(2));
        session.handle_cell_select(5, 4);
        session.handle_cell_select(3, 2);
        session.handle_cell_select(0, 1);
        session.handle_cell_select(2, 3);
        assert_eq!(session.status(), GameStatus::Draw);

        // Loading a fresh position after a limit draw starts a live game
        let board = Board::empty()
            .with_unit_placed(Loc::new(1, 1), Unit::new(UnitKind::Hero, Side::White))
            .with_unit_placed(Loc::new(4, 4), Unit::new(UnitKind::Hero, Side::Black));
        session.set_position(board, Side::White);
        assert_eq!(session.status(), GameStatus::Playing);
        assert_eq!(session.move_count(), 0);

        session.handle_cell_select(1, 1);
        session.handle_cell_select(1, 2);
        assert_eq!(session.move_count(), 1);
    }

    #[test]
    fn test_new_game_keeps_tally() {
        let mut session = session();
        let board = Board::empty()
            .with_unit_placed(Loc::new(4, 2), Unit::new(UnitKind::Hero, Side::White))
            .with_unit_placed(Loc::new(4, 3), Unit::new(UnitKind::Archer, Side::Black));
        session.set_position(board, Side::White);
        session.handle_cell_select(4, 2);
        session.handle_cell_select(4, 3);
        session.finish_animation();
        assert_eq!(session.tally().white_wins, 1);

        session.new_game(None);
        assert_eq!(session.status(), GameStatus::Playing);
        assert_eq!(*session.board(), Board::initial());
        assert_eq!(session.tally().white_wins, 1);

        session.reset_tally();
        assert_eq!(session.tally(), Tally::default());
    }

    #[test]
    fn test_rock_click_keeps_selection() {
        let mut session = session();
        let board = Board::empty()
            .with_unit_placed(Loc::new(1, 0), Unit::new(UnitKind::Hero, Side::White))
            .with_unit_placed(Loc::new(5, 5), Unit::new(UnitKind::Hero, Side::Black));
        session.set_position(board, Side::White);

        session.handle_cell_select(1, 0);
        assert_eq!(session.selected(), Some(Loc::new(1, 0)));

        // Clicking the adjacent rock changes nothing, selection included
        session.handle_cell_select(2, 0);
        assert_eq!(session.selected(), Some(Loc::new(1, 0)));
        assert!(!session.valid_moves().is_empty());

        // The surviving selection can still move
        session.handle_cell_select(1, 1);
        assert_eq!(
            session.board().unit_at(Loc::new(1, 1)).unwrap().kind,
            UnitKind::Hero
        );
    }

    #[test]
    fn test_out_of_bounds_click_is_dropped() {
        let mut session = session();
        session.handle_cell_select(6, 0);
        session.handle_cell_select(-1, 3);
        assert_eq!(session.selected(), None);
        assert_eq!(session.side_to_move(), Side::White);
    }
}
