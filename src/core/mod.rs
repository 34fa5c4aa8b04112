//! Core game representations and rules

pub mod action;
pub mod board;
pub mod convert;
pub mod display;
pub mod fen;
pub mod loc;
pub mod move_gen;
pub mod resolve;
pub mod side;
pub mod terrain;
pub mod units;

pub use action::Action;
pub use board::Board;
pub use convert::{FromIndex, ToIndex};
pub use loc::{Delta, Loc, BOARD_SIZE, DIRS};
pub use resolve::{resolve, status_after, Animation, GameStatus, Resolution};
pub use side::{Side, SideArray};
pub use terrain::{terrain_at, Terrain, EVOLUTION_LOCS, ROCK_LOCS};
pub use units::{Unit, UnitKind};
