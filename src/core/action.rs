//! Player actions

use std::fmt::Display;

use anyhow::{bail, ensure, Result};

use super::loc::Loc;

/// A complete action for the active side. Every variant consumes a full
/// move when committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Relocation, including displacement captures
    Move { from: Loc, to: Loc },
    /// Adjacent-cell melee; the hero stays put
    HeroStab { from: Loc, to: Loc },
    /// Ranged shot at exactly distance two; the archer stays put
    ArcherShot { from: Loc, to: Loc },
    /// Area swing hitting every enemy in the 3x3 neighborhood
    AxemanSwing { at: Loc },
    /// Flip the shield-bearer's defending stance
    ToggleDefense { at: Loc },
}

impl Action {
    /// The cell holding the unit performing the action
    pub fn actor(&self) -> Loc {
        match self {
            Action::Move { from, .. }
            | Action::HeroStab { from, .. }
            | Action::ArcherShot { from, .. } => *from,
            Action::AxemanSwing { at } | Action::ToggleDefense { at } => *at,
        }
    }

    pub fn from_args(action_name: &str, args: &[&str]) -> Result<Self> {
        match action_name {
            "move" => {
                ensure!(args.len() == 2, "move requires 2 arguments");
                Ok(Action::Move {
                    from: args[0].parse()?,
                    to: args[1].parse()?,
                })
            }
            "stab" => {
                ensure!(args.len() == 2, "stab requires 2 arguments");
                Ok(Action::HeroStab {
                    from: args[0].parse()?,
                    to: args[1].parse()?,
                })
            }
            "shot" => {
                ensure!(args.len() == 2, "shot requires 2 arguments");
                Ok(Action::ArcherShot {
                    from: args[0].parse()?,
                    to: args[1].parse()?,
                })
            }
            "swing" => {
                ensure!(args.len() == 1, "swing requires 1 argument");
                Ok(Action::AxemanSwing {
                    at: args[0].parse()?,
                })
            }
            "defend" => {
                ensure!(args.len() == 1, "defend requires 1 argument");
                Ok(Action::ToggleDefense {
                    at: args[0].parse()?,
                })
            }
            _ => bail!("Unknown action: {}", action_name),
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Move { from, to } => write!(f, "move {} {}", from, to),
            Action::HeroStab { from, to } => write!(f, "stab {} {}", from, to),
            Action::ArcherShot { from, to } => write!(f, "shot {} {}", from, to),
            Action::AxemanSwing { at } => write!(f, "swing {}", at),
            Action::ToggleDefense { at } => write!(f, "defend {}", at),
        }
    }
}
