//! Text protocol implementation
//!
//! A thin line-oriented surface over `GameSession`, mainly for driving
//! the engine from scripts and integration tests. Animation windows are
//! closed immediately after reporting the animation, since a terminal
//! has no timer to wait on.

use anyhow::{bail, ensure, Context, Result};

use crate::core::{Action, Board, GameStatus, Side};
use crate::session::GameSession;

/// Handle one command line. Returns `false` when the session should end.
pub fn handle_command(cmd: &str, session: &mut GameSession) -> Result<bool> {
    let parts: Vec<&str> = cmd.split_whitespace().collect();

    if parts.is_empty() {
        return Ok(true);
    }

    match parts[0] {
        "new" => {
            let move_limit = match parts.get(1) {
                Some(arg) => Some(arg.parse().context("invalid move limit")?),
                None => None,
            };
            session.new_game(move_limit);
        }
        "click" => {
            ensure!(parts.len() == 3, "click requires a row and a column");
            let row = parts[1].parse().context("invalid row")?;
            let col = parts[2].parse().context("invalid column")?;

            session.handle_cell_select(row, col);

            if let Some(animation) = session.pending_animation() {
                println!("info animation {}", animation);
                session.finish_animation();
            }
            report_status(session);
        }
        "action" => {
            ensure!(parts.len() >= 2, "missing action arguments");
            let action = Action::from_args(parts[1], &parts[2..])?;
            session.do_action(action)?;

            if let Some(animation) = session.pending_animation() {
                println!("info animation {}", animation);
                session.finish_animation();
            }
            report_status(session);
        }
        "undo" => {
            if !session.undo() {
                println!("info undo unavailable");
            }
        }
        "show" | "display" => {
            println!("{}", session.board());
            println!("status {}", session.status());
            println!("side {}", session.side_to_move());
            let counts = session.board().counts();
            for side in Side::all() {
                println!("units {} {}", side, counts[side]);
            }
            if let Some(selected) = session.selected() {
                println!("selected {}", selected);
            }
        }
        "fen" => {
            println!("{}", session.board().to_fen());
        }
        "position" => {
            ensure!(parts.len() == 3, "position requires a fen and a side");
            let board = Board::from_fen(parts[1])?;
            let side = parse_side(parts[2])?;
            session.set_position(board, side);
        }
        "tally" => {
            let tally = session.tally();
            println!(
                "tally white {} black {} draws {}",
                tally.white_wins, tally.black_wins, tally.draws
            );
        }
        "resettally" => {
            session.reset_tally();
        }
        "quit" => {
            return Ok(false);
        }
        cmd => {
            bail!("Unknown command: {}", cmd);
        }
    }

    Ok(true)
}

fn report_status(session: &GameSession) {
    match session.status() {
        GameStatus::GameOver(winner) => println!("info result winner {}", winner),
        GameStatus::Draw => println!("info result draw"),
        GameStatus::Playing => {}
    }
}

fn parse_side(arg: &str) -> Result<Side> {
    match arg {
        "w" | "white" => Ok(Side::White),
        "b" | "black" => Ok(Side::Black),
        _ => bail!("invalid side: {}", arg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryTallyStore;

    fn session() -> GameSession {
        GameSession::new(Box::new(MemoryTallyStore::default()))
    }

    #[test]
    fn test_click_and_fen() {
        let mut session = session();
        assert!(handle_command("click 5 4", &mut session).unwrap());
        assert!(handle_command("click 3 2", &mut session).unwrap());
        assert_eq!(session.board().to_fen(), "hcaxbs/6/6/2+C3/6/SBXA1H");
    }

    #[test]
    fn test_position_and_side() {
        let mut session = session();
        handle_command("position 6/6/6/6/h5/5H b", &mut session).unwrap();
        assert_eq!(session.side_to_move(), Side::Black);
        assert_eq!(session.board().to_fen(), "6/6/6/6/h5/5H");
    }

    #[test]
    fn test_action_command() {
        let mut session = session();
        handle_command("action move 5,4 3,2", &mut session).unwrap();
        assert_eq!(session.side_to_move(), Side::Black);

        // Acting with the opponent's unit is rejected
        assert!(handle_command("action move 5,5 4,5", &mut session).is_err());
        // As is an illegal relocation
        assert!(handle_command("action move 0,0 3,3", &mut session).is_err());
    }

    #[test]
    fn test_bad_commands_are_errors() {
        let mut session = session();
        assert!(handle_command("click 5", &mut session).is_err());
        assert!(handle_command("click a b", &mut session).is_err());
        assert!(handle_command("position 6/6/6/6/6/6 purple", &mut session).is_err());
        assert!(handle_command("frobnicate", &mut session).is_err());
    }

    #[test]
    fn test_quit_ends_session() {
        let mut session = session();
        assert!(!handle_command("quit", &mut session).unwrap());
    }
}
