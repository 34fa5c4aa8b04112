use std::fmt;

use colored::Colorize;

use super::{
    board::Board,
    loc::{Loc, BOARD_SIZE},
    resolve::{Animation, GameStatus},
    side::Side,
    terrain::{terrain_at, Terrain},
    units::Unit,
};

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "{}", "White".bright_blue()),
            Side::Black => write!(f, "{}", "Black".bright_red()),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut c = self.kind.to_fen_char();
        if self.side == Side::Black {
            c = c.to_ascii_lowercase();
        }
        let symbol = c.to_string();
        let symbol = match self.side {
            Side::White => symbol.bright_blue(),
            Side::Black => symbol.bright_red(),
        };
        // Evolved units render bold, defending ones underlined
        let symbol = if self.evolved { symbol.bold() } else { symbol };
        let symbol = if self.defending {
            symbol.underline()
        } else {
            symbol
        };
        write!(f, "{}", symbol)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {} ", col)?;
        }
        writeln!(f)?;

        for row in 0..BOARD_SIZE as i32 {
            write!(f, "{:2} ", row)?;
            for col in 0..BOARD_SIZE as i32 {
                let loc = Loc::new(row, col);
                if let Some(unit) = self.unit_at(loc) {
                    write!(f, " {} ", unit)?;
                } else {
                    let glyph = match terrain_at(loc) {
                        Terrain::Normal => "·",
                        Terrain::Rock => "#",
                        Terrain::Evolution => "^",
                    };
                    write!(f, " {} ", glyph)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Playing => write!(f, "playing"),
            GameStatus::GameOver(winner) => write!(f, "gameover {}", winner),
            GameStatus::Draw => write!(f, "draw"),
        }
    }
}

impl fmt::Display for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Animation::Explosion { at } => write!(f, "explosion {}", at),
            Animation::SwordThrust { from, to } => write!(f, "swordthrust {} {}", from, to),
            Animation::ArrowShot { from, to } => write!(f, "arrowshot {} {}", from, to),
            Animation::AxeSwing { at } => write!(f, "axeswing {}", at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_rendering() {
        colored::control::set_override(false);
        let text = Board::initial().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "    0  1  2  3  4  5 ");
        assert_eq!(lines[1], " 0  h  c  a  x  b  s ");
        assert_eq!(lines[3], " 2  #  ·  ·  ^  ·  # ");
        assert_eq!(lines[4], " 3  #  ·  ^  ·  ·  # ");
        assert_eq!(lines[6], " 5  S  B  X  A  C  H ");
    }

    #[test]
    fn test_animation_text() {
        let anim = Animation::ArrowShot {
            from: Loc::new(0, 2),
            to: Loc::new(2, 2),
        };
        assert_eq!(anim.to_string(), "arrowshot 0,2 2,2");
    }
}
