//! FEN-style board serialization
//!
//! Rows are joined by `/`, runs of empty cells collapse to a digit and
//! units are kind letters (uppercase White, lowercase Black). A `+`
//! prefix marks an evolved unit, a `*` suffix a defending shield-bearer.

use anyhow::{bail, ensure, Context, Result};

use super::{
    board::Board,
    loc::{Loc, BOARD_SIZE},
    side::Side,
    units::{Unit, UnitKind},
};

impl Board {
    /// Convert board state to FEN notation
    pub fn to_fen(&self) -> String {
        let mut fen = String::new();
        for row in 0..BOARD_SIZE as i32 {
            let mut empty_cells = 0;
            for col in 0..BOARD_SIZE as i32 {
                if let Some(unit) = self.unit_at(Loc::new(row, col)) {
                    if empty_cells > 0 {
                        fen.push_str(&empty_cells.to_string());
                        empty_cells = 0;
                    }
                    if unit.evolved {
                        fen.push('+');
                    }
                    let mut c = unit.kind.to_fen_char();
                    if unit.side == Side::Black {
                        c = c.to_ascii_lowercase();
                    }
                    fen.push(c);
                    if unit.defending {
                        fen.push('*');
                    }
                } else {
                    empty_cells += 1;
                }
            }
            if empty_cells > 0 {
                fen.push_str(&empty_cells.to_string());
            }
            if row < (BOARD_SIZE - 1) as i32 {
                fen.push('/');
            }
        }
        fen
    }

    /// Create a board from FEN notation
    pub fn from_fen(fen: &str) -> Result<Self> {
        let mut board = Board::empty();
        let rows: Vec<&str> = fen.split('/').collect();
        ensure!(rows.len() == BOARD_SIZE, "Expected {} rows", BOARD_SIZE);

        for (row, row_str) in rows.iter().enumerate() {
            let mut col = 0usize;
            let mut chars = row_str.chars().peekable();
            while let Some(c) = chars.next() {
                if let Some(digit) = c.to_digit(10) {
                    col += digit as usize;
                } else {
                    let evolved = c == '+';
                    let c = if evolved {
                        chars.next().context("Dangling '+' in FEN")?
                    } else {
                        c
                    };
                    let kind = UnitKind::from_fen_char(c)
                        .with_context(|| format!("Invalid FEN char: {}", c))?;
                    let side = if c.is_ascii_uppercase() {
                        Side::White
                    } else {
                        Side::Black
                    };
                    let defending = chars.peek() == Some(&'*');
                    if defending {
                        chars.next();
                        ensure!(
                            kind == UnitKind::ShieldBearer,
                            "'*' marker on a non-shield-bearer"
                        );
                        ensure!(!evolved, "Evolved units cannot be defending");
                    }
                    ensure!(col < BOARD_SIZE, "Row {} overflows the board", row);
                    board = board.with_unit_placed(
                        Loc::new(row as i32, col as i32),
                        Unit {
                            kind,
                            side,
                            evolved,
                            defending,
                        },
                    );
                    col += 1;
                }
            }
            if col != BOARD_SIZE {
                bail!("Invalid row length in row {}", row);
            }
        }
        Ok(board)
    }
}
