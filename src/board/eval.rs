//! Incremental evaluation from piece-square tables.
//!
//! A position's score is the sum of its own pieces' table values minus the
//! opponent's (read from the opponent's frame). Instead of recomputing that
//! sum each ply, [`Evaluator::delta`] prices a single move, and the child
//! position inherits `score + delta`, negated for the other side.

use once_cell::sync::Lazy;

use super::pst::{PIECE_VALUES, TABLES};
use super::types::{mirror, on_last_rank, step, Cell, Move, Piece, A1, BOARD_SIZE, H1, S};
use super::Position;

/// Evaluator built from the standard tables.
pub static STANDARD: Lazy<Evaluator> = Lazy::new(Evaluator::standard);

/// Piece-square tables padded to the 120-cell board, material folded in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluator {
    tables: [[i32; BOARD_SIZE]; 6],
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::standard()
    }
}

impl Evaluator {
    /// Build from per-piece material values and 8x8 tables (eighth rank first).
    #[must_use]
    pub fn from_tables(values: &[i32; 6], tables: &[[i32; 64]; 6]) -> Self {
        let mut padded = [[0; BOARD_SIZE]; 6];
        for piece in Piece::ALL {
            let k = piece.index();
            for rank in 0..8 {
                for file in 0..8 {
                    let cell = 21 + rank * 10 + file;
                    padded[k][cell] = tables[k][rank * 8 + file] + values[k];
                }
            }
        }
        Evaluator { tables: padded }
    }

    /// Material plus the classic positional tables.
    #[must_use]
    pub fn standard() -> Self {
        Self::from_tables(&PIECE_VALUES, &TABLES)
    }

    /// Material only: every cell of a table holds the piece value.
    #[must_use]
    pub fn coarse() -> Self {
        Self::from_tables(&PIECE_VALUES, &[[0; 64]; 6])
    }

    /// Table value of `piece` standing on `cell` in its owner's frame.
    #[inline]
    #[must_use]
    pub fn value(&self, piece: Piece, cell: usize) -> i32 {
        self.tables[piece.index()][cell]
    }

    /// Score of a whole board from the mover's perspective. Only used when a
    /// position is constructed; the search relies on [`Evaluator::delta`].
    #[must_use]
    pub fn score_board(&self, board: &[Cell; BOARD_SIZE]) -> i32 {
        board
            .iter()
            .enumerate()
            .map(|(cell, contents)| match *contents {
                Cell::Own(p) => self.value(p, cell),
                Cell::Enemy(p) => -self.value(p, mirror(cell)),
                Cell::Empty | Cell::Offboard => 0,
            })
            .sum()
    }

    /// Score change produced by playing `mv` in `pos`, from the mover's side.
    #[must_use]
    pub fn delta(&self, pos: &Position, mv: Move) -> i32 {
        let (from, to) = (mv.from(), mv.to());
        let Cell::Own(piece) = pos.cell(from) else {
            return 0;
        };

        let mut score = self.value(piece, to) - self.value(piece, from);
        if let Cell::Enemy(captured) = pos.cell(to) {
            score += self.value(captured, mirror(to));
        }
        // Capturing the king, or a square it castled across, wins the game.
        if to.abs_diff(pos.rook_hop()) < 2 {
            score += self.value(Piece::King, mirror(to));
        }
        match piece {
            Piece::King if from.abs_diff(to) == 2 => {
                let corner = if to < from { A1 } else { H1 };
                score += self.value(Piece::Rook, (from + to) / 2);
                score -= self.value(Piece::Rook, corner);
            }
            Piece::Pawn => {
                if on_last_rank(to) {
                    if let Some(promo) = mv.promotion() {
                        score += self.value(promo, to) - self.value(Piece::Pawn, to);
                    }
                }
                if to == pos.en_passant() {
                    score += self.value(Piece::Pawn, mirror(step(to, S)));
                }
            }
            _ => {}
        }
        score
    }
}
