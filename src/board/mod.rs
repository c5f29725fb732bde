//! Mailbox board representation and search.
//!
//! The board is a flat array of 120 cells: the 8x8 playing area padded by
//! two sentinel ranks above and below and one sentinel file on each side, so
//! ray walks stop on an off-board cell instead of doing bounds checks.
//!
//! Every [`Position`] is stored from the point of view of the side to move.
//! Making a move rotates the board, so the move generator and evaluator only
//! ever deal with "own" pieces moving "north".
//!
//! # Example
//! ```
//! use mailbox_engine::board::{Position, Side, STANDARD};
//!
//! let pos = Position::new("4k3/8/8/8/8/8/4P3/4K3", Side::White, "-", "-", &STANDARD).unwrap();
//! let moves = pos.gen_moves();
//! assert_eq!(moves.len(), 6);
//! ```

mod error;
mod eval;
mod movegen;
mod pst;
pub mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{MoveParseError, PositionError, SquareError};
pub use eval::{Evaluator, STANDARD};
pub use state::Position;
pub use types::{
    format_cell, parse_cell, CastlingRights, Cell, Move, MoveList, Piece, Side, A1, A8, E, H1,
    H8, N, S, W,
};

pub(crate) use types::{mirror, BOARD_SIZE};
