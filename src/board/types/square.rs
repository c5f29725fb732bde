//! Mailbox cell indices and square notation.
//!
//! Cells are numbered 0..120 row by row from the top of a 10x12 grid. In the
//! mover's frame a8 is cell 21 and a1 is cell 91; ranks grow toward lower
//! indices, so "north" is `-10`.

use crate::board::error::SquareError;

/// Number of cells in the padded board
pub const BOARD_SIZE: usize = 120;

pub const A1: usize = 91;
pub const H1: usize = 98;
pub const A8: usize = 21;
pub const H8: usize = 28;

pub const N: isize = -10;
pub const E: isize = 1;
pub const S: isize = 10;
pub const W: isize = -1;

/// Step from `cell` by a signed offset. The sentinel border keeps every step
/// taken from an on-board cell inside the array.
#[inline]
#[must_use]
pub(crate) const fn step(cell: usize, offset: isize) -> usize {
    cell.wrapping_add_signed(offset)
}

/// The cell seen from the other side of the board.
#[inline]
#[must_use]
pub(crate) const fn mirror(cell: usize) -> usize {
    BOARD_SIZE - 1 - cell
}

/// True for cells of the 8x8 playing area.
#[inline]
#[must_use]
pub(crate) const fn on_board(cell: usize) -> bool {
    let file = cell % 10;
    cell >= A8 && cell <= H1 && file >= 1 && file <= 8
}

/// True for the far rank, where pawns promote.
#[inline]
#[must_use]
pub(crate) const fn on_last_rank(cell: usize) -> bool {
    cell >= A8 && cell <= H8
}

/// Parse a square such as `e4` into a cell index (White's frame).
pub fn parse_cell(notation: &str) -> Result<usize, SquareError> {
    let bytes = notation.as_bytes();
    if bytes.len() != 2 {
        return Err(SquareError::InvalidNotation {
            notation: notation.to_string(),
        });
    }
    let file = bytes[0].wrapping_sub(b'a') as usize;
    let rank = bytes[1].wrapping_sub(b'1') as usize;
    if file >= 8 {
        return Err(SquareError::FileOutOfBounds { file });
    }
    if rank >= 8 {
        return Err(SquareError::RankOutOfBounds { rank });
    }
    Ok(A1 + file - 10 * rank)
}

/// Format an on-board cell index as a square name (White's frame).
pub fn format_cell(cell: usize) -> Result<String, SquareError> {
    if !on_board(cell) {
        return Err(SquareError::OffBoard { cell });
    }
    let rank = (A1 + 9 - cell) / 10;
    let file = cell % 10 - 1;
    let mut name = String::with_capacity(2);
    name.push((b'a' + file as u8) as char);
    name.push((b'1' + rank as u8) as char);
    Ok(name)
}
