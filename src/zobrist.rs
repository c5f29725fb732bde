//! Zobrist hashing for mailbox positions.
//!
//! Keys are drawn once from a fixed-seed generator so hashes are stable
//! across runs. A position keeps the hash of its board in its own frame and
//! in the rotated frame, which turns the per-ply board rotation into a swap.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{mirror, CastlingRights, Cell, BOARD_SIZE};

pub(crate) struct ZobristKeys {
    // cell_keys[cell][occupied cell code]
    pub(crate) cell_keys: [[u64; Cell::OCCUPIED_KINDS]; BOARD_SIZE],
    // castling_keys[own bits | their bits << 2]
    pub(crate) castling_keys: [u64; 16],
    pub(crate) en_passant_keys: [u64; BOARD_SIZE],
    pub(crate) rook_hop_keys: [u64; BOARD_SIZE],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1234567890_u64);
        let mut cell_keys = [[0; Cell::OCCUPIED_KINDS]; BOARD_SIZE];
        let mut castling_keys = [0; 16];
        let mut en_passant_keys = [0; BOARD_SIZE];
        let mut rook_hop_keys = [0; BOARD_SIZE];

        for cell in &mut cell_keys {
            for key in cell.iter_mut() {
                *key = rng.gen();
            }
        }
        for key in &mut castling_keys {
            *key = rng.gen();
        }
        // Index 0 means "no target", keep it neutral.
        for key in en_passant_keys.iter_mut().skip(1) {
            *key = rng.gen();
        }
        for key in rook_hop_keys.iter_mut().skip(1) {
            *key = rng.gen();
        }

        ZobristKeys {
            cell_keys,
            castling_keys,
            en_passant_keys,
            rook_hop_keys,
        }
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

/// Key contribution of `contents` at `cell` in the current frame.
#[inline]
pub(crate) fn cell_key(cell: usize, contents: Cell) -> u64 {
    match contents.code() {
        Some(code) => ZOBRIST.cell_keys[cell][code],
        None => 0,
    }
}

/// Key contribution of the same cell once the board is rotated.
#[inline]
pub(crate) fn rotated_cell_key(cell: usize, contents: Cell) -> u64 {
    cell_key(mirror(cell), contents.swap())
}

#[inline]
pub(crate) fn castling_key(ours: CastlingRights, theirs: CastlingRights) -> u64 {
    ZOBRIST.castling_keys[ours.bits() | (theirs.bits() << 2)]
}

#[inline]
pub(crate) fn en_passant_key(cell: usize) -> u64 {
    ZOBRIST.en_passant_keys[cell]
}

#[inline]
pub(crate) fn rook_hop_key(cell: usize) -> u64 {
    ZOBRIST.rook_hop_keys[cell]
}

/// Board hashes in the current and rotated frames, computed from scratch.
pub(crate) fn board_hashes(board: &[Cell; BOARD_SIZE]) -> (u64, u64) {
    board
        .iter()
        .enumerate()
        .fold((0, 0), |(hash, rotated), (cell, &contents)| {
            (
                hash ^ cell_key(cell, contents),
                rotated ^ rotated_cell_key(cell, contents),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Piece;

    #[test]
    fn keys_are_deterministic() {
        let a = ZobristKeys::new();
        let b = ZobristKeys::new();
        assert_eq!(a.cell_keys[55][3], b.cell_keys[55][3]);
        assert_eq!(a.castling_keys, b.castling_keys);
    }

    #[test]
    fn empty_cells_do_not_contribute() {
        assert_eq!(cell_key(55, Cell::Empty), 0);
        assert_eq!(cell_key(0, Cell::Offboard), 0);
        assert_eq!(en_passant_key(0), 0);
        assert_eq!(rook_hop_key(0), 0);
    }

    #[test]
    fn rotated_key_matches_rotated_board() {
        let cell = 85;
        let contents = Cell::Own(Piece::Pawn);
        assert_eq!(
            rotated_cell_key(cell, contents),
            cell_key(34, Cell::Enemy(Piece::Pawn))
        );
    }
}
