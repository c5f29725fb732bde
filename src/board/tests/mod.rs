//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Pseudo-legal move generation
//! - `eval.rs` - Incremental scoring
//! - `search.rs` - Bound search and the deepening driver
//! - `proptest.rs` - Property-based tests over random move walks


use super::{Position, Side, STANDARD};

pub(super) const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R";

/// White-to-move position from a placement field.
pub(super) fn white(layout: &str, castling: &str, en_passant: &str) -> Position {
    Position::new(layout, Side::White, castling, en_passant, &STANDARD).unwrap()
}

pub(super) fn black(layout: &str, castling: &str, en_passant: &str) -> Position {
    Position::new(layout, Side::Black, castling, en_passant, &STANDARD).unwrap()
}

/// Play absolute (White-frame) moves from `pos`.
pub(super) fn play(pos: &Position, moves: &[&str]) -> Position {
    moves.iter().fold(pos.clone(), |pos, text| {
        let mv = pos.to_absolute(text.parse().unwrap());
        pos.make_move(mv, &STANDARD)
    })
}
