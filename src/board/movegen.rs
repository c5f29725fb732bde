//! Pseudo-legal move generation.
//!
//! Rays are walked over the padded board with fixed offsets and stop on the
//! first sentinel, own piece or capture. Moves that leave the mover's king
//! capturable are still produced; the search finds out when the reply takes
//! the king.

use super::types::{on_last_rank, step, Cell, Move, MoveList, Piece, A1, E, H1, N, S, W};
use super::Position;

const PAWN_DIRS: &[isize] = &[N, N + N, N + W, N + E];
const KNIGHT_DIRS: &[isize] = &[
    N + N + E,
    E + N + E,
    E + S + E,
    S + S + E,
    S + S + W,
    W + S + W,
    W + N + W,
    N + N + W,
];
const BISHOP_DIRS: &[isize] = &[N + E, S + E, S + W, N + W];
const ROOK_DIRS: &[isize] = &[N, E, S, W];
const ROYAL_DIRS: &[isize] = &[N, E, S, W, N + E, S + E, S + W, N + W];

/// Step or slide offsets for a piece kind, in generation order.
#[must_use]
pub(crate) const fn directions(piece: Piece) -> &'static [isize] {
    match piece {
        Piece::Pawn => PAWN_DIRS,
        Piece::Knight => KNIGHT_DIRS,
        Piece::Bishop => BISHOP_DIRS,
        Piece::Rook => ROOK_DIRS,
        Piece::Queen | Piece::King => ROYAL_DIRS,
    }
}

impl Position {
    /// All pseudo-legal moves for the side to move, in a fixed order: source
    /// cells ascending, then direction order, then outward along each ray.
    #[must_use]
    pub fn gen_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        for (from, &contents) in self.board().iter().enumerate() {
            if let Cell::Own(piece) = contents {
                for &dir in directions(piece) {
                    self.walk_ray(from, piece, dir, &mut moves);
                }
            }
        }
        moves
    }

    fn walk_ray(&self, from: usize, piece: Piece, dir: isize, moves: &mut MoveList) {
        let mut to = step(from, dir);
        loop {
            let target = self.cell(to);
            if matches!(target, Cell::Offboard | Cell::Own(_)) {
                return;
            }

            if piece == Piece::Pawn {
                if !self.pawn_may_enter(from, to, dir, target) {
                    return;
                }
                if on_last_rank(to) {
                    for promo in Piece::PROMOTIONS {
                        moves.push(Move::promotion_to(from, to, promo));
                    }
                    return;
                }
            }

            moves.push(Move::new(from, to));
            if !piece.slides() || target.is_enemy() {
                return;
            }

            // Castling is found from the rook's side: once the rook's ray
            // reaches the cell beside the king, the king may hop two cells.
            let rights = self.castling();
            let king = Cell::Own(Piece::King);
            if from == A1 && rights.west && self.cell(step(to, E)) == king {
                moves.push(Move::new(step(to, E), step(to, W)));
            }
            if from == H1 && rights.east && self.cell(step(to, W)) == king {
                moves.push(Move::new(step(to, W), step(to, E)));
            }

            to = step(to, dir);
        }
    }

    fn pawn_may_enter(&self, from: usize, to: usize, dir: isize, target: Cell) -> bool {
        if dir == N || dir == N + N {
            if target != Cell::Empty {
                return false;
            }
            let on_home_rank = from >= step(A1, N);
            return dir == N || (on_home_rank && self.cell(step(from, N)) == Cell::Empty);
        }
        if target == Cell::Empty {
            let hop = self.rook_hop();
            let hops_king = hop != 0 && to.abs_diff(hop) < 2;
            return to == self.en_passant() || hops_king;
        }
        true
    }
}
