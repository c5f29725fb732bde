//! Move type and move list.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::{format_cell, mirror, parse_cell};
use crate::board::error::MoveParseError;

const PROMO_NONE: u32 = 0;
const PROMO_KNIGHT: u32 = 1;
const PROMO_BISHOP: u32 = 2;
const PROMO_ROOK: u32 = 3;
const PROMO_QUEEN: u32 = 4;

/// Compact move representation.
///
/// Encoding:
/// - bits 0-7:   promotion kind (0 none, 1-4 knight, bishop, rook, queen)
/// - bits 8-15:  destination cell (0-119)
/// - bits 16-23: source cell (0-119)
///
/// Cells are in the frame of the side making the move. The packed value is
/// the equality, hashing and tie-break ordering key.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move(u32);

impl Move {
    /// Create a non-promoting move
    #[inline]
    #[must_use]
    pub const fn new(from: usize, to: usize) -> Self {
        Move(((from as u32) << 16) | ((to as u32) << 8) | PROMO_NONE)
    }

    /// Create a pawn promotion. Non-promotable kinds fall back to a queen.
    #[inline]
    #[must_use]
    pub const fn promotion_to(from: usize, to: usize, piece: Piece) -> Self {
        let code = match piece {
            Piece::Knight => PROMO_KNIGHT,
            Piece::Bishop => PROMO_BISHOP,
            Piece::Rook => PROMO_ROOK,
            _ => PROMO_QUEEN,
        };
        Move(((from as u32) << 16) | ((to as u32) << 8) | code)
    }

    /// Source cell
    #[inline]
    #[must_use]
    pub const fn from(self) -> usize {
        ((self.0 >> 16) & 0xFF) as usize
    }

    /// Destination cell
    #[inline]
    #[must_use]
    pub const fn to(self) -> usize {
        ((self.0 >> 8) & 0xFF) as usize
    }

    /// Promotion kind, if this move promotes a pawn
    #[inline]
    #[must_use]
    pub const fn promotion(self) -> Option<Piece> {
        match self.0 & 0xFF {
            PROMO_KNIGHT => Some(Piece::Knight),
            PROMO_BISHOP => Some(Piece::Bishop),
            PROMO_ROOK => Some(Piece::Rook),
            PROMO_QUEEN => Some(Piece::Queen),
            _ => None,
        }
    }

    /// The same move seen from the other side of the board.
    #[inline]
    #[must_use]
    pub const fn rotate(self) -> Self {
        let promo = self.0 & 0xFF;
        Move(((mirror(self.from()) as u32) << 16) | ((mirror(self.to()) as u32) << 8) | promo)
    }

    /// Get the raw packed value (for hashing/storage)
    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}->{}", self.from(), self.to())?;
        if let Some(promo) = self.promotion() {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        write!(f, ")")
    }
}

/// Long algebraic notation, reading the cells in White's frame.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let from = format_cell(self.from()).map_err(|_| fmt::Error)?;
        let to = format_cell(self.to()).map_err(|_| fmt::Error)?;
        write!(f, "{from}{to}")?;
        if let Some(promo) = self.promotion() {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

impl FromStr for Move {
    type Err = MoveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !(s.len() == 4 || s.len() == 5) || !s.is_ascii() {
            return Err(MoveParseError::InvalidLength { len: s.len() });
        }
        let invalid_square = |_| MoveParseError::InvalidSquare {
            notation: s.to_string(),
        };
        let from = parse_cell(&s[0..2]).map_err(invalid_square)?;
        let to = parse_cell(&s[2..4]).map_err(invalid_square)?;
        match s[4..].chars().next() {
            None => Ok(Move::new(from, to)),
            Some(c) => match Piece::from_char(c) {
                Some(piece @ (Piece::Knight | Piece::Bishop | Piece::Rook | Piece::Queen)) => {
                    Ok(Move::promotion_to(from, to, piece))
                }
                _ => Err(MoveParseError::InvalidPromotion { char: c }),
            },
        }
    }
}

/// List of moves in generation order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    moves: Vec<Move>,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: Vec::with_capacity(64),
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.moves.iter()
    }

    #[must_use]
    pub fn contains(&self, mv: Move) -> bool {
        self.moves.contains(&mv)
    }

    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.moves.first().copied()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.iter()
    }
}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.moves.into_iter()
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.moves[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::types::square::{A1, H8};

    #[test]
    fn packs_fields() {
        let mv = Move::promotion_to(31, 21, Piece::Rook);
        assert_eq!(mv.from(), 31);
        assert_eq!(mv.to(), 21);
        assert_eq!(mv.promotion(), Some(Piece::Rook));
        assert_eq!(Move::new(85, 65).promotion(), None);
    }

    #[test]
    fn parses_square_pairs() {
        let mv: Move = "e2e4".parse().unwrap();
        assert_eq!(mv, Move::new(85, 65));
        assert_eq!(mv.to_string(), "e2e4");

        let promo: Move = "e7e8q".parse().unwrap();
        assert_eq!(promo.promotion(), Some(Piece::Queen));
        assert_eq!(promo.to_string(), "e7e8q");
    }

    #[test]
    fn rejects_malformed_moves() {
        assert_eq!(
            "e2e".parse::<Move>(),
            Err(MoveParseError::InvalidLength { len: 3 })
        );
        assert!(matches!(
            "z2e4".parse::<Move>(),
            Err(MoveParseError::InvalidSquare { .. })
        ));
        assert_eq!(
            "e7e8k".parse::<Move>(),
            Err(MoveParseError::InvalidPromotion { char: 'k' })
        );
    }

    #[test]
    fn rotate_mirrors_both_cells() {
        let mv = Move::new(A1, 85);
        let rotated = mv.rotate();
        assert_eq!(rotated.from(), H8);
        assert_eq!(rotated.to(), 34);
        assert_eq!(rotated.rotate(), mv);
    }

    #[test]
    fn ordering_follows_packed_value() {
        assert!(Move::new(85, 65) > Move::new(84, 64));
        assert!(Move::promotion_to(31, 21, Piece::Queen) > Move::new(31, 21));
    }
}
