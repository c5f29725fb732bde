//! Piece, side and cell types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    /// All piece kinds in index order
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    /// Promotion kinds, in the order the generator emits them
    pub const PROMOTIONS: [Piece; 4] = [Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen];

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Piece::Pawn => 0,
            Piece::Knight => 1,
            Piece::Bishop => 2,
            Piece::Rook => 3,
            Piece::Queen => 4,
            Piece::King => 5,
        }
    }

    /// Parse a piece from a character of either case (p, n, b, r, q, k)
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c.to_ascii_lowercase() {
            'p' => Some(Piece::Pawn),
            'n' => Some(Piece::Knight),
            'b' => Some(Piece::Bishop),
            'r' => Some(Piece::Rook),
            'q' => Some(Piece::Queen),
            'k' => Some(Piece::King),
            _ => None,
        }
    }

    /// Convert piece to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        }
    }

    /// Sliding pieces keep walking a ray after an empty cell.
    #[inline]
    #[must_use]
    pub const fn slides(self) -> bool {
        matches!(self, Piece::Bishop | Piece::Rook | Piece::Queen)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Absolute side to move. Only used to orient moves for display; the
/// search itself never branches on it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    #[default]
    White,
    Black,
}

impl Side {
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

/// Contents of one of the 120 mailbox cells.
///
/// `Own` pieces belong to the side to move (uppercase in board dumps),
/// `Enemy` pieces to the opponent (lowercase).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Cell {
    Offboard,
    Empty,
    Own(Piece),
    Enemy(Piece),
}

impl Cell {
    /// Number of distinct occupied cell codes, used to size hashing tables.
    pub const OCCUPIED_KINDS: usize = 12;

    /// Swap ownership, as seen after the board is rotated for the other side.
    #[inline]
    #[must_use]
    pub const fn swap(self) -> Cell {
        match self {
            Cell::Own(p) => Cell::Enemy(p),
            Cell::Enemy(p) => Cell::Own(p),
            other => other,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_own(self) -> bool {
        matches!(self, Cell::Own(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_enemy(self) -> bool {
        matches!(self, Cell::Enemy(_))
    }

    /// Index among the twelve occupied codes, `None` for empty and off-board cells.
    #[inline]
    #[must_use]
    pub const fn code(self) -> Option<usize> {
        match self {
            Cell::Own(p) => Some(p.index()),
            Cell::Enemy(p) => Some(6 + p.index()),
            Cell::Offboard | Cell::Empty => None,
        }
    }

    /// Dump character: uppercase own, lowercase enemy, `.` empty, space off-board.
    #[must_use]
    pub fn to_char(self) -> char {
        match self {
            Cell::Offboard => ' ',
            Cell::Empty => '.',
            Cell::Own(p) => p.to_char().to_ascii_uppercase(),
            Cell::Enemy(p) => p.to_char(),
        }
    }
}
