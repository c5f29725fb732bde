//! Castling rights as seen from one side's own frame.

/// Castling rights of one side, measured in that side's own frame: `west`
/// is the rook starting on that side's a1-corner cell, `east` the rook on the
/// h1-corner cell. For Black the rotated frame puts the h8 rook in the west.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub west: bool,
    pub east: bool,
}

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights {
        west: false,
        east: false,
    };

    pub const BOTH: CastlingRights = CastlingRights {
        west: true,
        east: true,
    };

    #[must_use]
    pub const fn new(west: bool, east: bool) -> Self {
        CastlingRights { west, east }
    }

    /// Two-bit encoding used by the hash keys.
    #[inline]
    #[must_use]
    pub(crate) const fn bits(self) -> usize {
        (self.west as usize) | ((self.east as usize) << 1)
    }

    #[must_use]
    pub const fn without_west(self) -> Self {
        CastlingRights {
            west: false,
            east: self.east,
        }
    }

    #[must_use]
    pub const fn without_east(self) -> Self {
        CastlingRights {
            west: self.west,
            east: false,
        }
    }
}
