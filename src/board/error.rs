//! Error types for position and move construction.

use std::fmt;

/// Error type for position construction failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// Layout does not have exactly 8 ranks
    WrongRankCount { found: usize },
    /// Invalid piece character in the layout
    InvalidPiece { char: char },
    /// A rank describes more or fewer than 8 files
    BadRankWidth { rank: usize, files: usize },
    /// Invalid castling character
    InvalidCastling { char: char },
    /// Invalid en passant square
    InvalidEnPassant { found: String },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::WrongRankCount { found } => {
                write!(f, "Layout must have 8 ranks, found {found}")
            }
            PositionError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in layout")
            }
            PositionError::BadRankWidth { rank, files } => {
                write!(f, "Rank {rank} describes {files} files, expected 8")
            }
            PositionError::InvalidCastling { char } => {
                write!(f, "Invalid castling character '{char}'")
            }
            PositionError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
        }
    }
}

impl std::error::Error for PositionError {}

/// Error type for move parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
    /// Cell index lies on the sentinel border
    OffBoard { cell: usize },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
            SquareError::OffBoard { cell } => {
                write!(f, "Cell {cell} is not on the playing area")
            }
        }
    }
}

impl std::error::Error for SquareError {}
