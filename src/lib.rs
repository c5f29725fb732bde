//! Self-contained chess search engine over a 10x12 mailbox board.
//!
//! Positions are always seen from the side to move, moves are generated
//! pseudo-legally, scores are updated incrementally from piece-square tables
//! and the search is a fail-soft alpha-beta `bound` driven by an MTD-style
//! iterative deepening iterator.
//!
//! # Example
//! ```
//! use mailbox_engine::{Position, Searcher, STANDARD};
//!
//! let root = Position::initial(&STANDARD);
//! let mut searcher = Searcher::default();
//! let last = searcher.search(&root, Some(2)).last().unwrap();
//! assert_eq!(last.depth, 2);
//! ```

pub mod board;
pub mod sync;
pub mod tt;
mod zobrist;

pub use board::search::{
    Deepening, SearchInfo, SearchParams, Searcher, MATE_LOWER, MATE_UPPER, MAX_DEPTH,
};
pub use board::{
    CastlingRights, Cell, Evaluator, Move, MoveList, MoveParseError, Piece, Position,
    PositionError, Side, SquareError, STANDARD,
};
pub use sync::SharedSearcher;
pub use tt::{Bounds, KillerTable, ScoreTable};
