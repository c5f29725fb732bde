//! Search constants.
//!
//! Mate scores are expressed in terms of the king value: losing the king
//! swings the score by at least `MATE_LOWER`, and no material balance can
//! reach `MATE_UPPER`.

// ============================================================================
// SCORE LIMITS
// ============================================================================

/// Any score at or above this means the opponent's king can be taken.
pub const MATE_LOWER: i32 = 60000 - 10 * 929;

/// Score of a position whose king has already been captured.
pub const MATE_UPPER: i32 = 60000 + 10 * 929;

// ============================================================================
// SEARCH LIMITS
// ============================================================================

/// Hard cap on iterative deepening when the caller gives no depth limit.
pub const MAX_DEPTH: u32 = 1000;

// ============================================================================
// DEFAULT TUNING
// ============================================================================

/// Move pruning margin at depth 0; shrinks by `QS_A` per ply of depth.
pub const QS: i32 = 40;
pub const QS_A: i32 = 140;

/// The driver stops refining a depth once its window is this narrow.
pub const EVAL_ROUGHNESS: i32 = 15;

/// Null moves are only tried while the static score is inside this band.
pub const NULL_SCORE_LIMIT: i32 = 500;

/// Depth reduction for null-move and killer-discovery searches.
pub const NULL_REDUCTION: i32 = 3;
