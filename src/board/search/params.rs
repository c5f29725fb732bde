#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::constants::{EVAL_ROUGHNESS, NULL_REDUCTION, NULL_SCORE_LIMIT, QS, QS_A};

/// Tunable search knobs and table capacities.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchParams {
    pub qs: i32,
    pub qs_a: i32,
    pub eval_roughness: i32,
    pub null_score_limit: i32,
    pub null_reduction: i32,
    /// Score table slots; 0 disables memoisation.
    pub tt_entries: usize,
    pub killer_entries: usize,
}

impl SearchParams {
    /// Pruning margin for a node searched to `depth`.
    #[inline]
    #[must_use]
    pub fn margin(&self, depth: i32) -> i32 {
        self.qs - self.qs_a * depth
    }
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            qs: QS,
            qs_a: QS_A,
            eval_roughness: EVAL_ROUGHNESS,
            null_score_limit: NULL_SCORE_LIMIT,
            null_reduction: NULL_REDUCTION,
            tt_entries: 1 << 18,
            killer_entries: 1 << 16,
        }
    }
}
