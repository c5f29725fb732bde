//! MTD-bi iterative deepening.
//!
//! Each depth starts with the window `[-MATE_LOWER, MATE_LOWER]` and bisects
//! it with zero-window probes until it is narrower than the evaluation
//! roughness. The probe threshold carries over from one depth to the next.

use log::{debug, trace};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Searcher, MATE_LOWER};
use crate::board::{Move, Position};

/// One probe of the driver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchInfo {
    pub depth: u32,
    /// Threshold the root was probed with.
    pub gamma: i32,
    /// Probe result: a lower bound if `score >= gamma`, else an upper bound.
    pub score: i32,
    /// Best root move known so far, in the root mover's frame.
    pub best_move: Option<Move>,
}

/// Iterator over driver probes, produced by [`Searcher::search`].
///
/// Runs lazily: every `next` performs one root probe. Dropping the iterator
/// stops the search.
pub struct Deepening<'a> {
    searcher: &'a mut Searcher,
    root: Option<Position>,
    max_depth: u32,
    depth: u32,
    gamma: i32,
    lower: i32,
    upper: i32,
    best_move: Option<Move>,
}

impl<'a> Deepening<'a> {
    pub(super) fn new(searcher: &'a mut Searcher, root: Option<Position>, max_depth: u32) -> Self {
        Deepening {
            searcher,
            root,
            max_depth,
            depth: 0,
            gamma: 0,
            lower: 0,
            upper: 0,
            best_move: None,
        }
    }

    /// Depth currently being refined (0 before the first probe).
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Nodes visited so far by this search.
    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.searcher.nodes()
    }

    fn settled(&self) -> bool {
        self.lower >= self.upper - self.searcher.params().eval_roughness
    }
}

impl Iterator for Deepening<'_> {
    type Item = SearchInfo;

    fn next(&mut self) -> Option<SearchInfo> {
        self.root.as_ref()?;

        while self.settled() {
            if self.depth > 0 {
                debug!(
                    "depth {} settled in [{}, {}], {} nodes",
                    self.depth,
                    self.lower,
                    self.upper,
                    self.searcher.nodes()
                );
            }
            if self.depth >= self.max_depth {
                self.root = None;
                return None;
            }
            self.depth += 1;
            self.lower = -MATE_LOWER;
            self.upper = MATE_LOWER;
        }

        let root = self.root.as_ref()?;
        let score = self.searcher.bound(root, self.gamma, self.depth as i32, false);
        if score >= self.gamma {
            self.lower = score;
        } else {
            self.upper = score;
        }
        if let Some(mv) = self.searcher.killer(root) {
            self.best_move = Some(mv);
        }

        let info = SearchInfo {
            depth: self.depth,
            gamma: self.gamma,
            score,
            best_move: self.best_move,
        };
        trace!(
            "depth {} gamma {} score {} best {:?}",
            info.depth,
            info.gamma,
            info.score,
            info.best_move
        );

        self.gamma = (self.lower + self.upper + 1).div_euclid(2);
        Some(info)
    }
}
