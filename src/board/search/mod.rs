//! Search module implementing a fail-soft bound search with MTD-style
//! iterative deepening.
//!
//! Features:
//! - Zero-window `bound` probes that return lower or upper bounds
//! - Score table memoisation keyed by (position, depth, null flag)
//! - Null move pruning and a per-position killer move
//! - Margin pruning of quiet moves near the horizon
//! - Mate and stalemate detection through the king's value

mod constants;
mod iterative;
mod params;

use log::debug;

use crate::tt::{Bounds, KillerTable, ScoreTable};

use super::{Evaluator, Move, Position, STANDARD};
pub use constants::{MATE_LOWER, MATE_UPPER, MAX_DEPTH};
pub use iterative::{Deepening, SearchInfo};
pub use params::SearchParams;

/// Search context: tables, repetition path and node counter.
///
/// Tables persist between `bound` calls so that repeated probes of the same
/// tree reuse earlier work; [`Searcher::search`] clears them before a new
/// root is searched.
pub struct Searcher {
    eval: Evaluator,
    params: SearchParams,
    scores: ScoreTable,
    killers: KillerTable,
    path: Vec<u64>,
    // Keys of earlier game positions at the bottom of `path`.
    history_len: usize,
    nodes: u64,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(SearchParams::default())
    }
}

impl Searcher {
    #[must_use]
    pub fn new(params: SearchParams) -> Self {
        Self::with_evaluator((*STANDARD).clone(), params)
    }

    /// Searcher pricing moves with a custom evaluator. Positions handed to it
    /// should be built with the same evaluator so their scores agree.
    #[must_use]
    pub fn with_evaluator(eval: Evaluator, params: SearchParams) -> Self {
        Searcher {
            scores: ScoreTable::new(params.tt_entries),
            killers: KillerTable::new(params.killer_entries),
            path: Vec::with_capacity(64),
            history_len: 0,
            nodes: 0,
            eval,
            params,
        }
    }

    #[must_use]
    pub fn evaluator(&self) -> &Evaluator {
        &self.eval
    }

    #[must_use]
    pub fn params(&self) -> &SearchParams {
        &self.params
    }

    /// Nodes visited since the last [`Searcher::search`] or [`Searcher::clear`].
    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Last move that produced a cutoff in `pos`, in `pos`'s frame.
    #[must_use]
    pub fn killer(&self, pos: &Position) -> Option<Move> {
        self.killers.get(pos.key())
    }

    /// Forget all memoised scores, killers, path keys and node counts.
    pub fn clear(&mut self) {
        self.scores.clear();
        self.killers.clear();
        self.path.clear();
        self.history_len = 0;
        self.nodes = 0;
    }

    /// Zero-window probe around `gamma`.
    ///
    /// Fail-soft: a result `>= gamma` is a lower bound on the true score, a
    /// result `< gamma` an upper bound. With `can_null` false the node is
    /// treated as a root-like node: no null move is tried and repetitions of
    /// positions on the current path score 0. The search root itself is never
    /// scored as a repetition.
    pub fn bound(&mut self, pos: &Position, gamma: i32, depth: i32, can_null: bool) -> i32 {
        self.nodes += 1;
        let depth = depth.max(0);

        // Our king is gone: the previous move captured it.
        if pos.score() <= -MATE_LOWER {
            return -MATE_UPPER;
        }

        let key = pos.key();
        let entry = self
            .scores
            .probe(key, depth, can_null)
            .unwrap_or(Bounds::UNKNOWN);
        if entry.lower >= gamma {
            return entry.lower;
        }
        if entry.upper < gamma {
            return entry.upper;
        }

        let at_root = self.path.len() <= self.history_len;
        if !can_null && !at_root && depth > 0 && self.path.contains(&key) {
            return 0;
        }

        let (mut best, cutoff) = self.enumerate(pos, gamma, depth, can_null);

        if let Some(mv) = cutoff {
            self.killers.store(key, mv);
        }

        // Every move loses the king: mate if we are in check now, otherwise
        // stalemate.
        if depth > 2 && best == -MATE_UPPER {
            let in_check = self.bound(&pos.null_move(), MATE_UPPER, 0, true) == MATE_UPPER;
            best = if in_check { -MATE_LOWER } else { 0 };
        }

        let stored = if best >= gamma {
            Bounds::new(best, entry.upper)
        } else {
            Bounds::new(entry.lower, best)
        };
        self.scores.store(key, depth, can_null, stored);

        best
    }

    /// Try candidates in order until one reaches `gamma`. Returns the best
    /// score seen and the move that produced the cutoff, if any.
    fn enumerate(
        &mut self,
        pos: &Position,
        gamma: i32,
        depth: i32,
        can_null: bool,
    ) -> (i32, Option<Move>) {
        let key = pos.key();
        let mut best = -MATE_UPPER;

        if depth > 2 && can_null && pos.score().abs() < self.params.null_score_limit {
            let reduced = depth - self.params.null_reduction;
            self.path.push(key);
            let score = -self.bound(&pos.null_move(), 1 - gamma, reduced, true);
            self.path.pop();
            best = best.max(score);
            if best >= gamma {
                return (best, None);
            }
        }

        // Stand pat.
        if depth == 0 {
            best = best.max(pos.score());
            if best >= gamma {
                return (best, None);
            }
        }

        // A shallow search first gives the full search a move to try early.
        // It runs before this node joins the path so it is not cut short as a
        // repetition of itself.
        if depth > 2 && self.killers.get(key).is_none() {
            self.bound(pos, gamma, depth - self.params.null_reduction, false);
        }

        self.path.push(key);
        let (score, cutoff) = self.try_moves(pos, gamma, depth);
        self.path.pop();
        (best.max(score), cutoff)
    }

    /// The killer first, then generated moves by descending delta.
    fn try_moves(&mut self, pos: &Position, gamma: i32, depth: i32) -> (i32, Option<Move>) {
        let mut best = -MATE_UPPER;
        let margin = self.params.margin(depth);

        let killer = self
            .killers
            .get(pos.key())
            .filter(|mv| pos.cell(mv.from()).is_own());
        if let Some(mv) = killer {
            if self.eval.delta(pos, mv) >= margin {
                best = best.max(self.child_score(pos, mv, gamma, depth));
                if best >= gamma {
                    return (best, Some(mv));
                }
            }
        }

        let mut moves: Vec<(i32, Move)> = pos
            .gen_moves()
            .into_iter()
            .map(|mv| (self.eval.delta(pos, mv), mv))
            .collect();
        moves.sort_unstable_by(|a, b| b.cmp(a));

        for (delta, mv) in moves {
            if delta < margin {
                break;
            }
            // Near the horizon a move that cannot reach gamma on its static
            // value is not searched; neither are the quieter ones after it.
            if depth <= 1 && pos.score() + delta < gamma {
                let estimate = if delta < MATE_LOWER {
                    pos.score() + delta
                } else {
                    MATE_UPPER
                };
                best = best.max(estimate);
                return (best, (best >= gamma).then_some(mv));
            }
            best = best.max(self.child_score(pos, mv, gamma, depth));
            if best >= gamma {
                return (best, Some(mv));
            }
        }

        (best, None)
    }

    fn child_score(&mut self, pos: &Position, mv: Move, gamma: i32, depth: i32) -> i32 {
        let child = pos.make_move(mv, &self.eval);
        -self.bound(&child, 1 - gamma, depth - 1, true)
    }

    /// Iteratively deepen from `root`. See [`Deepening`].
    pub fn search(&mut self, root: &Position, max_depth: Option<u32>) -> Deepening<'_> {
        self.search_with_history(std::slice::from_ref(root), max_depth)
    }

    /// Iteratively deepen from the last position of `history`. The earlier
    /// positions count as repetitions; an empty history yields nothing.
    pub fn search_with_history(
        &mut self,
        history: &[Position],
        max_depth: Option<u32>,
    ) -> Deepening<'_> {
        self.clear();
        let root = history.split_last().map(|(root, earlier)| {
            self.path.extend(earlier.iter().map(Position::key));
            self.history_len = self.path.len();
            root.clone()
        });
        let max_depth = max_depth.map_or(MAX_DEPTH, |d| d.min(MAX_DEPTH));
        debug!(
            "search start: max depth {}, {} prior positions",
            max_depth,
            self.path.len()
        );
        Deepening::new(self, root, max_depth)
    }

    /// Run the driver to `depth` and return the final best move, in the
    /// root mover's frame.
    pub fn best_move(&mut self, root: &Position, depth: u32) -> Option<Move> {
        self.search(root, Some(depth))
            .last()
            .and_then(|info| info.best_move)
    }
}
