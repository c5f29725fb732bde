//! Synchronization primitives for the search engine.
//!
//! Provides a shared searcher handle for hosts that search from several
//! threads.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::board::search::{SearchInfo, SearchParams, Searcher};
use crate::board::Position;

/// A searcher shared between threads.
///
/// This wraps `Arc<Mutex<Searcher>>`. Searches through one handle are
/// serialised; independent searches should use independent `Searcher`s.
#[derive(Clone)]
pub struct SharedSearcher(Arc<Mutex<Searcher>>);

impl Default for SharedSearcher {
    fn default() -> Self {
        Self::new(Searcher::default())
    }
}

impl SharedSearcher {
    #[must_use]
    pub fn new(searcher: Searcher) -> Self {
        SharedSearcher(Arc::new(Mutex::new(searcher)))
    }

    #[must_use]
    pub fn with_params(params: SearchParams) -> Self {
        Self::new(Searcher::new(params))
    }

    /// Search `root` to `max_depth`, holding the lock for the whole search,
    /// and return the final probe.
    pub fn think(&self, root: &Position, max_depth: u32) -> Option<SearchInfo> {
        self.0.lock().search(root, Some(max_depth)).last()
    }

    /// Exclusive access, e.g. to run the driver step by step.
    #[inline]
    pub fn lock(&self) -> MutexGuard<'_, Searcher> {
        self.0.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::STANDARD;
    use std::thread;

    #[test]
    fn clones_share_one_searcher() {
        let shared = SharedSearcher::default();
        let other = shared.clone();
        let root = Position::initial(&STANDARD);

        shared.think(&root, 1);
        assert!(other.lock().nodes() > 0);
    }

    #[test]
    fn concurrent_searches_agree() {
        let shared = SharedSearcher::default();
        let handles: Vec<_> = (0..2)
            .map(|_| {
                let shared = shared.clone();
                thread::spawn(move || {
                    let root = Position::initial(&STANDARD);
                    shared.think(&root, 2)
                })
            })
            .collect();

        let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(results[0].is_some());
        assert_eq!(results[0], results[1]);
    }
}
