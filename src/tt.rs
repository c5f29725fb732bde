//! Score and killer tables for the bound search.
//!
//! The score table maps (position key, depth, null-move flag) to a window
//! `[lower, upper]` that the true score is known to lie in. Entries live in
//! small buckets; when a bucket is full the shallowest entry is replaced.
//!
//! The killer table remembers the move that last produced a cutoff in a
//! position. It is direct-mapped and always replaces.

use crate::board::search::MATE_UPPER;
use crate::board::Move;

/// Known window for a position's score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub lower: i32,
    pub upper: i32,
}

impl Bounds {
    /// Nothing is known yet.
    pub const UNKNOWN: Bounds = Bounds {
        lower: -MATE_UPPER,
        upper: MATE_UPPER,
    };

    #[must_use]
    pub const fn new(lower: i32, upper: i32) -> Self {
        Bounds { lower, upper }
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Bounds::UNKNOWN
    }
}

#[derive(Clone, Copy)]
struct Slot {
    key: u64,
    depth: i32,
    can_null: bool,
    used: bool,
    bounds: Bounds,
}

impl Slot {
    const EMPTY: Slot = Slot {
        key: 0,
        depth: 0,
        can_null: false,
        used: false,
        bounds: Bounds::UNKNOWN,
    };

    fn matches(&self, key: u64, depth: i32, can_null: bool) -> bool {
        self.used && self.key == key && self.depth == depth && self.can_null == can_null
    }
}

/// Number of slots per bucket for collision resolution
const BUCKET_SIZE: usize = 4;

type Bucket = [Slot; BUCKET_SIZE];

/// Bounded score memo keyed by `(key, depth, can_null)`.
///
/// A table built with zero entries stores nothing and every probe misses,
/// which turns memoisation off without changing any search result.
pub struct ScoreTable {
    buckets: Vec<Bucket>,
    mask: usize,
    len: usize,
}

impl ScoreTable {
    /// Create a table holding roughly `entries` windows (rounded up to a
    /// whole power-of-two number of buckets).
    #[must_use]
    pub fn new(entries: usize) -> Self {
        let num_buckets = if entries == 0 {
            0
        } else {
            entries.div_ceil(BUCKET_SIZE).next_power_of_two()
        };
        ScoreTable {
            buckets: vec![[Slot::EMPTY; BUCKET_SIZE]; num_buckets],
            mask: num_buckets.saturating_sub(1),
            len: 0,
        }
    }

    fn index(&self, key: u64, depth: i32, can_null: bool) -> usize {
        let mixed = key
            ^ (depth as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
            ^ if can_null { 0xD6E8_FEB8_6659_FD93 } else { 0 };
        (mixed as usize) & self.mask
    }

    /// Total number of slots.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buckets.len() * BUCKET_SIZE
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Look up the stored window for a node.
    #[must_use]
    pub fn probe(&self, key: u64, depth: i32, can_null: bool) -> Option<Bounds> {
        if self.buckets.is_empty() {
            return None;
        }
        self.buckets[self.index(key, depth, can_null)]
            .iter()
            .find(|slot| slot.matches(key, depth, can_null))
            .map(|slot| slot.bounds)
    }

    /// Store a window for a node.
    ///
    /// Uses a replacement strategy that prefers:
    /// 1. The slot already holding this node
    /// 2. Empty slots
    /// 3. The slot searched to the shallowest depth
    pub fn store(&mut self, key: u64, depth: i32, can_null: bool, bounds: Bounds) {
        if self.buckets.is_empty() {
            return;
        }
        let index = self.index(key, depth, can_null);
        let bucket = &mut self.buckets[index];

        let target = match bucket.iter().position(|s| s.matches(key, depth, can_null)) {
            Some(i) => i,
            None => match bucket.iter().position(|s| !s.used) {
                Some(i) => {
                    self.len += 1;
                    i
                }
                None => bucket
                    .iter()
                    .enumerate()
                    .min_by_key(|(_, s)| s.depth)
                    .map_or(0, |(i, _)| i),
            },
        };

        bucket[target] = Slot {
            key,
            depth,
            can_null,
            used: true,
            bounds,
        };
    }

    /// Clear all entries from the table.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            *bucket = [Slot::EMPTY; BUCKET_SIZE];
        }
        self.len = 0;
    }
}

/// Direct-mapped table of the last cutoff move per position.
pub struct KillerTable {
    slots: Vec<Option<(u64, Move)>>,
    mask: usize,
}

impl KillerTable {
    /// Create a table with `entries` slots, rounded up to a power of two.
    /// Zero entries disables killers.
    #[must_use]
    pub fn new(entries: usize) -> Self {
        let size = if entries == 0 {
            0
        } else {
            entries.next_power_of_two()
        };
        KillerTable {
            slots: vec![None; size],
            mask: size.saturating_sub(1),
        }
    }

    #[must_use]
    pub fn get(&self, key: u64) -> Option<Move> {
        match self.slots.get((key as usize) & self.mask) {
            Some(Some((stored, mv))) if *stored == key => Some(*mv),
            _ => None,
        }
    }

    pub fn store(&mut self, key: u64, mv: Move) {
        if let Some(slot) = self.slots.get_mut((key as usize) & self.mask) {
            *slot = Some((key, mv));
        }
    }

    pub fn clear(&mut self) {
        self.slots.fill(None);
    }
}
