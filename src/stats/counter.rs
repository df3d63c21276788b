//! Frequency counters with deterministic tie breaking.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use serde::{Serialize, Serializer};

use crate::model::round_coordinate;

#[derive(Debug, Clone, Copy)]
struct Tally {
    count: usize,
    first_seen: usize,
}

/// Counts occurrences of values.
///
/// The most common value is the one with the highest count; among equal
/// counts the value that was added first wins.
#[derive(Debug, Clone)]
pub struct ObjectCounter<K: Eq + Hash> {
    tallies: HashMap<K, Tally>,
    next_order: usize,
}

impl<K: Eq + Hash> ObjectCounter<K> {
    pub fn new() -> Self {
        Self {
            tallies: HashMap::new(),
            next_order: 0,
        }
    }

    /// Count one occurrence.
    pub fn add(&mut self, key: K) {
        self.add_n(key, 1);
    }

    /// Count `n` occurrences at once.
    pub fn add_n(&mut self, key: K, n: usize) {
        let order = self.next_order;
        let tally = self.tallies.entry(key).or_insert_with(|| Tally {
            count: 0,
            first_seen: order,
        });
        if tally.first_seen == order {
            self.next_order += 1;
        }
        tally.count += n;
    }

    /// Number of occurrences of `key` (0 if never seen).
    pub fn get<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.tallies.get(key).map(|t| t.count).unwrap_or(0)
    }

    /// The most common value, ties broken by first occurrence.
    pub fn most_common(&self) -> Option<&K> {
        self.tallies
            .iter()
            .max_by(|(_, a), (_, b)| {
                a.count
                    .cmp(&b.count)
                    .then_with(|| b.first_seen.cmp(&a.first_seen))
            })
            .map(|(key, _)| key)
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.tallies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tallies.is_empty()
    }

    /// Iterate over `(value, count)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.tallies.iter().map(|(k, t)| (k, t.count))
    }
}

impl<K: Eq + Hash> Default for ObjectCounter<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialized as `[value, count]` pairs in first-seen order.
impl<K: Eq + Hash + Serialize> Serialize for ObjectCounter<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut entries: Vec<(&K, &Tally)> = self.tallies.iter().collect();
        entries.sort_by_key(|(_, tally)| tally.first_seen);
        serializer.collect_seq(entries.into_iter().map(|(key, tally)| (key, tally.count)))
    }
}

/// Counts floats at coordinate precision.
#[derive(Debug, Clone, Default)]
pub struct FloatCounter {
    inner: ObjectCounter<u32>,
}

impl FloatCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence; non-finite values are ignored.
    pub fn add(&mut self, value: f32) {
        if value.is_finite() {
            // `+ 0.0` folds -0.0 into 0.0
            self.inner.add((round_coordinate(value) + 0.0).to_bits());
        }
    }

    pub fn most_common(&self) -> Option<f32> {
        self.inner.most_common().map(|bits| f32::from_bits(*bits))
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}
