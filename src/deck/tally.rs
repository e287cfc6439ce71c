//! Labelled run-length sequence.
//!
//! `Tally` counts copies per label (e.g. "Potato" x3, "Carrot" x5) and
//! exposes them as the expanded list `Potato, Potato, Potato, Carrot, ...`.
//! Labels keep first-insertion order.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use super::sequence::{resolve_index, LogicalSequence};
use crate::error::{Error, Result};

/// Insertion-ordered counts per label.
#[derive(Clone, Debug)]
pub struct Tally<K> {
    order: Vec<K>,
    counts: FxHashMap<K, u32>,
}

impl<K: Clone + Eq + Hash> Tally<K> {
    /// Create an empty tally.
    #[must_use]
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            counts: FxHashMap::default(),
        }
    }

    /// Add `n` copies of `label`. Adding zero copies is a no-op.
    pub fn add(&mut self, label: K, n: u32) {
        if n == 0 {
            return;
        }
        match self.counts.get_mut(&label) {
            Some(count) => *count += n,
            None => {
                self.order.push(label.clone());
                self.counts.insert(label, n);
            }
        }
    }

    /// Copies of `label` currently held.
    #[must_use]
    pub fn count(&self, label: &K) -> u32 {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }

    fn locate(&self, position: usize) -> Option<usize> {
        let mut before = 0usize;
        for (i, label) in self.order.iter().enumerate() {
            let count = self.count(label) as usize;
            if position < before + count {
                return Some(i);
            }
            before += count;
        }
        None
    }

    /// Remove one copy at a logical index, dropping the label with its last copy.
    pub fn remove_at(&mut self, index: i64) -> Result<K> {
        let length = self.length();
        let position = resolve_index(index, length)?;
        let slot = self
            .locate(position)
            .ok_or(Error::OutOfRange { index, length })?;

        let label = self.order[slot].clone();
        match self.counts.get_mut(&label) {
            Some(count) if *count > 1 => *count -= 1,
            _ => {
                self.counts.remove(&label);
                self.order.remove(slot);
            }
        }
        Ok(label)
    }
}

impl<K: Clone + Eq + Hash> Default for Tally<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone + Eq + Hash> FromIterator<(K, u32)> for Tally<K> {
    fn from_iter<I: IntoIterator<Item = (K, u32)>>(iter: I) -> Self {
        let mut tally = Self::new();
        for (label, n) in iter {
            tally.add(label, n);
        }
        tally
    }
}

impl<K: Clone + Eq + Hash> LogicalSequence for Tally<K> {
    type Item = K;

    fn length(&self) -> usize {
        self.counts.values().map(|&c| c as usize).sum()
    }

    fn at(&self, index: i64) -> Result<K> {
        let length = self.length();
        let position = resolve_index(index, length)?;
        self.locate(position)
            .map(|slot| self.order[slot].clone())
            .ok_or(Error::OutOfRange { index, length })
    }
}
