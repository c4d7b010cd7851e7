/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use std::collections::BTreeMap;

/// Tallies occurrences of values. Iteration and tie-breaking in `max` follow key order.
#[derive(Clone, Debug, Default)]
pub struct Counter<T: Ord> {
    counts: BTreeMap<T, usize>,
}

impl<T: Ord + Clone> Counter<T> {
    pub fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    pub fn inc(&mut self, value: T) {
        *self.counts.entry(value).or_insert(0) += 1;
    }

    pub fn count(&self, value: &T) -> usize {
        self.counts.get(value).copied().unwrap_or(0)
    }

    /// The most frequent value (the smallest one among ties), or `None` when nothing
    /// has been counted.
    pub fn max(&self) -> Option<T> {
        let mut best: Option<(&T, usize)> = None;
        for (value, &count) in &self.counts {
            match best {
                Some((_, best_count)) if best_count >= count => (),
                _ => best = Some((value, count)),
            }
        }
        best.map(|(value, _)| value.clone())
    }

    pub fn max_count(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// All values reaching the maximum count, in key order.
    pub fn argmax(&self) -> Vec<T> {
        let top = self.max_count();
        if top == 0 {
            return Vec::new();
        }
        self.counts
            .iter()
            .filter(|(_, &c)| c == top)
            .map(|(v, _)| v.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&T, &usize)> {
        self.counts.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_counter_has_no_max() {
        let counter: Counter<usize> = Counter::new();
        assert_eq!(counter.max(), None);
        assert!(counter.argmax().is_empty());
    }

    #[test]
    fn test_max_prefers_smallest_among_ties() {
        let mut counter = Counter::new();
        for v in vec![3, 1, 3, 1, 2] {
            counter.inc(v);
        }
        assert_eq!(counter.max(), Some(1));
        assert_eq!(counter.argmax(), vec![1, 3]);
        assert_eq!(counter.count(&2), 1);
        assert_eq!(counter.count(&9), 0);
    }
}
