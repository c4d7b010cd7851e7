/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use rand::prelude::*;

use crate::multinet::error::{MNError, MNResult};

const LEVEL_PROBABILITY: f64 = 0.5;
const DEFAULT_LEVEL_SEED: u64 = 0x5eed_5ee1;

/// Handle of an entry inside the arena. `None` stands for the header when used as a
/// position, and for the end of the list when used as a forward pointer.
type Handle = Option<usize>;

struct Entry<K, V> {
    key: K,
    value: V,
    forward: Vec<Handle>,
    /// `link_length[i]` is the rank distance between this entry and `forward[i]`.
    /// The end of the list has rank `len + 1`.
    link_length: Vec<usize>,
}

/// An ordered map implemented as an indexable skip list. Entries can be accessed:
/// 1. by key, in (expected) logarithmic time;
/// 2. by position in key order, in (expected) logarithmic time, using the per-level
///    skip lengths;
/// 3. uniformly at random, which is a positional lookup at a random index;
/// 4. by in-order iteration.
///
/// Entries live in an arena and are linked through integer handles; freed slots are
/// recycled. Level heights are drawn from an owned, seeded generator so that the shape
/// of the list (and therefore any traversal cost) is reproducible.
pub struct IndexedOrderedSet<K, V> {
    slots: Vec<Option<Entry<K, V>>>,
    free_slots: Vec<usize>,
    head_forward: Vec<Handle>,
    head_link_length: Vec<usize>,
    capacity: usize,
    num_entries: usize,
    max_level: usize,
    level: usize,
    level_rng: StdRng,
}

impl<K: Ord, V> IndexedOrderedSet<K, V> {
    pub fn new() -> Self {
        Self::with_capacity_and_seed(1, DEFAULT_LEVEL_SEED)
    }

    /// Creates a set tuned for `start_capacity` entries; it still grows beyond that.
    pub fn with_capacity(start_capacity: usize) -> Self {
        Self::with_capacity_and_seed(start_capacity, DEFAULT_LEVEL_SEED)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_capacity_and_seed(1, seed)
    }

    pub fn with_capacity_and_seed(start_capacity: usize, seed: u64) -> Self {
        let capacity = start_capacity.max(1);
        let max_level = (capacity as f64).log2().ceil() as usize;
        Self {
            slots: Vec::new(),
            free_slots: Vec::new(),
            head_forward: vec![None; max_level + 1],
            head_link_length: vec![0; max_level + 1],
            capacity,
            num_entries: 0,
            max_level,
            level: 0,
            level_rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn len(&self) -> usize {
        self.num_entries
    }

    pub fn is_empty(&self) -> bool {
        self.num_entries == 0
    }

    fn entry(&self, handle: usize) -> &Entry<K, V> {
        match &self.slots[handle] {
            Some(entry) => entry,
            None => unreachable!("skip list handle {} points to a free slot", handle),
        }
    }

    fn entry_mut(&mut self, handle: usize) -> &mut Entry<K, V> {
        match &mut self.slots[handle] {
            Some(entry) => entry,
            None => unreachable!("skip list handle {} points to a free slot", handle),
        }
    }

    fn forward(&self, at: Handle, lvl: usize) -> Handle {
        match at {
            None => self.head_forward[lvl],
            Some(h) => self.entry(h).forward[lvl],
        }
    }

    fn link_length(&self, at: Handle, lvl: usize) -> usize {
        match at {
            None => self.head_link_length[lvl],
            Some(h) => self.entry(h).link_length[lvl],
        }
    }

    fn set_link(&mut self, at: Handle, lvl: usize, forward: Handle, link_length: usize) {
        match at {
            None => {
                self.head_forward[lvl] = forward;
                self.head_link_length[lvl] = link_length;
            }
            Some(h) => {
                let entry = self.entry_mut(h);
                entry.forward[lvl] = forward;
                entry.link_length[lvl] = link_length;
            }
        }
    }

    fn random_level(&mut self) -> usize {
        let mut lvl = 0;
        while lvl < self.max_level && self.level_rng.gen::<f64>() < LEVEL_PROBABILITY {
            lvl += 1;
        }
        lvl
    }

    /// Walks down from the top level, returning for every level the last position whose
    /// key is smaller than `key`, together with the rank of that position.
    fn find_predecessors(&self, key: &K) -> (Vec<Handle>, Vec<usize>) {
        let mut update: Vec<Handle> = vec![None; self.level + 1];
        let mut ranks: Vec<usize> = vec![0; self.level + 1];
        let mut x: Handle = None;
        let mut rank: usize = 0;
        for i in (0..=self.level).rev() {
            while let Some(next) = self.forward(x, i) {
                if self.entry(next).key < *key {
                    rank += self.link_length(x, i);
                    x = Some(next);
                } else {
                    break;
                }
            }
            update[i] = x;
            ranks[i] = rank;
        }
        (update, ranks)
    }

    fn find(&self, key: &K) -> Option<usize> {
        let mut x: Handle = None;
        for i in (0..=self.level).rev() {
            while let Some(next) = self.forward(x, i) {
                if self.entry(next).key < *key {
                    x = Some(next);
                } else {
                    break;
                }
            }
        }
        match self.forward(x, 0) {
            Some(h) if self.entry(h).key == *key => Some(h),
            _ => None,
        }
    }

    fn allocate(&mut self, entry: Entry<K, V>) -> usize {
        match self.free_slots.pop() {
            Some(h) => {
                self.slots[h] = Some(entry);
                h
            }
            None => {
                self.slots.push(Some(entry));
                self.slots.len() - 1
            }
        }
    }

    /// Inserts `value` under `key`. Returns true if the key was not present; otherwise
    /// the stored value is replaced and false is returned.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let (mut update, mut ranks) = self.find_predecessors(&key);
        if let Some(h) = self.forward(update[0], 0) {
            if self.entry(h).key == key {
                self.entry_mut(h).value = value;
                return false;
            }
        }

        self.num_entries += 1;
        if self.num_entries > self.capacity {
            self.capacity *= 2;
            self.max_level += 1;
            self.head_forward.push(None);
            self.head_link_length.push(0);
        }

        let lvl = self.random_level();
        if lvl > self.level {
            for _ in self.level + 1..=lvl {
                update.push(None);
                ranks.push(0);
            }
            self.level = lvl;
        }

        let rank = ranks[0] + 1;
        let end_rank = self.num_entries + 1;
        let mut forward: Vec<Handle> = Vec::with_capacity(lvl + 1);
        let mut link_length: Vec<usize> = Vec::with_capacity(lvl + 1);
        for i in 0..=lvl {
            let next = self.forward(update[i], i);
            forward.push(next);
            link_length.push(match next {
                // the successor moves one rank further back once this entry is in
                None => end_rank - rank,
                Some(_) => ranks[i] + self.link_length(update[i], i) + 1 - rank,
            });
        }
        let handle = self.allocate(Entry {
            key,
            value,
            forward,
            link_length,
        });
        for i in 0..=lvl {
            self.set_link(update[i], i, Some(handle), rank - ranks[i]);
        }
        for i in lvl + 1..=self.level {
            let next = self.forward(update[i], i);
            let length = self.link_length(update[i], i) + 1;
            self.set_link(update[i], i, next, length);
        }
        true
    }

    /// Removes `key`. Returns true if an entry was removed.
    pub fn erase(&mut self, key: &K) -> bool {
        let (update, _) = self.find_predecessors(key);
        let target = match self.forward(update[0], 0) {
            Some(h) if self.entry(h).key == *key => h,
            _ => return false,
        };
        let target_height = self.entry(target).forward.len();
        for i in 0..=self.level {
            let next = self.forward(update[i], i);
            let length = self.link_length(update[i], i);
            if i < target_height && next == Some(target) {
                let (target_next, target_length) = {
                    let entry = self.entry(target);
                    (entry.forward[i], entry.link_length[i])
                };
                self.set_link(update[i], i, target_next, length + target_length - 1);
            } else {
                self.set_link(update[i], i, next, length - 1);
            }
        }
        self.slots[target] = None;
        self.free_slots.push(target);
        self.num_entries -= 1;
        while self.level > 0 && self.head_forward[self.level].is_none() {
            self.level -= 1;
        }
        true
    }

    pub fn contains(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(move |h| &self.entry(h).value)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        match self.find(key) {
            Some(h) => Some(&mut self.entry_mut(h).value),
            None => None,
        }
    }

    /// Position of `key` in key order, if present.
    pub fn get_index(&self, key: &K) -> Option<usize> {
        let (update, ranks) = self.find_predecessors(key);
        match self.forward(update[0], 0) {
            Some(h) if self.entry(h).key == *key => Some(ranks[0]),
            _ => None,
        }
    }

    /// Entry at position `pos` in key order.
    pub fn get_at_index(&self, pos: usize) -> MNResult<(&K, &V)> {
        if pos >= self.num_entries {
            return Err(MNError::not_found(format!(
                "index {} out of bounds (size {})",
                pos, self.num_entries
            )));
        }
        let target = pos + 1;
        let mut x: Handle = None;
        let mut so_far: usize = 0;
        for i in (0..=self.level).rev() {
            while let Some(next) = self.forward(x, i) {
                let length = self.link_length(x, i);
                if so_far + length <= target {
                    so_far += length;
                    x = Some(next);
                } else {
                    break;
                }
            }
        }
        let h = x.ok_or_else(MNError::err_none)?;
        let entry = self.entry(h);
        Ok((&entry.key, &entry.value))
    }

    /// Entry drawn uniformly at random from the current members.
    pub fn get_at_random<R: Rng + ?Sized>(&self, rng: &mut R) -> MNResult<(&K, &V)> {
        if self.num_entries == 0 {
            return Err(MNError::not_found("random element of an empty set"));
        }
        self.get_at_index(rng.gen_range(0, self.num_entries))
    }

    pub fn first(&self) -> Option<(&K, &V)> {
        self.head_forward[0].map(|h| {
            let entry = self.entry(h);
            (&entry.key, &entry.value)
        })
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            set: self,
            current: self.head_forward[0],
            remaining: self.num_entries,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    pub fn clear(&mut self) {
        let seed = self.level_rng.gen::<u64>();
        *self = Self::with_capacity_and_seed(1, seed);
    }
}

impl<K: Ord, V> Default for IndexedOrderedSet<K, V> {
    fn default() -> Self {
        IndexedOrderedSet::new()
    }
}

impl<K: Ord, V> std::iter::FromIterator<(K, V)> for IndexedOrderedSet<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = IndexedOrderedSet::new();
        for (k, v) in iter {
            set.insert(k, v);
        }
        set
    }
}

pub struct Iter<'a, K, V> {
    set: &'a IndexedOrderedSet<K, V>,
    current: Handle,
    remaining: usize,
}

impl<'a, K: Ord, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let h = self.current?;
        let entry = self.set.entry(h);
        self.current = entry.forward[0];
        self.remaining -= 1;
        Some((&entry.key, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, K: Ord, V> IntoIterator for &'a IndexedOrderedSet<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn check_against_model(set: &IndexedOrderedSet<u32, u32>, model: &BTreeMap<u32, u32>) {
        assert_eq!(set.len(), model.len());
        for (i, (k, v)) in model.iter().enumerate() {
            let (sk, sv) = set.get_at_index(i).unwrap();
            assert_eq!((sk, sv), (k, v));
            assert_eq!(set.get(k), Some(v));
            assert_eq!(set.get_index(k), Some(i));
        }
        assert!(set.get_at_index(model.len()).is_err());
        let in_order: Vec<(u32, u32)> = set.iter().map(|(k, v)| (*k, *v)).collect();
        let expected: Vec<(u32, u32)> = model.iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(in_order, expected);
    }

    #[test]
    fn test_insert_update_erase() {
        let mut set: IndexedOrderedSet<u32, &str> = IndexedOrderedSet::new();
        assert!(set.is_empty());
        assert!(set.insert(5, "five"));
        assert!(set.insert(1, "one"));
        assert!(set.insert(3, "three"));
        assert!(!set.insert(3, "THREE"));
        assert_eq!(set.len(), 3);
        assert_eq!(set.get(&3), Some(&"THREE"));
        assert_eq!(set.get(&4), None);
        assert_eq!(*set.get_at_index(0).unwrap().0, 1);
        assert_eq!(*set.get_at_index(2).unwrap().0, 5);
        assert!(set.erase(&1));
        assert!(!set.erase(&1));
        assert_eq!(*set.get_at_index(0).unwrap().0, 3);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_clear_then_reuse() {
        let mut set: IndexedOrderedSet<u32, u32> = IndexedOrderedSet::new();
        for k in 0..50 {
            set.insert(k, k * 2);
        }
        set.clear();
        assert!(set.is_empty());
        assert!(set.first().is_none());
        assert!(set.get_at_index(0).is_err());
        assert_eq!(set.get(&7), None);

        let mut model = BTreeMap::new();
        for k in &[9, 2, 40, 17] {
            set.insert(*k, *k + 1);
            model.insert(*k, *k + 1);
        }
        check_against_model(&set, &model);
    }

    #[test]
    fn test_out_of_bounds_is_not_found() {
        let set: IndexedOrderedSet<u32, ()> = IndexedOrderedSet::new();
        match set.get_at_index(0) {
            Err(MNError::NotFound(_)) => (),
            _ => panic!("expected NotFound"),
        }
        let mut rng = StdRng::seed_from_u64(1);
        assert!(set.get_at_random(&mut rng).is_err());
    }

    #[test]
    fn test_random_operations_match_btreemap() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut set: IndexedOrderedSet<u32, u32> = IndexedOrderedSet::new();
        let mut model: BTreeMap<u32, u32> = BTreeMap::new();
        for step in 0..3000u32 {
            let key = rng.gen_range(0, 500);
            if rng.gen::<f64>() < 0.65 {
                assert_eq!(set.insert(key, step), model.insert(key, step).is_none());
            } else {
                assert_eq!(set.erase(&key), model.remove(&key).is_some());
            }
            if step % 250 == 0 {
                check_against_model(&set, &model);
            }
        }
        check_against_model(&set, &model);
        let keys: Vec<u32> = model.keys().cloned().collect();
        for key in keys {
            assert!(set.erase(&key));
        }
        assert!(set.is_empty());
        assert!(set.first().is_none());
        assert!(set.insert(7, 7));
        assert_eq!(*set.get_at_index(0).unwrap().1, 7);
    }

    #[test]
    fn test_with_capacity_preallocates_levels() {
        let mut set: IndexedOrderedSet<usize, usize> = IndexedOrderedSet::with_capacity(1024);
        for i in (0..2000).rev() {
            set.insert(i, i * 2);
        }
        for i in 0..2000 {
            assert_eq!(set.get_at_index(i).unwrap(), (&i, &(i * 2)));
        }
    }

    #[test]
    fn test_get_at_random_is_roughly_uniform() {
        let mut set: IndexedOrderedSet<usize, ()> = IndexedOrderedSet::new();
        for i in 0..10 {
            set.insert(i, ());
        }
        let mut rng = StdRng::seed_from_u64(7);
        let mut counts = vec![0usize; 10];
        let trials = 100_000;
        for _ in 0..trials {
            let (k, _) = set.get_at_random(&mut rng).unwrap();
            counts[*k] += 1;
        }
        for c in counts {
            let freq = c as f64 / trials as f64;
            assert!((freq - 0.1).abs() < 0.01, "frequency {} too far from 0.1", freq);
        }
    }
}
