/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use roaring::RoaringBitmap;

/// A closed itemset with the ids of the transactions supporting it.
#[derive(Clone, Debug, PartialEq)]
pub struct ClosedItemset<I> {
    pub items: BTreeSet<I>,
    pub tids: RoaringBitmap,
}
impl<I> ClosedItemset<I> {
    pub fn support(&self) -> usize {
        self.tids.len() as usize
    }
}

struct Miner<'a, I> {
    items: &'a [(I, RoaringBitmap)],
    min_support: usize,
    min_size: usize,
    found: Vec<ClosedItemset<I>>,
}

impl<'a, I: Ord + Clone> Miner<'a, I> {
    /// every item contained in all of `tids`
    fn closure(&self, tids: &RoaringBitmap) -> Vec<usize> {
        (0..self.items.len())
            .filter(|i| tids.is_subset(&self.items[*i].1))
            .collect()
    }

    fn record(&mut self, closed: &[usize], tids: &RoaringBitmap) {
        if closed.len() >= self.min_size && tids.len() as usize >= self.min_support {
            self.found.push(ClosedItemset {
                items: closed.iter().map(|i| self.items[*i].0.clone()).collect(),
                tids: tids.clone(),
            });
        }
    }

    /// Prefix-preserving closure extension: every closed itemset is reached from
    /// exactly one parent, so no duplicate check is needed.
    fn extend(&mut self, closed: &[usize], tids: &RoaringBitmap, core: Option<usize>) {
        self.record(closed, tids);
        let start = core.map_or(0, |c| c + 1);
        for e in start..self.items.len() {
            if closed.contains(&e) {
                continue;
            }
            let extended = tids & &self.items[e].1;
            if (extended.len() as usize) < self.min_support || extended.is_empty() {
                continue;
            }
            let q = self.closure(&extended);
            let same_prefix = q
                .iter()
                .filter(|i| **i < e)
                .eq(closed.iter().filter(|i| **i < e));
            if same_prefix {
                self.extend(&q, &extended, Some(e));
            }
        }
    }
}

/// Closed itemsets supported by at least `min_support` transactions and holding at
/// least `min_size` items. Transaction ids are positions in `transactions`.
pub fn closed_frequent_itemsets<I: Ord + Clone>(
    transactions: &[BTreeSet<I>],
    min_support: usize,
    min_size: usize,
) -> Vec<ClosedItemset<I>> {
    let mut tidsets: BTreeMap<I, RoaringBitmap> = BTreeMap::new();
    for (tid, transaction) in transactions.iter().enumerate() {
        for item in transaction {
            tidsets
                .entry(item.clone())
                .or_insert_with(RoaringBitmap::new)
                .insert(tid as u32);
        }
    }
    let min_support = min_support.max(1);
    // infrequent items can never be part of a frequent itemset
    let items: Vec<(I, RoaringBitmap)> = tidsets
        .into_iter()
        .filter(|(_, tids)| tids.len() as usize >= min_support)
        .collect();
    let mut all: RoaringBitmap = RoaringBitmap::new();
    for tid in 0..transactions.len() {
        all.insert(tid as u32);
    }
    let mut miner = Miner {
        items: &items,
        min_support,
        min_size,
        found: Vec::new(),
    };
    if all.len() as usize >= min_support {
        let root = miner.closure(&all);
        miner.extend(&root, &all, None);
    }
    debug!(
        "{} closed itemsets over {} transactions and {} frequent items",
        miner.found.len(),
        transactions.len(),
        items.len()
    );
    miner.found
}
