/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use std::collections::{BTreeMap, BTreeSet};

use log::info;
use rand::Rng;

use crate::multinet::community::community::{Community, CommunityStructure};
use crate::multinet::community::itemsets::closed_frequent_itemsets;
use crate::multinet::community::label_propagation::LabelPropagation;
use crate::multinet::error::MNResult;
use crate::multinet::id_types::{ActorId, LayerId, NodeId};
use crate::multinet::search_problem::AbacusParams;

/// An item is the membership of an actor in one single-layer community.
type Item = (LayerId, usize);

pub trait Abacus: LabelPropagation {
    /// ABACUS: single-layer communities are found on every layer with label propagation,
    /// each actor becomes the transaction of its (layer, community) memberships, and every
    /// closed itemset shared by at least `min_actors` actors and spanning at least
    /// `min_layers` items yields a community made of those actors' nodes on the
    /// itemset's layers.
    fn abacus<R: Rng>(&self, rng: &mut R, params: &AbacusParams) -> MNResult<CommunityStructure> {
        params.validate()?;
        let actors: Vec<ActorId> = self.get_actor_ids();
        let tid_of: BTreeMap<ActorId, usize> =
            actors.iter().enumerate().map(|(i, a)| (*a, i)).collect();
        let mut transactions: Vec<BTreeSet<Item>> = vec![BTreeSet::new(); actors.len()];
        for layer_id in self.get_layer_ids() {
            let labels = self.label_propagation_labels(layer_id, rng, &params.label_propagation)?;
            for (node_id, label) in labels {
                if let Some(tid) = tid_of.get(&node_id.actor) {
                    transactions[*tid].insert((layer_id, label));
                }
            }
        }

        let itemsets = closed_frequent_itemsets(&transactions, params.min_actors, params.min_layers);
        let mut communities: BTreeSet<Community> = BTreeSet::new();
        for itemset in &itemsets {
            let layers: BTreeSet<LayerId> = itemset.items.iter().map(|(l, _)| *l).collect();
            let mut community = Community::new();
            for tid in itemset.tids.iter() {
                let actor_id = actors[tid as usize];
                for layer_id in &layers {
                    let node_id = NodeId::new(actor_id, *layer_id);
                    if self.has_node(node_id) {
                        community.add_node(node_id);
                    }
                }
            }
            if !community.is_empty() {
                communities.insert(community);
            }
        }
        info!(
            "abacus: {} closed itemsets, {} communities",
            itemsets.len(),
            communities.len()
        );
        Ok(communities.into_iter().collect())
    }
}
