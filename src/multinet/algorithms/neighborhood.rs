/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use std::collections::BTreeSet;

use crate::multinet::algorithms::degree::Degree;
use crate::multinet::components::{EdgeMode, NodeBase};
use crate::multinet::error::MNResult;
use crate::multinet::id_types::{ActorId, LayerId};

pub trait Neighborhood: Degree {
    /// Actors adjacent to `actor_id` through a node on one of `layers`.
    fn neighbors_on(
        &self,
        actor_id: ActorId,
        layers: &[LayerId],
        mode: EdgeMode,
    ) -> MNResult<BTreeSet<ActorId>> {
        Ok(self.split_neighbors(actor_id, layers, mode)?.0)
    }

    /// Like `neighbors_on`, minus the actors that are also adjacent on some other layer.
    fn xneighbors(
        &self,
        actor_id: ActorId,
        layers: &[LayerId],
        mode: EdgeMode,
    ) -> MNResult<BTreeSet<ActorId>> {
        let (selected, others) = self.split_neighbors(actor_id, layers, mode)?;
        Ok(selected.difference(&others).cloned().collect())
    }

    fn split_neighbors(
        &self,
        actor_id: ActorId,
        layers: &[LayerId],
        mode: EdgeMode,
    ) -> MNResult<(BTreeSet<ActorId>, BTreeSet<ActorId>)> {
        self.check_actor(actor_id)?;
        let mut selected: BTreeSet<ActorId> = BTreeSet::new();
        let mut others: BTreeSet<ActorId> = BTreeSet::new();
        for node_id in self.get_nodes_of_actor(actor_id) {
            if let Some(node) = self.get_node(node_id) {
                for neighbor in node.get_neighbors(mode) {
                    if layers.contains(&neighbor.layer) {
                        selected.insert(neighbor.actor);
                    } else {
                        others.insert(neighbor.actor);
                    }
                }
            }
        }
        Ok((selected, others))
    }

    /// Share of the actor's adjacencies on `layers` that repeat an already seen neighbor.
    fn connective_redundancy(
        &self,
        actor_id: ActorId,
        layers: &[LayerId],
        mode: EdgeMode,
    ) -> MNResult<f64> {
        let degree = self.degree(actor_id, layers, mode)?;
        if degree == 0 {
            return Ok(0.0);
        }
        let num_neighbors = self.neighbors_on(actor_id, layers, mode)?.len();
        Ok(1.0 - num_neighbors as f64 / degree as f64)
    }
}
