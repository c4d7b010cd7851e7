/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use rand::Rng;

use crate::multinet::components::{Actor, Edge, EdgeMode, Layer, NodeBase};
use crate::multinet::error::MNResult;
use crate::multinet::id_types::{ActorId, LayerId, NodeId};

/// Minimum read-only surface shared by multilayer graphs. Measures and community
/// detection algorithms are written against this trait and attached to concrete
/// graphs through empty trait impls.
pub trait MultilayerGraphBase
where
    Self: Sized,
{
    type NodeType: NodeBase;

    fn get_actors(&self) -> Box<dyn Iterator<Item = &Actor> + '_>;
    fn get_layers(&self) -> Box<dyn Iterator<Item = &Layer> + '_>;
    fn get_nodes(&self) -> Box<dyn Iterator<Item = &Self::NodeType> + '_>;
    fn get_edges(&self) -> Box<dyn Iterator<Item = &Edge> + '_>;
    fn get_actor(&self, actor_id: ActorId) -> Option<&Actor>;
    fn get_layer(&self, layer_id: LayerId) -> Option<&Layer>;
    fn get_node(&self, node_id: NodeId) -> Option<&Self::NodeType>;
    /// Edge from `v1` to `v2`; for undirected layer pairs the orientation is irrelevant.
    fn get_edge(&self, v1: NodeId, v2: NodeId) -> Option<&Edge>;
    /// A node drawn uniformly at random.
    fn get_node_at_random<R: Rng + ?Sized>(&self, rng: &mut R) -> MNResult<&Self::NodeType>;
    fn is_directed(&self, layer1: LayerId, layer2: LayerId) -> bool;
    fn count_actors(&self) -> usize;
    fn count_layers(&self) -> usize;
    fn count_nodes(&self) -> usize;
    fn count_edges(&self) -> usize;

    fn has_actor(&self, actor_id: ActorId) -> bool {
        self.get_actor(actor_id).is_some()
    }
    fn has_layer(&self, layer_id: LayerId) -> bool {
        self.get_layer(layer_id).is_some()
    }
    fn has_node(&self, node_id: NodeId) -> bool {
        self.get_node(node_id).is_some()
    }
    fn get_actor_ids(&self) -> Vec<ActorId> {
        self.get_actors().map(|a| a.actor_id).collect()
    }
    fn get_layer_ids(&self) -> Vec<LayerId> {
        self.get_layers().map(|l| l.layer_id).collect()
    }
    /// The nodes through which `actor_id` takes part in each of its layers.
    fn get_nodes_of_actor(&self, actor_id: ActorId) -> Vec<NodeId> {
        self.get_layers()
            .map(|l| NodeId::new(actor_id, l.layer_id))
            .filter(|n| self.has_node(*n))
            .collect()
    }
    fn get_nodes_in_layer(&self, layer_id: LayerId) -> Vec<NodeId> {
        self.get_nodes()
            .map(|n| n.get_id())
            .filter(|n| n.layer == layer_id)
            .collect()
    }
    /// Neighbors of `node_id` in ascending order; empty when the node does not exist.
    fn neighbors(&self, node_id: NodeId, mode: EdgeMode) -> Vec<NodeId> {
        match self.get_node(node_id) {
            Some(node) => node.get_neighbors(mode).cloned().collect(),
            None => Vec::new(),
        }
    }
    fn get_edges_between(&self, layer1: LayerId, layer2: LayerId) -> Vec<Edge> {
        self.get_edges()
            .filter(|e| {
                let (l1, l2) = (e.v1().layer, e.v2().layer);
                (l1 == layer1 && l2 == layer2) || (l1 == layer2 && l2 == layer1)
            })
            .cloned()
            .collect()
    }
}
