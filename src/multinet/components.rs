/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use std::collections::BTreeSet;
use std::fmt;

use itertools::Itertools;

use crate::multinet::id_types::{ActorId, EdgeId, LayerId, NodeId};

/// Selects which incident edges of a node are considered. For undirected edges the
/// three modes coincide.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EdgeMode {
    In,
    Out,
    InOut,
}

/// A named entity which may take part in any number of layers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Actor {
    pub actor_id: ActorId,
    pub name: String,
}
impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A single relation of the network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layer {
    pub layer_id: LayerId,
    pub name: String,
}
impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub edge_id: EdgeId,
    pub directed: bool,
}
impl Edge {
    pub fn v1(&self) -> NodeId {
        self.edge_id.v1
    }
    pub fn v2(&self) -> NodeId {
        self.edge_id.v2
    }
}

pub trait NodeBase
where
    Self: Sized,
{
    fn get_id(&self) -> NodeId;
    fn get_neighbors(&self, mode: EdgeMode) -> Box<dyn Iterator<Item = &NodeId> + '_>;
    fn has_neighbor(&self, other: NodeId, mode: EdgeMode) -> bool;

    /// number of distinct neighbors reachable under `mode`
    fn degree(&self, mode: EdgeMode) -> usize {
        self.get_neighbors(mode).count()
    }
    fn get_actor(&self) -> ActorId {
        self.get_id().actor
    }
    fn get_layer(&self) -> LayerId {
        self.get_id().layer
    }
}

/// An actor as it appears on one layer. Keeps its adjacency in both directions; an
/// undirected edge is recorded on both sides of both endpoints.
#[derive(Clone, Debug)]
pub struct Node {
    pub node_id: NodeId,
    pub out_neighbors: BTreeSet<NodeId>,
    pub in_neighbors: BTreeSet<NodeId>,
}
impl Node {
    pub fn new(node_id: NodeId) -> Self {
        Self {
            node_id,
            out_neighbors: BTreeSet::new(),
            in_neighbors: BTreeSet::new(),
        }
    }
}
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.node_id == other.node_id
    }
}
impl Eq for Node {}
impl NodeBase for Node {
    fn get_id(&self) -> NodeId {
        self.node_id
    }
    fn get_neighbors(&self, mode: EdgeMode) -> Box<dyn Iterator<Item = &NodeId> + '_> {
        match mode {
            EdgeMode::Out => Box::new(self.out_neighbors.iter()),
            EdgeMode::In => Box::new(self.in_neighbors.iter()),
            // both sides are sorted, so a merge yields the sorted union
            EdgeMode::InOut => Box::new(
                self.out_neighbors
                    .iter()
                    .merge(self.in_neighbors.iter())
                    .dedup(),
            ),
        }
    }
    fn has_neighbor(&self, other: NodeId, mode: EdgeMode) -> bool {
        match mode {
            EdgeMode::Out => self.out_neighbors.contains(&other),
            EdgeMode::In => self.in_neighbors.contains(&other),
            EdgeMode::InOut => {
                self.out_neighbors.contains(&other) || self.in_neighbors.contains(&other)
            }
        }
    }
}
