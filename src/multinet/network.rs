/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use fxhash::FxHashMap;
use log::trace;
use rand::Rng;

use crate::multinet::algorithms::clustering::Clustering;
use crate::multinet::algorithms::degree::Degree;
use crate::multinet::algorithms::distance::ParetoDistance;
use crate::multinet::algorithms::neighborhood::Neighborhood;
use crate::multinet::algorithms::random_walks::RandomWalks;
use crate::multinet::algorithms::relevance::Relevance;
use crate::multinet::community::abacus::Abacus;
use crate::multinet::community::clique::MaxCliques;
use crate::multinet::community::label_propagation::LabelPropagation;
use crate::multinet::community::ml_cpm::MultilayerCliquePercolation;
use crate::multinet::community::modularity::Modularity;
use crate::multinet::components::{Actor, Edge, Layer, Node};
use crate::multinet::error::{MNError, MNResult};
use crate::multinet::graph_base::MultilayerGraphBase;
use crate::multinet::id_types::{ActorId, EdgeId, LayerId, NodeId};
use crate::multinet::indexed_ordered_set::IndexedOrderedSet;

/// In-memory multilayer network. Actors, layers, nodes and edges are each kept in an
/// `IndexedOrderedSet`, so they can be looked up by id, enumerated in id order and
/// sampled uniformly. Names are unique per actor and per layer.
///
/// Every ordered pair of layers carries a directedness flag; edges between two nodes
/// whose layer pair is undirected are stored once, under the normalized `EdgeId`.
pub struct MultilayerNetwork {
    actors: IndexedOrderedSet<ActorId, Actor>,
    layers: IndexedOrderedSet<LayerId, Layer>,
    nodes: IndexedOrderedSet<NodeId, Node>,
    edges: IndexedOrderedSet<EdgeId, Edge>,
    actor_names: FxHashMap<String, ActorId>,
    layer_names: FxHashMap<String, LayerId>,
    directed: FxHashMap<(LayerId, LayerId), bool>,
    next_actor_id: usize,
    next_layer_id: usize,
}

fn layer_pair(layer1: LayerId, layer2: LayerId) -> (LayerId, LayerId) {
    if layer1 <= layer2 {
        (layer1, layer2)
    } else {
        (layer2, layer1)
    }
}

impl MultilayerNetwork {
    pub fn new() -> Self {
        Self {
            actors: IndexedOrderedSet::new(),
            layers: IndexedOrderedSet::new(),
            nodes: IndexedOrderedSet::new(),
            edges: IndexedOrderedSet::new(),
            actor_names: FxHashMap::default(),
            layer_names: FxHashMap::default(),
            directed: FxHashMap::default(),
            next_actor_id: 0,
            next_layer_id: 0,
        }
    }

    pub fn add_actor(&mut self, name: &str) -> MNResult<ActorId> {
        if self.actor_names.contains_key(name) {
            return Err(MNError::duplicate(format!("actor {}", name)));
        }
        let actor_id = ActorId::from(self.next_actor_id);
        self.next_actor_id += 1;
        self.actors.insert(
            actor_id,
            Actor {
                actor_id,
                name: name.to_owned(),
            },
        );
        self.actor_names.insert(name.to_owned(), actor_id);
        Ok(actor_id)
    }

    pub fn get_or_add_actor(&mut self, name: &str) -> MNResult<ActorId> {
        match self.actor_names.get(name) {
            Some(actor_id) => Ok(*actor_id),
            None => self.add_actor(name),
        }
    }

    /// Adds a layer; `directed` applies to edges with both ends on this layer.
    pub fn add_layer(&mut self, name: &str, directed: bool) -> MNResult<LayerId> {
        if self.layer_names.contains_key(name) {
            return Err(MNError::duplicate(format!("layer {}", name)));
        }
        let layer_id = LayerId::from(self.next_layer_id);
        self.next_layer_id += 1;
        self.layers.insert(
            layer_id,
            Layer {
                layer_id,
                name: name.to_owned(),
            },
        );
        self.layer_names.insert(name.to_owned(), layer_id);
        self.directed.insert((layer_id, layer_id), directed);
        Ok(layer_id)
    }

    /// Sets the directedness of edges joining `layer1` and `layer2`. Not allowed once
    /// edges between the two layers exist.
    pub fn set_directed(&mut self, layer1: LayerId, layer2: LayerId, directed: bool) -> MNResult<()> {
        for layer_id in &[layer1, layer2] {
            if !self.layers.contains(layer_id) {
                return Err(MNError::not_found(format!("{}", layer_id)));
            }
        }
        if self.is_directed(layer1, layer2) != directed
            && !self.get_edges_between(layer1, layer2).is_empty()
        {
            return Err(MNError::invalid_parameter(format!(
                "cannot change directedness of {}-{}: edges already exist",
                layer1, layer2
            )));
        }
        self.directed.insert(layer_pair(layer1, layer2), directed);
        Ok(())
    }

    pub fn add_node(&mut self, actor_id: ActorId, layer_id: LayerId) -> MNResult<NodeId> {
        if !self.actors.contains(&actor_id) {
            return Err(MNError::not_found(format!("{}", actor_id)));
        }
        if !self.layers.contains(&layer_id) {
            return Err(MNError::not_found(format!("{}", layer_id)));
        }
        let node_id = NodeId::new(actor_id, layer_id);
        if !self.nodes.insert(node_id, Node::new(node_id)) {
            return Err(MNError::duplicate(format!("{}", node_id)));
        }
        Ok(node_id)
    }

    pub fn add_edge(&mut self, v1: NodeId, v2: NodeId) -> MNResult<EdgeId> {
        for node_id in &[v1, v2] {
            if !self.nodes.contains(node_id) {
                return Err(MNError::not_found(format!("{}", node_id)));
            }
        }
        let directed = self.is_directed(v1.layer, v2.layer);
        let edge_id = EdgeId::new(v1, v2, directed);
        if self.edges.contains(&edge_id) {
            return Err(MNError::duplicate(format!("{}", edge_id)));
        }
        self.edges.insert(edge_id, Edge { edge_id, directed });
        self.link(v1, v2, directed);
        trace!("added {}", edge_id);
        Ok(edge_id)
    }

    fn link(&mut self, v1: NodeId, v2: NodeId, directed: bool) {
        if let Some(node) = self.nodes.get_mut(&v1) {
            node.out_neighbors.insert(v2);
            if !directed {
                node.in_neighbors.insert(v2);
            }
        }
        if let Some(node) = self.nodes.get_mut(&v2) {
            node.in_neighbors.insert(v1);
            if !directed {
                node.out_neighbors.insert(v1);
            }
        }
    }

    fn unlink(&mut self, v1: NodeId, v2: NodeId, directed: bool) {
        if let Some(node) = self.nodes.get_mut(&v1) {
            node.out_neighbors.remove(&v2);
            if !directed {
                node.in_neighbors.remove(&v2);
            }
        }
        if let Some(node) = self.nodes.get_mut(&v2) {
            node.in_neighbors.remove(&v1);
            if !directed {
                node.out_neighbors.remove(&v1);
            }
        }
    }

    pub fn erase_edge(&mut self, v1: NodeId, v2: NodeId) -> MNResult<()> {
        let directed = self.is_directed(v1.layer, v2.layer);
        let edge_id = EdgeId::new(v1, v2, directed);
        if !self.edges.erase(&edge_id) {
            return Err(MNError::not_found(format!("{}", edge_id)));
        }
        self.unlink(edge_id.v1, edge_id.v2, directed);
        Ok(())
    }

    /// Removes the node together with every edge incident to it.
    pub fn erase_node(&mut self, node_id: NodeId) -> MNResult<()> {
        let (out_neighbors, in_neighbors) = match self.nodes.get(&node_id) {
            Some(node) => (
                node.out_neighbors.iter().cloned().collect::<Vec<NodeId>>(),
                node.in_neighbors.iter().cloned().collect::<Vec<NodeId>>(),
            ),
            None => return Err(MNError::not_found(format!("{}", node_id))),
        };
        for neighbor in out_neighbors {
            if self.get_edge(node_id, neighbor).is_some() {
                self.erase_edge(node_id, neighbor)?;
            }
        }
        for neighbor in in_neighbors {
            if self.get_edge(neighbor, node_id).is_some() {
                self.erase_edge(neighbor, node_id)?;
            }
        }
        self.nodes.erase(&node_id);
        Ok(())
    }

    /// Removes the actor and all of its nodes.
    pub fn erase_actor(&mut self, actor_id: ActorId) -> MNResult<()> {
        let name = match self.actors.get(&actor_id) {
            Some(actor) => actor.name.clone(),
            None => return Err(MNError::not_found(format!("{}", actor_id))),
        };
        for node_id in self.get_nodes_of_actor(actor_id) {
            self.erase_node(node_id)?;
        }
        self.actors.erase(&actor_id);
        self.actor_names.remove(&name);
        Ok(())
    }

    /// Removes the layer and all of its nodes.
    pub fn erase_layer(&mut self, layer_id: LayerId) -> MNResult<()> {
        let name = match self.layers.get(&layer_id) {
            Some(layer) => layer.name.clone(),
            None => return Err(MNError::not_found(format!("{}", layer_id))),
        };
        for node_id in self.get_nodes_in_layer(layer_id) {
            self.erase_node(node_id)?;
        }
        self.layers.erase(&layer_id);
        self.layer_names.remove(&name);
        self.directed
            .retain(|(l1, l2), _| *l1 != layer_id && *l2 != layer_id);
        Ok(())
    }

    pub fn get_actor_by_name(&self, name: &str) -> Option<&Actor> {
        self.actor_names
            .get(name)
            .and_then(|actor_id| self.actors.get(actor_id))
    }

    pub fn get_layer_by_name(&self, name: &str) -> Option<&Layer> {
        self.layer_names
            .get(name)
            .and_then(|layer_id| self.layers.get(layer_id))
    }

    pub fn get_actor_at_random<R: Rng + ?Sized>(&self, rng: &mut R) -> MNResult<&Actor> {
        self.actors.get_at_random(rng).map(|(_, actor)| actor)
    }

    /// Human-readable label of a node, `actor@layer`.
    pub fn node_label(&self, node_id: NodeId) -> MNResult<String> {
        let actor = self
            .get_actor(node_id.actor)
            .ok_or_else(|| MNError::not_found(format!("{}", node_id.actor)))?;
        let layer = self
            .get_layer(node_id.layer)
            .ok_or_else(|| MNError::not_found(format!("{}", node_id.layer)))?;
        Ok(format!("{}@{}", actor.name, layer.name))
    }

    pub fn count_edges_on_layer(&self, layer_id: LayerId) -> usize {
        self.get_edges_between(layer_id, layer_id).len()
    }
}

impl Default for MultilayerNetwork {
    fn default() -> Self {
        MultilayerNetwork::new()
    }
}

impl MultilayerGraphBase for MultilayerNetwork {
    type NodeType = Node;

    fn get_actors(&self) -> Box<dyn Iterator<Item = &Actor> + '_> {
        Box::new(self.actors.values())
    }
    fn get_layers(&self) -> Box<dyn Iterator<Item = &Layer> + '_> {
        Box::new(self.layers.values())
    }
    fn get_nodes(&self) -> Box<dyn Iterator<Item = &Node> + '_> {
        Box::new(self.nodes.values())
    }
    fn get_edges(&self) -> Box<dyn Iterator<Item = &Edge> + '_> {
        Box::new(self.edges.values())
    }
    fn get_actor(&self, actor_id: ActorId) -> Option<&Actor> {
        self.actors.get(&actor_id)
    }
    fn get_layer(&self, layer_id: LayerId) -> Option<&Layer> {
        self.layers.get(&layer_id)
    }
    fn get_node(&self, node_id: NodeId) -> Option<&Node> {
        self.nodes.get(&node_id)
    }
    fn get_edge(&self, v1: NodeId, v2: NodeId) -> Option<&Edge> {
        let directed = self.is_directed(v1.layer, v2.layer);
        self.edges.get(&EdgeId::new(v1, v2, directed))
    }
    fn get_node_at_random<R: Rng + ?Sized>(&self, rng: &mut R) -> MNResult<&Node> {
        self.nodes.get_at_random(rng).map(|(_, node)| node)
    }
    fn is_directed(&self, layer1: LayerId, layer2: LayerId) -> bool {
        self.directed
            .get(&layer_pair(layer1, layer2))
            .copied()
            .unwrap_or(false)
    }
    fn count_actors(&self) -> usize {
        self.actors.len()
    }
    fn count_layers(&self) -> usize {
        self.layers.len()
    }
    fn count_nodes(&self) -> usize {
        self.nodes.len()
    }
    fn count_edges(&self) -> usize {
        self.edges.len()
    }

    fn get_nodes_of_actor(&self, actor_id: ActorId) -> Vec<NodeId> {
        self.layers
            .keys()
            .map(|layer_id| NodeId::new(actor_id, *layer_id))
            .filter(|node_id| self.nodes.contains(node_id))
            .collect()
    }
}

impl Degree for MultilayerNetwork {}
impl Neighborhood for MultilayerNetwork {}
impl Relevance for MultilayerNetwork {}
impl Clustering for MultilayerNetwork {}
impl ParetoDistance for MultilayerNetwork {}
impl RandomWalks for MultilayerNetwork {}
impl MaxCliques for MultilayerNetwork {}
impl MultilayerCliquePercolation for MultilayerNetwork {}
impl LabelPropagation for MultilayerNetwork {}
impl Abacus for MultilayerNetwork {}
impl Modularity for MultilayerNetwork {}
