/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use std::collections::BTreeMap;

use rand::prelude::*;

use crate::multinet::components::{EdgeMode, NodeBase};
use crate::multinet::error::{MNError, MNResult};
use crate::multinet::graph_base::MultilayerGraphBase;
use crate::multinet::id_types::{ActorId, LayerId, NodeId};

const ROW_SUM_TOLERANCE: f64 = 1e-6;

/// Random walker over a multilayer graph. At each step it either teleports to a
/// uniformly random node, or draws the next layer from the current layer's row of
/// `transitions`: staying on the layer moves to a random out-neighbor there, switching
/// layers moves to the same actor's node on the new layer. When the chosen move is not
/// possible the walker stays put and `action()` is false.
pub struct Walker<'a, G: MultilayerGraphBase, R: Rng> {
    graph: &'a G,
    teleportation: f64,
    transitions: Vec<Vec<f64>>,
    layers: Vec<LayerId>,
    layer_index: BTreeMap<LayerId, usize>,
    rng: R,
    current: NodeId,
    just_teleported: bool,
    no_action: bool,
}

impl<'a, G: MultilayerGraphBase, R: Rng> Walker<'a, G, R> {
    pub fn new(
        graph: &'a G,
        teleportation: f64,
        transitions: Vec<Vec<f64>>,
        mut rng: R,
    ) -> MNResult<Self> {
        if !(0.0..=1.0).contains(&teleportation) {
            return Err(MNError::invalid_parameter(format!(
                "teleportation probability {} not in [0, 1]",
                teleportation
            )));
        }
        let layers = graph.get_layer_ids();
        if transitions.len() != layers.len() {
            return Err(MNError::invalid_parameter(format!(
                "transition matrix has {} rows, expected {}",
                transitions.len(),
                layers.len()
            )));
        }
        for row in &transitions {
            if row.len() != layers.len() || row.iter().any(|p| *p < 0.0) {
                return Err(MNError::invalid_parameter("malformed transition matrix row"));
            }
            if (row.iter().sum::<f64>() - 1.0).abs() > ROW_SUM_TOLERANCE {
                return Err(MNError::invalid_parameter(
                    "transition matrix rows must sum to 1",
                ));
            }
        }
        let current = graph.get_node_at_random(&mut rng)?.get_id();
        let layer_index = layers.iter().enumerate().map(|(i, l)| (*l, i)).collect();
        Ok(Self {
            graph,
            teleportation,
            transitions,
            layers,
            layer_index,
            rng,
            current,
            just_teleported: true,
            no_action: true,
        })
    }

    pub fn now(&self) -> NodeId {
        self.current
    }

    pub fn teleported(&self) -> bool {
        self.just_teleported
    }

    pub fn action(&self) -> bool {
        !self.no_action
    }

    fn draw_layer(&mut self, from: usize) -> LayerId {
        let u: f64 = self.rng.gen();
        let mut cumulative = 0.0;
        for (i, p) in self.transitions[from].iter().enumerate() {
            cumulative += p;
            if u < cumulative {
                return self.layers[i];
            }
        }
        // rounding left u above the last cumulative value
        self.layers[self.layers.len() - 1]
    }

    pub fn next(&mut self) -> MNResult<NodeId> {
        if self.rng.gen::<f64>() < self.teleportation {
            self.current = self.graph.get_node_at_random(&mut self.rng)?.get_id();
            self.just_teleported = true;
            self.no_action = false;
            return Ok(self.current);
        }
        let from = *self
            .layer_index
            .get(&self.current.layer)
            .ok_or_else(|| MNError::not_found(format!("{}", self.current.layer)))?;
        let new_layer = self.draw_layer(from);
        let next = if new_layer == self.current.layer {
            let node = self
                .graph
                .get_node(self.current)
                .ok_or_else(|| MNError::not_found(format!("{}", self.current)))?;
            let on_layer = |n: &&NodeId| n.layer == new_layer;
            let count = node.get_neighbors(EdgeMode::Out).filter(on_layer).count();
            if count == 0 {
                None
            } else {
                let pick = self.rng.gen_range(0, count);
                node.get_neighbors(EdgeMode::Out).filter(on_layer).nth(pick).cloned()
            }
        } else {
            let target = NodeId::new(self.current.actor, new_layer);
            if self.graph.has_node(target) {
                Some(target)
            } else {
                None
            }
        };
        match next {
            Some(node_id) => {
                self.current = node_id;
                self.just_teleported = false;
                self.no_action = false;
            }
            None => self.no_action = true,
        }
        Ok(self.current)
    }
}

pub trait RandomWalks: MultilayerGraphBase {
    /// Visits per actor during a walk of `num_steps` steps. Teleports and idle steps
    /// are not counted.
    fn occupation<R: Rng>(
        &self,
        teleportation: f64,
        transitions: Vec<Vec<f64>>,
        num_steps: usize,
        rng: R,
    ) -> MNResult<BTreeMap<ActorId, usize>> {
        let mut walker = Walker::new(self, teleportation, transitions, rng)?;
        let mut visits: BTreeMap<ActorId, usize> = BTreeMap::new();
        for _ in 0..num_steps {
            let node_id = walker.next()?;
            if walker.action() && !walker.teleported() {
                *visits.entry(node_id.actor).or_insert(0) += 1;
            }
        }
        Ok(visits)
    }
}
