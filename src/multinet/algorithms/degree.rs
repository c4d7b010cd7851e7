/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::multinet::components::{EdgeMode, NodeBase};
use crate::multinet::error::{MNError, MNResult};
use crate::multinet::graph_base::MultilayerGraphBase;
use crate::multinet::id_types::{ActorId, LayerId};

pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// population standard deviation
pub fn stdev(values: &[f64]) -> f64 {
    let mu = mean(values);
    let variance = values.iter().map(|x| (x - mu) * (x - mu)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Actor degree. Neighbors of any of the actor's nodes are counted when they lie on
/// one of the selected layers, so interlayer edges count towards the neighbor's layer.
pub trait Degree: MultilayerGraphBase {
    fn check_actor(&self, actor_id: ActorId) -> MNResult<()> {
        if !self.has_actor(actor_id) {
            return Err(MNError::not_found(format!("{}", actor_id)));
        }
        Ok(())
    }

    fn degree(&self, actor_id: ActorId, layers: &[LayerId], mode: EdgeMode) -> MNResult<usize> {
        self.check_actor(actor_id)?;
        let mut degree: usize = 0;
        for node_id in self.get_nodes_of_actor(actor_id) {
            if let Some(node) = self.get_node(node_id) {
                degree += node
                    .get_neighbors(mode)
                    .filter(|n| layers.contains(&n.layer))
                    .count();
            }
        }
        Ok(degree)
    }

    fn degree_on_layer(&self, actor_id: ActorId, layer_id: LayerId, mode: EdgeMode) -> MNResult<usize> {
        self.degree(actor_id, &[layer_id], mode)
    }

    fn layer_degrees(&self, actor_id: ActorId, layers: &[LayerId], mode: EdgeMode) -> MNResult<Vec<f64>> {
        if layers.is_empty() {
            return Err(MNError::invalid_parameter("empty layer selection"));
        }
        layers
            .iter()
            .map(|l| self.degree_on_layer(actor_id, *l, mode).map(|d| d as f64))
            .collect()
    }

    fn degree_mean(&self, actor_id: ActorId, layers: &[LayerId], mode: EdgeMode) -> MNResult<f64> {
        Ok(mean(&self.layer_degrees(actor_id, layers, mode)?))
    }

    fn degree_deviation(&self, actor_id: ActorId, layers: &[LayerId], mode: EdgeMode) -> MNResult<f64> {
        Ok(stdev(&self.layer_degrees(actor_id, layers, mode)?))
    }
}
