/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use itertools::Itertools;

use crate::multinet::components::{EdgeMode, NodeBase};
use crate::multinet::error::{MNError, MNResult};
use crate::multinet::graph_base::MultilayerGraphBase;
use crate::multinet::id_types::{LayerId, NodeId};

pub trait Clustering: MultilayerGraphBase {
    /// Fraction of pairs of (in or out) neighbors of the node on its own layer that are
    /// themselves adjacent. Nodes with fewer than two such neighbors get 0.
    fn cc(&self, node_id: NodeId) -> MNResult<f64> {
        let node = self
            .get_node(node_id)
            .ok_or_else(|| MNError::not_found(format!("{}", node_id)))?;
        let neighbors: Vec<&NodeId> = node
            .get_neighbors(EdgeMode::InOut)
            .filter(|n| n.layer == node_id.layer)
            .collect();
        let num_neighbors = neighbors.len();
        if num_neighbors <= 1 {
            return Ok(0.0);
        }
        let mut num_ties: usize = 0;
        for (n1, n2) in neighbors.iter().tuple_combinations() {
            // a pair joined in both directions still counts once
            if self.get_edge(**n1, **n2).is_some() || self.get_edge(**n2, **n1).is_some() {
                num_ties += 1;
            }
        }
        Ok(num_ties as f64 * 2.0 / (num_neighbors * (num_neighbors - 1)) as f64)
    }

    /// Mean clustering coefficient over the nodes of a layer (0 for an empty layer).
    fn avg_cc(&self, layer_id: LayerId) -> MNResult<f64> {
        if !self.has_layer(layer_id) {
            return Err(MNError::not_found(format!("{}", layer_id)));
        }
        let node_ids = self.get_nodes_in_layer(layer_id);
        if node_ids.is_empty() {
            return Ok(0.0);
        }
        let mut total = 0.0;
        for node_id in &node_ids {
            total += self.cc(*node_id)?;
        }
        Ok(total / node_ids.len() as f64)
    }
}
