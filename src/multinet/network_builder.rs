/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use rand::prelude::*;

use crate::multinet::error::MNResult;
use crate::multinet::graph_base::MultilayerGraphBase;
use crate::multinet::graph_builder_base::GraphBuilderBase;
use crate::multinet::id_types::NodeId;
use crate::multinet::network::MultilayerNetwork;

/// (actor, actor, layer)
pub type MultilayerEdgeTuple = (String, String, String);

pub struct MultilayerNetworkBuilder {}

pub trait TMultilayerNetworkBuilder:
    GraphBuilderBase<GraphType = MultilayerNetwork, RowType = MultilayerEdgeTuple>
{
    // Every pair of the n actors is connected on every layer.
    fn get_complete_graph(&mut self, n: usize, layers: &[&str]) -> MNResult<MultilayerNetwork> {
        let mut v = Vec::new();
        for layer in layers {
            for i in 0..n {
                for j in i + 1..n {
                    v.push((i.to_string(), j.to_string(), layer.to_string()));
                }
            }
        }
        self.from_vector(v)
    }

    // Actors 0..n form the same path on every layer.
    fn get_path_graph(&mut self, n: usize, layers: &[&str]) -> MNResult<MultilayerNetwork> {
        let mut v = Vec::new();
        for layer in layers {
            for i in 0..n.saturating_sub(1) {
                v.push((i.to_string(), (i + 1).to_string(), layer.to_string()));
            }
        }
        self.from_vector(v)
    }

    // Each layer is an independent Erdos-Renyi graph over the same n actors.
    fn get_er_graph<R: Rng>(
        &mut self,
        n: usize,
        p: f64,
        layers: &[&str],
        rng: &mut R,
    ) -> MNResult<MultilayerNetwork> {
        let mut v = Vec::new();
        for layer in layers {
            for i in 0..n {
                for j in i + 1..n {
                    if rng.gen::<f64>() < p {
                        v.push((i.to_string(), j.to_string(), layer.to_string()));
                    }
                }
            }
        }
        self.from_vector(v)
    }
}

impl GraphBuilderBase for MultilayerNetworkBuilder {
    type GraphType = MultilayerNetwork;
    type RowType = MultilayerEdgeTuple;

    // Builds a network with undirected layers from (actor, actor, layer) rows.
    // Repeated rows are ignored; a row joining an actor to itself only adds its node.
    fn from_vector(&mut self, data: Vec<MultilayerEdgeTuple>) -> MNResult<MultilayerNetwork> {
        let mut network = MultilayerNetwork::new();
        for (actor1, actor2, layer) in data {
            let layer_id = match network.get_layer_by_name(&layer) {
                Some(l) => l.layer_id,
                None => network.add_layer(&layer, false)?,
            };
            let v1 = NodeId::new(network.get_or_add_actor(&actor1)?, layer_id);
            let v2 = NodeId::new(network.get_or_add_actor(&actor2)?, layer_id);
            for node_id in &[v1, v2] {
                if !network.has_node(*node_id) {
                    network.add_node(node_id.actor, node_id.layer)?;
                }
            }
            if v1 != v2 && network.get_edge(v1, v2).is_none() {
                network.add_edge(v1, v2)?;
            }
        }
        Ok(network)
    }
}
impl TMultilayerNetworkBuilder for MultilayerNetworkBuilder {}
