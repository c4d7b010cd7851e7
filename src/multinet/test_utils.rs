/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use std::collections::BTreeSet;

use crate::multinet::error::{MNError, MNResult};
use crate::multinet::graph_builder_base::GraphBuilderBase;
use crate::multinet::id_types::{ActorId, LayerId, NodeId};
use crate::multinet::network::MultilayerNetwork;
use crate::multinet::network_builder::MultilayerNetworkBuilder;

/// Builds a network with undirected layers from `(actor, actor, layer)` triples.
pub fn build_network(rows: &[(&str, &str, &str)]) -> MNResult<MultilayerNetwork> {
    let data = rows
        .iter()
        .map(|(a1, a2, l)| (a1.to_string(), a2.to_string(), l.to_string()))
        .collect();
    MultilayerNetworkBuilder {}.from_vector(data)
}

/// Actors 1, 2, 3 form a triangle on layer A; only 1 and 2 are connected on B.
pub fn two_layer_triangle() -> MNResult<MultilayerNetwork> {
    build_network(&[
        ("1", "2", "A"),
        ("2", "3", "A"),
        ("1", "3", "A"),
        ("1", "2", "B"),
    ])
}

/// Two triangles {1,2,3} and {2,3,4} on layer A, sharing the edge 2-3.
pub fn overlapping_triangles() -> MNResult<MultilayerNetwork> {
    build_network(&[
        ("1", "2", "A"),
        ("2", "3", "A"),
        ("1", "3", "A"),
        ("2", "4", "A"),
        ("3", "4", "A"),
    ])
}

pub fn actor(network: &MultilayerNetwork, name: &str) -> MNResult<ActorId> {
    network
        .get_actor_by_name(name)
        .map(|a| a.actor_id)
        .ok_or_else(|| MNError::not_found(name))
}

pub fn layer(network: &MultilayerNetwork, name: &str) -> MNResult<LayerId> {
    network
        .get_layer_by_name(name)
        .map(|l| l.layer_id)
        .ok_or_else(|| MNError::not_found(name))
}

pub fn node(network: &MultilayerNetwork, actor_name: &str, layer_name: &str) -> MNResult<NodeId> {
    Ok(NodeId::new(
        actor(network, actor_name)?,
        layer(network, layer_name)?,
    ))
}

pub fn actor_set(network: &MultilayerNetwork, names: &[&str]) -> MNResult<BTreeSet<ActorId>> {
    names.iter().map(|n| actor(network, n)).collect()
}

pub fn layer_set(network: &MultilayerNetwork, names: &[&str]) -> MNResult<BTreeSet<LayerId>> {
    names.iter().map(|n| layer(network, n)).collect()
}
