/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use std::collections::BTreeMap;

use crate::multinet::community::community::CommunityStructure;
use crate::multinet::components::{EdgeMode, NodeBase};
use crate::multinet::error::{MNError, MNResult};
use crate::multinet::graph_base::MultilayerGraphBase;
use crate::multinet::id_types::{LayerId, NodeId};

fn check_omega(omega: f64) -> MNResult<()> {
    if omega < 0.0 {
        return Err(MNError::invalid_parameter("omega must be non-negative"));
    }
    Ok(())
}

/// Belonging factor of each node: 1 / number of communities containing it.
fn belonging_factors(communities: &CommunityStructure) -> BTreeMap<NodeId, f64> {
    let mut counts: BTreeMap<NodeId, usize> = BTreeMap::new();
    for community in communities.iter() {
        for node_id in community.get_nodes() {
            *counts.entry(*node_id).or_insert(0) += 1;
        }
    }
    counts
        .into_iter()
        .map(|(node_id, count)| (node_id, 1.0 / count as f64))
        .collect()
}

/// Same-layer degree of every node in `layer_id`, with intralayer edges taken as
/// undirected.
fn same_layer_degrees<G: MultilayerGraphBase>(
    graph: &G,
    layer_id: LayerId,
) -> BTreeMap<NodeId, f64> {
    graph
        .get_nodes_in_layer(layer_id)
        .into_iter()
        .map(|node_id| {
            let k = match graph.get_node(node_id) {
                Some(node) => node
                    .get_neighbors(EdgeMode::InOut)
                    .filter(|n| n.layer == layer_id)
                    .count(),
                None => 0,
            };
            (node_id, k as f64)
        })
        .collect()
}

fn adjacency<G: MultilayerGraphBase>(graph: &G, u: NodeId, v: NodeId) -> f64 {
    match graph.get_node(u) {
        Some(node) if node.has_neighbor(v, EdgeMode::InOut) => 1.0,
        _ => 0.0,
    }
}

pub trait Modularity: MultilayerGraphBase {
    /// Multislice modularity (Mucha et al., 2010) of a partition, with unit
    /// resolution. Intralayer edges are taken as undirected; the nodes of an actor
    /// are coupled with weight `omega` across every pair of its layers. Layers
    /// without edges add nothing, and an empty network has modularity 0. A node
    /// listed in more than one community is rejected; see `extended_modularity`.
    fn modularity(&self, communities: &CommunityStructure, omega: f64) -> MNResult<f64> {
        check_omega(omega)?;
        let mut membership: BTreeMap<NodeId, usize> = BTreeMap::new();
        for (i, community) in communities.iter().enumerate() {
            for node_id in community.get_nodes() {
                if membership.insert(*node_id, i).is_some() {
                    return Err(MNError::invalid_parameter(format!(
                        "node {} is in several communities; use extended_modularity",
                        node_id
                    )));
                }
            }
        }
        let same_community = |u: &NodeId, v: &NodeId| {
            match (membership.get(u), membership.get(v)) {
                (Some(cu), Some(cv)) => cu == cv,
                _ => false,
            }
        };

        let mut total: f64 = 0.0;
        let mut two_mu: f64 = 0.0;
        for layer_id in self.get_layer_ids() {
            let degrees = same_layer_degrees(self, layer_id);
            let two_m: f64 = degrees.values().sum();
            if two_m == 0.0 {
                continue;
            }
            two_mu += two_m;
            for (u, ku) in &degrees {
                for (v, kv) in &degrees {
                    if same_community(u, v) {
                        total += adjacency(self, *u, *v) - ku * kv / two_m;
                    }
                }
            }
        }

        for actor_id in self.get_actor_ids() {
            let nodes = self.get_nodes_of_actor(actor_id);
            let n = nodes.len() as f64;
            two_mu += omega * n * (n - 1.0);
            for u in &nodes {
                for v in &nodes {
                    if u != v && same_community(u, v) {
                        total += omega;
                    }
                }
            }
        }

        if two_mu == 0.0 {
            return Ok(0.0);
        }
        Ok(total / two_mu)
    }

    /// Modularity of an overlapping structure (Nicosia et al., 2009) on the same
    /// multislice scaffold as `modularity`. A node in `c` communities belongs to each
    /// with factor `1/c`, a pair belongs with the larger of its two factors, and the
    /// expected term of a node spreads that rule over every node of its layer. On a
    /// partition it equals `modularity`.
    fn extended_modularity(&self, communities: &CommunityStructure, omega: f64) -> MNResult<f64> {
        check_omega(omega)?;
        let belonging = belonging_factors(communities);
        let factor = |node_id: &NodeId| belonging.get(node_id).copied().unwrap_or(0.0);

        let mut total: f64 = 0.0;
        let mut two_mu: f64 = 0.0;
        for layer_id in self.get_layer_ids() {
            let degrees = same_layer_degrees(self, layer_id);
            let two_m: f64 = degrees.values().sum();
            if two_m == 0.0 {
                continue;
            }
            two_mu += two_m;
            let n = degrees.len() as f64;
            for community in communities.iter() {
                let members: Vec<(NodeId, f64, f64)> = community
                    .get_nodes()
                    .iter()
                    .filter_map(|node_id| {
                        degrees
                            .get(node_id)
                            .map(|k| (*node_id, factor(node_id), *k))
                    })
                    .collect();
                // nodes of the layer outside the community have factor 0
                let outside = n - members.len() as f64;
                let expected: Vec<f64> = members
                    .iter()
                    .map(|(_, a, k)| {
                        let spread: f64 = members.iter().map(|(_, b, _)| a.max(*b)).sum();
                        (spread + outside * a) / n * k
                    })
                    .collect();
                for (i, (u, au, _)) in members.iter().enumerate() {
                    for (j, (v, av, _)) in members.iter().enumerate() {
                        total += au.max(*av) * adjacency(self, *u, *v)
                            - expected[i] * expected[j] / two_m;
                    }
                }
            }
        }

        for actor_id in self.get_actor_ids() {
            let n = self.get_nodes_of_actor(actor_id).len() as f64;
            two_mu += omega * n * (n - 1.0);
        }
        for community in communities.iter() {
            for u in community.get_nodes() {
                for v in community.get_nodes() {
                    if u != v && u.actor == v.actor && self.has_node(*u) && self.has_node(*v) {
                        total += omega * factor(u).max(factor(v));
                    }
                }
            }
        }

        if two_mu == 0.0 {
            return Ok(0.0);
        }
        Ok(total / two_mu)
    }
}
