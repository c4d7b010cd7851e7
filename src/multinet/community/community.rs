/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use std::collections::BTreeSet;
use std::fmt;

use crate::multinet::id_types::{ActorId, LayerId, NodeId};

/// A set of nodes. Communities produced by multilayer algorithms may span several
/// layers and may overlap with each other.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Community {
    nodes: BTreeSet<NodeId>,
}
impl Community {
    pub fn new() -> Self {
        Self {
            nodes: BTreeSet::new(),
        }
    }
    pub fn add_node(&mut self, node_id: NodeId) -> bool {
        self.nodes.insert(node_id)
    }
    pub fn get_nodes(&self) -> &BTreeSet<NodeId> {
        &self.nodes
    }
    pub fn contains(&self, node_id: &NodeId) -> bool {
        self.nodes.contains(node_id)
    }
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
    pub fn actors(&self) -> BTreeSet<ActorId> {
        self.nodes.iter().map(|n| n.actor).collect()
    }
    pub fn layers(&self) -> BTreeSet<LayerId> {
        self.nodes.iter().map(|n| n.layer).collect()
    }
}
impl std::iter::FromIterator<NodeId> for Community {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}
impl fmt::Display for Community {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let nodes: Vec<String> = self.nodes.iter().map(|n| n.to_string()).collect();
        write!(f, "[{}]", nodes.join(", "))
    }
}

/// Ordered list of communities returned by a detection algorithm.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommunityStructure {
    communities: Vec<Community>,
}
impl CommunityStructure {
    pub fn new() -> Self {
        Self {
            communities: Vec::new(),
        }
    }
    pub fn add_community(&mut self, community: Community) {
        self.communities.push(community);
    }
    pub fn get_community(&self, i: usize) -> Option<&Community> {
        self.communities.get(i)
    }
    pub fn get_communities(&self) -> &Vec<Community> {
        &self.communities
    }
    pub fn len(&self) -> usize {
        self.communities.len()
    }
    pub fn is_empty(&self) -> bool {
        self.communities.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Community> {
        self.communities.iter()
    }
    /// Indices of the communities containing `node_id`.
    pub fn memberships(&self, node_id: &NodeId) -> Vec<usize> {
        self.communities
            .iter()
            .enumerate()
            .filter(|(_, c)| c.contains(node_id))
            .map(|(i, _)| i)
            .collect()
    }
}
impl std::iter::FromIterator<Community> for CommunityStructure {
    fn from_iter<I: IntoIterator<Item = Community>>(iter: I) -> Self {
        Self {
            communities: iter.into_iter().collect(),
        }
    }
}
impl fmt::Display for CommunityStructure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for community in &self.communities {
            writeln!(f, "{}", community)?;
        }
        Ok(())
    }
}

/// Jaccard similarity of the node sets; 0 when both are empty.
pub fn community_jaccard(c1: &Community, c2: &Community) -> f64 {
    let common = c1.get_nodes().intersection(c2.get_nodes()).count();
    let union = c1.len() + c2.len() - common;
    if union == 0 {
        return 0.0;
    }
    common as f64 / union as f64
}

/// Normalized mutual information between two partitions of `n` nodes.
pub fn normalized_mutual_information(
    com1: &CommunityStructure,
    com2: &CommunityStructure,
    n: usize,
) -> f64 {
    let n = n as f64;
    let entropy = |cs: &CommunityStructure| -> f64 {
        cs.iter()
            .filter(|c| !c.is_empty())
            .map(|c| {
                let p = c.len() as f64 / n;
                -p * p.log2()
            })
            .sum()
    };
    let mut info = 0.0;
    for c1 in com1.iter() {
        for c2 in com2.iter() {
            let common = c1.get_nodes().intersection(c2.get_nodes()).count();
            if c1.is_empty() || c2.is_empty() || common == 0 {
                continue;
            }
            let common = common as f64;
            info += common / n * (n * common / (c1.len() as f64 * c2.len() as f64)).log2();
        }
    }
    let denominator = (entropy(com1) + entropy(com2)) / 2.0;
    if denominator == 0.0 {
        return 0.0;
    }
    info / denominator
}
