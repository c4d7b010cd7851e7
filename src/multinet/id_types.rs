/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use std::fmt;

/// Uniquely identifies an `Actor` within a network. Ids are handed out in insertion order
/// and never reused.
#[derive(Hash, Copy, Clone, Debug, PartialOrd, Ord, PartialEq, Eq)]
pub struct ActorId {
    id: usize,
}
impl ActorId {
    pub fn value(&self) -> usize {
        self.id
    }
}
impl<T> From<T> for ActorId
where
    T: Into<usize>,
{
    fn from(n: T) -> Self {
        Self { id: n.into() }
    }
}
impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Actor:{}", self.id)
    }
}

/// Uniquely identifies a `Layer` within a network.
#[derive(Hash, Copy, Clone, Debug, PartialOrd, Ord, PartialEq, Eq)]
pub struct LayerId {
    id: usize,
}
impl LayerId {
    pub fn value(&self) -> usize {
        self.id
    }
}
impl<T> From<T> for LayerId
where
    T: Into<usize>,
{
    fn from(n: T) -> Self {
        Self { id: n.into() }
    }
}
impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Layer:{}", self.id)
    }
}

/// A node is an actor as it appears on a single layer, so the pair is its identity.
/// Ordering is actor-major, which keeps all nodes of an actor adjacent.
#[derive(Hash, Copy, Clone, Debug, PartialOrd, Ord, PartialEq, Eq)]
pub struct NodeId {
    pub actor: ActorId,
    pub layer: LayerId,
}
impl NodeId {
    pub fn new(actor: ActorId, layer: LayerId) -> Self {
        Self { actor, layer }
    }
}
impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Node:{}@{}", self.actor.value(), self.layer.value())
    }
}

/// Key of an edge. For undirected layer pairs the endpoints are stored in ascending
/// order so that both orientations map to the same key.
#[derive(Hash, Copy, Clone, Debug, PartialOrd, Ord, PartialEq, Eq)]
pub struct EdgeId {
    pub v1: NodeId,
    pub v2: NodeId,
}
impl EdgeId {
    pub fn new(v1: NodeId, v2: NodeId, directed: bool) -> Self {
        if directed || v1 <= v2 {
            Self { v1, v2 }
        } else {
            Self { v1: v2, v2: v1 }
        }
    }
}
impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Edge:{}-{}", self.v1, self.v2)
    }
}

/// Used to refer to distinct graphs read from the same input stream.
#[derive(Hash, Copy, Clone, Debug, PartialEq, Eq)]
pub struct GraphId {
    id: i64,
}
impl GraphId {
    pub fn value(&self) -> i64 {
        self.id
    }
}
impl<T> From<T> for GraphId
where
    T: Into<i64>,
{
    fn from(n: T) -> Self {
        Self { id: n.into() }
    }
}
impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Graph:{}", self.id)
    }
}
