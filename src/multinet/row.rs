/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use std::fmt;

use crate::multinet::id_types::GraphId;
use crate::multinet::network_builder::MultilayerEdgeTuple;

/// One input line: an edge between two named actors on a named layer, belonging to
/// the graph `graph_id`. A row with `actor1 == actor2` only declares the actor's node.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct MultilayerEdgeRow {
    pub graph_id: GraphId,
    pub actor1: String,
    pub actor2: String,
    pub layer: String,
}
impl MultilayerEdgeRow {
    pub fn as_tuple(&self) -> MultilayerEdgeTuple {
        (self.actor1.clone(), self.actor2.clone(), self.layer.clone())
    }
}
impl fmt::Display for MultilayerEdgeRow {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "MultilayerEdgeRow: {}\t{}\t{}\t{}",
            self.graph_id, self.actor1, self.actor2, self.layer
        )
    }
}

/// All rows handled by a transformer implement this trait.
pub trait Row {
    /// batches are keyed on this.
    fn get_graph_id(&self) -> GraphId;
    fn as_multilayer_edge_row(&self) -> Option<MultilayerEdgeRow>;
}
impl Row for MultilayerEdgeRow {
    fn get_graph_id(&self) -> GraphId {
        self.graph_id
    }
    fn as_multilayer_edge_row(&self) -> Option<MultilayerEdgeRow> {
        Some(self.clone())
    }
}
