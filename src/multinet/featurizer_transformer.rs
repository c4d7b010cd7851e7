/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use std::collections::BTreeMap;
use std::sync::mpsc::Sender;
use std::sync::Arc;

use serde_json::{json, Value};

use crate::multinet::algorithms::degree::Degree;
use crate::multinet::algorithms::relevance::Relevance;
use crate::multinet::components::EdgeMode;
use crate::multinet::error::{MNError, MNResult};
use crate::multinet::graph_base::MultilayerGraphBase;
use crate::multinet::graph_builder_base::GraphBuilderBase;
use crate::multinet::id_types::GraphId;
use crate::multinet::line_processor::{LineProcessor, LineProcessorBase};
use crate::multinet::network::MultilayerNetwork;
use crate::multinet::network_builder::MultilayerNetworkBuilder;
use crate::multinet::row::{MultilayerEdgeRow, Row};
use crate::multinet::transformer_base::{emit, TransformerBase};

/// Writes one JSON object per graph with its size and, for every actor, the degree
/// over all layers and the relevance of each layer.
pub struct FeaturizerTransformer {
    batch: Vec<MultilayerEdgeRow>,
    line_processor: Arc<LineProcessor>,
}

impl FeaturizerTransformer {
    pub fn new() -> Self {
        Self {
            batch: Vec::new(),
            line_processor: Arc::new(LineProcessor::new()),
        }
    }

    pub fn featurize(network: &MultilayerNetwork) -> MNResult<Value> {
        let layer_ids = network.get_layer_ids();
        let mut actors: BTreeMap<String, Value> = BTreeMap::new();
        for actor in network.get_actors() {
            let mut relevance: BTreeMap<String, Value> = BTreeMap::new();
            for layer in network.get_layers() {
                let r = network.relevance(actor.actor_id, &[layer.layer_id], EdgeMode::InOut)?;
                relevance.insert(layer.name.clone(), json!(r));
            }
            let degree = network.degree(actor.actor_id, &layer_ids, EdgeMode::InOut)?;
            actors.insert(
                actor.name.clone(),
                json!({
                    "degree": degree,
                    "relevance": relevance,
                }),
            );
        }
        Ok(json!({
            "num_actors": network.count_actors(),
            "num_layers": network.count_layers(),
            "num_nodes": network.count_nodes(),
            "num_edges": network.count_edges(),
            "actors": actors,
        }))
    }
}

impl Default for FeaturizerTransformer {
    fn default() -> Self {
        FeaturizerTransformer::new()
    }
}

impl TransformerBase for FeaturizerTransformer {
    fn get_line_processor(&self) -> Arc<dyn LineProcessorBase> {
        self.line_processor.clone()
    }
    fn process_row(&mut self, row: Box<dyn Row>) -> MNResult<()> {
        let row = row.as_multilayer_edge_row().ok_or_else(MNError::err_none)?;
        self.batch.push(row);
        Ok(())
    }
    fn process_batch(&self, graph_id: GraphId, output: &Sender<(Option<String>, bool)>) -> MNResult<()> {
        let key = self.line_processor.get_original_id(graph_id)?;
        let rows = self.batch.iter().map(|r| r.as_tuple()).collect();
        let network = MultilayerNetworkBuilder {}.from_vector(rows)?;
        let mut features = Self::featurize(&network)?;
        features["graph_id"] = json!(key);
        emit(output, serde_json::to_string(&features)?)
    }
    fn reset(&mut self) -> MNResult<()> {
        self.batch.clear();
        Ok(())
    }
}
