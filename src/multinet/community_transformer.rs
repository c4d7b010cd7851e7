/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::multinet::community::abacus::Abacus;
use crate::multinet::community::community::CommunityStructure;
use crate::multinet::community::ml_cpm::MultilayerCliquePercolation;
use crate::multinet::error::{MNError, MNResult};
use crate::multinet::graph_base::MultilayerGraphBase;
use crate::multinet::graph_builder_base::GraphBuilderBase;
use crate::multinet::id_types::GraphId;
use crate::multinet::line_processor::{LineProcessor, LineProcessorBase};
use crate::multinet::network::MultilayerNetwork;
use crate::multinet::network_builder::MultilayerNetworkBuilder;
use crate::multinet::row::{MultilayerEdgeRow, Row};
use crate::multinet::search_problem::{AbacusParams, CpmSearchProblem, SearchBudget};
use crate::multinet::transformer_base::{emit, TransformerBase};

/// Community detection method applied to every graph of the stream.
#[derive(Copy, Clone, Debug)]
pub enum CommunityAlgorithm {
    MlCpm { k: usize, m1: usize, m2: usize },
    Abacus(AbacusParams),
}

/// Reads multilayer edge rows grouped by graph, detects communities in each graph and
/// writes one `graph_id<TAB>community_id<TAB>actor<TAB>layer` line per community node.
/// Graphs whose parameters are invalid for them, or whose search runs out of budget,
/// are skipped with a warning.
pub struct CommunityTransformer {
    batch: Vec<MultilayerEdgeRow>,
    line_processor: Arc<LineProcessor>,
    algorithm: CommunityAlgorithm,
    max_steps: Option<usize>,
    timeout: Option<Duration>,
    seed: u64,
}

impl CommunityTransformer {
    pub fn new(algorithm: CommunityAlgorithm) -> Self {
        Self {
            batch: Vec::new(),
            line_processor: Arc::new(LineProcessor::new()),
            algorithm,
            max_steps: None,
            timeout: None,
            seed: 0,
        }
    }
    pub fn with_max_steps(mut self, max_steps: Option<usize>) -> Self {
        self.max_steps = max_steps;
        self
    }
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    fn budget(&self) -> SearchBudget {
        SearchBudget {
            max_steps: self.max_steps,
            deadline: self.timeout.map(|t| std::time::Instant::now() + t),
        }
    }

    pub fn find_communities(&self, network: &MultilayerNetwork) -> MNResult<CommunityStructure> {
        match self.algorithm {
            CommunityAlgorithm::MlCpm { k, m1, m2 } => {
                let problem = CpmSearchProblem::new(k, m1, m2).with_budget(self.budget());
                network.mlcpm_with_problem(&problem)
            }
            CommunityAlgorithm::Abacus(params) => {
                let mut rng = StdRng::seed_from_u64(self.seed);
                network.abacus(&mut rng, &params)
            }
        }
    }
}

impl TransformerBase for CommunityTransformer {
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
        let communities = match self.find_communities(&network) {
            Ok(communities) => communities,
            Err(MNError::InvalidParameter(msg)) => {
                warn!("skipping graph {}: {}", key, msg);
                return Ok(());
            }
            Err(MNError::BudgetExhausted(steps)) => {
                warn!("skipping graph {}: budget exhausted after {} steps", key, steps);
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        debug!("graph {}: {} communities", key, communities.len());
        for (community_id, community) in communities.iter().enumerate() {
            for node_id in community.get_nodes() {
                let actor = network
                    .get_actor(node_id.actor)
                    .ok_or_else(|| MNError::not_found(format!("{}", node_id.actor)))?;
                let layer = network
                    .get_layer(node_id.layer)
                    .ok_or_else(|| MNError::not_found(format!("{}", node_id.layer)))?;
                emit(
                    output,
                    format!("{}\t{}\t{}\t{}", key, community_id, actor.name, layer.name),
                )?;
            }
        }
        Ok(())
    }
    fn reset(&mut self) -> MNResult<()> {
        self.batch.clear();
        Ok(())
    }
}
