/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
extern crate clap;
extern crate crossbeam;
extern crate fxhash;
extern crate itertools;
extern crate log;
extern crate rand;
extern crate roaring;
extern crate serde_json;
extern crate thiserror;

pub mod multinet;

pub use multinet::community::community::{Community, CommunityStructure};
pub use multinet::community_transformer::{CommunityAlgorithm, CommunityTransformer};
pub use multinet::components::{Actor, Edge, EdgeMode, Layer, Node, NodeBase};
pub use multinet::error::{MNError, MNResult};
pub use multinet::featurizer_transformer::FeaturizerTransformer;
pub use multinet::graph_base::MultilayerGraphBase;
pub use multinet::graph_builder_base::GraphBuilderBase;
pub use multinet::id_types::{ActorId, EdgeId, GraphId, LayerId, NodeId};
pub use multinet::indexed_ordered_set::IndexedOrderedSet;
pub use multinet::input::Input;
pub use multinet::line_processor::LineProcessor;
pub use multinet::network::MultilayerNetwork;
pub use multinet::network_builder::{MultilayerNetworkBuilder, TMultilayerNetworkBuilder};
pub use multinet::output::Output;
pub use multinet::row::MultilayerEdgeRow;
pub use multinet::search_problem::{AbacusParams, CpmSearchProblem, LabelPropagationParams, SearchBudget};
pub use multinet::test_utils::*;
pub use multinet::transformer_base::TransformerBase;
