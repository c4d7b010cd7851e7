/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
pub mod algorithms;
pub mod community;
pub mod community_transformer;
pub mod components;
pub mod counter;
pub mod error;
pub mod featurizer_transformer;
pub mod graph_base;
pub mod graph_builder_base;
pub mod id_types;
pub mod indexed_ordered_set;
pub mod input;
pub mod line_processor;
pub mod network;
pub mod network_builder;
pub mod output;
pub mod row;
pub mod search_problem;
pub mod test_utils;
pub mod transformer_base;
