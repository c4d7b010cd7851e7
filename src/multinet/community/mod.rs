/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
pub mod abacus;
pub mod clique;
pub mod clique_adjacency;
pub mod community;
pub mod itemsets;
pub mod label_propagation;
pub mod ml_cpm;
pub mod modularity;
