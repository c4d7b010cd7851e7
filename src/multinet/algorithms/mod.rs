/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
pub mod clustering;
pub mod degree;
pub mod distance;
pub mod neighborhood;
pub mod random_walks;
pub mod relevance;
