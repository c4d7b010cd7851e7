/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::multinet::error::MNResult;
use crate::multinet::graph_base::MultilayerGraphBase;

pub trait GraphBuilderBase
where
    Self: Sized,
{
    type GraphType: MultilayerGraphBase;
    type RowType;

    fn from_vector(&mut self, data: Vec<Self::RowType>) -> MNResult<Self::GraphType>;
}
