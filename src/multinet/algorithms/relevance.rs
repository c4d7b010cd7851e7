/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use crate::multinet::algorithms::neighborhood::Neighborhood;
use crate::multinet::components::EdgeMode;
use crate::multinet::error::MNResult;
use crate::multinet::id_types::{ActorId, LayerId};

/// How much of an actor's neighborhood is reached through a given set of layers.
/// Both measures are 0 for an actor without neighbors.
pub trait Relevance: Neighborhood {
    fn relevance(&self, actor_id: ActorId, layers: &[LayerId], mode: EdgeMode) -> MNResult<f64> {
        let all_layers = self.get_layer_ids();
        let total = self.neighbors_on(actor_id, &all_layers, mode)?.len();
        if total == 0 {
            return Ok(0.0);
        }
        let selected = self.neighbors_on(actor_id, layers, mode)?.len();
        Ok(selected as f64 / total as f64)
    }

    fn xrelevance(&self, actor_id: ActorId, layers: &[LayerId], mode: EdgeMode) -> MNResult<f64> {
        let all_layers = self.get_layer_ids();
        let total = self.neighbors_on(actor_id, &all_layers, mode)?.len();
        if total == 0 {
            return Ok(0.0);
        }
        let exclusive = self.xneighbors(actor_id, layers, mode)?.len();
        Ok(exclusive as f64 / total as f64)
    }
}
