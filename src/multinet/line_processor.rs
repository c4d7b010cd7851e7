/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use std::sync::{Arc, RwLock};

use fxhash::FxHashMap;

use crate::multinet::error::{MNError, MNResult};
use crate::multinet::id_types::GraphId;
use crate::multinet::row::{MultilayerEdgeRow, Row};

pub trait LineProcessorBase {
    fn process_line(&self, line: String) -> MNResult<Box<dyn Row>>;
}

/// Turns `graph_id<TAB>actor1<TAB>actor2<TAB>layer` lines into rows. Graph keys are
/// mapped to dense `GraphId`s in order of first appearance; `get_original_id` maps
/// them back.
pub struct LineProcessor {
    ids: Arc<RwLock<FxHashMap<String, i64>>>,
    reverse_ids: Arc<RwLock<Vec<String>>>,
}
impl LineProcessorBase for LineProcessor {
    fn process_line(&self, line: String) -> MNResult<Box<dyn Row>> {
        let fields: Vec<&str> = line.trim_end_matches('\r').split('\t').collect();
        if fields.len() != 4 {
            return Err(MNError::invalid_parameter(format!(
                "expected 4 tab-separated fields, got {}: {:?}",
                fields.len(),
                line
            )));
        }
        if fields.iter().any(|f| f.is_empty()) {
            return Err(MNError::invalid_parameter(format!("empty field in {:?}", line)));
        }
        let graph_id = self.record_new_key_or_return_current_one(fields[0])?;
        Ok(Box::new(MultilayerEdgeRow {
            graph_id,
            actor1: fields[1].to_owned(),
            actor2: fields[2].to_owned(),
            layer: fields[3].to_owned(),
        }))
    }
}
impl LineProcessor {
    pub fn new() -> Self {
        Self {
            ids: Arc::new(RwLock::new(FxHashMap::default())),
            reverse_ids: Arc::new(RwLock::new(Vec::new())),
        }
    }
    fn record_new_key_or_return_current_one(&self, key: &str) -> MNResult<GraphId> {
        let mut ids = self.ids.write().map_err(|_| MNError::new("graph id map poisoned"))?;
        if let Some(id) = ids.get(key) {
            return Ok(GraphId::from(*id));
        }
        let mut reverse_ids = self
            .reverse_ids
            .write()
            .map_err(|_| MNError::new("graph id map poisoned"))?;
        let id = ids.len() as i64;
        ids.insert(key.to_owned(), id);
        reverse_ids.push(key.to_owned());
        Ok(GraphId::from(id))
    }
    pub fn get_original_id(&self, graph_id: GraphId) -> MNResult<String> {
        let reverse_ids = self
            .reverse_ids
            .read()
            .map_err(|_| MNError::new("graph id map poisoned"))?;
        reverse_ids
            .get(graph_id.value() as usize)
            .cloned()
            .ok_or_else(|| MNError::not_found(format!("{}", graph_id)))
    }
}
impl Default for LineProcessor {
    fn default() -> Self {
        LineProcessor::new()
    }
}
