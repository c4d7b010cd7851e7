/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use std::time::{Duration, Instant};

use log::warn;

use crate::multinet::error::{MNError, MNResult};

/// Optional limits on an exhaustive search. An unlimited budget never fails.
#[derive(Copy, Clone, Debug, Default)]
pub struct SearchBudget {
    pub max_steps: Option<usize>,
    pub deadline: Option<Instant>,
}
impl SearchBudget {
    pub fn unlimited() -> Self {
        Self {
            max_steps: None,
            deadline: None,
        }
    }
    pub fn with_max_steps(max_steps: usize) -> Self {
        Self {
            max_steps: Some(max_steps),
            deadline: None,
        }
    }
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            max_steps: None,
            deadline: Some(Instant::now() + timeout),
        }
    }
    pub fn tracker(&self) -> BudgetTracker {
        BudgetTracker {
            budget: *self,
            steps: 0,
        }
    }
}

/// Counts expansion steps against a `SearchBudget`.
#[derive(Clone, Debug)]
pub struct BudgetTracker {
    budget: SearchBudget,
    steps: usize,
}
impl BudgetTracker {
    pub fn tick(&mut self) -> MNResult<()> {
        self.steps += 1;
        if let Some(max_steps) = self.budget.max_steps {
            if self.steps > max_steps {
                warn!("search stopped: step budget of {} exhausted", max_steps);
                return Err(MNError::BudgetExhausted(self.steps - 1));
            }
        }
        if let Some(deadline) = self.budget.deadline {
            // the clock is only read every 64 steps
            if self.steps % 64 == 0 && Instant::now() >= deadline {
                warn!("search stopped: deadline passed after {} steps", self.steps);
                return Err(MNError::BudgetExhausted(self.steps));
            }
        }
        Ok(())
    }
    pub fn steps(&self) -> usize {
        self.steps
    }
}

/// Parameters of multilayer clique percolation: cliques have at least `k` actors and
/// `m1` layers; cliques and communities are merged when they share at least `m2` layers.
#[derive(Copy, Clone, Debug)]
pub struct CpmSearchProblem {
    pub k: usize,
    pub m1: usize,
    pub m2: usize,
    pub budget: SearchBudget,
}
impl CpmSearchProblem {
    pub fn new(k: usize, m1: usize, m2: usize) -> Self {
        Self {
            k,
            m1,
            m2,
            budget: SearchBudget::unlimited(),
        }
    }
    pub fn with_budget(mut self, budget: SearchBudget) -> Self {
        self.budget = budget;
        self
    }
    pub fn validate(&self, num_layers: usize) -> MNResult<()> {
        validate_clique_thresholds(self.k, self.m1, num_layers)?;
        validate_clique_thresholds(self.k, self.m2, num_layers)
    }
}

pub fn validate_clique_thresholds(k: usize, m: usize, num_layers: usize) -> MNResult<()> {
    if k < 1 {
        return Err(MNError::invalid_parameter("k must be at least 1"));
    }
    if m < 1 {
        return Err(MNError::invalid_parameter("m must be at least 1"));
    }
    if m > num_layers {
        return Err(MNError::invalid_parameter(format!(
            "m = {} exceeds the number of layers ({})",
            m, num_layers
        )));
    }
    Ok(())
}

#[derive(Copy, Clone, Debug)]
pub struct LabelPropagationParams {
    pub max_iterations: usize,
}
impl Default for LabelPropagationParams {
    fn default() -> Self {
        Self {
            max_iterations: 100,
        }
    }
}

/// Closed itemsets (sets of per-layer communities) become communities when they are
/// shared by at least `min_actors` actors and span at least `min_layers` layers.
#[derive(Copy, Clone, Debug)]
pub struct AbacusParams {
    pub min_actors: usize,
    pub min_layers: usize,
    pub label_propagation: LabelPropagationParams,
}
impl AbacusParams {
    pub fn new(min_actors: usize, min_layers: usize) -> Self {
        Self {
            min_actors,
            min_layers,
            label_propagation: LabelPropagationParams::default(),
        }
    }
    pub fn validate(&self) -> MNResult<()> {
        if self.min_actors < 1 || self.min_layers < 1 {
            return Err(MNError::invalid_parameter(
                "min_actors and min_layers must be at least 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_budget() {
        let mut tracker = SearchBudget::with_max_steps(3).tracker();
        for _ in 0..3 {
            assert!(tracker.tick().is_ok());
        }
        match tracker.tick() {
            Err(MNError::BudgetExhausted(3)) => (),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_threshold_validation() {
        assert!(CpmSearchProblem::new(3, 1, 1).validate(2).is_ok());
        assert!(CpmSearchProblem::new(0, 1, 1).validate(2).is_err());
        assert!(CpmSearchProblem::new(3, 0, 1).validate(2).is_err());
        assert!(CpmSearchProblem::new(3, 1, 3).validate(2).is_err());
    }
}
