/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
extern crate lib_multinet;
extern crate rand;

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use lib_multinet::multinet::community::clique::{neighboring_layers, Clique, MaxCliques};
use lib_multinet::multinet::error::{MNError, MNResult};
use lib_multinet::multinet::graph_base::MultilayerGraphBase;
use lib_multinet::multinet::id_types::{ActorId, LayerId};
use lib_multinet::multinet::network::MultilayerNetwork;
use lib_multinet::multinet::network_builder::{MultilayerNetworkBuilder, TMultilayerNetworkBuilder};
use lib_multinet::multinet::search_problem::SearchBudget;
use lib_multinet::multinet::test_utils::{actor_set, layer_set, two_layer_triangle};

/// Layers on which every pair of `actors` is adjacent.
fn common_layers(network: &MultilayerNetwork, actors: &BTreeSet<ActorId>) -> BTreeSet<LayerId> {
    let mut layers: BTreeSet<LayerId> = network.get_layer_ids().into_iter().collect();
    for a1 in actors {
        for a2 in actors {
            if a1 < a2 {
                let shared = neighboring_layers(network, *a1, *a2);
                layers = layers.intersection(&shared).cloned().collect();
            }
        }
    }
    layers
}

fn assert_valid_cliques(network: &MultilayerNetwork, cliques: &BTreeSet<Clique>, k: usize, m: usize) {
    for clique in cliques {
        assert!(clique.size() >= k);
        assert!(clique.layers.len() >= m);
        assert_eq!(common_layers(network, &clique.actors), clique.layers);
        // no actor extends the clique on all of its layers
        for actor_id in network.get_actor_ids() {
            if clique.actors.contains(&actor_id) {
                continue;
            }
            let mut extended = clique.actors.clone();
            extended.insert(actor_id);
            assert!(!clique.layers.is_subset(&common_layers(network, &extended)));
        }
        for other in cliques {
            assert!(other == clique || !clique.is_dominated_by(other));
        }
    }
}

#[test]
fn test_two_layer_triangle() -> MNResult<()> {
    let network = two_layer_triangle()?;
    let cliques = network.find_max_cliques(2, 1)?;
    let expected: BTreeSet<Clique> = vec![
        Clique::new(actor_set(&network, &["1", "2"])?, layer_set(&network, &["A", "B"])?),
        Clique::new(actor_set(&network, &["1", "2", "3"])?, layer_set(&network, &["A"])?),
    ]
    .into_iter()
    .collect();
    assert_eq!(cliques, expected);
    assert_valid_cliques(&network, &cliques, 2, 1);

    // only {1,2} spans two layers
    let cliques = network.find_max_cliques(2, 2)?;
    assert_eq!(cliques.len(), 1);
    // nothing has three actors on two layers
    assert!(network.find_max_cliques(3, 2)?.is_empty());
    Ok(())
}

#[test]
fn test_complete_graph_is_one_clique() -> MNResult<()> {
    let network = MultilayerNetworkBuilder {}.get_complete_graph(6, &["a", "b", "c"])?;
    let cliques = network.find_max_cliques(3, 2)?;
    assert_eq!(cliques.len(), 1);
    let clique = cliques.iter().next().ok_or_else(MNError::err_none)?;
    assert_eq!(clique.size(), 6);
    assert_eq!(clique.layers.len(), 3);
    Ok(())
}

#[test]
fn test_random_graphs() -> MNResult<()> {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..5 {
        let network =
            MultilayerNetworkBuilder {}.get_er_graph(14, 0.5, &["a", "b", "c"], &mut rng)?;
        for (k, m) in &[(2, 1), (3, 1), (3, 2), (4, 2)] {
            let cliques = network.find_max_cliques(*k, *m)?;
            assert_valid_cliques(&network, &cliques, *k, *m);
        }
    }
    Ok(())
}

#[test]
fn test_search_is_lazy() -> MNResult<()> {
    let network = two_layer_triangle()?;
    let mut search = network.clique_search(2, 1, SearchBudget::unlimited())?;
    assert!(search.next().is_some());
    Ok(())
}

#[test]
fn test_invalid_thresholds() -> MNResult<()> {
    let network = two_layer_triangle()?;
    assert!(matches!(network.find_max_cliques(0, 1), Err(MNError::InvalidParameter(_))));
    assert!(matches!(network.find_max_cliques(2, 0), Err(MNError::InvalidParameter(_))));
    assert!(matches!(network.find_max_cliques(2, 3), Err(MNError::InvalidParameter(_))));
    Ok(())
}

#[test]
fn test_budget_exhaustion() -> MNResult<()> {
    let network = MultilayerNetworkBuilder {}.get_complete_graph(8, &["a", "b"])?;
    let result = network.find_max_cliques_with_budget(2, 1, SearchBudget::with_max_steps(3));
    assert!(matches!(result, Err(MNError::BudgetExhausted(3))));
    Ok(())
}
