/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
extern crate lib_multinet;

use std::collections::BTreeSet;

use lib_multinet::multinet::community::clique::{Clique, MaxCliques};
use lib_multinet::multinet::community::clique_adjacency::build_max_adjacency_graph;
use lib_multinet::multinet::community::community::{
    community_jaccard, normalized_mutual_information, Community, CommunityStructure,
};
use lib_multinet::multinet::community::ml_cpm::{
    find_max_communities, find_max_communities_with_budget, MultilayerCliquePercolation,
};
use lib_multinet::multinet::error::{MNError, MNResult};
use lib_multinet::multinet::id_types::NodeId;
use lib_multinet::multinet::network::MultilayerNetwork;
use lib_multinet::multinet::search_problem::{CpmSearchProblem, SearchBudget};
use lib_multinet::multinet::test_utils::{
    actor_set, build_network, layer_set, node, overlapping_triangles, two_layer_triangle,
};

fn nodes(network: &MultilayerNetwork, labels: &[(&str, &str)]) -> MNResult<Community> {
    labels.iter().map(|(a, l)| node(network, a, l)).collect()
}

#[test]
fn test_adjacent_cliques_merge() -> MNResult<()> {
    let network = overlapping_triangles()?;
    let cliques = network.find_max_cliques(3, 1)?;
    assert_eq!(cliques.len(), 2);
    let adjacency = build_max_adjacency_graph(&cliques, 3, 1);
    assert_eq!(adjacency.len(), 2);
    assert_eq!(adjacency.count_edges(), 1);
    let first = adjacency.get_clique(0).ok_or_else(MNError::err_none)?;
    let second = adjacency.get_clique(1).ok_or_else(MNError::err_none)?;
    assert_eq!(adjacency.position(second), Some(1));
    assert!(adjacency.are_adjacent(first, second));
    assert!(adjacency.are_adjacent(second, first));

    let communities = find_max_communities(&adjacency, 1)?;
    assert_eq!(communities.len(), 1);
    let community = communities.iter().next().ok_or_else(MNError::err_none)?;
    assert_eq!(community.cliques, cliques);
    assert_eq!(community.actors(), actor_set(&network, &["1", "2", "3", "4"])?);
    assert_eq!(community.layers, layer_set(&network, &["A"])?);
    Ok(())
}

#[test]
fn test_cliques_on_different_layers_stay_apart() -> MNResult<()> {
    let network = build_network(&[
        ("1", "2", "A"),
        ("2", "3", "A"),
        ("1", "3", "A"),
        ("2", "3", "B"),
        ("3", "4", "B"),
        ("2", "4", "B"),
    ])?;
    let cliques = network.find_max_cliques(3, 1)?;
    assert_eq!(cliques.len(), 2);
    let adjacency = build_max_adjacency_graph(&cliques, 3, 1);
    assert_eq!(adjacency.count_edges(), 0);
    let first = adjacency.get_clique(0).ok_or_else(MNError::err_none)?;
    let second = adjacency.get_clique(1).ok_or_else(MNError::err_none)?;
    assert!(!adjacency.are_adjacent(first, second));
    let stranger = Clique::new(actor_set(&network, &["1", "2"])?, layer_set(&network, &["A"])?);
    assert_eq!(adjacency.position(&stranger), None);
    assert!(!adjacency.are_adjacent(first, &stranger));
    let communities = find_max_communities(&adjacency, 1)?;
    assert_eq!(communities.len(), 2);
    for community in &communities {
        assert_eq!(community.cliques.len(), 1);
    }
    Ok(())
}

#[test]
fn test_community_layers_shrink() -> MNResult<()> {
    // {1,2,3} is a clique on A and B, {2,3,4} only on A
    let network = build_network(&[
        ("1", "2", "A"),
        ("2", "3", "A"),
        ("1", "3", "A"),
        ("2", "4", "A"),
        ("3", "4", "A"),
        ("1", "2", "B"),
        ("2", "3", "B"),
        ("1", "3", "B"),
    ])?;
    let communities = network.mlcpm(3, 1, 1)?;
    assert_eq!(communities.len(), 2);
    let both_layers = nodes(
        &network,
        &[("1", "A"), ("2", "A"), ("3", "A"), ("1", "B"), ("2", "B"), ("3", "B")],
    )?;
    let merged = nodes(&network, &[("1", "A"), ("2", "A"), ("3", "A"), ("4", "A")])?;
    let found: BTreeSet<Community> = communities.iter().cloned().collect();
    assert!(found.contains(&both_layers));
    assert!(found.contains(&merged));

    // requiring two shared layers leaves only the two-layer clique
    let communities = network.mlcpm(3, 2, 2)?;
    assert_eq!(communities.len(), 1);
    assert_eq!(communities.get_community(0), Some(&both_layers));
    assert!(communities.get_community(1).is_none());
    Ok(())
}

#[test]
fn test_mlcpm_two_layer_triangle() -> MNResult<()> {
    let network = two_layer_triangle()?;
    let communities = network.mlcpm(2, 1, 1)?;
    // ({1,2},{A,B}) alone, and merged with ({1,2,3},{A}) on layer A
    let found: BTreeSet<Community> = communities.iter().cloned().collect();
    let expected: BTreeSet<Community> = vec![
        nodes(&network, &[("1", "A"), ("2", "A"), ("1", "B"), ("2", "B")])?,
        nodes(&network, &[("1", "A"), ("2", "A"), ("3", "A")])?,
    ]
    .into_iter()
    .collect();
    assert_eq!(found, expected);
    Ok(())
}

#[test]
fn test_mlcpm_validates_parameters() -> MNResult<()> {
    let network = overlapping_triangles()?;
    assert!(matches!(network.mlcpm(3, 2, 1), Err(MNError::InvalidParameter(_))));
    assert!(matches!(network.mlcpm(0, 1, 1), Err(MNError::InvalidParameter(_))));
    assert!(network.mlcpm(5, 1, 1)?.is_empty());
    Ok(())
}

#[test]
fn test_mlcpm_budget() -> MNResult<()> {
    let network = overlapping_triangles()?;
    let problem = CpmSearchProblem::new(3, 1, 1).with_budget(SearchBudget::with_max_steps(1));
    assert!(matches!(
        network.mlcpm_with_problem(&problem),
        Err(MNError::BudgetExhausted(_))
    ));
    let cliques = network.find_max_cliques(3, 1)?;
    let adjacency = build_max_adjacency_graph(&cliques, 3, 1);
    assert!(find_max_communities_with_budget(&adjacency, 1, SearchBudget::with_max_steps(0)).is_err());
    Ok(())
}

#[test]
fn test_community_utilities() -> MNResult<()> {
    let network = overlapping_triangles()?;
    let left = nodes(&network, &[("1", "A"), ("2", "A"), ("3", "A")])?;
    let right = nodes(&network, &[("2", "A"), ("3", "A"), ("4", "A")])?;
    assert_eq!(community_jaccard(&left, &right), 0.5);
    assert_eq!(community_jaccard(&Community::new(), &Community::new()), 0.0);
    assert_eq!(left.actors(), actor_set(&network, &["1", "2", "3"])?);
    assert_eq!(left.layers(), layer_set(&network, &["A"])?);
    let two: NodeId = node(&network, "2", "A")?;
    assert!(left.contains(&two));
    Ok(())
}

#[test]
fn test_normalized_mutual_information() -> MNResult<()> {
    let network = build_network(&[("a", "b", "L"), ("c", "d", "L")])?;
    let split = |groups: &[Vec<&str>]| -> MNResult<CommunityStructure> {
        groups
            .iter()
            .map(|g| g.iter().map(|a| node(&network, a, "L")).collect::<MNResult<Community>>())
            .collect()
    };
    let by_edge = split(&[vec!["a", "b"], vec!["c", "d"]])?;
    let across = split(&[vec!["a", "c"], vec!["b", "d"]])?;
    assert!((normalized_mutual_information(&by_edge, &by_edge, 4) - 1.0).abs() < 1e-9);
    assert!(normalized_mutual_information(&by_edge, &across, 4).abs() < 1e-9);
    Ok(())
}
