/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
extern crate lib_multinet;

use std::collections::BTreeSet;

use lib_multinet::multinet::algorithms::clustering::Clustering;
use lib_multinet::multinet::algorithms::degree::Degree;
use lib_multinet::multinet::algorithms::distance::ParetoDistance;
use lib_multinet::multinet::algorithms::neighborhood::Neighborhood;
use lib_multinet::multinet::algorithms::relevance::Relevance;
use lib_multinet::multinet::components::EdgeMode;
use lib_multinet::multinet::error::{MNError, MNResult};
use lib_multinet::multinet::id_types::ActorId;
use lib_multinet::multinet::network_builder::{MultilayerNetworkBuilder, TMultilayerNetworkBuilder};
use lib_multinet::multinet::test_utils::{actor, actor_set, build_network, layer, node, two_layer_triangle};

#[test]
fn test_degree() -> MNResult<()> {
    let network = two_layer_triangle()?;
    let (a, b) = (layer(&network, "A")?, layer(&network, "B")?);
    let one = actor(&network, "1")?;
    let three = actor(&network, "3")?;
    assert_eq!(network.degree(one, &[a, b], EdgeMode::InOut)?, 3);
    assert_eq!(network.degree_on_layer(one, b, EdgeMode::InOut)?, 1);
    assert_eq!(network.degree_on_layer(three, b, EdgeMode::InOut)?, 0);
    assert_eq!(network.degree_mean(one, &[a, b], EdgeMode::InOut)?, 1.5);
    assert_eq!(network.degree_deviation(one, &[a, b], EdgeMode::InOut)?, 0.5);
    assert!(network.degree_mean(one, &[], EdgeMode::InOut).is_err());
    let missing = ActorId::from(99 as usize);
    assert!(matches!(network.degree(missing, &[a], EdgeMode::InOut), Err(MNError::NotFound(_))));
    Ok(())
}

#[test]
fn test_neighborhood() -> MNResult<()> {
    let network = two_layer_triangle()?;
    let (a, b) = (layer(&network, "A")?, layer(&network, "B")?);
    let one = actor(&network, "1")?;
    assert_eq!(network.neighbors_on(one, &[b], EdgeMode::InOut)?, actor_set(&network, &["2"])?);
    assert_eq!(
        network.neighbors_on(one, &[a, b], EdgeMode::InOut)?,
        actor_set(&network, &["2", "3"])?
    );
    // 2 is also a neighbor on B, so only 3 is exclusive to A
    assert_eq!(network.xneighbors(one, &[a], EdgeMode::InOut)?, actor_set(&network, &["3"])?);
    assert_eq!(network.xneighbors(one, &[b], EdgeMode::InOut)?, BTreeSet::new());
    let redundancy = network.connective_redundancy(one, &[a, b], EdgeMode::InOut)?;
    assert!((redundancy - 1.0 / 3.0).abs() < 1e-9);
    Ok(())
}

#[test]
fn test_relevance() -> MNResult<()> {
    let network = two_layer_triangle()?;
    let (a, b) = (layer(&network, "A")?, layer(&network, "B")?);
    let one = actor(&network, "1")?;
    assert_eq!(network.relevance(one, &[a], EdgeMode::InOut)?, 1.0);
    assert_eq!(network.relevance(one, &[b], EdgeMode::InOut)?, 0.5);
    assert_eq!(network.xrelevance(one, &[a], EdgeMode::InOut)?, 0.5);
    assert_eq!(network.xrelevance(one, &[b], EdgeMode::InOut)?, 0.0);

    let lonely = build_network(&[("x", "x", "A"), ("y", "z", "A")])?;
    let x = actor(&lonely, "x")?;
    let la = layer(&lonely, "A")?;
    assert_eq!(lonely.relevance(x, &[la], EdgeMode::InOut)?, 0.0);
    Ok(())
}

#[test]
fn test_clustering_coefficient() -> MNResult<()> {
    let network = two_layer_triangle()?;
    assert_eq!(network.cc(node(&network, "1", "A")?)?, 1.0);
    assert_eq!(network.cc(node(&network, "1", "B")?)?, 0.0);
    assert_eq!(network.avg_cc(layer(&network, "A")?)?, 1.0);
    assert_eq!(network.avg_cc(layer(&network, "B")?)?, 0.0);

    let path = MultilayerNetworkBuilder {}.get_path_graph(4, &["a"])?;
    assert_eq!(path.avg_cc(layer(&path, "a")?)?, 0.0);

    // a star with one extra spoke between two leaves
    let star = build_network(&[("c", "1", "s"), ("c", "2", "s"), ("c", "3", "s"), ("1", "2", "s")])?;
    let cc = star.cc(node(&star, "c", "s")?)?;
    assert!((cc - 1.0 / 3.0).abs() < 1e-9);
    Ok(())
}

#[test]
fn test_pareto_distances() -> MNResult<()> {
    let network = build_network(&[
        ("x", "y", "A"),
        ("y", "z", "A"),
        ("x", "z", "B"),
        ("w", "w", "A"),
    ])?;
    let distances = network.pareto_distances(actor(&network, "x")?)?;
    assert_eq!(distances.layers, vec![layer(&network, "A")?, layer(&network, "B")?]);

    let get = |name: &str| -> MNResult<Vec<Vec<usize>>> {
        let set = distances.get(actor(&network, name)?).ok_or_else(MNError::err_none)?;
        Ok(set.iter().cloned().collect())
    };
    assert_eq!(get("x")?, vec![vec![0, 0]]);
    assert_eq!(get("y")?, vec![vec![1, 0]]);
    // two steps on A or one on B; neither is better on both layers
    assert_eq!(get("z")?, vec![vec![0, 1], vec![2, 0]]);
    assert!(get("w")?.is_empty());

    let missing = ActorId::from(42 as usize);
    assert!(network.pareto_distances(missing).is_err());
    Ok(())
}
