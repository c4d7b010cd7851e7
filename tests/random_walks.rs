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

use lib_multinet::multinet::algorithms::random_walks::{RandomWalks, Walker};
use lib_multinet::multinet::error::{MNError, MNResult};
use lib_multinet::multinet::graph_base::MultilayerGraphBase;
use lib_multinet::multinet::id_types::NodeId;
use lib_multinet::multinet::test_utils::{actor, build_network, node, two_layer_triangle};

#[test]
fn test_walk_stays_on_layer() -> MNResult<()> {
    let network = two_layer_triangle()?;
    let identity = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
    let mut walker = Walker::new(&network, 0.0, identity, StdRng::seed_from_u64(11))?;
    let start = walker.now();
    assert!(walker.teleported());
    for _ in 0..50 {
        let next = walker.next()?;
        assert_eq!(next.layer, start.layer);
        assert!(network.has_node(next));
        assert!(walker.action());
        assert!(!walker.teleported());
    }
    Ok(())
}

#[test]
fn test_walk_reaches_every_neighbor_on_the_layer() -> MNResult<()> {
    let mut network = build_network(&[
        ("c", "x", "A"),
        ("c", "y", "A"),
        ("c", "z", "A"),
        ("w", "v", "B"),
    ])?;
    // an interlayer out-neighbor of c@A that a same-layer step must skip
    network.add_edge(node(&network, "c", "A")?, node(&network, "w", "B")?)?;
    let identity = vec![vec![1.0, 0.0], vec![0.0, 1.0]];
    let mut walker = Walker::new(&network, 0.0, identity, StdRng::seed_from_u64(23))?;
    let start = walker.now();
    let mut visited: BTreeSet<NodeId> = BTreeSet::new();
    for _ in 0..300 {
        visited.insert(walker.next()?);
        assert!(walker.action());
    }
    let expected: BTreeSet<NodeId> = network.get_nodes_in_layer(start.layer).into_iter().collect();
    assert_eq!(visited, expected);
    Ok(())
}

#[test]
fn test_teleport_always() -> MNResult<()> {
    let network = two_layer_triangle()?;
    let uniform = vec![vec![0.5, 0.5], vec![0.5, 0.5]];
    let mut walker = Walker::new(&network, 1.0, uniform, StdRng::seed_from_u64(5))?;
    for _ in 0..20 {
        let next = walker.next()?;
        assert!(walker.teleported());
        assert!(network.has_node(next));
    }
    Ok(())
}

#[test]
fn test_invalid_walkers() -> MNResult<()> {
    let network = two_layer_triangle()?;
    let uniform = vec![vec![0.5, 0.5], vec![0.5, 0.5]];
    let rng = || StdRng::seed_from_u64(0);
    assert!(matches!(
        Walker::new(&network, 1.5, uniform.clone(), rng()),
        Err(MNError::InvalidParameter(_))
    ));
    assert!(Walker::new(&network, 0.1, vec![vec![1.0]], rng()).is_err());
    assert!(Walker::new(&network, 0.1, vec![vec![0.5, 0.4], vec![0.5, 0.5]], rng()).is_err());
    assert!(Walker::new(&network, 0.1, vec![vec![1.5, -0.5], vec![0.5, 0.5]], rng()).is_err());
    Ok(())
}

#[test]
fn test_occupation() -> MNResult<()> {
    let network = two_layer_triangle()?;
    let uniform = vec![vec![0.5, 0.5], vec![0.5, 0.5]];
    let visits = network.occupation(0.1, uniform, 2000, StdRng::seed_from_u64(1))?;
    let total: usize = visits.values().sum();
    assert!(total > 0 && total <= 2000);
    for name in &["1", "2", "3"] {
        assert!(visits.get(&actor(&network, name)?).map_or(false, |v| *v > 0));
    }
    Ok(())
}
