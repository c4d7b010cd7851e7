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

use lib_multinet::multinet::community::abacus::Abacus;
use lib_multinet::multinet::community::community::Community;
use lib_multinet::multinet::community::label_propagation::LabelPropagation;
use lib_multinet::multinet::error::{MNError, MNResult};
use lib_multinet::multinet::id_types::LayerId;
use lib_multinet::multinet::network::MultilayerNetwork;
use lib_multinet::multinet::search_problem::{AbacusParams, LabelPropagationParams};
use lib_multinet::multinet::test_utils::{build_network, layer, node};

/// Triangles {1,2,3} and {4,5,6} on every given layer.
fn two_triangles(layers: &[&str]) -> MNResult<MultilayerNetwork> {
    let mut rows = Vec::new();
    for l in layers {
        for (a, b) in &[("1", "2"), ("2", "3"), ("1", "3"), ("4", "5"), ("5", "6"), ("4", "6")] {
            rows.push((*a, *b, *l));
        }
    }
    build_network(&rows)
}

fn community(network: &MultilayerNetwork, actors: &[&str], layers: &[&str]) -> MNResult<Community> {
    let mut community = Community::new();
    for a in actors {
        for l in layers {
            community.add_node(node(network, a, l)?);
        }
    }
    Ok(community)
}

#[test]
fn test_label_propagation_finds_triangles() -> MNResult<()> {
    let mut network = two_triangles(&["L"])?;
    let seven = network.add_actor("7")?;
    let l = layer(&network, "L")?;
    network.add_node(seven, l)?;

    for seed in 0..5 {
        let mut rng = StdRng::seed_from_u64(seed);
        let communities =
            network.label_propagation_single(l, &mut rng, &LabelPropagationParams::default())?;
        let found: BTreeSet<Community> = communities.iter().cloned().collect();
        let expected: BTreeSet<Community> = vec![
            community(&network, &["1", "2", "3"], &["L"])?,
            community(&network, &["4", "5", "6"], &["L"])?,
            community(&network, &["7"], &["L"])?,
        ]
        .into_iter()
        .collect();
        assert_eq!(found, expected);
    }
    Ok(())
}

#[test]
fn test_label_propagation_unknown_layer() -> MNResult<()> {
    let network = two_triangles(&["L"])?;
    let mut rng = StdRng::seed_from_u64(0);
    let missing = LayerId::from(3 as usize);
    let result = network.label_propagation_labels(missing, &mut rng, &LabelPropagationParams::default());
    assert!(matches!(result, Err(MNError::NotFound(_))));
    Ok(())
}

#[test]
fn test_abacus() -> MNResult<()> {
    let network = two_triangles(&["A", "B"])?;
    let mut rng = StdRng::seed_from_u64(3);
    let communities = network.abacus(&mut rng, &AbacusParams::new(3, 2))?;
    let found: BTreeSet<Community> = communities.iter().cloned().collect();
    let expected: BTreeSet<Community> = vec![
        community(&network, &["1", "2", "3"], &["A", "B"])?,
        community(&network, &["4", "5", "6"], &["A", "B"])?,
    ]
    .into_iter()
    .collect();
    assert_eq!(found, expected);

    // no group of actors shares communities on three layers
    let mut rng = StdRng::seed_from_u64(3);
    assert!(network.abacus(&mut rng, &AbacusParams::new(3, 3))?.is_empty());
    // nor are there groups of four
    let mut rng = StdRng::seed_from_u64(3);
    assert!(network.abacus(&mut rng, &AbacusParams::new(4, 1))?.is_empty());
    Ok(())
}

#[test]
fn test_abacus_validates_parameters() -> MNResult<()> {
    let network = two_triangles(&["A"])?;
    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(
        network.abacus(&mut rng, &AbacusParams::new(0, 1)),
        Err(MNError::InvalidParameter(_))
    ));
    Ok(())
}
