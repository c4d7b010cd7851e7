/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
extern crate clap;
extern crate env_logger;
extern crate lib_multinet;

use std::io;
use std::time::Duration;

use clap::{App, Arg, ArgMatches};

use lib_multinet::multinet::community_transformer::{CommunityAlgorithm, CommunityTransformer};
use lib_multinet::multinet::error::{MNError, MNResult};
use lib_multinet::multinet::input::Input;
use lib_multinet::multinet::output::Output;
use lib_multinet::multinet::search_problem::AbacusParams;
use lib_multinet::multinet::transformer_base::TransformerBase;

fn get_command_line_args() -> ArgMatches<'static> {
    let matches: ArgMatches = App::new("Multinet Community Miner")
        .version("0.1.0")
        .author(
            "
                Alex Peysakhovich <alexpeys@fb.com>, \
                Bogdan State <bogdanstate@fb.com>, \
                Julian Mestre <julianmestre@fb.com>, \
                Michael Chen <mvc@fb.com>,
                Matthew Menard <mlmenard@fb.com>,
                Pär Winzell <zell@fb.com>",
        )
        .about(
            "Finds communities in multilayer graphs read from stdin as \
             graph_id<TAB>actor1<TAB>actor2<TAB>layer rows.",
        )
        .arg(
            Arg::with_name("algorithm")
                .short("a")
                .long("algorithm")
                .takes_value(true)
                .possible_values(&["mlcpm", "abacus"])
                .default_value("mlcpm")
                .help("Community detection method."),
        )
        .arg(
            Arg::with_name("k")
                .short("k")
                .takes_value(true)
                .default_value("3")
                .help("[mlcpm] Minimum number of actors in a clique."),
        )
        .arg(
            Arg::with_name("m1")
                .long("m1")
                .takes_value(true)
                .default_value("1")
                .help("[mlcpm] Minimum number of layers of a clique."),
        )
        .arg(
            Arg::with_name("m2")
                .long("m2")
                .takes_value(true)
                .default_value("1")
                .help("[mlcpm] Minimum number of layers shared by adjacent cliques."),
        )
        .arg(
            Arg::with_name("max_steps")
                .long("max_steps")
                .takes_value(true)
                .help("[mlcpm] Give up on a graph after this many search steps."),
        )
        .arg(
            Arg::with_name("timeout_secs")
                .long("timeout_secs")
                .takes_value(true)
                .help("[mlcpm] Give up on a graph after this many seconds."),
        )
        .arg(
            Arg::with_name("min_actors")
                .long("min_actors")
                .takes_value(true)
                .default_value("3")
                .help("[abacus] Minimum number of actors in a community."),
        )
        .arg(
            Arg::with_name("min_layers")
                .long("min_layers")
                .takes_value(true)
                .default_value("1")
                .help("[abacus] Minimum number of layers of a community."),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .default_value("0")
                .help("[abacus] Seed of the label propagation random order."),
        )
        .get_matches();
    matches
}

fn get_usize(matches: &ArgMatches, name: &str) -> MNResult<usize> {
    let value = matches.value_of(name).ok_or_else(MNError::err_none)?;
    Ok(value.parse::<usize>()?)
}

fn get_optional_usize(matches: &ArgMatches, name: &str) -> MNResult<Option<usize>> {
    match matches.value_of(name) {
        Some(value) => Ok(Some(value.parse::<usize>()?)),
        None => Ok(None),
    }
}

fn main() -> MNResult<()> {
    env_logger::init();
    let matches: ArgMatches = get_command_line_args();
    let algorithm = match matches.value_of("algorithm") {
        Some("abacus") => CommunityAlgorithm::Abacus(AbacusParams::new(
            get_usize(&matches, "min_actors")?,
            get_usize(&matches, "min_layers")?,
        )),
        _ => CommunityAlgorithm::MlCpm {
            k: get_usize(&matches, "k")?,
            m1: get_usize(&matches, "m1")?,
            m2: get_usize(&matches, "m2")?,
        },
    };
    let seed = get_usize(&matches, "seed")? as u64;
    let timeout = get_optional_usize(&matches, "timeout_secs")?.map(|s| Duration::from_secs(s as u64));
    let mut transformer = CommunityTransformer::new(algorithm)
        .with_max_steps(get_optional_usize(&matches, "max_steps")?)
        .with_timeout(timeout)
        .with_seed(seed);
    let stdio: io::Stdin = io::stdin();
    let input: Input = Input::console(&stdio);
    let mut dummy: Vec<u8> = Vec::new();
    let output: Output = Output::console(&mut dummy);
    transformer.run(input, output)?;
    Ok(())
}
