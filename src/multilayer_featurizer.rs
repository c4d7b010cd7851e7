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

use clap::{App, ArgMatches};

use lib_multinet::multinet::error::MNResult;
use lib_multinet::multinet::featurizer_transformer::FeaturizerTransformer;
use lib_multinet::multinet::input::Input;
use lib_multinet::multinet::output::Output;
use lib_multinet::multinet::transformer_base::TransformerBase;

fn get_command_line_args() -> ArgMatches<'static> {
    let matches: ArgMatches = App::new("Multinet Multilayer Featurizer")
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
        .about("Prints size, degree and layer relevance features of multilayer graphs from stdin.")
        .get_matches();
    matches
}

fn main() -> MNResult<()> {
    env_logger::init();
    let _matches: ArgMatches = get_command_line_args();
    let mut transformer = FeaturizerTransformer::new();
    let stdio: io::Stdin = io::stdin();
    let input: Input = Input::console(&stdio);
    let mut dummy: Vec<u8> = Vec::new();
    let output: Output = Output::console(&mut dummy);
    transformer.run(input, output)?;
    Ok(())
}
