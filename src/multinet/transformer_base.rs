/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use std::io::prelude::*;
use std::sync::mpsc::{channel, Sender};
use std::sync::Arc;

use log::{debug, info};

use crate::multinet::error::{MNError, MNResult};
use crate::multinet::id_types::GraphId;
use crate::multinet::input::Input;
use crate::multinet::line_processor::LineProcessorBase;
use crate::multinet::output::Output;
use crate::multinet::row::Row;

/// Sends one output line to the writer thread.
pub fn emit(output: &Sender<(Option<String>, bool)>, line: String) -> MNResult<()> {
    output
        .send((Some(line), false))
        .map_err(|_| MNError::new("output channel closed"))
}

pub trait TransformerBase {
    fn get_line_processor(&self) -> Arc<dyn LineProcessorBase>;
    // logic for taking row and storing into self via side-effect
    fn process_row(&mut self, row: Box<dyn Row>) -> MNResult<()>;
    // logic for processing batch of rows, once all rows are ready
    fn process_batch(&self, graph_id: GraphId, output: &Sender<(Option<String>, bool)>) -> MNResult<()>;
    // reset transformer state after processing;
    fn reset(&mut self) -> MNResult<()>;

    // main loop, runs through lines grouped by graph_id, updates state accordingly
    // and runs process_batch when graph_id changes. Output lines are written by a
    // separate thread in the order they were emitted.
    fn run(&mut self, input: Input, mut output: Output) -> MNResult<()> {
        let line_processor = self.get_line_processor();
        let ret = crossbeam::scope(|scope| -> MNResult<()> {
            let (sender, receiver) = channel::<(Option<String>, bool)>();
            let writer = scope.spawn(move |_| -> MNResult<usize> {
                let mut num_written: usize = 0;
                while let Ok((line, shutdown)) = receiver.recv() {
                    if shutdown {
                        break;
                    }
                    if let Some(string) = line {
                        output.print(string)?;
                        num_written += 1;
                    }
                }
                Ok(num_written)
            });
            let process_input = || -> MNResult<(usize, GraphId)> {
                let mut current_graph_id: Option<GraphId> = None;
                let mut num_batches: usize = 0;
                for line in input.lines() {
                    let line = line?;
                    if line.is_empty() {
                        continue;
                    }
                    let row: Box<dyn Row> = line_processor.process_line(line)?;
                    let new_graph_id: GraphId = row.get_graph_id();
                    if let Some(some_current_graph_id) = current_graph_id {
                        if new_graph_id != some_current_graph_id {
                            self.process_batch(some_current_graph_id, &sender)?;
                            num_batches += 1;
                            self.reset()?;
                        }
                    }
                    current_graph_id = Some(new_graph_id);
                    self.process_row(row)?;
                }
                let last_graph_id =
                    current_graph_id.ok_or_else(|| MNError::new("No input rows!"))?;
                self.process_batch(last_graph_id, &sender)?;
                num_batches += 1;
                self.reset()?;
                Ok((num_batches, last_graph_id))
            };
            let processed = process_input();
            // the writer may already be gone after a failed write
            let _ = sender.send((None, true));
            let written = writer
                .join()
                .map_err(|_| MNError::new("writer thread panicked"))?;
            // a failed write also closes the channel; report the write error first
            let num_written = written?;
            let (num_batches, last_graph_id) = processed?;
            debug!("last batch was {}", last_graph_id);
            info!("processed {} graphs, wrote {} lines", num_batches, num_written);
            Ok(())
        });
        ret.map_err(|_| MNError::new("transformer thread panicked"))?
    }
}
