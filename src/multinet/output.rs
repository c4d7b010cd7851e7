/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
use std::io::{self, Write};

use crate::multinet::error::MNResult;

/// Line sink for the transformers. `console` writes to stdout; `string` collects the
/// lines into the given buffer, which is what the tests read back; `writer` sends
/// them to any other destination.
pub struct Output<'a> {
    destination: Box<dyn Write + Send + 'a>,
    is_stdout: bool,
}

impl<'a> Output<'a> {
    pub fn console(buffer: &'a mut Vec<u8>) -> Output<'a> {
        Output {
            destination: Box::new(buffer),
            is_stdout: true,
        }
    }
    pub fn string(buffer: &'a mut Vec<u8>) -> Output<'a> {
        Self::writer(buffer)
    }
    pub fn writer<W: Write + Send + 'a>(destination: W) -> Output<'a> {
        Output {
            destination: Box::new(destination),
            is_stdout: false,
        }
    }
    pub fn print(&mut self, text: String) -> MNResult<()> {
        if self.is_stdout {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", text)?;
            return Ok(());
        }
        self.write_all(text.as_bytes())?;
        self.write_all(b"\n")?;
        self.flush()?;
        Ok(())
    }
}

impl<'a> Write for Output<'a> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.destination.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.destination.flush()
    }
}
