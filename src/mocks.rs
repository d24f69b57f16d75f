//! Test doubles: a scripted console and a scripted random source.
//!
//! These let a complete game run against a fixed transcript, which is how
//! the end-to-end scenarios exercise the controller without terminal I/O.

use std::collections::VecDeque;
use std::io;

use rand::{CryptoRng, Error, RngCore};

use crate::console::Console;

/// Console that replays scripted player input and records every output
/// line for later assertions.
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    pub output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    pub fn contains(&self, line: &str) -> bool {
        self.output.iter().any(|emitted| emitted == line)
    }
}

impl Console for ScriptedConsole {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.output.push(line.to_string());
        Ok(())
    }

    fn read_line(&mut self) -> io::Result<String> {
        self.inputs.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "input script exhausted")
        })
    }
}

/// RNG that replays scripted draws.
///
/// `next_u32` pops queued values; a scripted value below the bound it will
/// be reduced by passes rejection sampling unchanged, so scenarios list the
/// intended draw directly. `fill_bytes` emits a distinct counter pattern
/// per call so every generated key differs.
pub struct ScriptedRng {
    draws: VecDeque<u32>,
    key_counter: u8,
}

impl ScriptedRng {
    pub fn new<I: IntoIterator<Item = u32>>(draws: I) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            key_counter: 0,
        }
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        self.draws.pop_front().expect("scripted draws exhausted")
    }

    fn next_u64(&mut self) -> u64 {
        u64::from(self.next_u32())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.key_counter = self.key_counter.wrapping_add(1);
        for (offset, byte) in dest.iter_mut().enumerate() {
            *byte = self.key_counter.wrapping_add(offset as u8);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

// Scripted draws are not secret; the marker only satisfies the protocol's
// generator bound in tests.
impl CryptoRng for ScriptedRng {}
