//! Benchmark cases.
//!
//! Every case writes into a caller-provided scratch string for a fixed number
//! of iterations and reports how many iterations it performed. The final
//! scratch value is left in place but nothing depends on it.

pub mod basic;
pub mod conversion;

use crate::Result;
use crate::constants::DEFAULT_LOOP_COUNT;

/// Signature shared by all cases: scratch string in, iteration count out.
pub type CaseFn = fn(&mut String, &Fixtures) -> Result<u64>;

/// Read-only inputs shared by every case of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fixtures {
    pub loop_count: u64,
}

impl Fixtures {
    #[must_use]
    pub const fn new(loop_count: u64) -> Self {
        Self { loop_count }
    }
}

impl Default for Fixtures {
    fn default() -> Self {
        Self::new(DEFAULT_LOOP_COUNT)
    }
}

/// A labelled string construction strategy.
#[derive(Debug, Clone, Copy)]
pub struct Case {
    pub label: &'static str,
    pub run: CaseFn,
}

impl Case {
    pub fn run(&self, scratch: &mut String, fixtures: &Fixtures) -> Result<u64> {
        (self.run)(scratch, fixtures)
    }
}

/// Call `body` `loop_count` times, stopping at the first error.
///
/// Returns the number of completed iterations.
pub fn repeat<F>(loop_count: u64, mut body: F) -> Result<u64>
where
    F: FnMut() -> Result<()>,
{
    let mut completed = 0;
    while completed < loop_count {
        body()?;
        completed += 1;
    }
    Ok(completed)
}
