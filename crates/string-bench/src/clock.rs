//! Monotonic timing of a single operation

use std::fmt;
use std::time::{Duration, Instant};

/// Elapsed time in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Millis(f32);

impl Millis {
    #[must_use]
    pub fn from_duration(duration: Duration) -> Self {
        Self((duration.as_secs_f64() * 1_000.0) as f32)
    }

    #[must_use]
    pub const fn get(self) -> f32 {
        self.0
    }
}

impl From<Duration> for Millis {
    fn from(duration: Duration) -> Self {
        Self::from_duration(duration)
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Result of a timed operation.
#[derive(Debug, Clone, Copy)]
pub struct Measurement<T> {
    pub elapsed: Millis,
    pub output: T,
}

/// Run `op` exactly once against a fresh scratch string and time it.
///
/// Uses [`Instant`], which never goes backwards under wall-clock adjustments.
/// An error from `op` is returned as-is and no measurement is produced.
pub fn measure<T, E, F>(op: F) -> Result<Measurement<T>, E>
where
    F: FnOnce(&mut String) -> Result<T, E>,
{
    let mut scratch = String::new();
    let start = Instant::now();
    let output = op(&mut scratch)?;
    let elapsed = start.elapsed();
    Ok(Measurement {
        elapsed: elapsed.into(),
        output,
    })
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_noop_is_non_negative() {
        let m = measure(|_| Ok::<_, ()>(())).unwrap();
        assert!(m.elapsed.get() >= 0.0);
    }

    #[test]
    fn test_op_invoked_once() {
        let calls = Cell::new(0);
        let m = measure(|_| {
            calls.set(calls.get() + 1);
            Ok::<_, ()>(7)
        })
        .unwrap();
        assert_eq!(calls.get(), 1);
        assert_eq!(m.output, 7);
    }

    #[test]
    fn test_scratch_starts_empty() {
        let m = measure(|scratch| Ok::<_, ()>(scratch.is_empty())).unwrap();
        assert!(m.output);
    }

    #[test]
    fn test_error_propagates() {
        let result = measure(|_| Err::<(), _>("boom"));
        assert_eq!(result.unwrap_err(), "boom");
    }

    #[test]
    fn test_millis_from_duration() {
        assert_eq!(Millis::from_duration(Duration::from_millis(250)).get(), 250.0);
        assert_eq!(Millis::from_duration(Duration::from_micros(1500)).get(), 1.5);
        assert_eq!(Millis::default().get(), 0.0);
    }

    #[test]
    fn test_millis_display() {
        assert_eq!(Millis::from_duration(Duration::from_micros(1500)).to_string(), "1.5");
        assert_eq!(Millis::from_duration(Duration::from_millis(42)).to_string(), "42");
    }
}
