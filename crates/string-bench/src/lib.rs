//! Micro-benchmark harness for string construction strategies

pub mod buffer;
pub mod cases;
pub mod clock;
pub mod config;
pub mod constants;
mod error;
pub mod observability;
pub mod report;
pub mod suite;

pub use buffer::{DuplexBuffer, OutBuffer, TextBuffer};
pub use cases::{Case, Fixtures};
pub use clock::{Measurement, Millis, measure};
pub use config::{Config, ConfigBuilder, LoggingConfig};
pub use error::{Error, Result};
pub use report::Reporter;
pub use suite::{Suite, SuiteSelection, run, run_suite};
