//! Suite selection and the case runner

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::cases::{Case, Fixtures, basic, conversion};
use crate::clock::measure;
use crate::report::Reporter;
use crate::{Error, Result};

/// An ordered group of related cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suite {
    /// Three literals, no numeric conversion
    Basic,
    /// Fixed record with one integer-to-text conversion
    Conversion,
}

impl Suite {
    #[must_use]
    pub const fn cases(self) -> &'static [Case] {
        match self {
            Self::Basic => basic::CASES,
            Self::Conversion => conversion::CASES,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Conversion => "conversion",
        }
    }
}

impl fmt::Display for Suite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which suites a run executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuiteSelection {
    Basic,
    #[default]
    Conversion,
    All,
}

impl SuiteSelection {
    #[must_use]
    pub const fn suites(self) -> &'static [Suite] {
        match self {
            Self::Basic => &[Suite::Basic],
            Self::Conversion => &[Suite::Conversion],
            Self::All => &[Suite::Basic, Suite::Conversion],
        }
    }
}

impl FromStr for SuiteSelection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "conversion" => Ok(Self::Conversion),
            "all" => Ok(Self::All),
            other => Err(Error::Config(format!(
                "Unknown suite '{other}', expected basic, conversion or all"
            ))),
        }
    }
}

impl fmt::Display for SuiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Basic => "basic",
            Self::Conversion => "conversion",
            Self::All => "all",
        })
    }
}

/// Run every case of `suite` in declared order: header, timed run, cost.
pub fn run_suite<W: Write>(
    suite: Suite,
    fixtures: &Fixtures,
    reporter: &mut Reporter<W>,
) -> Result<()> {
    tracing::info!(%suite, cases = suite.cases().len(), "Running suite");

    for case in suite.cases() {
        reporter.header(case.label)?;
        let measurement = measure(|scratch| case.run(scratch, fixtures))?;
        tracing::debug!(
            %suite,
            case = case.label,
            iterations = measurement.output,
            elapsed_ms = measurement.elapsed.get(),
            "Case finished"
        );
        reporter.cost(measurement.elapsed)?;
    }

    Ok(())
}

/// Print the banner once, then run the selected suites.
pub fn run<W: Write>(
    selection: SuiteSelection,
    fixtures: &Fixtures,
    reporter: &mut Reporter<W>,
) -> Result<()> {
    reporter.banner(fixtures.loop_count)?;
    for &suite in selection.suites() {
        run_suite(suite, fixtures, reporter)?;
    }
    reporter.flush()
}
