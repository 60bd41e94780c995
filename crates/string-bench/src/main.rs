use std::io;
use std::path::PathBuf;

use clap::Parser;
use string_bench::config::{self, ConfigBuilder};
use string_bench::observability::init_logging;
use string_bench::{Fixtures, Reporter, SuiteSelection};

#[derive(Parser, Debug)]
#[command(name = "string-bench")]
#[command(about = "Time several ways of building a formatted string", long_about = None)]
#[command(version)]
struct Args {
    /// Suites to run (basic, conversion or all)
    #[arg(short, long, env = "STRING_BENCH_SUITE")]
    suite: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Enable JSON logging output
    #[arg(long)]
    json_logs: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // CLI switches override the config file
    let mut builder = if let Some(ref path) = args.config {
        config::load_config_from_path(path)?
    } else {
        ConfigBuilder::new()
    };

    if let Some(ref suite) = args.suite {
        builder = builder.suite(suite.parse::<SuiteSelection>()?);
    }

    if args.verbose {
        builder = builder.log_level("debug".to_string());
    }

    if args.json_logs {
        builder = builder.json_logs(true);
    }

    let config = builder.build()?;
    init_logging(config.logging());
    if let Some(ref path) = args.config {
        tracing::debug!("Loaded configuration from {}", path.display());
    }

    let fixtures = Fixtures::default();
    tracing::info!(
        suite = %config.suite(),
        loops = fixtures.loop_count,
        "Starting string construction benchmark"
    );

    let mut reporter = Reporter::new(io::stdout().lock());
    string_bench::run(config.suite(), &fixtures, &mut reporter)?;

    Ok(())
}
