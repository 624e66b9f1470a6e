use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufWriter, Write};
use tracing::{Level, info};

use suitegen::constants;
use suitegen::{ActivityGenerator, ActivityTemplate, GeneratorConfig, LineEnding};

#[derive(Parser)]
#[command(
    name = "suitegen",
    about = "Generate synthetic activity records as RDF triples",
    version
)]
struct Cli {
    /// Batch bound: one record per day offset in 1..COUNT
    #[arg(default_value_t = constants::DEFAULT_COUNT)]
    count: u64,

    /// Seed the random source for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Base timestamp the `suite:from` offsets start at
    #[arg(long, default_value = constants::BASE_TIMESTAMP)]
    base: String,

    /// `suite:source` URI
    #[arg(long, default_value = constants::SOURCE_URI)]
    source: String,

    /// `suite:activityID` integer
    #[arg(long, default_value_t = constants::ACTIVITY_ID, allow_negative_numbers = true)]
    activity_id: i64,

    /// `suite:activityType` term
    #[arg(long, default_value = constants::ACTIVITY_TYPE)]
    activity_type: String,

    /// `suite:state` term
    #[arg(long, default_value = constants::STATE)]
    state: String,

    /// Terminate triples with LF instead of CRLF
    #[arg(long)]
    lf: bool,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn template(&self) -> ActivityTemplate {
        ActivityTemplate {
            source: self.source.clone(),
            activity_id: self.activity_id,
            activity_type: self.activity_type.clone(),
            state: self.state.clone(),
            base_timestamp: self.base.clone(),
            ..ActivityTemplate::default()
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // stdout carries the triples; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let count = i64::try_from(cli.count).context("count is too large")?;
    let line_ending = if cli.lf {
        LineEnding::Lf
    } else {
        LineEnding::Crlf
    };

    let mut generator =
        ActivityGenerator::new(cli.template(), GeneratorConfig { seed: cli.seed })
            .context("invalid activity template")?;

    let stdout = io::stdout().lock();
    let mut out = BufWriter::with_capacity(128 * 1024, stdout);

    let written = suitegen::write_batch(&mut out, &mut generator, count, line_ending)
        .context("failed to write activities")?;
    out.flush()?;

    info!(written, "activities written");
    Ok(())
}
