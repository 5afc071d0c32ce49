mod commands;

use std::io::{self, Write};
use std::path::Path;

use anyhow::Context;
use commands::{FreqcutCli, FreqcutCommand};
use freqcut_core::{QuantileBucketer, QueryFreq};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = FreqcutCli::parse_args();
    match args.command {
        FreqcutCommand::Quantiles {
            filename,
            quantiles,
        } => {
            let bucketer = load(filename.as_deref())?;
            let counts = bucketer.quantiles(quantiles)?;
            let mut out = io::BufWriter::new(io::stdout().lock());
            for (i, count) in counts.iter().enumerate() {
                writeln!(out, "{}\t{}", i + 1, count)?;
            }
            out.flush()?;
        }

        FreqcutCommand::Head {
            filename,
            quantiles,
        } => {
            let bucketer = load(filename.as_deref())?;
            print_queries(bucketer.head(quantiles)?)?;
        }

        FreqcutCommand::Tail {
            filename,
            quantiles,
        } => {
            let bucketer = load(filename.as_deref())?;
            print_queries(bucketer.tail(quantiles)?)?;
        }

        FreqcutCommand::Middle {
            filename,
            quantiles,
        } => {
            let bucketer = load(filename.as_deref())?;
            print_queries(bucketer.middle(quantiles)?)?;
        }
    }
    Ok(())
}

fn load(path: Option<&Path>) -> anyhow::Result<QuantileBucketer> {
    let table = freqcut_io::read_path(path).context("failed to read frequency table")?;
    Ok(QuantileBucketer::new(table))
}

fn print_queries(items: &[QueryFreq]) -> io::Result<()> {
    let mut out = io::BufWriter::new(io::stdout().lock());
    for item in items {
        writeln!(out, "{}", item.query)?;
    }
    out.flush()
}
