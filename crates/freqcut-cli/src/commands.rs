//! Argument definitions for the freqcut binary

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "freqcut",
    version,
    about = "Partition a ranked query-frequency list into equal-mass quantile buckets"
)]
pub struct FreqcutCli {
    #[command(subcommand)]
    pub command: FreqcutCommand,
}

impl FreqcutCli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[derive(Debug, Subcommand)]
pub enum FreqcutCommand {
    #[command(
        name = "quantiles",
        about = "Print per-bucket item counts in ascending order"
    )]
    Quantiles {
        /// CSV file to read; stdin when omitted
        filename: Option<PathBuf>,

        /// Number of quantile buckets
        #[arg(short, long, default_value_t = 2)]
        quantiles: usize,
    },

    #[command(name = "head", about = "List the queries comprising the top quantile")]
    Head {
        /// CSV file to read; stdin when omitted
        filename: Option<PathBuf>,

        /// Number of quantile buckets
        #[arg(short, long, default_value_t = 2)]
        quantiles: usize,
    },

    #[command(name = "tail", about = "List the queries comprising the bottom quantile")]
    Tail {
        /// CSV file to read; stdin when omitted
        filename: Option<PathBuf>,

        /// Number of quantile buckets
        #[arg(short, long, default_value_t = 2)]
        quantiles: usize,
    },

    #[command(
        name = "middle",
        about = "List the queries between the top and bottom quantiles"
    )]
    Middle {
        /// CSV file to read; stdin when omitted
        filename: Option<PathBuf>,

        /// Number of quantile buckets
        #[arg(short, long, default_value_t = 3)]
        quantiles: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = FreqcutCli::try_parse_from(["freqcut", "quantiles"]).unwrap();
        match cli.command {
            FreqcutCommand::Quantiles {
                filename,
                quantiles,
            } => {
                assert!(filename.is_none());
                assert_eq!(quantiles, 2);
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let cli = FreqcutCli::try_parse_from(["freqcut", "middle"]).unwrap();
        match cli.command {
            FreqcutCommand::Middle { quantiles, .. } => assert_eq!(quantiles, 3),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_filename_and_bucket_count() {
        let cli =
            FreqcutCli::try_parse_from(["freqcut", "head", "freqs.csv", "-q", "5"]).unwrap();
        match cli.command {
            FreqcutCommand::Head {
                filename,
                quantiles,
            } => {
                assert_eq!(filename.as_deref(), Some(std::path::Path::new("freqs.csv")));
                assert_eq!(quantiles, 5);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_subcommand_required() {
        assert!(FreqcutCli::try_parse_from(["freqcut"]).is_err());
    }
}
