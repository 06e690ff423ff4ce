use std::error::Error;
use std::path::{Path, PathBuf};

use clap::{Parser, error::ErrorKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::codec::{read_ratings, write_ratings};
use crate::config::{SplitConfig, SplitRatios};
use crate::constants::app::{TEST_SUFFIX, TRAIN_SUFFIX};
use crate::errors::SplitError;
use crate::splits::split_records;

#[derive(Debug, Parser)]
#[command(
    name = "split-ratings",
    disable_help_subcommand = true,
    about = "Split a ratings file into train and test files",
    long_about = "Partition a `userId,movieId,rating,timestamp` ratings file into sibling `_train` and `_test` files using a random global split.",
    after_help = "Output files are written next to the input file, inserting `_train` and `_test` before its extension."
)]
struct SplitRatingsCli {
    #[arg(value_name = "FILE_RATINGS", help = "Path to the ratings file to split")]
    file_ratings: PathBuf,
    #[arg(
        value_name = "TEST_RATIO",
        value_parser = parse_test_ratio_arg,
        help = "Fraction of ratings reserved for the test subset, within [0, 1]"
    )]
    test_ratio: f64,
}

/// What one pipeline run produced; returned so callers can log or assert on it.
#[derive(Clone, Debug)]
pub struct SplitSummary {
    /// Path of the written train file.
    pub train_path: PathBuf,
    /// Path of the written test file.
    pub test_path: PathBuf,
    /// Number of data rows written to the train file.
    pub train_rows: usize,
    /// Number of data rows written to the test file.
    pub test_rows: usize,
}

/// Run the splitter CLI against `args_iter` (binary name excluded).
pub fn run_split_ratings<I>(args_iter: I) -> Result<(), Box<dyn Error>>
where
    I: Iterator<Item = String>,
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let Some(cli) = parse_cli::<SplitRatingsCli, _>(
        std::iter::once("split-ratings".to_string()).chain(args_iter),
    )?
    else {
        return Ok(());
    };

    let config = SplitConfig {
        ratios: SplitRatios::from_test_ratio(cli.test_ratio)?,
        ..SplitConfig::default()
    };
    let mut rng = build_rng(&config);
    let summary = split_ratings_file(&cli.file_ratings, &config, &mut rng)?;

    println!(
        "Wrote {} train rows to {}",
        summary.train_rows,
        summary.train_path.display()
    );
    println!(
        "Wrote {} test rows to {}",
        summary.test_rows,
        summary.test_path.display()
    );
    Ok(())
}

/// Decode `input`, partition it per `config`, and write both subsets next to
/// the input file.
///
/// The decode happens fully before any output file is created, so a malformed
/// input leaves no partial outputs behind.
pub fn split_ratings_file<R: Rng>(
    input: &Path,
    config: &SplitConfig,
    rng: &mut R,
) -> Result<SplitSummary, SplitError> {
    let ratios = config.ratios.normalized()?;
    let records = read_ratings(input)?;
    info!(count = records.len(), path = %input.display(), "loaded ratings");

    let outcome = split_records(records, ratios, config.policy, rng);

    let train_path = sibling_with_suffix(input, TRAIN_SUFFIX);
    let test_path = sibling_with_suffix(input, TEST_SUFFIX);
    write_ratings(&train_path, &outcome.train)?;
    write_ratings(&test_path, &outcome.test)?;

    Ok(SplitSummary {
        train_rows: outcome.train.len(),
        test_rows: outcome.test.len(),
        train_path,
        test_path,
    })
}

/// Derive a sibling path by inserting `suffix` before the input's extension.
///
/// `ratings.csv` becomes `ratings_train.csv`; an extensionless input simply
/// gets the suffix appended.
pub fn sibling_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default();
    let mut name = format!("{stem}{suffix}");
    if let Some(ext) = path.extension().and_then(|ext| ext.to_str()) {
        name.push('.');
        name.push_str(ext);
    }
    path.with_file_name(name)
}

fn build_rng(config: &SplitConfig) -> StdRng {
    match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

fn parse_test_ratio_arg(raw: &str) -> Result<f64, String> {
    let parsed = raw
        .parse::<f64>()
        .map_err(|_| format!("Could not parse test ratio '{raw}' as a real number"))?;
    if !(0.0..=1.0).contains(&parsed) {
        return Err("test ratio must be within [0, 1]".to_string());
    }
    Ok(parsed)
}

fn parse_cli<T, I>(args: I) -> Result<Option<T>, Box<dyn Error>>
where
    T: Parser,
    I: IntoIterator,
    I::Item: Into<std::ffi::OsString> + Clone,
{
    match T::try_parse_from(args) {
        Ok(cli) => Ok(Some(cli)),
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                err.print()?;
                Ok(None)
            }
            _ => Err(err.into()),
        },
    }
}
