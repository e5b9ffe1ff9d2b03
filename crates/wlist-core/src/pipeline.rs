//! File-to-file stage runners
//!
//! Each runner performs one read, one in-memory pass and one write.
//! With `dry_run` the write is skipped and only the report is returned.

use std::path::Path;

use tracing::info;

use crate::filter::{self, FilterParams, FilterReport};
use crate::normalizer::{self, NormalizeReport};
use crate::{store, Error, Result};

/// Default source of the filter stage
pub const DEFAULT_FULL_WORDLIST: &str = "../data/wordlists/german_SUBTLEX-DE_full.json";
/// Default destination of the filter stage and target of the normalize stage
pub const DEFAULT_SMALL_WORDLIST: &str = "../data/wordlists/german_SUBTLEX-DE_small.json";

/// Load `input`, filter it, write the survivors to `output`
///
/// `input` is never modified: an `output` that resolves to the same file
/// is rejected with `ConfigError`, with or without `dry_run`.
pub fn run_filter(
    input: &Path,
    output: &Path,
    params: &FilterParams,
    dry_run: bool,
) -> Result<FilterReport> {
    params.validate()?;
    if same_file(input, output) {
        return Err(Error::ConfigError(format!(
            "filter output {} is the input file",
            output.display()
        )));
    }
    let list = store::load(input)?;
    let outcome = filter::filter(&list, params);

    if dry_run {
        info!(output = %output.display(), "dry run, not writing");
    } else {
        store::save(output, &outcome.wordlist)?;
        info!(output = %output.display(), "wrote filtered wordlist");
    }
    Ok(outcome.report)
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Load `path`, lowercase its keys, write the result back to `path`
pub fn run_normalize(path: &Path, dry_run: bool) -> Result<NormalizeReport> {
    let list = store::load(path)?;
    let outcome = normalizer::normalize(&list);

    if dry_run {
        info!(path = %path.display(), "dry run, not writing");
    } else {
        store::save(path, &outcome.wordlist)?;
        info!(path = %path.display(), "rewrote normalized wordlist");
    }
    Ok(outcome.report)
}
