//! Filter stage - prunes rare and overlong words
//!
//! An entry survives iff `freq >= threshold` and its word has at most
//! `max_length` characters. Survivors are copied unchanged, in file order.
//!
//! # Guarantees
//!
//! - **Idempotent**: `filter(filter(x)) == filter(x)` for the same parameters
//! - **Non-modifying**: entries are only included or excluded

use serde::Serialize;
use tracing::{debug, info};

use crate::wordlist::{Frequency, Wordlist};
use crate::{Error, Result};

/// Default minimum frequency an entry needs to be kept
pub const DEFAULT_THRESHOLD: Frequency = 0.000001;
/// Default maximum word length, in characters
pub const DEFAULT_MAX_LENGTH: usize = 10;

/// Parameters of the filter stage
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterParams {
    pub threshold: Frequency,
    pub max_length: usize,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

impl FilterParams {
    /// Reject thresholds that would make the stage meaningless
    pub fn validate(&self) -> Result<()> {
        if self.threshold.is_nan() {
            return Err(Error::ConfigError("threshold must be a number".into()));
        }
        if self.threshold < 0.0 {
            return Err(Error::ConfigError(format!(
                "threshold must not be negative, got {}",
                self.threshold
            )));
        }
        Ok(())
    }

    /// Whether a single entry passes both predicates
    pub fn keeps(&self, word: &str, freq: Frequency) -> bool {
        self.rejection(word, freq).is_none()
    }

    fn rejection(&self, word: &str, freq: Frequency) -> Option<Rejection> {
        // NaN compares false, so it is dropped here as well
        if !(freq >= self.threshold) {
            Some(Rejection::Frequency)
        } else if word.chars().count() > self.max_length {
            Some(Rejection::Length)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rejection {
    Frequency,
    Length,
}

/// Counts produced by one filter pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterReport {
    pub total: usize,
    pub kept: usize,
    pub dropped_frequency: usize,
    pub dropped_length: usize,
}

impl FilterReport {
    pub fn dropped(&self) -> usize {
        self.dropped_frequency + self.dropped_length
    }
}

/// Filtered wordlist plus what happened to it
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    pub wordlist: Wordlist,
    pub report: FilterReport,
}

/// Apply the filter stage to `input`
pub fn filter(input: &Wordlist, params: &FilterParams) -> FilterOutcome {
    let mut report = FilterReport {
        total: input.len(),
        ..FilterReport::default()
    };
    let mut kept = Wordlist::with_capacity(input.len());

    for entry in input.entries() {
        let word = entry.word.as_str();
        match params.rejection(word, entry.freq) {
            None => {
                kept.upsert(entry.clone());
            }
            Some(Rejection::Frequency) => {
                report.dropped_frequency += 1;
            }
            Some(Rejection::Length) => {
                debug!(word, length = word.chars().count(), "dropping overlong word");
                report.dropped_length += 1;
            }
        }
    }
    report.kept = kept.len();

    info!(
        total = report.total,
        kept = report.kept,
        dropped_frequency = report.dropped_frequency,
        dropped_length = report.dropped_length,
        "filtered wordlist"
    );

    FilterOutcome {
        wordlist: kept,
        report,
    }
}
