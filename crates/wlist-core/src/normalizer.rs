//! Case normalizer - lowercases every word of a wordlist
//!
//! Keys are replaced by `str::to_lowercase`. When several original keys
//! lowercase to the same string they are merged by plain overwrite: the
//! entry that comes last in file order provides the value, and the merged
//! key sits where the first of them was.
//!
//! # Guarantees
//!
//! - **Total**: every output key equals its own lowercase form
//! - **Idempotent**: `normalize(normalize(x)) == normalize(x)`
//! - **No aggregation**: frequencies are never summed or averaged

use serde::Serialize;
use tracing::{debug, info};

use crate::wordlist::{Entry, Frequency, Wordlist};

/// Two original keys that lowercased to the same word
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Collision {
    /// The lowercased key both entries map to
    pub key: String,
    /// Frequency that was overwritten
    pub replaced: Frequency,
    /// Frequency that now holds for `key`
    pub kept: Frequency,
}

/// Counts and collisions produced by one normalize pass
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NormalizeReport {
    pub total: usize,
    /// Keys whose spelling changed
    pub renamed: usize,
    pub collisions: Vec<Collision>,
}

impl NormalizeReport {
    /// Number of entries in the normalized wordlist
    pub fn remaining(&self) -> usize {
        self.total - self.collisions.len()
    }

    /// True if normalizing would not change the wordlist
    pub fn is_noop(&self) -> bool {
        self.renamed == 0 && self.collisions.is_empty()
    }
}

/// Normalized wordlist plus what happened to it
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizeOutcome {
    pub wordlist: Wordlist,
    pub report: NormalizeReport,
}

/// Apply the normalize stage to `input`
pub fn normalize(input: &Wordlist) -> NormalizeOutcome {
    let mut report = NormalizeReport {
        total: input.len(),
        ..NormalizeReport::default()
    };
    let mut out = Wordlist::with_capacity(input.len());

    for entry in input.entries() {
        let word = entry.word.as_str();
        let freq = entry.freq;
        let lower = word.to_lowercase();
        if lower != word {
            report.renamed += 1;
        }
        let renamed = Entry {
            word: lower.clone(),
            ..entry.clone()
        };
        if let Some(replaced) = out.upsert(renamed) {
            debug!(key = %lower, from = word, replaced, kept = freq, "case collision");
            report.collisions.push(Collision {
                key: lower,
                replaced,
                kept: freq,
            });
        }
    }

    info!(
        total = report.total,
        renamed = report.renamed,
        collisions = report.collisions.len(),
        "normalized wordlist"
    );

    NormalizeOutcome {
        wordlist: out,
        report,
    }
}

/// Whether every key is already in lowercase form
pub fn is_normalized(list: &Wordlist) -> bool {
    list.words().all(|w| w.to_lowercase() == w)
}
