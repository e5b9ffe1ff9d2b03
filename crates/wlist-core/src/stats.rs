//! Read-only summaries of a wordlist

use std::collections::BTreeMap;

use regex::Regex;
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::wordlist::{Frequency, Wordlist};
use crate::{Error, Result};

/// Default length of the most-likely list
pub const DEFAULT_TOP: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedWord {
    pub word: String,
    pub frequency: Frequency,
}

impl RankedWord {
    fn from_pair((word, frequency): (&str, Frequency)) -> Self {
        Self {
            word: word.to_string(),
            frequency,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    pub entries: usize,
    pub total_frequency: Frequency,
    /// Longest word, in characters
    pub max_length: usize,
    /// Keys that still contain uppercase characters
    pub uppercase_keys: usize,
    pub most_likely: Vec<RankedWord>,
    /// Share of each character among all characters of all keys
    pub letter_frequency: BTreeMap<char, Frequency>,
}

impl Stats {
    pub fn collect(list: &Wordlist, top: usize) -> Self {
        Self {
            entries: list.len(),
            total_frequency: list.total_frequency(),
            max_length: list.words().map(|w| w.chars().count()).max().unwrap_or(0),
            uppercase_keys: list.words().filter(|w| w.to_lowercase() != *w).count(),
            most_likely: list.most_likely(top).into_iter().map(RankedWord::from_pair).collect(),
            letter_frequency: list.letter_frequency(),
        }
    }
}

/// Words matching `pattern`, highest frequency first, at most `top` of them
///
/// # Errors
/// `ConfigError` if `pattern` is not a valid regular expression.
pub fn grep(list: &Wordlist, pattern: &str, top: Option<usize>) -> Result<Vec<RankedWord>> {
    let re = Regex::new(pattern)
        .map_err(|e| Error::ConfigError(format!("invalid pattern {:?}: {}", pattern, e)))?;
    let mut found: Vec<_> = list.matching(&re).into_iter().map(RankedWord::from_pair).collect();
    if let Some(n) = top {
        found.truncate(n);
    }
    Ok(found)
}

// ── SHA-256 fingerprint ───────────────────────────────────

/// SHA-256 over the canonical serialization, as 64 lowercase hex chars
///
/// Order-sensitive: two wordlists with the same entries in a different
/// file order hash differently, matching what `save` would write.
pub fn fingerprint(list: &Wordlist) -> Result<String> {
    let canonical = crate::store::to_pretty_json(list)?;
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Wordlist {
        [("der", 0.04), ("Haus", 0.002), ("und", 0.05), ("Straßenbahn", 0.0001)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_collect() {
        let stats = Stats::collect(&sample(), 2);
        assert_eq!(stats.entries, 4);
        assert_eq!(stats.max_length, 11);
        assert_eq!(stats.uppercase_keys, 2);
        assert_eq!(
            stats.most_likely,
            vec![
                RankedWord { word: "und".into(), frequency: 0.05 },
                RankedWord { word: "der".into(), frequency: 0.04 },
            ]
        );
        assert!((stats.total_frequency - 0.0921).abs() < 1e-12);
        assert_eq!(stats.letter_frequency[&'a'], 3.0 / 21.0);
        assert_eq!(stats.letter_frequency[&'ß'], 1.0 / 21.0);
        let sum: f64 = stats.letter_frequency.values().sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_collect_empty() {
        let stats = Stats::collect(&Wordlist::new(), DEFAULT_TOP);
        assert_eq!(stats.entries, 0);
        assert_eq!(stats.max_length, 0);
        assert!(stats.most_likely.is_empty());
        assert!(stats.letter_frequency.is_empty());
    }

    #[test]
    fn test_grep_ranks_and_truncates() {
        let hits = grep(&sample(), "^[a-z]+$", None).unwrap();
        let words: Vec<_> = hits.iter().map(|r| r.word.as_str()).collect();
        assert_eq!(words, vec!["und", "der"]);

        let top = grep(&sample(), "(?i)^[dh]", Some(1)).unwrap();
        assert_eq!(top, vec![RankedWord { word: "der".into(), frequency: 0.04 }]);
    }

    #[test]
    fn test_grep_no_match_is_empty() {
        assert!(grep(&sample(), "zzz", None).unwrap().is_empty());
    }

    #[test]
    fn test_grep_invalid_pattern() {
        let result = grep(&sample(), "(unclosed", None);
        assert!(matches!(result, Err(Error::ConfigError(ref m)) if m.contains("(unclosed")));
    }

    #[test]
    fn test_fingerprint_format() {
        let hash = fingerprint(&sample()).unwrap();
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_fingerprint_determinism_100_iterations() {
        let first = fingerprint(&sample()).unwrap();
        for i in 0..100 {
            assert_eq!(first, fingerprint(&sample()).unwrap(), "Determinism failure at iteration {}", i);
        }
    }

    #[test]
    fn test_fingerprint_is_order_sensitive() {
        let a: Wordlist = [("a", 1.0), ("b", 2.0)].into_iter().collect();
        let b: Wordlist = [("b", 2.0), ("a", 1.0)].into_iter().collect();
        assert_ne!(fingerprint(&a).unwrap(), fingerprint(&b).unwrap());
    }
}
