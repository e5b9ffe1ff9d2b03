//! Wordlist - an ordered mapping from word to frequency
//!
//! Iteration follows *file order*: the order in which each key first appeared
//! in the source document. Re-inserting an existing key replaces its value
//! but keeps its position, so duplicate keys in a JSON file and case
//! collisions during normalization resolve the same way (last write wins).
//!
//! Each entry keeps the JSON number it was read from, so integers such as
//! `1` or `9007199254740993` are written back exactly as they appeared.
//! Comparisons and sums use the `f64` view of the number.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use regex::Regex;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Number;

/// Relative occurrence rate of a word in a reference corpus
pub type Frequency = f64;

/// One word with its frequency and the literal it was parsed from
#[derive(Debug, Clone)]
pub struct Entry {
    pub(crate) word: String,
    pub(crate) freq: Frequency,
    /// `None` for values with no JSON representation (NaN, infinities)
    pub(crate) number: Option<Number>,
}

impl Entry {
    pub(crate) fn new(word: String, freq: Frequency) -> Self {
        Self {
            word,
            freq,
            number: Number::from_f64(freq),
        }
    }

    fn from_number(word: String, number: Number) -> Self {
        Self {
            word,
            freq: number.as_f64().unwrap_or(f64::NAN),
            number: Some(number),
        }
    }
}

/// Word → frequency mapping with stable file order
#[derive(Debug, Clone, Default)]
pub struct Wordlist {
    entries: Vec<Entry>,
    index: HashMap<String, usize>,
}

impl Wordlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert or overwrite `word`.
    ///
    /// A new word is appended; an existing word keeps its position and
    /// takes the new frequency. Returns the replaced frequency, if any.
    pub fn insert(&mut self, word: impl Into<String>, freq: Frequency) -> Option<Frequency> {
        self.upsert(Entry::new(word.into(), freq))
    }

    pub(crate) fn upsert(&mut self, entry: Entry) -> Option<Frequency> {
        match self.index.get(&entry.word) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos], entry).freq),
            None => {
                self.index.insert(entry.word.clone(), self.entries.len());
                self.entries.push(entry);
                None
            }
        }
    }

    pub(crate) fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, word: &str) -> Option<Frequency> {
        self.index.get(word).map(|&pos| self.entries[pos].freq)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Entries in file order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Frequency)> + '_ {
        self.entries.iter().map(|e| (e.word.as_str(), e.freq))
    }

    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.word.as_str())
    }

    /// Sum of all frequencies
    pub fn total_frequency(&self) -> Frequency {
        self.entries.iter().map(|e| e.freq).sum()
    }

    /// The `n` most frequent entries, highest first. Ties keep file order.
    pub fn most_likely(&self, n: usize) -> Vec<(&str, Frequency)> {
        let mut ranked: Vec<_> = self.iter().collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    /// Words containing a match of `pattern`, highest frequency first
    pub fn matching(&self, pattern: &Regex) -> Vec<(&str, Frequency)> {
        let mut found: Vec<_> = self.iter().filter(|(w, _)| pattern.is_match(w)).collect();
        found.sort_by(|a, b| b.1.total_cmp(&a.1));
        found
    }

    /// Share of each character among all characters of all words
    pub fn letter_frequency(&self) -> BTreeMap<char, Frequency> {
        let mut counts: BTreeMap<char, usize> = BTreeMap::new();
        for word in self.words() {
            for c in word.chars() {
                *counts.entry(c).or_insert(0) += 1;
            }
        }
        let total: usize = counts.values().sum();
        counts
            .into_iter()
            .map(|(c, n)| (c, n as Frequency / total as Frequency))
            .collect()
    }
}

impl PartialEq for Wordlist {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .zip(&other.entries)
                .all(|(a, b)| a.word == b.word && a.freq == b.freq)
    }
}

impl FromIterator<(String, Frequency)> for Wordlist {
    fn from_iter<I: IntoIterator<Item = (String, Frequency)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = Wordlist::with_capacity(iter.size_hint().0);
        for (word, freq) in iter {
            list.insert(word, freq);
        }
        list
    }
}

impl<'a> FromIterator<(&'a str, Frequency)> for Wordlist {
    fn from_iter<I: IntoIterator<Item = (&'a str, Frequency)>>(iter: I) -> Self {
        iter.into_iter().map(|(w, f)| (w.to_string(), f)).collect()
    }
}

impl IntoIterator for Wordlist {
    type Item = (String, Frequency);
    type IntoIter = std::iter::Map<std::vec::IntoIter<Entry>, fn(Entry) -> (String, Frequency)>;

    fn into_iter(self) -> Self::IntoIter {
        let pair: fn(Entry) -> (String, Frequency) = |e| (e.word, e.freq);
        self.entries.into_iter().map(pair)
    }
}

// ── Serde ─────────────────────────────────────────────────

impl Serialize for Wordlist {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.word, &entry.number)?;
        }
        map.end()
    }
}

struct WordlistVisitor;

impl<'de> Visitor<'de> for WordlistVisitor {
    type Value = Wordlist;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a JSON object mapping words to numeric frequencies")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Wordlist, A::Error> {
        let mut list = Wordlist::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((word, number)) = access.next_entry::<String, Number>()? {
            list.upsert(Entry::from_number(word, number));
        }
        Ok(list)
    }
}

impl<'de> Deserialize<'de> for Wordlist {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(WordlistVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_first_position() {
        let mut list = Wordlist::new();
        assert_eq!(list.insert("Haus", 0.5), None);
        assert_eq!(list.insert("Baum", 0.2), None);
        assert_eq!(list.insert("Haus", 0.7), Some(0.5));

        let order: Vec<_> = list.iter().collect();
        assert_eq!(order, vec![("Haus", 0.7), ("Baum", 0.2)]);
    }

    #[test]
    fn test_deserialize_preserves_file_order() {
        let list: Wordlist = serde_json::from_str(r#"{"zebra": 1, "apfel": 2.5, "mond": 0.1}"#).unwrap();
        let words: Vec<_> = list.words().collect();
        assert_eq!(words, vec!["zebra", "apfel", "mond"]);
        assert_eq!(list.get("zebra"), Some(1.0));
    }

    #[test]
    fn test_deserialize_duplicate_keys_last_wins() {
        let list: Wordlist = serde_json::from_str(r#"{"a": 1.0, "b": 2.0, "a": 3.0}"#).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.get("a"), Some(3.0));
        assert_eq!(list.words().next(), Some("a"));
    }

    #[test]
    fn test_deserialize_rejects_non_numeric_value() {
        let result: serde_json::Result<Wordlist> = serde_json::from_str(r#"{"a": "often"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_array() {
        let result: serde_json::Result<Wordlist> = serde_json::from_str(r#"[["a", 1.0]]"#);
        let err = result.unwrap_err().to_string();
        assert!(err.contains("mapping words"), "unexpected message: {}", err);
    }

    #[test]
    fn test_serialize_in_file_order() {
        let list: Wordlist = [("b", 1.0), ("a", 0.5)].into_iter().collect();
        assert_eq!(serde_json::to_string(&list).unwrap(), r#"{"b":1.0,"a":0.5}"#);
    }

    #[test]
    fn test_integer_values_written_back_unchanged() {
        let text = r#"{"a":1,"b":9007199254740993,"c":0.25}"#;
        let list: Wordlist = serde_json::from_str(text).unwrap();
        assert_eq!(serde_json::to_string(&list).unwrap(), text);
        assert_eq!(list.get("a"), Some(1.0));
    }

    #[test]
    fn test_nan_serializes_as_null() {
        let list: Wordlist = [("x", f64::NAN)].into_iter().collect();
        assert_eq!(serde_json::to_string(&list).unwrap(), r#"{"x":null}"#);
    }

    #[test]
    fn test_total_frequency() {
        let list: Wordlist = [("a", 0.25), ("b", 0.5), ("c", 0.25)].into_iter().collect();
        assert!((list.total_frequency() - 1.0).abs() < f64::EPSILON);
        assert_eq!(Wordlist::new().total_frequency(), 0.0);
    }

    #[test]
    fn test_most_likely_ties_keep_file_order() {
        let list: Wordlist = [("der", 0.03), ("und", 0.05), ("die", 0.03), ("zu", 0.01)]
            .into_iter()
            .collect();
        let top = list.most_likely(3);
        assert_eq!(top, vec![("und", 0.05), ("der", 0.03), ("die", 0.03)]);
        assert_eq!(list.most_likely(10).len(), 4);
    }

    #[test]
    fn test_matching_ranks_by_frequency() {
        let list: Wordlist = [("haus", 0.002), ("maus", 0.0005), ("baum", 0.001), ("hausen", 0.004)]
            .into_iter()
            .collect();
        let re = Regex::new("aus").unwrap();
        assert_eq!(
            list.matching(&re),
            vec![("hausen", 0.004), ("haus", 0.002), ("maus", 0.0005)]
        );

        let anchored = Regex::new("^.aus$").unwrap();
        assert_eq!(list.matching(&anchored), vec![("haus", 0.002), ("maus", 0.0005)]);
    }

    #[test]
    fn test_letter_frequency() {
        let list: Wordlist = [("aab", 0.1), ("b", 0.2)].into_iter().collect();
        let letters = list.letter_frequency();
        assert_eq!(letters.len(), 2);
        assert_eq!(letters[&'a'], 0.5);
        assert_eq!(letters[&'b'], 0.5);
        assert!(Wordlist::new().letter_frequency().is_empty());
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let a: Wordlist = [("x", 1.0), ("y", 2.0)].into_iter().collect();
        let b: Wordlist = [("y", 2.0), ("x", 1.0)].into_iter().collect();
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }
}
