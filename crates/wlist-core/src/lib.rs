//! wlist core - filtering and case normalization of word-frequency lists
//!
//! A wordlist is a flat JSON object mapping each word to its relative
//! frequency in a reference corpus. Two independent batch stages operate on it.
//!
//! # Architecture
//!
//! ```text
//! full.json → store::load → filter  → store::save → small.json
//! small.json → store::load → normalizer → store::save → small.json
//! ```
//!
//! # Guarantees
//!
//! - **Ordered**: entries keep the order in which they appear in the file
//! - **Idempotent**: running either stage on its own output changes nothing
//! - **Atomic writes**: an interrupted save leaves the previous file intact

pub mod error;
pub mod filter;
pub mod normalizer;
pub mod pipeline;
pub mod stats;
pub mod store;
pub mod wordlist;

pub use error::{Error, Result};
pub use filter::{filter, FilterParams, FilterReport};
pub use normalizer::{normalize, NormalizeReport};
pub use wordlist::{Frequency, Wordlist};
