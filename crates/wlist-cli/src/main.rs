use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process;
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;

use wlist_core::filter::{DEFAULT_MAX_LENGTH, DEFAULT_THRESHOLD};
use wlist_core::pipeline::{self, DEFAULT_FULL_WORDLIST, DEFAULT_SMALL_WORDLIST};
use wlist_core::stats::{self, RankedWord, Stats, DEFAULT_TOP};
use wlist_core::{store, Error, FilterParams};

/// wlist - word-frequency wordlist tooling
///
/// Filter rare and overlong words, lowercase keys, inspect wordlists.
#[derive(Parser)]
#[command(name = "wlist", version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress human-readable output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Drop entries below a frequency threshold or above a word length
    Filter {
        /// Source wordlist (never modified)
        #[arg(long, env = "WLIST_INPUT", default_value = DEFAULT_FULL_WORDLIST)]
        input: PathBuf,
        /// Destination wordlist
        #[arg(long, env = "WLIST_OUTPUT", default_value = DEFAULT_SMALL_WORDLIST)]
        output: PathBuf,
        /// Minimum frequency to keep an entry
        #[arg(long, env = "WLIST_THRESHOLD", default_value_t = DEFAULT_THRESHOLD)]
        threshold: f64,
        /// Maximum word length in characters
        #[arg(long, env = "WLIST_MAX_LENGTH", default_value_t = DEFAULT_MAX_LENGTH)]
        max_length: usize,
        /// Compute the report without writing
        #[arg(long)]
        dry_run: bool,
        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Lowercase every word in place, last entry wins on collisions
    Normalize {
        /// Wordlist to rewrite
        #[arg(env = "WLIST_PATH", default_value = DEFAULT_SMALL_WORDLIST)]
        path: PathBuf,
        /// Compute the report without writing
        #[arg(long)]
        dry_run: bool,
        /// Output the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Summarize a wordlist
    Stats {
        /// Wordlist to inspect
        #[arg(env = "WLIST_PATH", default_value = DEFAULT_SMALL_WORDLIST)]
        path: PathBuf,
        /// Number of most frequent words to list
        #[arg(long, default_value_t = DEFAULT_TOP)]
        top: usize,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List words matching a regular expression, most frequent first
    Grep {
        /// Regular expression searched for anywhere in each word
        pattern: String,
        /// Wordlist to search
        #[arg(env = "WLIST_PATH", default_value = DEFAULT_SMALL_WORDLIST)]
        path: PathBuf,
        /// Show at most this many matches
        #[arg(long)]
        top: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compute the SHA-256 fingerprint of a wordlist
    Hash {
        /// Wordlist to hash
        #[arg(env = "WLIST_PATH", default_value = DEFAULT_SMALL_WORDLIST)]
        path: PathBuf,
    },

    /// Show version information
    Version,
}

const LETTERS_SHOWN: usize = 5;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .with_line_number(verbose >= 3)
        .init();

    debug!("wlist started with verbosity level: {}", verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = run(cli.command, cli.quiet);

    let exit_code = match result {
        Ok(()) => 0,
        Err(e) => {
            debug!(error = ?e, "command failed");
            eprintln!("{}: {}", "error".red().bold(), e);
            2
        }
    };

    process::exit(exit_code);
}

fn run(command: Commands, quiet: bool) -> wlist_core::Result<()> {
    match command {
        Commands::Filter {
            input,
            output,
            threshold,
            max_length,
            dry_run,
            json,
        } => {
            let params = FilterParams {
                threshold,
                max_length,
            };
            let report = pipeline::run_filter(&input, &output, &params, dry_run)?;
            if json {
                print_json(&report)?;
            } else if !quiet {
                println!(
                    "{} kept {} of {} entries ({} below threshold, {} too long)",
                    "filter:".green().bold(),
                    report.kept,
                    report.total,
                    report.dropped_frequency,
                    report.dropped_length
                );
                print_destination(&output, dry_run);
            }
        }
        Commands::Normalize {
            path,
            dry_run,
            json,
        } => {
            let report = pipeline::run_normalize(&path, dry_run)?;
            if json {
                print_json(&report)?;
            } else if !quiet {
                println!(
                    "{} lowercased {} of {} keys, {} collisions merged",
                    "normalize:".green().bold(),
                    report.renamed,
                    report.total,
                    report.collisions.len()
                );
                for c in &report.collisions {
                    println!(
                        "  {} {} -> {}",
                        c.key.yellow(),
                        c.replaced,
                        c.kept
                    );
                }
                print_destination(&path, dry_run);
            }
        }
        Commands::Stats { path, top, json } => {
            let list = store::load(&path)?;
            let summary = Stats::collect(&list, top);
            if json {
                print_json(&summary)?;
            } else if !quiet {
                println!("{}", path.display().to_string().bold());
                println!("  entries:          {}", summary.entries);
                println!("  total frequency:  {}", summary.total_frequency);
                println!("  longest word:     {}", summary.max_length);
                println!("  uppercase keys:   {}", summary.uppercase_keys);
                if !summary.most_likely.is_empty() {
                    println!("  most likely:");
                    print_ranked(&summary.most_likely);
                }
                if !summary.letter_frequency.is_empty() {
                    let mut letters: Vec<_> = summary.letter_frequency.iter().collect();
                    letters.sort_by(|a, b| b.1.total_cmp(a.1));
                    let common: Vec<_> = letters
                        .iter()
                        .take(LETTERS_SHOWN)
                        .map(|(c, share)| format!("{} {:.1}%", c, *share * 100.0))
                        .collect();
                    println!("  common letters:   {}", common.join(", "));
                }
            }
        }
        Commands::Grep {
            pattern,
            path,
            top,
            json,
        } => {
            let list = store::load(&path)?;
            let hits = stats::grep(&list, &pattern, top)?;
            if json {
                print_json(&hits)?;
            } else if !quiet {
                if hits.is_empty() {
                    println!("{} no word matches {}", "grep:".yellow().bold(), pattern);
                } else {
                    print_ranked(&hits);
                }
            }
        }
        Commands::Hash { path } => {
            let list = store::load(&path)?;
            println!("{}", stats::fingerprint(&list)?);
        }
        Commands::Version => {
            println!(
                "wlist {} (wlist-core {})",
                env!("CARGO_PKG_VERSION"),
                env!("CARGO_PKG_VERSION")
            );
        }
    }
    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> wlist_core::Result<()> {
    let text = serde_json::to_string_pretty(value).map_err(|e| Error::SerializeError {
        what: "report".into(),
        message: e.to_string(),
    })?;
    println!("{}", text);
    Ok(())
}

fn print_ranked(words: &[RankedWord]) {
    for (rank, w) in words.iter().enumerate() {
        println!("    {:>3}. {} {}", rank + 1, w.word, w.frequency);
    }
}

fn print_destination(path: &std::path::Path, dry_run: bool) {
    if dry_run {
        println!("  {} nothing written", "dry run:".yellow());
    } else {
        println!("  wrote {}", path.display());
    }
}
