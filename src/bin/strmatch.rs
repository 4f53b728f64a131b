//! strmatch - exact string search from the command line.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use itertools::Itertools;
use serde::Serialize;

use strmatch::{
    build_prefix_function, build_z_array, longest_happy_prefix, shortest_palindrome, Algorithm,
    MatchConfig, MatchPositions, Matcher,
};

/// Exact string matching with KMP, Z-function and Rabin-Karp.
#[derive(Parser)]
#[command(name = "strmatch")]
#[command(version)]
#[command(about = "Exact string matching with KMP, Z-function and Rabin-Karp")]
struct Cli {
    /// TOML config (algorithm, separator, hash parameters)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find every occurrence of a pattern; offsets are in bytes
    Search {
        pattern: String,

        /// Text to search (mutually exclusive with --file)
        #[arg(conflicts_with = "file", required_unless_present = "file")]
        text: Option<String>,

        /// Read the text from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Engine to use; defaults to the config's algorithm
        #[arg(short, long, value_enum)]
        algorithm: Option<AlgorithmArg>,

        /// Print offsets as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the prefix function of a string; one entry per UTF-8 byte
    PrefixFunction { input: String },

    /// Print the Z-array of a string; one entry per UTF-8 byte
    ZArray { input: String },

    /// Longest proper prefix that is also a suffix
    HappyPrefix { input: String },

    /// Shortest palindrome obtained by prepending characters
    ShortestPalindrome { input: String },
}

#[derive(Clone, Copy, ValueEnum)]
enum AlgorithmArg {
    Kmp,
    Z,
    RabinKarp,
    /// Run all three and check that they agree
    All,
}

#[derive(Serialize)]
struct SearchReport<'a> {
    algorithm: &'a str,
    pattern: &'a str,
    positions: &'a MatchPositions,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    let config = match &cli.config {
        Some(path) => MatchConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => MatchConfig::default(),
    };

    match cli.command {
        Commands::Search {
            pattern,
            text,
            file,
            algorithm,
            json,
        } => {
            let text = match (text, file) {
                (Some(text), _) => text,
                (None, Some(path)) => fs::read_to_string(&path)
                    .with_context(|| format!("reading {}", path.display()))?,
                (None, None) => bail!("either a text or --file is required"),
            };

            let algorithms: Vec<Algorithm> = match algorithm {
                None => vec![config.algorithm],
                Some(AlgorithmArg::Kmp) => vec![Algorithm::Kmp],
                Some(AlgorithmArg::Z) => vec![Algorithm::Z],
                Some(AlgorithmArg::RabinKarp) => vec![Algorithm::RabinKarp],
                Some(AlgorithmArg::All) => Algorithm::ALL.to_vec(),
            };

            let positions = run_search(&algorithms, &pattern, &text, &config)?;

            if json {
                let names = algorithms.iter().join(",");
                let report = SearchReport {
                    algorithm: &names,
                    pattern: &pattern,
                    positions: &positions,
                };
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_matches(&text, pattern.len(), &positions);
            }
        }

        Commands::PrefixFunction { input } => {
            let table = build_prefix_function(input.as_bytes());
            println!("{}", table.iter().join(" "));
        }

        Commands::ZArray { input } => {
            let z = build_z_array(input.as_bytes());
            println!("{}", z.iter().join(" "));
        }

        Commands::HappyPrefix { input } => {
            println!("{}", longest_happy_prefix(&input));
        }

        Commands::ShortestPalindrome { input } => {
            let palindrome = shortest_palindrome(&input).context("building palindrome")?;
            println!("{palindrome}");
        }
    }

    Ok(())
}

/// Runs every requested engine and insists they report the same offsets.
fn run_search(
    algorithms: &[Algorithm],
    pattern: &str,
    text: &str,
    config: &MatchConfig,
) -> Result<MatchPositions> {
    let mut agreed: Option<(Algorithm, MatchPositions)> = None;

    for &algorithm in algorithms {
        let matcher = algorithm.matcher(pattern.as_bytes(), config)?;
        let positions = matcher
            .find_all(text.as_bytes())
            .with_context(|| format!("{algorithm} search failed"))?;

        match &agreed {
            Some((first, expected)) if *expected != positions => {
                bail!("{first} and {algorithm} disagree: {expected:?} vs {positions:?}");
            }
            Some(_) => {}
            None => agreed = Some((algorithm, positions)),
        }
    }

    agreed
        .map(|(_, positions)| positions)
        .context("no algorithm selected")
}

fn print_matches(text: &str, pattern_len: usize, positions: &MatchPositions) {
    println!(
        "{} {}",
        positions.len().to_string().bold(),
        if positions.len() == 1 { "match" } else { "matches" }
    );
    if positions.is_empty() {
        return;
    }
    println!("offsets: {}", positions.iter().join(", "));

    if pattern_len == 0 {
        return;
    }

    // Overlapping matches merge into one highlighted span.
    let mut highlighted = String::with_capacity(text.len());
    let mut cursor = 0;
    for (start, end) in merge_spans(positions, pattern_len) {
        highlighted.push_str(&text[cursor..start]);
        highlighted.push_str(&text[start..end].red().bold().to_string());
        cursor = end;
    }
    highlighted.push_str(&text[cursor..]);
    println!("{highlighted}");
}

/// Byte ranges covered by at least one match. UTF-8 patterns only match on
/// char boundaries, so every range can be sliced out of the text.
fn merge_spans(positions: &MatchPositions, pattern_len: usize) -> Vec<(usize, usize)> {
    let mut spans: Vec<(usize, usize)> = Vec::new();
    for &start in positions {
        let end = start + pattern_len;
        match spans.last_mut() {
            Some((_, last_end)) if start <= *last_end => *last_end = end,
            _ => spans.push((start, end)),
        }
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_spans() {
        let positions = MatchPositions::from(vec![0, 1, 2, 7]);
        assert_eq!(merge_spans(&positions, 2), vec![(0, 4), (7, 9)]);
    }

    #[test]
    fn test_run_search_all_agree() {
        let config = MatchConfig::default();
        let positions = run_search(&Algorithm::ALL, "aa", "aaaa", &config).unwrap();
        assert_eq!(positions, [0, 1, 2]);
    }

    #[test]
    fn test_run_search_surfaces_separator_failure() {
        let config = MatchConfig {
            separator: Some('a'),
            ..MatchConfig::default()
        };
        assert!(run_search(&[Algorithm::Z], "ab", "cab", &config).is_err());
    }

    #[test]
    fn test_table_commands_say_they_work_on_bytes() {
        use clap::CommandFactory;

        let cli = Cli::command();
        for name in ["search", "prefix-function", "z-array"] {
            let about = cli
                .find_subcommand(name)
                .and_then(|cmd| cmd.get_about())
                .map(|about| about.to_string())
                .unwrap_or_default();
            assert!(about.contains("byte"), "{name}: {about}");
        }
    }

    #[test]
    fn test_cli_parses_search() {
        let cli = Cli::try_parse_from(["strmatch", "search", "ab", "cabab", "-a", "rabin-karp"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Search {
                algorithm: Some(AlgorithmArg::RabinKarp),
                ..
            }
        ));
        assert!(Cli::try_parse_from(["strmatch", "search", "ab"]).is_err());
    }
}
