use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use review_sentiment::config::Config;
use review_sentiment::keywords::stopwords::{StopList, StopWords};
use review_sentiment::keywords::tokenize::normalize;
use review_sentiment::output::{json, terminal};
use review_sentiment::sentiment::lexicon::LexiconScorer;
use review_sentiment::sentiment::traits::PolarityScorer;
use review_sentiment::{input, SentimentAggregator};

/// Review sentiment: aggregate sentiment reports for product reviews.
///
/// Scores each review with a rule-based lexicon, then reports the overall
/// sentiment, a positive/negative/neutral breakdown, the most frequent
/// keywords, and average sentiment per location.
#[derive(Parser)]
#[command(name = "review-sentiment", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate a JSON array of {"text", "location"} review records
    Analyze {
        /// Input file (reads stdin when omitted or "-")
        path: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Pretty)]
        format: Format,

        /// Maximum number of keywords to report (overrides SENTIMENT_TOP_KEYWORDS)
        #[arg(long)]
        top: Option<usize>,

        /// English stop list: nltk or iso (overrides SENTIMENT_STOP_WORDS)
        #[arg(long)]
        stop_words: Option<StopList>,
    },

    /// Print the keyword tokens extracted from a piece of text
    Tokenize {
        text: String,

        /// English stop list: nltk or iso
        #[arg(long)]
        stop_words: Option<StopList>,
    },

    /// Print the compound polarity score of a piece of text
    Score { text: String },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Colored terminal summary
    Pretty,
    /// The report as JSON
    Json,
}

fn main() -> ExitCode {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("review_sentiment=info")),
        )
        .init();

    let cli = Cli::parse();
    let json_errors = matches!(
        cli.command,
        Commands::Analyze {
            format: Format::Json,
            ..
        }
    );

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if json_errors {
                println!("{}", json::render_error(&e));
            } else {
                eprintln!("Error: {e:#}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze {
            path,
            format,
            top,
            stop_words,
        } => {
            let raw = read_input(path.as_ref())?;
            let reviews = input::parse_reviews(&raw)?;
            info!(reviews = reviews.len(), "Loaded review batch");

            let mut agg_config = config.aggregator_config();
            if let Some(n) = top {
                agg_config.top_keywords = n;
            }
            let stop_list = stop_words.unwrap_or(config.stop_list);

            let aggregator = SentimentAggregator::new(
                Box::new(LexiconScorer::default()),
                StopWords::for_list(stop_list),
                agg_config,
            );
            let report = aggregator.aggregate(&reviews)?;

            match format {
                Format::Json => println!("{}", json::render_report(&report)?),
                Format::Pretty => terminal::display_report(&report),
            }
        }

        Commands::Tokenize { text, stop_words } => {
            let stop_words = StopWords::for_list(stop_words.unwrap_or(config.stop_list));
            for token in normalize(&text, &stop_words) {
                println!("{token}");
            }
        }

        Commands::Score { text } => {
            let score = LexiconScorer::default().score(&text)?;
            println!("{score:.4}");
        }
    }

    Ok(())
}

/// Read the whole input from a file, or from stdin for `None` / "-".
fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => {
            fs::read_to_string(p).with_context(|| format!("failed to read {}", p.display()))
        }
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read reviews from stdin")?;
            Ok(buf)
        }
    }
}
