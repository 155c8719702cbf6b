use anyhow::{Context, Result};
use clap::Parser;
use lyrics_sentiment::{preprocess_table, SentimentAnalyzer, Table};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[clap(about = "Analyze sentiment of song lyrics in a CSV file")]
struct CliArgs {
    /// Input CSV file path.
    #[clap(short, long)]
    pub input: PathBuf,

    /// Output CSV file path.
    #[clap(short, long)]
    pub output: PathBuf,

    /// Name of the column containing the lyrics text.
    #[clap(long, default_value = "lyrics")]
    pub text_column: String,

    /// Sentiment method: "valence", "pattern" or "both".
    #[clap(short, long, default_value = "valence")]
    pub method: String,

    /// Clean the lyrics before scoring (adds cleaned_lyrics and word_count
    /// columns, and scores the cleaned text).
    #[clap(long)]
    pub preprocess: bool,
}

fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("LOG_LEVEL")
                .from_env_lossy(),
        )
        .try_init()
        .unwrap();

    info!("Loading data from {:?}...", cli_args.input);
    let mut table = Table::load_csv(&cli_args.input)
        .with_context(|| format!("Failed to load {:?}", cli_args.input))?;
    info!("Loaded {} songs", table.len());

    let mut text_column = cli_args.text_column.as_str();
    if cli_args.preprocess {
        info!("Preprocessing lyrics...");
        table = preprocess_table(&table, text_column)
            .with_context(|| format!("Failed to preprocess column {:?}", text_column))?;
        text_column = "cleaned_lyrics";
    }

    info!("Analyzing sentiment using {}...", cli_args.method);
    let analyzer = SentimentAnalyzer::new(&cli_args.method);
    let table = analyzer
        .analyze_table(&table, text_column)
        .context("Sentiment analysis failed")?;

    if let Some(parent) = cli_args.output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {:?}", parent))?;
        }
    }
    info!("Saving results to {:?}...", cli_args.output);
    table
        .save_csv(&cli_args.output)
        .with_context(|| format!("Failed to save {:?}", cli_args.output))?;

    info!("Analysis complete: {} songs", table.len());
    for (label, count) in sentiment_distribution(&table) {
        info!("  {}: {}", label, count);
    }
    Ok(())
}

fn sentiment_distribution(table: &Table) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    if let Ok(values) = table.column_values("sentiment") {
        for value in values {
            *counts.entry(value).or_default() += 1;
        }
    }
    let mut counts: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(label, count)| (label.to_string(), count))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counts
}
