mod feedback;
mod render;

use anyhow::{Context, Result};
use catalog::{Catalog, CostCategory};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use engine::{Criteria, DEFAULT_TOP_N, Recommender};
use feedback::FeedbackRecord;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Most results a single query may ask for
const MAX_TOP_N: usize = 20;

/// DineRecs - Knowledge-based restaurant recommender
#[derive(Parser)]
#[command(name = "dine-recs")]
#[command(about = "Filter and rank restaurants by city, cuisine and budget", long_about = None)]
struct Cli {
    /// Path to the restaurant CSV dataset
    #[arg(
        short,
        long,
        global = true,
        env = "DINE_RECS_DATA",
        default_value = "data/cleaned_zomato_data.csv"
    )]
    data_file: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend restaurants matching your preferences
    Recommend {
        #[command(flatten)]
        preferences: Preferences,

        /// Number of recommendations to return (1-20)
        #[arg(long, default_value_t = DEFAULT_TOP_N, value_parser = parse_top_n)]
        top_n: usize,

        /// Print results as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// List the cuisines available in the dataset
    Cuisines,

    /// List the cities available in the dataset
    Cities,

    /// Record how useful a set of recommendations was
    Feedback {
        #[command(flatten)]
        preferences: Preferences,

        /// Overall satisfaction, 1 (poor) to 5 (great)
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        satisfaction: u8,

        /// Were the recommendations relevant?
        #[arg(long, value_enum)]
        relevant: Relevance,

        /// Free-text comments
        #[arg(long, default_value = "")]
        comments: String,

        /// File the feedback row is appended to
        #[arg(long, env = "DINE_RECS_FEEDBACK", default_value = "feedback.csv")]
        feedback_file: PathBuf,
    },
}

/// Filters shared by `recommend` and `feedback`
#[derive(Args)]
struct Preferences {
    /// City to search in (case-insensitive exact match, e.g. "New Delhi")
    #[arg(long)]
    city: Option<String>,

    /// Cuisine to include; repeat for several
    #[arg(long = "cuisine")]
    cuisines: Vec<String>,

    /// Budget: low, medium or high
    #[arg(long)]
    budget: Option<CostCategory>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Relevance {
    Yes,
    No,
}

fn parse_top_n(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("'{s}' is not a number"))?;
    if (1..=MAX_TOP_N).contains(&n) {
        Ok(n)
    } else {
        Err(format!("must be between 1 and {MAX_TOP_N}"))
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so `--json` output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Recommend {
            preferences,
            top_n,
            json,
        } => handle_recommend(&cli.data_file, preferences, top_n, json)?,
        Commands::Cuisines => handle_cuisines(&cli.data_file)?,
        Commands::Cities => handle_cities(&cli.data_file)?,
        Commands::Feedback {
            preferences,
            satisfaction,
            relevant,
            comments,
            feedback_file,
        } => {
            let record = FeedbackRecord {
                city: preferences.city,
                cuisines: preferences.cuisines,
                budget: preferences.budget,
                satisfaction,
                relevant: matches!(relevant, Relevance::Yes),
                comments,
            };
            feedback::append_feedback(&feedback_file, &record)?;
            println!("{} Thanks for your feedback!", "✓".green());
        }
    }

    Ok(())
}

/// Load the dataset once for this process
fn load_catalog(path: &Path) -> Result<Catalog> {
    let start = Instant::now();
    let catalog = Catalog::load_from_file(path)
        .with_context(|| format!("Failed to load restaurant dataset from {}", path.display()))?;
    tracing::debug!("Catalog ready in {:?}", start.elapsed());
    Ok(catalog)
}

/// Handle the 'recommend' command
fn handle_recommend(data_file: &Path, preferences: Preferences, top_n: usize, json: bool) -> Result<()> {
    let catalog = load_catalog(data_file)?;

    let mut criteria = Criteria::new()
        .with_cuisines(preferences.cuisines)
        .with_top_n(top_n);
    if let Some(city) = preferences.city {
        criteria = criteria.with_city(city);
    }
    if let Some(budget) = preferences.budget {
        criteria = criteria.with_budget(budget);
    }

    let recommendations = Recommender::standard().recommend(&catalog, &criteria);

    if json {
        let out = serde_json::to_string_pretty(&recommendations)
            .context("Failed to serialize recommendations")?;
        println!("{out}");
    } else {
        render::print_recommendations(&recommendations);
    }
    Ok(())
}

/// Handle the 'cuisines' command
fn handle_cuisines(data_file: &Path) -> Result<()> {
    let catalog = load_catalog(data_file)?;
    println!("{}", "Available cuisines:".bold().blue());
    for cuisine in catalog.cuisines() {
        println!("  - {cuisine}");
    }
    Ok(())
}

/// Handle the 'cities' command
fn handle_cities(data_file: &Path) -> Result<()> {
    let catalog = load_catalog(data_file)?;
    println!("{}", "Available cities:".bold().blue());
    for city in catalog.cities() {
        println!("  - {city}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_top_n_bounds() {
        assert_eq!(parse_top_n("1"), Ok(1));
        assert_eq!(parse_top_n("20"), Ok(20));
        assert!(parse_top_n("0").is_err());
        assert!(parse_top_n("21").is_err());
        assert!(parse_top_n("-3").is_err());
    }

    #[test]
    fn test_recommend_arguments() {
        let cli = Cli::try_parse_from([
            "dine-recs",
            "recommend",
            "--city",
            "New Delhi",
            "--cuisine",
            "North Indian",
            "--cuisine",
            "Cafe",
            "--budget",
            "LOW",
            "--top-n",
            "5",
        ])
        .unwrap();

        let Commands::Recommend {
            preferences,
            top_n,
            json,
        } = cli.command
        else {
            panic!("expected recommend");
        };
        assert_eq!(preferences.city.as_deref(), Some("New Delhi"));
        assert_eq!(preferences.cuisines, vec!["North Indian", "Cafe"]);
        assert_eq!(preferences.budget, Some(CostCategory::Low));
        assert_eq!(top_n, 5);
        assert!(!json);
    }

    #[test]
    fn test_feedback_rejects_bad_satisfaction() {
        let result = Cli::try_parse_from([
            "dine-recs",
            "feedback",
            "--satisfaction",
            "9",
            "--relevant",
            "yes",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_budget_rejected() {
        let result = Cli::try_parse_from(["dine-recs", "recommend", "--budget", "cheap"]);
        assert!(result.is_err());
    }
}
