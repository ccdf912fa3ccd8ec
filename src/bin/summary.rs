use clap::Parser;
use mealsync::config::toml_config::TomlConfig;
use mealsync::utils::logger;
use mealsync::{export_file_name, format_as_text, summarize, AggregatorConfig, Roster, Selection};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "summary")]
#[command(about = "Builds a dietary summary for selected attendees from a synced roster")]
struct Args {
    /// Path to the synced roster JSON file
    #[arg(short, long, default_value = "./data/roster.json")]
    roster: PathBuf,

    /// Comma-separated attendee names (matched case-insensitively)
    #[arg(long, value_delimiter = ',')]
    attendees: Vec<String>,

    /// Meal name used in the summary title and the export file name
    #[arg(long, default_value = "")]
    meal: String,

    /// Rebuild the selection from an `attendees=...&meal=...` query string
    #[arg(long, conflicts_with_all = ["attendees", "meal"])]
    query: Option<String>,

    /// Optional TOML config supplying sort and exclusion settings
    #[arg(short, long)]
    config: Option<String>,

    /// Exclude restriction items containing these terms (overrides config)
    #[arg(long, value_delimiter = ',')]
    exclude: Vec<String>,

    /// Directory to write the export text file into; prints to stdout otherwise
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    let selection = match &args.query {
        Some(query) => Selection::from_query(query),
        None => Selection::new(args.attendees.clone(), args.meal.clone()),
    };
    tracing::debug!(
        "Selection: {} attendee(s), meal '{}'",
        selection.attendees.len(),
        selection.meal
    );

    let mut aggregator = match &args.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => config.aggregator_config(),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                std::process::exit(1);
            }
        },
        None => AggregatorConfig::default(),
    };
    if !args.exclude.is_empty() {
        aggregator.excluded_terms = args.exclude.clone();
    }

    let roster = match load_roster(&args.roster) {
        Ok(roster) => roster,
        Err(e) => {
            tracing::error!("❌ Failed to load roster: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };
    tracing::info!(
        "Loaded roster: {} members, synced at {}",
        roster.members.len(),
        roster.synced_at
    );

    let Some(summary) = summarize(&roster, &selection.attendees, &selection.meal, &aggregator)
    else {
        // Not an error: an empty or unmatched selection is a valid UI state
        println!("No roster members match the selected attendees.");
        return Ok(());
    };

    let text = format_as_text(&summary);

    match &args.output {
        Some(dir) => {
            let file_name = export_file_name(&summary.meal_name);
            let path = dir.join(&file_name);
            std::fs::create_dir_all(dir)?;
            std::fs::write(&path, &text)?;
            println!("✅ Summary exported to: {}", path.display());
        }
        None => print!("{}", text),
    }

    Ok(())
}

fn load_roster(path: &Path) -> mealsync::Result<Roster> {
    let bytes = std::fs::read(path)?;
    let roster = serde_json::from_slice(&bytes)?;
    Ok(roster)
}
