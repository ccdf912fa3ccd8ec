use clap::Parser;
use mealsync::config::toml_config::TomlConfig;
use mealsync::core::ConfigProvider;
use mealsync::utils::{logger, validation::Validate};
use mealsync::{LocalStorage, SheetSyncPipeline, SyncEngine};

#[derive(Parser)]
#[command(name = "toml-sync")]
#[command(about = "Roster sync driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "mealsync.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override monitoring setting from config
    #[arg(long)]
    monitor: Option<bool>,

    /// Dry run - show what would be synced without executing
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);

    tracing::info!("🚀 Starting TOML-based roster sync");
    tracing::info!("📁 Loading configuration from: {}", args.config);

    let config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No actual sync will occur");
        return Ok(());
    }

    let monitor_enabled = args.monitor.unwrap_or_else(|| config.monitoring_enabled());

    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(config.output_path().to_string());
    let pipeline = SheetSyncPipeline::new(storage, config);

    let mut engine = SyncEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Roster sync completed successfully!");
            tracing::info!("📁 Roster saved to: {}", output_path);
            println!("✅ Roster sync completed successfully!");
            println!("📁 Roster saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Roster sync failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                mealsync::utils::error::ErrorSeverity::Low => 0,
                mealsync::utils::error::ErrorSeverity::Medium => 2,
                mealsync::utils::error::ErrorSeverity::High => 1,
                mealsync::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!("  Sync: {} v{}", config.sync.name, config.sync.version);
    println!("  Source: {}", config.source.endpoint);
    println!(
        "  API key: {}",
        if config.source.api_key.is_some() {
            "configured"
        } else {
            "none"
        }
    );
    println!("  Output: {}/{}", config.output_path(), config.roster_file());
    println!("  Timeout: {}s", config.timeout_seconds());

    let aggregator = config.aggregator_config();
    println!("  Priority items: {}", aggregator.priority_items.join(", "));
    if !aggregator.excluded_terms.is_empty() {
        println!("  Excluded terms: {}", aggregator.excluded_terms.join(", "));
    }

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}
