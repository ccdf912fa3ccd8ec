use clap::Parser;
use mealsync::utils::{logger, validation::Validate};
use mealsync::{CliConfig, LocalStorage, SheetSyncPipeline, SyncEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting mealsync");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(config.output_path.clone());
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
