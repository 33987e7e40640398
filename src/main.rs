use clap::Parser;
use review_roster::core::ConfigProvider;
use review_roster::utils::error::{ErrorSeverity, RosterError};
use review_roster::utils::{logger, validation::Validate};
use review_roster::{CliConfig, LocalStorage, RosterEngine, TomlConfig};

fn exit_code(e: &RosterError) -> i32 {
    match e.severity() {
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn fail(e: RosterError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    if !e.employee_ids().is_empty() {
        tracing::error!("Employee ids involved: {}", e.employee_ids().join(", "));
    }
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(exit_code(&e));
}

async fn run<C: ConfigProvider + Validate>(config: C) -> anyhow::Result<()> {
    if let Err(e) = config.validate() {
        fail(e);
    }

    let storage = LocalStorage::new(".".to_string());
    let engine = RosterEngine::new(storage, config);

    match engine.run().await {
        Ok(outcome) => {
            tracing::info!(
                "✅ {} reviewers assigned, {} reviewees covered",
                outcome.assignment.len(),
                outcome.assignment.covered_reviewee_ids().len()
            );
            for path in &outcome.written {
                println!("📁 Report saved to: {}", path);
            }
            Ok(())
        }
        Err(e) => fail(e),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting review-roster");
    tracing::debug!("CLI config: {:?}", cli);

    match cli.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading run file: {}", path);
            let mut config = match TomlConfig::from_file(&path) {
                Ok(config) => config,
                Err(e) => fail(e),
            };
            cli.apply_overrides(&mut config);
            run(config).await
        }
        None => run(cli).await,
    }
}
