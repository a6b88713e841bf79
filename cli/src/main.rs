//! CLI entrypoint for wellness-coach
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::Result;
use clap::Parser;
use coach_application::ports::conversation_logger::{ConversationLogger, NoConversationLogger};
use coach_application::ports::generation_gateway::GenerationGateway;
use coach_application::use_cases::conversation::Conversation;
use coach_domain::AdvisorRole;
use coach_infrastructure::{ConfigLoader, GeminiClient, JsonlConversationLogger};
use coach_presentation::{ChatRepl, Cli};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    info!("Starting wellness-coach");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    let role = match &cli.role {
        Some(s) => s
            .parse::<AdvisorRole>()
            .map_err(|e| anyhow::anyhow!(e))?,
        None => AdvisorRole::NutritionExpert,
    };

    let model = cli
        .model
        .clone()
        .unwrap_or_else(|| config.generation.model.clone());

    // === Dependency Injection ===
    // The gateway is optional: without a credential the session still
    // runs, computes BMI, and reports that generation is disabled.
    let gateway: Option<Arc<dyn GenerationGateway>> = match config.resolve_api_key() {
        Some(api_key) => match GeminiClient::new(api_key, model) {
            Ok(client) => {
                info!(model = client.model(), "Generation gateway configured");
                Some(Arc::new(client))
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                warn!("Credential rejected; continuing without generation");
                None
            }
        },
        None => {
            info!("No API key found (GEMINI_API_KEY or config); generation disabled");
            None
        }
    };

    let logger: Arc<dyn ConversationLogger> = match &config.logging.conversation_log {
        Some(path) => match JsonlConversationLogger::new(path) {
            Some(jsonl) => {
                info!(path = %jsonl.path().display(), "Conversation log enabled");
                Arc::new(jsonl)
            }
            None => Arc::new(NoConversationLogger),
        },
        None => Arc::new(NoConversationLogger),
    };

    let conversation = Conversation::new(role, gateway).with_conversation_logger(logger);

    let mut repl = ChatRepl::new(conversation).with_progress(!cli.quiet && config.chat.show_progress);

    repl.run().await?;

    Ok(())
}
