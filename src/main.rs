//! gemini-assistant binary entry point.

use std::io::{self, Write};

use clap::Parser;
use gemini_assistant::agent::Agent;
use gemini_assistant::cli::{repl, Cli};
use gemini_assistant::config::AssistantConfig;
use gemini_assistant::error::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _cli = Cli::parse();

    let config = match AssistantConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    init_tracing();

    if let Err(e) = run(&config).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

// Logs go to stderr so they never interleave with replies on stdout.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();
}

async fn run(config: &AssistantConfig) -> Result<()> {
    info!(
        model = config.model(),
        search = config.has_search_credentials(),
        "starting assistant"
    );

    let mut agent = Agent::from_config(config)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    repl::run(&mut agent, stdin.lock(), &mut stdout).await?;
    stdout.flush()?;

    Ok(())
}
