//! aw-ask: terminal front end for the AI weather assistant.
//!
//! With no question on the command line, reads one question per line from
//! stdin until EOF.

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

use aw_assistant::{Assistant, AssistantConfig};

#[derive(Debug, Parser)]
#[command(name = "aw-ask")]
#[command(about = "Ask the AI weather assistant a question")]
struct Args {
    /// TOML config file.
    #[arg(long)]
    config: Option<String>,

    /// Gateway base URL, overriding the config file.
    #[arg(long, env = "GATEWAY_URL")]
    gateway_url: Option<String>,

    /// Question words. Read from stdin when omitted.
    question: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    // ── Load config ─────────────────────────────────────────────
    let config = match &args.config {
        Some(path) => AssistantConfig::from_file(path)?,
        None => AssistantConfig::default(),
    }
    .with_gateway_override(args.gateway_url);

    tracing::info!(gateway_url = %config.gateway_url, "aw-ask starting");

    let assistant = Assistant::from_config(&config);

    if !args.question.is_empty() {
        let reply = assistant.ask(&args.question.join(" ")).await;
        println!("AI Assistant: {reply}");
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let question = line.trim();
        if question.is_empty() {
            continue;
        }
        let reply = assistant.ask(question).await;
        println!("AI Assistant: {reply}");
    }

    Ok(())
}
