//! Chat client binary: one-shot when given a message, interactive otherwise.

use std::io::IsTerminal;

use agent_chat::{ChatSession, HttpTransport};
use agent_chat_cli::{init_tracing, run_interactive, run_once, ChatOptions};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "agent-chat")]
#[command(about = "Chat with an agent service over POST <base>/chat")]
struct Args {
    /// Message to send once (also accepted as positional words)
    #[arg(short, long, value_name = "TEXT")]
    message: Option<String>,

    /// Base URL of the agent service (default: $NEXT_PUBLIC_API_URL)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Debug logging to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Positional message words (when -m/--message is not used)
    #[arg(trailing_var_arg = true)]
    rest: Vec<String>,
}

fn get_message(args: &Args) -> Option<String> {
    if let Some(ref m) = args.message {
        return Some(m.clone());
    }
    if args.rest.is_empty() {
        return None;
    }
    Some(args.rest.join(" "))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv::dotenv().ok();
    let args = Args::parse();
    let options = ChatOptions {
        api_url: args.api_url.clone(),
        verbose: args.verbose,
    };
    init_tracing(&options);

    let config = options.client_config();
    let target = config.base_url().to_string();
    tracing::debug!(base_url = %target, "client config resolved");
    let transport = HttpTransport::new(config);
    let mut stdout = std::io::stdout();

    if let Some(message) = get_message(&args) {
        run_once(transport, &message, &mut stdout).await?;
        return Ok(());
    }

    if std::io::stdin().is_terminal() {
        eprintln!("agent-chat: talking to {target}/chat. Type /exit or /quit to leave.");
    }
    let (session, settled) = ChatSession::new(transport);
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    run_interactive(session, settled, stdin, &mut stdout).await?;
    Ok(())
}
