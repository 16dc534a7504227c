use clap::Parser;
use relbot::commands::SendConfig;
use relbot::runtime::RealRuntime;
use std::path::PathBuf;

/// send-msg - forward a pre-generated message to Telegram
///
/// Reads the message file and posts it, rendered as Markdown, to the chat
/// named by TELEGRAM_CHAT_ID using the bot in TELEGRAM_BOT_TOKEN.
#[derive(Parser, Debug)]
#[command(name = "send-msg", author, version = env!("RELBOT_VERSION"), about)]
struct Cli {
    /// Message file written by process_report.py
    /// (defaults to telegram_msg.txt in the current directory)
    #[arg(long = "file", short = 'f', value_name = "PATH")]
    file: Option<PathBuf>,

    /// Telegram Bot API URL (defaults to https://api.telegram.org)
    #[arg(long = "api-url", value_name = "URL")]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let runtime = RealRuntime;

    let config = SendConfig::load(&runtime, cli.api_url, cli.file);
    let code = match relbot::commands::send_message(&runtime, config).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(code);
}
