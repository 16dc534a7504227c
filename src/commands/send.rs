use anyhow::Result;
use log::{debug, info};

use crate::{
    notify::{Notifier, SendMessage, SendOutcome},
    runtime::Runtime,
};

use super::config::SendConfig;
use super::services::build_notifier;

/// Send the pre-generated message file to the configured Telegram chat.
///
/// Returns 1 when the message file is missing. A rejected or failed send
/// is reported on stdout and still returns 0.
#[tracing::instrument(skip(runtime, config))]
pub async fn send_message<R: Runtime>(runtime: &R, config: SendConfig) -> Result<i32> {
    let notifier = build_notifier(&config)?;
    run(runtime, &notifier, &config).await
}

#[tracing::instrument(skip(runtime, notifier, config))]
pub async fn run<R: Runtime, N: Notifier + ?Sized>(
    runtime: &R,
    notifier: &N,
    config: &SendConfig,
) -> Result<i32> {
    let path = &config.message_file;
    if !runtime.exists(path) {
        println!("❌ Error: {} not found", path.display());
        println!("💡 Run process_report.py first to generate the message");
        return Ok(1);
    }

    let text = runtime.read_to_string(path)?;
    debug!("Read {} bytes from {}", text.len(), path.display());

    let message = SendMessage::markdown(config.chat_id.clone(), text);
    match notifier.send_message(&message).await {
        Ok(SendOutcome::Delivered) => {
            info!("Message delivered");
            println!("✅ Message sent to Telegram successfully");
        }
        Ok(SendOutcome::Rejected { status, body }) => {
            println!("❌ Failed to send message: {}", status);
            println!("{}", body);
        }
        Err(e) => {
            println!("❌ Error sending message: {:#}", e);
        }
    }

    Ok(0)
}
