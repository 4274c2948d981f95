//! Minimal echo bot.
//!
//! Connects, registers, joins a channel and repeats back every channel
//! message that starts with `!echo `.
//!
//! ```text
//! cargo run --example echo_bot -- irc.libera.chat:6667 '#slirc-test'
//! ```

use anyhow::Context;
use slirc_client::{connect, ConnectionConfig, NumericKind};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let server = args.next().unwrap_or_else(|| "irc.libera.chat:6667".to_owned());
    let channel = args.next().unwrap_or_else(|| "#slirc-test".to_owned());

    let config = ConnectionConfig::default().with_name("echo");
    let (mut connection, reader, mut queue) = connect(server.as_str(), &config)
        .await
        .with_context(|| format!("connecting to {server}"))?;
    let handle = connection.handle();

    handle.send_message("NICK", ["slirc_echo"]).await?;
    handle
        .send_message("USER", ["slirc", "0", "*", "slirc echo bot"])
        .await?;

    let bot = handle.clone();
    tokio::spawn(async move {
        while let Some(message) = queue.recv().await {
            if message.numeric_kind() == Some(NumericKind::Error) {
                warn!("server error: {}", message);
                continue;
            }

            let result = match message.command() {
                "RPL_WELCOME" => bot.send_message("JOIN", [channel.as_str()]).await,
                "PRIVMSG" => match message.args() {
                    [target, text] if target == &channel => match text.strip_prefix("!echo ") {
                        Some(echo) => bot.send_message("PRIVMSG", [target.as_str(), echo]).await,
                        None => Ok(()),
                    },
                    _ => Ok(()),
                },
                _ => Ok(()),
            };

            if let Err(e) = result {
                warn!("failed to reply: {}", e);
            }
        }
    });

    tokio::select! {
        result = connection.run(reader) => result?,
        _ = tokio::signal::ctrl_c() => {
            info!("interrupted, quitting");
            handle.send_message("QUIT", ["bye"]).await?;
            handle.close().await?;
        }
    }

    Ok(())
}
