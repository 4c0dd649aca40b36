//! Point the Telegram bot at this deployment and publish its command menu.
//!
//! Reads `TELEGRAM_BOT_TOKEN` and `BASE_URL` from the environment (or `.env`).

use anyhow::{bail, Context, Result};
use salesbot::{Command, Config};
use teloxide::{prelude::*, utils::command::BotCommands};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let Some(telegram) = config.telegram else {
        bail!("TELEGRAM_BOT_TOKEN is not set");
    };
    let Some(base_url) = config.base_url else {
        bail!("BASE_URL is not set");
    };

    let webhook = format!("{base_url}/webhook/{}", telegram.token);
    let url = reqwest::Url::parse(&webhook).context("BASE_URL is not a valid URL")?;

    let bot = Bot::new(telegram.token);
    tracing::info!(base_url = %base_url, "Registering webhook");
    bot.set_webhook(url).await.context("setWebhook failed")?;
    bot.set_my_commands(Command::bot_commands())
        .await
        .context("setMyCommands failed")?;

    let info = bot.get_webhook_info().await.context("getWebhookInfo failed")?;
    tracing::info!(
        pending = info.pending_update_count,
        last_error = ?info.last_error_message,
        "Webhook registered"
    );
    Ok(())
}
