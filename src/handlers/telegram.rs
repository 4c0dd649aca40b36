use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use teloxide::{
    prelude::*,
    types::{ParseMode, Update, UpdateKind},
};

use crate::ai::prompts::normalize_language;
use crate::commands::{Command, Inbound};
use crate::messages;
use crate::state::{AppState, TelegramChannel};
use crate::system_info::get_system_info;
use crate::utils::download_voice;

/// Telegram pushes updates here. Anything other than a wrong token is
/// acknowledged with `{"ok": true}` so Telegram does not redeliver.
pub async fn webhook(
    State(state): State<AppState>,
    Path(token): Path<String>,
    body: Bytes,
) -> Response {
    let Some(channel) = state.telegram.clone() else {
        return StatusCode::NOT_FOUND.into_response();
    };
    if token != channel.token {
        tracing::warn!("Webhook called with unknown token");
        return StatusCode::NOT_FOUND.into_response();
    }

    match serde_json::from_slice::<Update>(&body) {
        Ok(update) => handle_update(&state, &channel, update).await,
        Err(err) => tracing::error!(error = %err, "Error in webhook: malformed update"),
    }

    Json(serde_json::json!({ "ok": true })).into_response()
}

pub async fn handle_update(state: &AppState, channel: &TelegramChannel, update: Update) {
    let UpdateKind::Message(msg) = update.kind else {
        tracing::trace!("Ignoring non-message update");
        return;
    };

    let user = msg.from.as_ref();
    let lang = user
        .and_then(|u| u.language_code.as_deref())
        .map(normalize_language)
        .unwrap_or("en");
    let is_owner = user.is_some_and(|u| channel.is_owner(u.id));

    let reply = if msg.voice().is_some() {
        Some(voice_reply(state, channel, &msg, lang).await)
    } else if let Some(text) = msg.text() {
        Some(text_reply(state, text, lang, is_owner).await)
    } else {
        None
    };

    if let Some(reply) = reply {
        send_reply(&channel.bot, msg.chat.id, &reply).await;
    }
}

async fn voice_reply(state: &AppState, channel: &TelegramChannel, msg: &Message, lang: &str) -> String {
    let Some(voice) = msg.voice() else {
        return messages::voice_not_understood(lang).to_string();
    };

    let audio = match download_voice(&channel.bot, voice).await {
        Ok(audio) => audio,
        Err(err) => {
            tracing::warn!(error = %err, chat_id = msg.chat.id.0, "Failed to download voice note");
            return messages::voice_not_understood(lang).to_string();
        }
    };

    match state.responder.transcribe(&audio).await {
        Some(text) => {
            tracing::info!(chat_id = msg.chat.id.0, "Answering transcribed voice note");
            state.responder.resolve(&text, lang).await
        }
        None => messages::voice_not_understood(lang).to_string(),
    }
}

pub async fn text_reply(state: &AppState, text: &str, lang: &str, is_owner: bool) -> String {
    match Inbound::decode(text) {
        Inbound::Command(cmd) if cmd.owner_only() && !is_owner => {
            state.responder.resolve(text, lang).await
        }
        Inbound::Command(cmd) => command_reply(state, cmd, is_owner),
        Inbound::Chat(text) => state.responder.resolve(&text, lang).await,
    }
}

fn command_reply(state: &AppState, cmd: Command, is_owner: bool) -> String {
    let text = match cmd {
        Command::Start if is_owner => messages::START_OWNER,
        Command::Start => messages::START_PUBLIC,
        Command::Manual => messages::MANUAL,
        Command::PriceBook => messages::PRICE_BOOK,
        Command::Apps => messages::APPS,
        Command::Bots => messages::BOTS,
        Command::Cv => messages::CV,
        Command::Card => messages::CARD,
        Command::Skills => messages::SKILLS,
        Command::Landing => messages::LANDING,
        Command::Help => messages::HELP,
        Command::Status => {
            return messages::status_text(&get_system_info(), state.base_url.as_deref())
        }
        Command::Stats => {
            return messages::stats_text(
                &state.responder.provider_names(),
                state.responder.catalog().version(),
            )
        }
    };
    text.to_string()
}

/// Send a Markdown reply and log a warning on failure.
#[allow(deprecated)]
pub async fn send_reply(bot: &Bot, chat_id: ChatId, text: &str) {
    if let Err(err) = bot
        .send_message(chat_id, text)
        .parse_mode(ParseMode::Markdown)
        .await
    {
        tracing::warn!(error = %err, chat_id = chat_id.0, "Failed to send message");
    }
}
