use anyhow::Result;
use futures_util::StreamExt;
use teloxide::{net::Download, prelude::*, types::Voice, RequestError};

/// Download a file from Telegram and return the raw bytes.
pub async fn download_file(bot: &Bot, path: &str) -> Result<Vec<u8>, RequestError> {
    let mut data = Vec::new();
    let mut stream = bot.download_file_stream(path);
    while let Some(chunk) = stream.next().await {
        data.extend_from_slice(&chunk?);
    }
    tracing::trace!(size = data.len(), "downloaded file bytes");
    Ok(data)
}

/// Resolve a voice note's file path and fetch its audio.
pub async fn download_voice(bot: &Bot, voice: &Voice) -> Result<Vec<u8>> {
    let file = bot.get_file(voice.file.id.clone()).await?;
    tracing::debug!(path = %file.path, duration = ?voice.duration, "Downloading voice note");
    let bytes = download_file(bot, &file.path).await?;
    tracing::debug!(path = %file.path, size = bytes.len(), "Finished download");
    Ok(bytes)
}
