use anyhow::{Context, Result};
use lambda_runtime::tracing;
use reqwest::{
    multipart::{Form, Part},
    Client,
};

/// Mirror the shotmap post to a Discord webhook.
pub async fn post(client: &Client, webhook_url: &str, shotmap: Vec<u8>, caption: &str) -> Result<()> {
    let image = Part::bytes(shotmap)
        .file_name("shotmap.png")
        .mime_str("image/png")?;
    let form = Form::new()
        .text("content", caption.to_owned())
        .part("file0", image);

    client
        .post(webhook_url)
        .multipart(form)
        .send()
        .await
        .context("discord webhook request failed")?
        .error_for_status()
        .context("discord webhook returned an error status")?;
    tracing::info!("mirrored shotmap to discord webhook");

    Ok(())
}
