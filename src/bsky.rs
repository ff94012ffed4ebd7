use anyhow::{bail, Result};
use atrium_api::{
    app::bsky::{
        embed::images::{ImageData, MainData},
        feed::post::{RecordData, RecordEmbedRefs},
    },
    types::string::Datetime,
};
use aws_sdk_secretsmanager::Client as SecretsManagerClient;
use bsky_sdk::{rich_text::RichText, BskyAgent};
use lambda_runtime::tracing;
use serde::Deserialize;

use crate::ClientHandler;

#[derive(Deserialize)]
struct BSkyCredentials {
    #[serde(rename = "BSKY_USER")]
    username: String,

    #[serde(rename = "BSKY_PASSWORD")]
    password: String,
}

pub async fn post(
    clients: &ClientHandler,
    secret_id: &str,
    shotmap: Vec<u8>,
    caption: &str,
    alt: String,
) -> Result<()> {
    let text = RichText::new_with_detect_facets(caption).await?;
    let BSkyCredentials { username, password } =
        load_credentials(&clients.secrets_manager, secret_id).await?;

    let agent = BskyAgent::builder().build().await?;
    agent.login(&username, &password).await?;
    tracing::info!("logged into bsky successfully");

    let embed = upload_shotmap(&agent, shotmap, alt).await?;
    create_post(agent, embed, text).await?;

    Ok(())
}

async fn load_credentials(client: &SecretsManagerClient, secret_id: &str) -> Result<BSkyCredentials> {
    let resp = client.get_secret_value().secret_id(secret_id).send().await?;

    let Some(secret) = resp.secret_string() else {
        bail!("no bsky credentials found in secrets manager");
    };

    Ok(serde_json::from_str(secret)?)
}

async fn upload_shotmap(agent: &BskyAgent, shotmap: Vec<u8>, alt: String) -> Result<ImageData> {
    let upload_response = agent.api.com.atproto.repo.upload_blob(shotmap).await?;

    let embed = ImageData {
        image: upload_response.blob.clone(),
        alt,
        aspect_ratio: None,
    };

    Ok(embed)
}

async fn create_post(agent: BskyAgent, image: ImageData, post_text: RichText) -> Result<()> {
    let image_embed =
        atrium_api::types::Union::Refs(RecordEmbedRefs::AppBskyEmbedImagesMain(Box::new(
            MainData {
                images: vec![image.into()],
            }
            .into(),
        )));

    let post = RecordData {
        created_at: Datetime::now(),
        text: post_text.text,
        facets: post_text.facets,
        embed: Some(image_embed),
        entities: None,
        labels: None,
        langs: None,
        reply: None,
        tags: None,
    };

    let result = agent.create_record(post).await?;
    tracing::info!("posted shotmap to bsky: {}", result.uri);

    Ok(())
}
