use std::sync::OnceLock;

use anyhow::{Context, Result};
use aws_config::BehaviorVersion;
use aws_sdk_s3::Client as S3Client;
use aws_sdk_secretsmanager::Client as SecretsManagerClient;
use aws_types::SdkConfig;
use lambda_runtime::{run, service_fn, tracing, Error, LambdaEvent};
use reqwest::Client as HttpClient;
use serde::Deserialize;

mod bsky;
mod caption;
mod config;
mod discord;
mod nhl;
mod render;
mod rink;
mod shots;

use config::Config;

pub struct ClientHandler {
    s3: S3Client,
    secrets_manager: SecretsManagerClient,
    http: HttpClient,
}

impl ClientHandler {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            s3: S3Client::new(config),
            secrets_manager: SecretsManagerClient::new(config),
            http: HttpClient::new(),
        }
    }
}

static CLIENTS: OnceLock<ClientHandler> = OnceLock::new();
static CONFIG: OnceLock<Config> = OnceLock::new();

#[derive(Deserialize, Debug, Default)]
struct ShotmapRequest {
    game_id: Option<String>,
}

fn resolve_game_id(request: &ShotmapRequest, config: &Config) -> Result<String> {
    request
        .game_id
        .as_deref()
        .or(config.default_game_id.as_deref())
        .filter(|game_id| !game_id.is_empty())
        .map(str::to_owned)
        .context("no game id in payload or configuration")
}

async fn handler(event: LambdaEvent<ShotmapRequest>) -> Result<(), Error> {
    let config = match CONFIG.get() {
        Some(config) => config,
        None => {
            let loaded = Config::from_env()?;
            CONFIG.get_or_init(|| loaded)
        }
    };

    // Resolved before any client is built so a missing game id never
    // costs a network call.
    let game_id = resolve_game_id(&event.payload, config)?;
    tracing::info!("generating shotmap for game {game_id}");

    let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let clients = CLIENTS.get_or_init(|| ClientHandler::new(&sdk_config));

    let feed = nhl::fetch_live_feed(&clients.http, &game_id).await?;
    let summary = feed.summary();
    let report = shots::extract(&feed);
    tracing::info!(
        "extracted {} home / {} away shot attempts",
        report.home.len(),
        report.away.len()
    );

    let rink = rink::load(&clients.s3, config).await?;
    let shotmap = render::shotmap(rink, &report);
    let png = render::encode_png(&shotmap)?;

    let text = caption::build(&game_id, &summary);
    let alt = caption::alt_text(&summary);
    bsky::post(clients, &config.bsky_secret_id, png.clone(), &text, alt).await?;

    if let Some(webhook_url) = &config.discord_url {
        discord::post(&clients.http, webhook_url, png, &text).await?;
    }
    tracing::info!("successfully sent shotmap post");

    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();
    run(service_fn(handler)).await?;

    Ok(())
}
