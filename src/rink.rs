use anyhow::{Context, Result};
use aws_sdk_s3::Client as S3Client;
use image::RgbaImage;
use lambda_runtime::tracing;
use tokio::sync::OnceCell;

use crate::config::Config;

/// Rink coordinate space in feet, centre ice at the origin.
pub const X_EXTENT: f64 = 100.0;
pub const Y_EXTENT: f64 = 42.5;

static RINK: OnceCell<RgbaImage> = OnceCell::const_new();

/// The blank rink template, fetched once per process. The image is
/// immutable so warm invocations reuse the cached copy without any
/// invalidation.
pub async fn load(client: &S3Client, config: &Config) -> Result<&'static RgbaImage> {
    RINK.get_or_try_init(|| download(client, config)).await
}

async fn download(client: &S3Client, config: &Config) -> Result<RgbaImage> {
    let object = client
        .get_object()
        .bucket(&config.bucket)
        .key(&config.rink_key)
        .send()
        .await
        .with_context(|| {
            format!(
                "fetching rink template s3://{}/{}",
                config.bucket, config.rink_key
            )
        })?;
    let bytes = object.body.collect().await?.into_bytes();

    let rink = image::load_from_memory(&bytes)
        .with_context(|| format!("decoding rink template {}", config.rink_key))?
        .to_rgba8();
    tracing::info!(
        "loaded {}x{} rink template from s3://{}/{}",
        rink.width(),
        rink.height(),
        config.bucket,
        config.rink_key
    );

    Ok(rink)
}
