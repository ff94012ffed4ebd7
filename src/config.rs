use anyhow::{bail, Result};

pub const S3_BUCKET_VAR: &str = "S3_BUCKET";
pub const SHOTMAP_BLANK_VAR: &str = "SHOTMAP_BLANK";
pub const BSKY_SECRET_ID_VAR: &str = "BSKY_SECRET_ID";
pub const GAME_ID_VAR: &str = "GAME_ID";
pub const DISCORD_URL_VAR: &str = "DISCORD_URL";

/// Process-wide settings, read from the environment once per cold start.
#[derive(Debug, Clone)]
pub struct Config {
    pub bucket: String,
    pub rink_key: String,
    pub bsky_secret_id: String,
    pub default_game_id: Option<String>,
    pub discord_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            bucket: required(&lookup, S3_BUCKET_VAR)?,
            rink_key: required(&lookup, SHOTMAP_BLANK_VAR)?,
            bsky_secret_id: required(&lookup, BSKY_SECRET_ID_VAR)?,
            default_game_id: optional(&lookup, GAME_ID_VAR),
            discord_url: optional(&lookup, DISCORD_URL_VAR),
        })
    }
}

fn required<F>(lookup: &F, var: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(var) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => bail!("required environment variable {var} is not set"),
    }
}

fn optional<F>(lookup: &F, var: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(var).filter(|value| !value.is_empty())
}
