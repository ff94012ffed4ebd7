use anyhow::{Context, Result};
use lambda_runtime::tracing;
use reqwest::Client;
use serde::Deserialize;

const FEED_URL: &str = "https://statsapi.web.nhl.com/api/v1/game";

#[derive(Deserialize, Debug)]
pub struct LiveFeed {
    #[serde(rename = "gameData")]
    pub game_data: GameData,

    #[serde(rename = "liveData")]
    pub live_data: LiveData,
}

#[derive(Deserialize, Debug)]
pub struct GameData {
    pub teams: GameTeams,
    pub status: GameStatus,
}

#[derive(Deserialize, Debug)]
pub struct GameStatus {
    #[serde(rename = "abstractGameState")]
    pub abstract_game_state: String,
}

#[derive(Deserialize, Debug)]
pub struct GameTeams {
    pub home: TeamInfo,
    pub away: TeamInfo,
}

#[derive(Deserialize, Debug)]
pub struct TeamInfo {
    pub name: String,
    pub abbreviation: String,
}

#[derive(Deserialize, Debug)]
pub struct LiveData {
    pub plays: Plays,
    pub linescore: Linescore,
}

#[derive(Deserialize, Debug)]
pub struct Plays {
    #[serde(rename = "allPlays")]
    pub all_plays: Vec<Play>,
}

#[derive(Deserialize, Debug)]
pub struct Play {
    pub result: PlayResult,
    pub about: PlayAbout,

    // The feed omits coordinates for some events and ships an empty
    // object for others; both shapes must parse.
    #[serde(default)]
    pub coordinates: Option<Coordinates>,

    #[serde(default)]
    pub team: Option<PlayTeam>,
}

#[derive(Deserialize, Debug)]
pub struct PlayResult {
    #[serde(rename = "eventTypeId")]
    pub event_type_id: String,
}

#[derive(Deserialize, Debug)]
pub struct PlayAbout {
    pub period: i32,
}

#[derive(Deserialize, Debug, Default)]
pub struct Coordinates {
    pub x: Option<f64>,
    pub y: Option<f64>,
}

#[derive(Deserialize, Debug)]
pub struct PlayTeam {
    pub name: String,
}

#[derive(Deserialize, Debug)]
pub struct Linescore {
    #[serde(rename = "currentPeriodOrdinal", default)]
    pub current_period_ordinal: Option<String>,

    pub teams: LinescoreTeams,
}

#[derive(Deserialize, Debug)]
pub struct LinescoreTeams {
    pub home: LinescoreTeam,
    pub away: LinescoreTeam,
}

#[derive(Deserialize, Debug)]
pub struct LinescoreTeam {
    pub goals: u32,
}

/// Scoreline details pulled from the feed for captioning.
#[derive(Debug)]
pub struct GameSummary {
    pub home_abbr: String,
    pub away_abbr: String,
    pub home_goals: u32,
    pub away_goals: u32,
    pub period_ordinal: String,
    pub game_end: bool,
}

impl LiveFeed {
    pub fn summary(&self) -> GameSummary {
        let linescore = &self.live_data.linescore;

        GameSummary {
            home_abbr: self.game_data.teams.home.abbreviation.clone(),
            away_abbr: self.game_data.teams.away.abbreviation.clone(),
            home_goals: linescore.teams.home.goals,
            away_goals: linescore.teams.away.goals,
            period_ordinal: linescore
                .current_period_ordinal
                .clone()
                .unwrap_or_else(|| "1st".to_string()),
            game_end: self.game_data.status.abstract_game_state == "Final",
        }
    }
}

pub async fn fetch_live_feed(client: &Client, game_id: &str) -> Result<LiveFeed> {
    let url = format!("{FEED_URL}/{game_id}/feed/live");
    let response = client
        .get(&url)
        .header("accept", "application/json")
        .header("user-agent", "reqwest")
        .send()
        .await
        .with_context(|| format!("live feed request for game {game_id} failed"))?
        .error_for_status()
        .with_context(|| format!("live feed for game {game_id} returned an error status"))?;

    let feed: LiveFeed = response
        .json()
        .await
        .with_context(|| format!("malformed live feed payload for game {game_id}"))?;
    tracing::info!("downloaded live feed for game {game_id}");

    Ok(feed)
}
