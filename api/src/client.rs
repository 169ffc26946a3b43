use crate::wire::{EspnCompetition, EspnCompetitor, EspnEvent, ScoreboardResponse};
use crate::{Game, GameStatus, League, Side};
use chrono::{DateTime, Utc};
use reqwest::Client;
use std::collections::HashSet;
use std::fmt;
use std::time::Duration;

pub type ApiResult<T> = Result<T, ApiError>;

const ESPN_SITE_V2: &str = "https://site.api.espn.com/apis/site/v2/sports";

/// Scoreboard client backed by ESPN's public site endpoints.
#[derive(Debug, Clone)]
pub struct ScoreboardClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl Default for ScoreboardClient {
    fn default() -> Self {
        Self {
            client: Client::builder()
                .user_agent("scorebot/0.1 (tracked-team score tool)")
                .build()
                .unwrap_or_default(),
            base_url: ESPN_SITE_V2.to_owned(),
            timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug)]
pub enum ApiError {
    Network(reqwest::Error, String),
    Api(reqwest::Error, String),
    Parsing(reqwest::Error, String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(e, url) => write!(f, "Network error for {url}: {e}"),
            ApiError::Api(e, url) => write!(f, "API error for {url}: {e}"),
            ApiError::Parsing(e, url) => write!(f, "Parse error for {url}: {e}"),
        }
    }
}

impl ScoreboardClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at a different host. Tests use this with a local
    /// mock server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Fetch the raw scoreboard for one league. The URL is built from the
    /// league enum alone; callers cannot inject path segments.
    pub async fn fetch_scoreboard(&self, league: League) -> ApiResult<ScoreboardResponse> {
        let url = format!(
            "{}/{}/{}/scoreboard",
            self.base_url,
            league.sport(),
            league.slug()
        );
        self.get(&url).await
    }

    /// Fetch one league's scoreboard and keep only games involving a tracked
    /// team.
    pub async fn fetch_tracked(
        &self,
        league: League,
        tracked: &HashSet<String>,
    ) -> ApiResult<Vec<Game>> {
        let raw = self.fetch_scoreboard(league).await?;
        Ok(tracked_games(&raw, tracked))
    }

    async fn get<T: Default + serde::de::DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| ApiError::Network(e, url.to_owned()))?;

        match response.error_for_status() {
            Ok(res) => res
                .json::<T>()
                .await
                .map_err(|e| ApiError::Parsing(e, url.to_owned())),
            Err(e) => {
                if e.status().map(|s| s.is_client_error()).unwrap_or(false) {
                    Ok(T::default())
                } else {
                    Err(ApiError::Api(e, url.to_owned()))
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Normalizer: ESPN wire types → tracked Game records
// ---------------------------------------------------------------------------

/// Walk `events[] → competitions[]` and flatten every competition involving a
/// tracked team into a `Game`. Pure function of its input: upstream event
/// order is preserved, and competitions that violate shape assumptions are
/// dropped whole, never partially emitted.
pub fn tracked_games(raw: &ScoreboardResponse, tracked: &HashSet<String>) -> Vec<Game> {
    let mut games = Vec::new();
    for event in raw.events.as_deref().unwrap_or_default() {
        for competition in event.competitions.as_deref().unwrap_or_default() {
            let competitors = competition.competitors.as_deref().unwrap_or_default();
            // One record per competition at most, even when both sides are
            // tracked; `any` stops at the first tracked competitor.
            let is_tracked = competitors.iter().any(|c| {
                c.team
                    .as_ref()
                    .and_then(|t| t.id.as_deref())
                    .is_some_and(|id| tracked.contains(id))
            });
            if !is_tracked {
                continue;
            }
            if let Some(game) = map_competition(event, competition) {
                games.push(game);
            }
        }
    }
    games
}

fn map_competition(event: &EspnEvent, competition: &EspnCompetition) -> Option<Game> {
    let competitors = competition.competitors.as_deref().unwrap_or_default();
    if competitors.len() != 2 {
        return None;
    }

    // homeAway when present; positional fallback otherwise. The fallback can
    // mislabel sides on payloads that omit homeAway.
    let home = competitors
        .iter()
        .find(|c| c.home_away.as_deref() == Some("home"))
        .unwrap_or(&competitors[0]);
    let away = competitors
        .iter()
        .find(|c| c.home_away.as_deref() == Some("away"))
        .unwrap_or(&competitors[1]);

    let status_type = event
        .status
        .as_ref()
        .and_then(|s| s.status_type.as_ref());

    Some(Game {
        id: event.id.clone().unwrap_or_default(),
        name: event.name.clone().unwrap_or_default(),
        start_time: event
            .date
            .as_deref()
            .and_then(|d| DateTime::parse_from_rfc3339(d).ok())
            .map(|dt| dt.with_timezone(&Utc)),
        status: parse_state(status_type.and_then(|t| t.state.as_deref())),
        detail: status_type
            .and_then(|t| t.detail.clone())
            .unwrap_or_default(),
        short_detail: status_type
            .and_then(|t| t.short_detail.clone())
            .unwrap_or_default(),
        home: map_side(home)?,
        away: map_side(away)?,
        venue: competition.venue.as_ref().and_then(|v| v.full_name.clone()),
        broadcast: join_broadcasts(competition),
    })
}

/// Team identity is load-bearing for filtering; a competitor without one
/// drops the whole competition.
fn map_side(c: &EspnCompetitor) -> Option<Side> {
    let team = c.team.as_ref()?;
    Some(Side {
        id: team.id.clone()?,
        name: team.display_name.clone().unwrap_or_default(),
        abbrev: team.abbreviation.clone().unwrap_or_default(),
        score: c.score.clone().unwrap_or_else(|| "0".to_owned()),
        record: c
            .records
            .as_ref()
            .and_then(|r| r.first())
            .and_then(|r| r.summary.clone())
            .filter(|s| !s.is_empty()),
    })
}

fn parse_state(state: Option<&str>) -> GameStatus {
    match state {
        Some("pre") => GameStatus::Scheduled,
        Some("in") => GameStatus::InProgress,
        Some("post") => GameStatus::Final,
        _ => GameStatus::Unknown,
    }
}

/// First name per broadcast entry, joined with ", ". Entries without names
/// are skipped.
fn join_broadcasts(competition: &EspnCompetition) -> String {
    competition
        .broadcasts
        .as_deref()
        .unwrap_or_default()
        .iter()
        .filter_map(|b| b.names.as_ref().and_then(|n| n.first()).cloned())
        .collect::<Vec<_>>()
        .join(", ")
}
