pub mod catalog;
pub mod dispatch;
pub mod format;

use crate::dispatch::Intent;
use chrono::{DateTime, Duration, Utc};
use espn_api::client::ScoreboardClient;
use espn_api::{Game, League, LeagueGame};
use futures_util::future::join_all;
use log::{debug, warn};
use std::collections::HashSet;

pub const DEFAULT_LOOKAHEAD_DAYS: i64 = 14;

/// Which league scoreboards a live-scores request covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Basketball,
    CollegeFootball,
    Nfl,
    All,
}

impl Scope {
    /// Leagues queried for this scope, in display order: basketball, then
    /// college football, then NFL.
    pub fn leagues(&self) -> &'static [League] {
        match self {
            Scope::Basketball => &[League::MensCollegeBasketball],
            Scope::CollegeFootball => &[League::CollegeFootball],
            Scope::Nfl => &[League::Nfl],
            Scope::All => &[
                League::MensCollegeBasketball,
                League::CollegeFootball,
                League::Nfl,
            ],
        }
    }

    pub fn parse(s: &str) -> Option<Scope> {
        match s.trim().to_lowercase().as_str() {
            "basketball" => Some(Scope::Basketball),
            "football" | "college-football" => Some(Scope::CollegeFootball),
            "nfl" => Some(Scope::Nfl),
            "both" | "all" => Some(Scope::All),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Scope::Basketball => "basketball",
            Scope::CollegeFootball => "football",
            Scope::Nfl => "nfl",
            Scope::All => "both",
        }
    }
}

/// The tool surface consumed by a chat host: static catalog plus an ESPN
/// client, every operation returning chat-ready text under all upstream
/// conditions.
#[derive(Debug, Clone)]
pub struct ScoreBot {
    client: ScoreboardClient,
    tracked: HashSet<String>,
}

impl Default for ScoreBot {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreBot {
    pub fn new() -> Self {
        Self::with_client(ScoreboardClient::new())
    }

    /// Build against a specific client. Tests point this at a mock server.
    pub fn with_client(client: ScoreboardClient) -> Self {
        Self {
            client,
            tracked: catalog::tracked_ids(),
        }
    }

    /// One league's tracked games, with every upstream failure absorbed.
    /// A dead scoreboard degrades to "no games", never to error text.
    async fn league_games(&self, league: League) -> Vec<Game> {
        match self.client.fetch_tracked(league, &self.tracked).await {
            Ok(games) => {
                debug!(
                    "{} tracked game(s) on the {} scoreboard",
                    games.len(),
                    league.label()
                );
                games
            }
            Err(e) => {
                warn!("scoreboard fetch failed: {e}");
                Vec::new()
            }
        }
    }

    /// Live scores for every league in scope. Fetches run concurrently but
    /// blocks are assembled in the scope's declared league order.
    pub async fn live_scores(&self, scope: Scope) -> String {
        let leagues = scope.leagues();
        let fetched = join_all(leagues.iter().map(|&league| self.league_games(league))).await;

        let blocks: Vec<String> = leagues
            .iter()
            .zip(&fetched)
            .filter(|(_, games)| !games.is_empty())
            .map(|(&league, games)| format::league_block(league, games, &self.tracked))
            .collect();

        if blocks.is_empty() {
            format::no_games_message(scope)
        } else {
            blocks.join("\n\n")
        }
    }

    /// Upcoming games for one team, resolved through the alias table.
    /// College teams are checked on both college scoreboards, pro teams only
    /// on the NFL one.
    pub async fn team_schedule(&self, name: &str, lookahead_days: i64) -> String {
        let Some(team) = catalog::resolve(name) else {
            return format::unknown_team_message(name);
        };

        let leagues = team.category.leagues();
        let fetched = join_all(leagues.iter().map(|&league| self.league_games(league))).await;

        let team_id = team.id.to_string();
        let horizon = Utc::now() + Duration::days(lookahead_days);
        let mut games: Vec<LeagueGame> = leagues
            .iter()
            .zip(fetched)
            .flat_map(|(&league, games)| {
                games.into_iter().map(move |game| LeagueGame { league, game })
            })
            .filter(|entry| entry.game.involves(&team_id))
            .filter(|entry| entry.game.start_time.is_none_or(|t| t <= horizon))
            .collect();

        order_schedule(&mut games);
        format::schedule(team, &games)
    }

    /// "all" lists the catalog; per-team lookups are a known gap answered
    /// with a placeholder rather than an error.
    pub fn team_info(&self, team: &str) -> String {
        if team.trim().eq_ignore_ascii_case("all") {
            format::team_info()
        } else {
            format!(
                "Individual team info for {} - feature coming soon!",
                team.trim()
            )
        }
    }

    pub fn help(&self) -> String {
        format::help()
    }

    /// Conversational entry point: route free text to an operation.
    pub async fn respond(&self, input: &str) -> String {
        match dispatch::route(input) {
            Intent::Help => format::help(),
            Intent::TeamInfo => format::team_info(),
            Intent::Schedule => match dispatch::extract_team(input) {
                Some(team) => self.team_schedule(team, DEFAULT_LOOKAHEAD_DAYS).await,
                None => format::schedule_prompt(),
            },
            Intent::Scores(scope) => self.live_scores(scope).await,
        }
    }
}

/// Dated games ascending by start time; undated games keep their upstream
/// order at the end.
fn order_schedule(games: &mut [LeagueGame]) {
    games.sort_by_key(|entry| entry.game.start_time.unwrap_or(DateTime::<Utc>::MAX_UTC));
}
