pub mod client;
pub mod wire;

use chrono::{DateTime, Utc};

// ---------------------------------------------------------------------------
// Domain types — clean model, independent of the ESPN wire format
// ---------------------------------------------------------------------------

/// Scoreboard endpoints this client knows how to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum League {
    MensCollegeBasketball,
    CollegeFootball,
    Nfl,
}

impl League {
    /// Sport path segment on the site v2 API.
    pub fn sport(&self) -> &'static str {
        match self {
            League::MensCollegeBasketball => "basketball",
            League::CollegeFootball | League::Nfl => "football",
        }
    }

    /// League path segment on the site v2 API.
    pub fn slug(&self) -> &'static str {
        match self {
            League::MensCollegeBasketball => "mens-college-basketball",
            League::CollegeFootball => "college-football",
            League::Nfl => "nfl",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            League::MensCollegeBasketball => "College Basketball",
            League::CollegeFootball => "College Football",
            League::Nfl => "NFL",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GameStatus {
    #[default]
    Unknown,
    Scheduled,
    InProgress,
    Final,
}

impl GameStatus {
    /// Whether the score line means anything yet (live or finished).
    pub fn has_score(&self) -> bool {
        matches!(self, GameStatus::InProgress | GameStatus::Final)
    }
}

/// One side of a matchup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Side {
    pub id: String,
    pub name: String,   // "Duke Blue Devils"
    pub abbrev: String, // "DUKE"
    pub score: String,  // ESPN sends scores as strings; "0" pre-game
    pub record: Option<String>, // "18-9" style summary
}

/// A normalized scoreboard entry for one competition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Game {
    pub id: String,
    pub name: String,
    pub start_time: Option<DateTime<Utc>>,
    pub status: GameStatus,
    pub detail: String,       // "Sat, February 7th at 3:30 PM EST"
    pub short_detail: String, // "2/7 - 3:30 PM EST"
    pub home: Side,
    pub away: Side,
    pub venue: Option<String>,
    pub broadcast: String, // comma-joined outlet names, possibly empty
}

impl Game {
    pub fn involves(&self, team_id: &str) -> bool {
        self.home.id == team_id || self.away.id == team_id
    }

    /// Short status text, falling back to the long form.
    pub fn status_line(&self) -> &str {
        if self.short_detail.is_empty() {
            &self.detail
        } else {
            &self.short_detail
        }
    }
}

/// A game tagged with the league it was fetched from. Schedule queries span
/// several leagues and need to remember where each record came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueGame {
    pub league: League,
    pub game: Game,
}
