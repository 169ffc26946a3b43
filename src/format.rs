/// Text-block rendering for chat display. Everything here returns plain
/// strings; no structured errors cross this layer.
use crate::Scope;
use crate::catalog::{self, Category, TrackedTeam};
use espn_api::{Game, League, LeagueGame};
use std::collections::HashSet;

fn sport_emoji(league: League) -> &'static str {
    match league.sport() {
        "basketball" => "🏀",
        _ => "🏈",
    }
}

/// Titled block for one league's tracked games.
pub fn league_block(league: League, games: &[Game], tracked: &HashSet<String>) -> String {
    let emoji = sport_emoji(league);
    let body = games
        .iter()
        .map(|g| game_block(g, tracked))
        .collect::<Vec<_>>()
        .join("\n\n");
    format!("{emoji} **{}** {emoji}\n{body}", league.label().to_uppercase())
}

/// One game: matchup line with a 📍 marker on tracked sides, then status,
/// venue, and broadcast lines.
pub fn game_block(game: &Game, tracked: &HashSet<String>) -> String {
    let mut ours: Vec<&str> = Vec::new();
    if tracked.contains(&game.home.id) {
        ours.push(&game.home.abbrev);
    }
    if tracked.contains(&game.away.id) {
        ours.push(&game.away.abbrev);
    }
    let marker = if ours.is_empty() {
        String::new()
    } else {
        format!(" 📍 {}", ours.join(", "))
    };

    // Score line once the game has started; plain matchup before tip-off.
    let matchup = if game.status.has_score() {
        format!(
            "**{} {} - {} {}**",
            game.away.abbrev, game.away.score, game.home.score, game.home.abbrev
        )
    } else {
        format!("**{} @ {}**", game.away.abbrev, game.home.abbrev)
    };

    let status = match game.status_line() {
        "" => "TBD",
        s => s,
    };
    let venue = game.venue.as_deref().unwrap_or("TBD");

    let mut block = format!("{matchup}{marker}\n📅 {status}\n🏟️ {venue}");
    if !game.broadcast.is_empty() {
        block.push_str("\n📺 ");
        block.push_str(&game.broadcast);
    }
    block
}

pub fn no_games_message(scope: Scope) -> String {
    format!(
        "No games found for tracked teams in {} right now.",
        scope.label()
    )
}

pub fn unknown_team_message(input: &str) -> String {
    format!(
        "Team '{}' not found. Available teams: {}",
        input.trim(),
        catalog::alias_list()
    )
}

pub fn schedule_prompt() -> String {
    format!("Please specify a team: {}", catalog::alias_list())
}

/// Upcoming games rendered from the team's perspective.
pub fn schedule(team: &TrackedTeam, games: &[LeagueGame]) -> String {
    if games.is_empty() {
        return format!("No upcoming games found for {}", team.name);
    }

    let team_id = team.id.to_string();
    let mut out = vec![format!("📅 **{} SCHEDULE** 📅\n", team.name.to_uppercase())];

    for entry in games {
        let game = &entry.game;
        let league_tag = match entry.league {
            League::Nfl => " (NFL)",
            League::CollegeFootball => " (College)",
            League::MensCollegeBasketball => "",
        };
        let (opponent, location) = if game.home.id == team_id {
            (format!("vs {}", game.away.abbrev), "Home")
        } else {
            (format!("@ {}", game.home.abbrev), "Away")
        };
        let status = match game.status_line() {
            "" => "TBD",
            s => s,
        };
        let venue = game.venue.as_deref().unwrap_or("TBD");

        let mut line = format!(
            "{} **{opponent}** ({location}){league_tag}\n📅 {status}\n🏟️ {venue}",
            sport_emoji(entry.league)
        );
        if !game.broadcast.is_empty() {
            line.push_str("\n📺 ");
            line.push_str(&game.broadcast);
        }
        out.push(line);
    }

    out.join("\n\n")
}

/// The full static catalog, grouped by category.
pub fn team_info() -> String {
    let mut out = vec!["🏀🏈 **TRACKED TEAMS** 🏈🏀\n".to_owned()];

    for (i, category) in [Category::College, Category::Pro].into_iter().enumerate() {
        if i > 0 {
            out.push(String::new());
        }
        out.push(format!("**{}:**", category.heading()));
        for team in catalog::TEAMS.iter().filter(|t| t.category == category) {
            out.push(format!(
                "• **{}** ({}) - ID: {}",
                team.name, team.abbrev, team.id
            ));
        }
    }

    out.push(String::new());
    out.push("**Usage Examples:**".to_owned());
    out.push("• 'Show me NFL scores'".to_owned());
    out.push("• 'When does Duke play next?'".to_owned());
    out.push("• 'Panthers schedule'".to_owned());

    out.join("\n")
}

pub fn help() -> String {
    "🏀🏈 **Sports Score Tracker** 🏈🏀

I can help you with:
• **Live Scores**: \"Show me the latest scores\" or \"NFL scores\"
• **Team Schedules**: \"When does Duke play next?\" or \"Panthers schedule\"
• **Team Info**: \"What teams do you track?\"

**Tracked Teams:**
• College: Duke, UNC, USC Gamecocks, Clemson
• NFL: Panthers, Jaguars, Bears, Falcons

Just ask me naturally about any team or sport!"
        .to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use espn_api::{GameStatus, Side};

    fn side(id: &str, abbrev: &str, score: &str) -> Side {
        Side {
            id: id.to_owned(),
            name: format!("Team {abbrev}"),
            abbrev: abbrev.to_owned(),
            score: score.to_owned(),
            record: None,
        }
    }

    fn game(status: GameStatus) -> Game {
        Game {
            id: "401".to_owned(),
            name: "Team AWY at Team HOM".to_owned(),
            start_time: None,
            status,
            detail: "Sat, February 7th at 3:30 PM EST".to_owned(),
            short_detail: "2/7 - 3:30 PM EST".to_owned(),
            home: side("150", "DUKE", "42"),
            away: side("999", "AWY", "38"),
            venue: Some("Cameron Indoor Stadium".to_owned()),
            broadcast: "ESPN".to_owned(),
        }
    }

    fn tracked() -> HashSet<String> {
        HashSet::from(["150".to_owned()])
    }

    #[test]
    fn live_game_shows_the_score_line() {
        let block = game_block(&game(GameStatus::InProgress), &tracked());
        assert!(block.contains("**AWY 38 - 42 DUKE**"));
        assert!(block.contains("📍 DUKE"));
        assert!(block.contains("📺 ESPN"));
    }

    #[test]
    fn scheduled_game_shows_the_matchup_without_scores() {
        let block = game_block(&game(GameStatus::Scheduled), &tracked());
        assert!(block.contains("**AWY @ DUKE**"));
        assert!(!block.contains("42"));
    }

    #[test]
    fn missing_details_fall_back_to_tbd() {
        let mut g = game(GameStatus::Scheduled);
        g.detail.clear();
        g.short_detail.clear();
        g.venue = None;
        g.broadcast.clear();

        let block = game_block(&g, &tracked());
        assert!(block.contains("📅 TBD"));
        assert!(block.contains("🏟️ TBD"));
        assert!(!block.contains("📺"));
    }

    #[test]
    fn league_block_is_titled_with_the_sport_emoji() {
        let games = [game(GameStatus::InProgress)];
        let block = league_block(League::MensCollegeBasketball, &games, &tracked());
        assert!(block.starts_with("🏀 **COLLEGE BASKETBALL** 🏀\n"));

        let block = league_block(League::Nfl, &games, &tracked());
        assert!(block.starts_with("🏈 **NFL** 🏈\n"));
    }

    #[test]
    fn schedule_renders_from_the_team_perspective() {
        let duke = catalog::by_id(150).unwrap();
        let home_game = LeagueGame {
            league: League::MensCollegeBasketball,
            game: game(GameStatus::Scheduled),
        };
        let mut away = game(GameStatus::Scheduled);
        away.home = side("999", "AWY", "0");
        away.away = side("150", "DUKE", "0");
        let away_game = LeagueGame {
            league: League::CollegeFootball,
            game: away,
        };

        let text = schedule(duke, &[home_game, away_game]);
        assert!(text.starts_with("📅 **DUKE BLUE DEVILS SCHEDULE** 📅"));
        assert!(text.contains("🏀 **vs AWY** (Home)"));
        assert!(text.contains("🏈 **@ AWY** (Away) (College)"));
    }

    #[test]
    fn empty_schedule_has_its_own_message() {
        let duke = catalog::by_id(150).unwrap();
        assert_eq!(
            schedule(duke, &[]),
            "No upcoming games found for Duke Blue Devils"
        );
    }

    #[test]
    fn team_info_lists_every_cataloged_team() {
        let text = team_info();
        for team in catalog::TEAMS {
            assert!(text.contains(team.name), "missing {}", team.name);
        }
        assert!(text.contains("**College Teams:**"));
        assert!(text.contains("**NFL Teams:**"));
    }

    #[test]
    fn unknown_team_message_lists_aliases() {
        let text = unknown_team_message("  gophers ");
        assert!(text.starts_with("Team 'gophers' not found."));
        assert!(text.contains("duke"));
        assert!(text.contains("falcons"));
    }
}
