/// Static tracked-team catalog and alias table. Immutable configuration
/// data; growing the catalog means adding rows here, not logic elsewhere.
use espn_api::League;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    College,
    Pro,
}

impl Category {
    /// Which league scoreboards to query for teams of this category.
    /// College teams play both basketball and football seasons.
    pub fn leagues(&self) -> &'static [League] {
        match self {
            Category::College => &[League::MensCollegeBasketball, League::CollegeFootball],
            Category::Pro => &[League::Nfl],
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            Category::College => "College Teams",
            Category::Pro => "NFL Teams",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackedTeam {
    pub id: u32,
    pub name: &'static str,
    pub abbrev: &'static str,
    pub category: Category,
}

pub const TEAMS: &[TrackedTeam] = &[
    TrackedTeam { id: 150, name: "Duke Blue Devils", abbrev: "DUKE", category: Category::College },
    TrackedTeam { id: 153, name: "UNC Tar Heels", abbrev: "UNC", category: Category::College },
    TrackedTeam { id: 2579, name: "USC Gamecocks", abbrev: "USC", category: Category::College },
    TrackedTeam { id: 228, name: "Clemson Tigers", abbrev: "CLEM", category: Category::College },
    TrackedTeam { id: 29, name: "Carolina Panthers", abbrev: "CAR", category: Category::Pro },
    TrackedTeam { id: 30, name: "Jacksonville Jaguars", abbrev: "JAX", category: Category::Pro },
    TrackedTeam { id: 3, name: "Chicago Bears", abbrev: "CHI", category: Category::Pro },
    TrackedTeam { id: 1, name: "Atlanta Falcons", abbrev: "ATL", category: Category::Pro },
];

/// Free-text names and nicknames → catalog id. Lookups are lowercase.
pub const ALIASES: &[(&str, u32)] = &[
    ("duke", 150),
    ("unc", 153),
    ("usc", 2579),
    ("clemson", 228),
    ("panthers", 29),
    ("carolina", 29),
    ("jaguars", 30),
    ("jacksonville", 30),
    ("bears", 3),
    ("chicago", 3),
    ("falcons", 1),
    ("atlanta", 1),
];

pub fn by_id(id: u32) -> Option<&'static TrackedTeam> {
    TEAMS.iter().find(|t| t.id == id)
}

/// Resolve a free-text team name through the alias table.
pub fn resolve(name: &str) -> Option<&'static TrackedTeam> {
    let needle = name.trim().to_lowercase();
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == needle)
        .and_then(|&(_, id)| by_id(id))
}

/// Catalog ids as the string form ESPN uses on the wire.
pub fn tracked_ids() -> HashSet<String> {
    TEAMS.iter().map(|t| t.id.to_string()).collect()
}

pub fn alias_list() -> String {
    ALIASES
        .iter()
        .map(|&(alias, _)| alias)
        .collect::<Vec<_>>()
        .join(", ")
}
