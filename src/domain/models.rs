use serde::{Deserialize, Serialize};

use super::region::Region;

/// Sentinel for a participation section that has not been located yet.
pub const UNKNOWN_SECTION: i32 = -1;

/// A single team on a tournament roster
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    #[serde(default)]
    pub players: Vec<String>,
    #[serde(default)]
    pub subs: Vec<String>,
    #[serde(default)]
    pub region: Region,
    #[serde(default)]
    pub color: String,
}

impl Team {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Tournament as persisted by the storage layer, keyed by `name`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub name: String,
    #[serde(default)]
    pub season: String,
    #[serde(default)]
    pub region: Region,
    #[serde(default)]
    pub index: usize,
    /// Cached section number of the participants list; `<= 0` means unknown.
    #[serde(rename = "participationSection", default = "unknown_section")]
    pub participation_section: i32,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
    #[serde(default)]
    pub teams: Vec<Team>,
}

fn unknown_section() -> i32 {
    UNKNOWN_SECTION
}

impl Tournament {
    /// Empty record for a tournament that only exists in the skeleton so far
    pub fn new(name: impl Into<String>, region: Region) -> Self {
        Self {
            name: name.into(),
            season: String::new(),
            region,
            index: 0,
            participation_section: UNKNOWN_SECTION,
            start: String::new(),
            end: String::new(),
            teams: Vec::new(),
        }
    }

    pub fn has_participation_section(&self) -> bool {
        self.participation_section > 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub tournaments: Vec<Tournament>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    pub season: String,
    pub sections: Vec<Section>,
}

impl Season {
    pub fn tournaments(&self) -> impl Iterator<Item = &Tournament> {
        self.sections.iter().flat_map(|s| s.tournaments.iter())
    }
}

/// A player's tenure on a team. An empty `leave` means the membership is ongoing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Membership {
    pub join: String,
    #[serde(default)]
    pub leave: String,
    pub team: String,
}

impl Membership {
    pub fn is_open(&self) -> bool {
        self.leave.is_empty()
    }

    /// Inclusive overlap with a `[start, end]` window, compared as date strings
    pub fn overlaps(&self, start: &str, end: &str) -> bool {
        self.join.as_str() <= end && (self.is_open() || self.leave.as_str() >= start)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    #[serde(rename = "alternateIDs", default)]
    pub alternate_ids: Vec<String>,
    #[serde(default)]
    pub memberships: Vec<Membership>,
}

impl Player {
    /// Primary name followed by every alternate id
    pub fn identities(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.alternate_ids.iter().map(String::as_str))
    }

    pub fn add_alternate_id(&mut self, id: &str) {
        if !self.alternate_ids.iter().any(|existing| existing == id) {
            self.alternate_ids.push(id.to_string());
        }
    }
}
