use serde::{Deserialize, Serialize};
use std::fmt;

/// Competitive region. Persisted as its integer code (0-5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Region {
    #[default]
    None,
    World,
    NorthAmerica,
    Europe,
    Oceania,
    SouthAmerica,
}

/// Regions that can be inferred from infobox countries and qualifier links,
/// in the order they are tried.
pub const INFERABLE_REGIONS: [Region; 3] = [Region::NorthAmerica, Region::Europe, Region::Oceania];

impl Region {
    pub const ALL: [Region; 6] = [
        Region::None,
        Region::World,
        Region::NorthAmerica,
        Region::Europe,
        Region::Oceania,
        Region::SouthAmerica,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Region::None => "None",
            Region::World => "World",
            Region::NorthAmerica => "North America",
            Region::Europe => "Europe",
            Region::Oceania => "Oceania",
            Region::SouthAmerica => "South America",
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Region::None => 0,
            Region::World => 1,
            Region::NorthAmerica => 2,
            Region::Europe => 3,
            Region::Oceania => 4,
            Region::SouthAmerica => 5,
        }
    }

    pub fn is_none(self) -> bool {
        self == Region::None
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl From<Region> for u8 {
    fn from(region: Region) -> Self {
        region.code()
    }
}

impl TryFrom<u8> for Region {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Region::ALL
            .into_iter()
            .find(|r| r.code() == code)
            .ok_or_else(|| format!("unknown region code {}", code))
    }
}

/// Exact lookup of a canonical display string ("North America", "Europe", ...).
/// Surrounding whitespace is ignored; case is not.
pub fn region_from_display_name(name: &str) -> Option<Region> {
    let name = name.trim();
    Region::ALL.into_iter().find(|r| r.display_name() == name)
}

/// First region of `candidates` whose display name occurs in `text`.
pub fn region_in_text(text: &str, candidates: &[Region]) -> Option<Region> {
    candidates
        .iter()
        .copied()
        .find(|r| text.contains(r.display_name()))
}
