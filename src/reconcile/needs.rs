use std::fmt;

use crate::domain::{Region, Tournament};

/// Which categories of a tournament record must be re-fetched or re-derived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Needs {
    pub infobox: bool,
    pub teams: bool,
    pub metadata: bool,
}

impl Needs {
    pub const ALL: Needs = Needs {
        infobox: true,
        teams: true,
        metadata: true,
    };

    /// Compare a stored record against its skeleton entry.
    /// `index` is the position of the skeleton section within its season.
    pub fn compute(
        stored: Option<&Tournament>,
        skeleton: &Tournament,
        season: &str,
        index: usize,
        force: bool,
    ) -> Self {
        let Some(stored) = stored else {
            return Self::ALL;
        };
        if force {
            return Self::ALL;
        }

        Self {
            infobox: infobox_incomplete(stored, skeleton),
            teams: teams_incomplete(stored),
            metadata: stored.season.is_empty() || stored.season != season || stored.index != index,
        }
    }

    pub fn any(&self) -> bool {
        self.infobox || self.teams || self.metadata
    }
}

fn infobox_incomplete(stored: &Tournament, skeleton: &Tournament) -> bool {
    stored.start.is_empty()
        || stored.end.is_empty()
        || stored.region.is_none()
        || stored.region != skeleton.region
}

fn teams_incomplete(stored: &Tournament) -> bool {
    if stored.teams.is_empty() {
        log::debug!("{}: no teams found", stored.name);
        return true;
    }
    match stored.teams.iter().find(|t| t.region == Region::None) {
        Some(team) => {
            log::debug!("{}: {} has no region", stored.name, team.name);
            true
        }
        None => false,
    }
}

impl fmt::Display for Needs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = |on: bool, name: &'static str| if on { name.to_string() } else { format!("no{}", name) };
        write!(
            f,
            "{} {} {}",
            flag(self.infobox, "infobox"),
            flag(self.teams, "teams"),
            flag(self.metadata, "metadata")
        )
    }
}
