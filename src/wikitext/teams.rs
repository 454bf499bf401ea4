use log::debug;
use regex::Regex;
use std::sync::LazyLock;

use crate::domain::{INFERABLE_REGIONS, Region, Team, region_in_text};

// Roster block format:
// |team=iBUYPOWER
// |p1=Kronovi |p1flag=us
// |p2=Lachinio |p2flag=ca
// |sub1=0ver Zer0|sub1flag=us
// |qualifier=[[Rocket_League_Championship_Series/Season_1/North_America/Qualifier_1|Qualifier #1]]
const TEAM_MARKER: &str = "|team";
const QUALIFIER_MARKER: &str = "|qualifier";

static PLAYER_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\|p[0-9]+=([^|]*)").unwrap());
static SUB_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\|sub[0-9]+=([^|]*)").unwrap());
static WIKILINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[[^\]|]*\|([^\]]+)\]\]").unwrap());

/// Team whose roster lines are currently being read
struct PendingTeam {
    team: Team,
}

impl PendingTeam {
    fn start(line: &str, tournament_region: Region) -> Self {
        let mut team = Team::named(extract_team_name(line));
        if tournament_region != Region::World {
            team.region = tournament_region;
        }
        Self { team }
    }

    fn accepted_players(&self) -> usize {
        self.team.players.len()
    }
}

/// Parse the participants section into rosters.
///
/// Teams inherit `tournament_region` unless the tournament is international, in which
/// case each team's region comes from its qualifier line. Teams with fewer than
/// `min_team_size` players are dropped.
pub fn parse_teams(wikitext: &str, tournament_region: Region, min_team_size: usize) -> Vec<Team> {
    let mut teams = Vec::new();
    let mut pending: Option<PendingTeam> = None;

    for line in wikitext.lines().map(str::trim_end) {
        if line.starts_with(TEAM_MARKER) {
            flush(pending.take(), min_team_size, &mut teams);
            pending = Some(PendingTeam::start(line, tournament_region));
            continue;
        }

        let Some(current) = pending.as_mut() else {
            continue;
        };

        if let Some(player) = capture_name(&PLAYER_LINE, line) {
            current.team.players.push(player);
        } else if let Some(sub) = capture_name(&SUB_LINE, line) {
            current.team.subs.push(sub);
        } else if tournament_region == Region::World && line.contains(QUALIFIER_MARKER) {
            apply_qualifier(&mut current.team, line);
        }
    }

    // Fencepost for the last team
    flush(pending, min_team_size, &mut teams);

    teams
}

fn flush(pending: Option<PendingTeam>, min_team_size: usize, teams: &mut Vec<Team>) {
    let Some(pending) = pending else {
        return;
    };
    if pending.accepted_players() >= min_team_size {
        teams.push(pending.team);
    } else {
        debug!(
            "Dropping team {:?} with {} players (minimum {})",
            pending.team.name,
            pending.accepted_players(),
            min_team_size
        );
    }
}

fn extract_team_name(line: &str) -> String {
    let value = line.split_once('=').map(|(_, v)| v).unwrap_or_default();
    let name = value.split('|').next().unwrap_or_default();
    name.trim().to_string()
}

fn capture_name(pattern: &Regex, line: &str) -> Option<String> {
    let name = pattern.captures(line)?.get(1)?.as_str().trim();
    (!name.is_empty()).then(|| name.to_string())
}

fn apply_qualifier(team: &mut Team, line: &str) {
    if !team.region.is_none() {
        return;
    }
    let Some((_, value)) = line.split_once('=') else {
        return;
    };
    let qualifier = qualifier_display_text(value.trim());
    if let Some(region) = region_in_text(&qualifier, &INFERABLE_REGIONS) {
        team.region = region;
    }
}

/// Display text of a piped wikilink, or the value unchanged
fn qualifier_display_text(value: &str) -> String {
    match WIKILINK.captures(value).and_then(|c| c.get(1)) {
        Some(text) => text.as_str().trim().to_string(),
        None => value.to_string(),
    }
}

/// Render a roster block that `parse_teams` reads back
pub fn render_team(team: &Team) -> String {
    let mut out = format!("{{{{TeamCard\n|team={}\n", team.name);
    for (idx, player) in team.players.iter().enumerate() {
        out.push_str(&format!("|p{}={} |p{}flag=\n", idx + 1, player, idx + 1));
    }
    for (idx, sub) in team.subs.iter().enumerate() {
        out.push_str(&format!("|sub{}={}\n", idx + 1, sub));
    }
    if !team.region.is_none() && team.region != Region::World {
        out.push_str(&format!(
            "|qualifier=[[Qualifier/{}|{} Qualifier]]\n",
            team.region.display_name().replace(' ', "_"),
            team.region.display_name()
        ));
    }
    out.push_str("}}\n");
    out
}
