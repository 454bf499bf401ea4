use crate::domain::{Membership, Player, Season, Team};

use super::matching::{player_in_team, team_name_match};

/// Time window and roster of one tournament as seen by the filter
#[derive(Debug, Clone, Copy)]
pub struct TournamentWindow<'a> {
    pub start: &'a str,
    pub end: &'a str,
    pub teams: &'a [Team],
}

/// Select the memberships evidenced by at least one tournament roster.
///
/// For every window, a membership that overlaps it in time is marked when the
/// player appears on any roster. Marks are only kept below one past the last
/// overlapping membership whose team name appears on that roster; with no such
/// name match every mark is kept. The result is indexed like `memberships`.
pub fn filter_memberships(
    player: &Player,
    memberships: &[Membership],
    windows: &[TournamentWindow<'_>],
) -> Vec<bool> {
    let mut selected = vec![false; memberships.len()];

    for window in windows {
        let mut scratch = vec![false; memberships.len()];
        let mut last_team_match = memberships.len();

        for (idx, membership) in memberships.iter().enumerate() {
            if !membership.overlaps(window.start, window.end) {
                continue;
            }
            for team in window.teams {
                scratch[idx] = scratch[idx] || player_in_team(player, team);
                if team_name_match(&team.name, &membership.team) {
                    last_team_match = idx + 1;
                }
            }
        }

        for (slot, bit) in selected.iter_mut().zip(&scratch[..last_team_match]) {
            *slot = *slot || *bit;
        }
    }

    selected
}

/// Memberships whose bit is set, in their original order
pub fn select_memberships(memberships: &[Membership], bits: &[bool]) -> Vec<Membership> {
    memberships
        .iter()
        .zip(bits)
        .filter(|(_, keep)| **keep)
        .map(|(m, _)| m.clone())
        .collect()
}

/// Every tournament window from `first_season` onward, in hierarchy order
pub fn windows_from(seasons: &[Season], first_season: usize) -> Vec<TournamentWindow<'_>> {
    seasons
        .iter()
        .skip(first_season)
        .flat_map(|season| season.tournaments())
        .map(|t| TournamentWindow {
            start: &t.start,
            end: &t.end,
            teams: &t.teams,
        })
        .collect()
}

/// Filter a player's memberships against every tournament from `first_season` onward
pub fn filter_by_tournament(player: &Player, seasons: &[Season], first_season: usize) -> Vec<Membership> {
    let windows = windows_from(seasons, first_season);
    let bits = filter_memberships(player, &player.memberships, &windows);
    select_memberships(&player.memberships, &bits)
}
