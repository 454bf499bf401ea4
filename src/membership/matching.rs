use crate::domain::{Player, Team};

/// Whether any of the player's identities is listed among the team's players.
/// Substitutes do not count as participation.
pub fn player_in_team(player: &Player, team: &Team) -> bool {
    team.players
        .iter()
        .any(|listed| player.identities().any(|id| same_name(listed, id)))
}

pub fn team_name_match(roster_name: &str, membership_team: &str) -> bool {
    same_name(roster_name, membership_team)
}

fn same_name(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, alternates: &[&str]) -> Player {
        Player {
            name: name.to_string(),
            alternate_ids: alternates.iter().map(|s| s.to_string()).collect(),
            memberships: Vec::new(),
        }
    }

    fn team(players: &[&str], subs: &[&str]) -> Team {
        Team {
            players: players.iter().map(|s| s.to_string()).collect(),
            subs: subs.iter().map(|s| s.to_string()).collect(),
            ..Team::named("Cloud9")
        }
    }

    #[test]
    fn test_player_in_team_ignores_case() {
        assert!(player_in_team(&player("Gimmick", &[]), &team(&["gimmick", "Torment"], &[])));
    }

    #[test]
    fn test_player_in_team_uses_alternate_ids() {
        let p = player("Turbopolsa", &["Turbo"]);
        assert!(player_in_team(&p, &team(&["TURBO", "Kaydop"], &[])));
        assert!(!player_in_team(&p, &team(&["Kaydop"], &["Turbo"])));
    }

    #[test]
    fn test_team_name_match_ignores_case_only() {
        assert!(team_name_match("Team Dignitas", "team dignitas"));
        assert!(!team_name_match("Dignitas", "Team Dignitas"));
        assert!(team_name_match("Ørbit", "ØRBIT"));
    }
}
