use log::debug;
use regex::Regex;
use std::sync::LazyLock;

use crate::domain::dates::has_placeholder;
use crate::domain::{Membership, Player};

use super::infobox::INFOBOX_OPEN;

const ID_FIELD: &str = "|id=";
const IDS_FIELD: &str = "|ids=";
const HISTORY_FIELD: &str = "|history";
const HISTORY_ENTRY: &str = "{{TH";

static DATE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w?]{4}-[\w?]{2}-[\w?]{2}$").unwrap());

/// Parse a player page's lead section into its canonical id, alternate ids and
/// team history.
///
/// History entries look like `{{TH|2015-07-01 — 2016-01-01|iBUYPOWER}}`; an entry
/// whose join or leave date carries a `?` placeholder is skipped.
pub fn parse_player(wikitext: &str) -> Player {
    let mut player = Player::default();
    let mut in_infobox = false;
    let mut in_history = false;

    for line in wikitext.lines().map(str::trim_end) {
        if !in_infobox && line.starts_with(INFOBOX_OPEN) {
            in_infobox = true;
            continue;
        }

        if in_history {
            if !line.starts_with(HISTORY_ENTRY) {
                break;
            }
            if let Some(membership) = parse_history_entry(line) {
                player.memberships.push(membership);
            }
            continue;
        }

        if line.starts_with(HISTORY_FIELD) {
            in_history = true;
        } else if in_infobox {
            read_identity(&mut player, line);
        }
    }

    player
}

fn read_identity(player: &mut Player, line: &str) {
    if let Some(id) = line.strip_prefix(ID_FIELD) {
        player.name = id.trim().to_string();
    } else if let Some(ids) = line.strip_prefix(IDS_FIELD) {
        player.alternate_ids.extend(
            ids.split(',')
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(str::to_string),
        );
    }
}

fn parse_history_entry(line: &str) -> Option<Membership> {
    let stripped = line.replace("{{", "").replace("}}", "");
    let mut parts = stripped.split('|').skip(1);
    let dates: Vec<&str> = parts.next()?.split_whitespace().collect();
    let team = parts.next()?.trim();

    let join = *dates.first()?;
    let leave = dates
        .get(2)
        .copied()
        .filter(|token| DATE_TOKEN.is_match(token))
        .unwrap_or_default();

    if has_placeholder(join) || has_placeholder(leave) {
        debug!("Skipping unresolved membership {:?}", line);
        return None;
    }

    Some(Membership {
        join: join.to_string(),
        leave: leave.to_string(),
        team: team.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE: &str = r#"{{Infobox player
|id=Kronovi
|ids=Kronivi, Kron ,
|name=Reed Wilen
|country=United States
|team=G2 Esports
|history=
{{TH|2015-07-01 — 2016-01-08|iBUYPOWER}}
{{TH|2016-01-08 — 2016-06-30|Cloud9}}
{{TH|2016-??-?? — 2016-08-01|Mystery Team}}
{{TH|2016-08-01 — Present|G2 Esports}}
}}
==Trivia==
{{TH|2019-01-01 — 2019-02-01|Not History}}
"#;

    #[test]
    fn test_parses_identity() {
        let player = parse_player(PROFILE);
        assert_eq!(player.name, "Kronovi");
        assert_eq!(player.alternate_ids, vec!["Kronivi", "Kron"]);
    }

    #[test]
    fn test_parses_history_in_source_order() {
        let player = parse_player(PROFILE);
        let teams: Vec<&str> = player.memberships.iter().map(|m| m.team.as_str()).collect();
        assert_eq!(teams, vec!["iBUYPOWER", "Cloud9", "G2 Esports"]);
        assert_eq!(player.memberships[0].join, "2015-07-01");
        assert_eq!(player.memberships[0].leave, "2016-01-08");
    }

    #[test]
    fn test_present_leave_is_open() {
        let player = parse_player(PROFILE);
        let last = player.memberships.last().unwrap();
        assert_eq!(last.join, "2016-08-01");
        assert!(last.is_open());
    }

    #[test]
    fn test_placeholder_in_leave_drops_membership() {
        let wikitext = "{{Infobox player\n|id=X\n|history=\n{{TH|2015-01-01 — 2015-??-01|Team A}}\n{{TH|2015-02-01|Team B}}\n";
        let player = parse_player(wikitext);
        assert_eq!(player.memberships.len(), 1);
        assert_eq!(player.memberships[0].team, "Team B");
        assert!(player.memberships[0].is_open());
    }

    #[test]
    fn test_malformed_entry_is_skipped() {
        let wikitext = "{{Infobox player\n|id=X\n|history=\n{{TH}}\n{{TH|2015-01-01 — 2015-02-01|Team A}}\n";
        let player = parse_player(wikitext);
        assert_eq!(player.memberships.len(), 1);
    }

    #[test]
    fn test_profile_without_infobox() {
        let player = parse_player("Just text");
        assert_eq!(player, Player::default());
    }
}
