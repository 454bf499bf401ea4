use anyhow::Result;
use log::{debug, info, warn};
use std::collections::HashSet;

use crate::api::WikiSource;
use crate::cache::Cache;
use crate::domain::dates::is_sortable_date;
use crate::domain::{Player, Season};
use crate::membership::filter_by_tournament;
use crate::wikitext::{parse_player, redirect_target};

const LEAD_SECTION: i32 = 0;
const OUTPUT_KEY: &str = "players";

/// Builds the filtered player list from the rosters of a fleshed-out hierarchy
pub struct PlayerService<S: WikiSource> {
    source: S,
    pages: Cache,
    output: Cache,
}

impl<S: WikiSource> PlayerService<S> {
    /// `pages` holds raw profile wikitext, `output` receives `players.json`
    pub fn new(source: S, pages: Cache, output: Cache) -> Self {
        Self { source, pages, output }
    }

    pub fn run(&mut self, seasons: &[Season]) -> Result<Vec<Player>> {
        info!("=== Starting Player Processing ===\n");

        let players = self.collect(seasons);
        info!("  → {} players with tournament memberships\n", players.len());

        self.output.save(OUTPUT_KEY, &players)?;

        info!("=== Player Processing Complete ===");
        Ok(players)
    }

    /// Every rostered player once, filtered from the season they first appear in.
    /// Players whose profile cannot be loaded are skipped.
    pub fn collect(&mut self, seasons: &[Season]) -> Vec<Player> {
        let mut processed = HashSet::new();
        let mut players = Vec::new();

        for (season_idx, season) in seasons.iter().enumerate() {
            info!("Season {}", season.season);
            for tournament in season.tournaments() {
                for roster_name in tournament.teams.iter().flat_map(|t| t.players.iter()) {
                    let roster_key = roster_name.to_lowercase();
                    if !processed.insert(roster_key.clone()) {
                        debug!("{} already processed", roster_name);
                        continue;
                    }

                    let player = match self.player_details(roster_name) {
                        Ok(player) => player,
                        Err(e) => {
                            warn!("Skipping player {}: {:#}", roster_name, e);
                            continue;
                        }
                    };

                    let canonical_key = player.name.to_lowercase();
                    if canonical_key != roster_key && !processed.insert(canonical_key) {
                        debug!("{} already processed as {}", roster_name, player.name);
                        continue;
                    }

                    warn_unsortable_dates(&player);
                    let memberships = filter_by_tournament(&player, seasons, season_idx);
                    if !memberships.is_empty() {
                        players.push(Player { memberships, ..player });
                    }
                }
            }
        }

        players.sort_by(|a, b| a.name.cmp(&b.name));
        players
    }

    /// Profile of `name`, following one redirect. The non-canonical side of a
    /// redirect is recorded as an alternate id.
    fn player_details(&mut self, name: &str) -> Result<Player> {
        let wikitext = self.lead_section(name)?;

        let Some(target) = redirect_target(&wikitext) else {
            return Ok(profile(name, &wikitext));
        };

        info!("Following redirect from {} to {}", name, target);
        let wikitext = self.lead_section(&target)?;
        let mut player = profile(&target, &wikitext);

        let alternate = if player.name == name { target.as_str() } else { name };
        player.add_alternate_id(alternate);
        Ok(player)
    }

    /// Lead section of a page, from the page cache when present.
    /// Redirect pages are cached too.
    fn lead_section(&mut self, page: &str) -> Result<String> {
        if let Some(wikitext) = self.pages.load_raw::<String>(page)? {
            return Ok(wikitext);
        }

        let wikitext = self.source.fetch_section(page, LEAD_SECTION)?;
        self.pages.save_raw(page, &wikitext)?;
        Ok(wikitext)
    }
}

fn profile(page: &str, wikitext: &str) -> Player {
    let mut player = parse_player(wikitext);
    if player.name.is_empty() {
        player.name = page.to_string();
    }
    player
}

fn warn_unsortable_dates(player: &Player) {
    for membership in &player.memberships {
        let bad_leave = !membership.is_open() && !is_sortable_date(&membership.leave);
        if !is_sortable_date(&membership.join) || bad_leave {
            warn!(
                "{}: membership {} has unsortable dates {:?} to {:?}",
                player.name, membership.team, membership.join, membership.leave
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::SectionEntry;
    use crate::domain::{Region, Section, Team, Tournament};
    use std::collections::HashMap;
    use std::fs;
    use std::path::PathBuf;

    const KRONOVI: &str = r#"{{Infobox player
|id=Kronovi
|history=
{{TH|2015-07-01 — 2016-01-08|iBUYPOWER}}
{{TH|2016-01-08 — Present|Cloud9}}
}}"#;

    const TURBOPOLSA: &str = r#"{{Infobox player
|id=Turbopolsa
|ids=Turbo
|history=
{{TH|2016-01-01 — Present|Northern Gaming}}
}}"#;

    #[derive(Default)]
    struct FakeWiki {
        pages: HashMap<String, String>,
        fetched: Vec<String>,
    }

    impl WikiSource for FakeWiki {
        fn fetch_section(&mut self, page: &str, _section: i32) -> Result<String> {
            self.fetched.push(page.to_string());
            self.pages
                .get(page)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("no page {}", page))
        }

        fn fetch_section_list(&mut self, _page: &str) -> Result<Vec<SectionEntry>> {
            Ok(Vec::new())
        }
    }

    fn wiki() -> FakeWiki {
        let mut wiki = FakeWiki::default();
        wiki.pages.insert("Kronovi".to_string(), KRONOVI.to_string());
        wiki.pages.insert("Turbopolsa".to_string(), TURBOPOLSA.to_string());
        wiki.pages.insert("Pwnda".to_string(), "#redirect [[Turbopolsa]]".to_string());
        wiki.pages.insert("Turbo".to_string(), "#REDIRECT [[Turbopolsa]]".to_string());
        wiki
    }

    fn tournament(start: &str, end: &str, teams: Vec<Team>) -> Tournament {
        let mut t = Tournament::new(format!("Event {}", start), Region::World);
        t.start = start.to_string();
        t.end = end.to_string();
        t.teams = teams;
        t
    }

    fn roster(name: &str, players: &[&str]) -> Team {
        Team {
            players: players.iter().map(|s| s.to_string()).collect(),
            ..Team::named(name)
        }
    }

    fn seasons() -> Vec<Season> {
        vec![Season {
            season: "1".to_string(),
            sections: vec![Section {
                name: "Finals".to_string(),
                tournaments: vec![
                    tournament("2015-10-01", "2015-10-04", vec![roster("iBUYPOWER", &["Kronovi"])]),
                    tournament(
                        "2016-03-01",
                        "2016-03-04",
                        vec![roster("Northern Gaming", &["Pwnda", "Missing Player"]), roster("Cloud9", &["Turbo"])],
                    ),
                ],
            }],
        }]
    }

    fn service(name: &str, source: FakeWiki) -> (PathBuf, PlayerService<FakeWiki>) {
        let dir = std::env::temp_dir().join(format!("rlesports_players_{}_{}", name, std::process::id()));
        let pages = Cache::new(dir.join("pages")).unwrap();
        let output = Cache::new(dir.join("data")).unwrap();
        (dir, PlayerService::new(source, pages, output))
    }

    #[test]
    fn test_collects_filtered_players_sorted_by_name() {
        let (dir, mut service) = service("collect", wiki());

        let players = service.run(&seasons()).unwrap();

        let names: Vec<&str> = players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Kronovi", "Turbopolsa"]);
        assert_eq!(players[0].memberships.len(), 1);
        assert_eq!(players[0].memberships[0].team, "iBUYPOWER");
        assert_eq!(players[1].alternate_ids, vec!["Turbo", "Pwnda"]);
        assert!(dir.join("data").join("players.json").exists());

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_cached_pages_are_not_fetched_again() {
        let (dir, mut service) = service("cached", wiki());
        service.collect(&seasons());
        let first_run = service.source.fetched.len();
        assert_eq!(first_run, 5);

        service.collect(&seasons());
        assert_eq!(service.source.fetched.len(), first_run + 1);
        assert_eq!(service.source.fetched.last().map(String::as_str), Some("Missing Player"));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_profile_without_id_uses_page_name() {
        let player = profile("Gimmick", "{{Infobox player\n|name=Garrett\n}}");
        assert_eq!(player.name, "Gimmick");
    }
}
