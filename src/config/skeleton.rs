use crate::domain::{Region, Season, Section, Tournament};

/// Page-name prefix shared by every RLCS tournament
const RLCS_PREFIX: &str = "Rocket League Championship Series/Season ";
const LAST_SEASON: u32 = 9;
/// Season whose LAN finals were cancelled
const SEASON_WITHOUT_FINALS: u32 = 9;
const SEASON3_OCEANIA: &str = "ThrowdownTV/Rocket League Challenge/Season 2/League Play";

/// Expected RLCS hierarchy with tournament names and declared regions only.
/// Everything else about each tournament is fetched by the reconciler.
pub fn rlcs_seasons() -> Vec<Season> {
    (1..=LAST_SEASON).map(rlcs_season).collect()
}

fn rlcs_season(season: u32) -> Season {
    let mut sections = if season == 1 {
        season_one_qualifiers()
    } else {
        vec![regional_section(season)]
    };

    if season != SEASON_WITHOUT_FINALS {
        sections.push(Section {
            name: "Finals".to_string(),
            tournaments: vec![Tournament::new(format!("{}{}", RLCS_PREFIX, season), Region::World)],
        });
    }

    Season {
        season: season.to_string(),
        sections,
    }
}

fn season_one_qualifiers() -> Vec<Section> {
    (1..=2)
        .map(|qualifier| Section {
            name: format!("Qualifier {}", qualifier),
            tournaments: [Region::NorthAmerica, Region::Europe]
                .into_iter()
                .map(|region| {
                    let name = format!("{}1/{}/Qualifier {}", RLCS_PREFIX, region, qualifier);
                    Tournament::new(name, region)
                })
                .collect(),
        })
        .collect()
}

fn regional_section(season: u32) -> Section {
    let mut tournaments: Vec<Tournament> = [Region::NorthAmerica, Region::Europe]
        .into_iter()
        .map(|region| Tournament::new(format!("{}{}/{}", RLCS_PREFIX, season, region), region))
        .collect();

    match season {
        3 => tournaments.push(Tournament::new(SEASON3_OCEANIA, Region::Oceania)),
        s if s >= 4 => tournaments.push(Tournament::new(
            format!("{}{}/{}/League Play", RLCS_PREFIX, s, Region::Oceania),
            Region::Oceania,
        )),
        _ => {}
    }

    Section {
        name: "Regional".to_string(),
        tournaments,
    }
}

/// Locate a skeleton tournament by page name
pub fn find_in_skeleton<'a>(
    seasons: &'a [Season],
    name: &str,
) -> Option<(&'a Season, usize, &'a Tournament)> {
    seasons.iter().find_map(|season| {
        season.sections.iter().enumerate().find_map(|(index, section)| {
            section
                .tournaments
                .iter()
                .find(|t| t.name == name)
                .map(|t| (season, index, t))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_one_has_two_qualifiers_and_finals() {
        let seasons = rlcs_seasons();
        let s1 = &seasons[0];
        let names: Vec<&str> = s1.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Qualifier 1", "Qualifier 2", "Finals"]);
        assert_eq!(
            s1.sections[0].tournaments[0].name,
            "Rocket League Championship Series/Season 1/North America/Qualifier 1"
        );
        assert_eq!(s1.sections[2].tournaments[0].region, Region::World);
    }

    #[test]
    fn test_oceania_joins_from_season_three() {
        let seasons = rlcs_seasons();
        assert_eq!(seasons[1].sections[0].tournaments.len(), 2);
        assert_eq!(seasons[2].sections[0].tournaments[2].name, SEASON3_OCEANIA);
        assert_eq!(
            seasons[3].sections[0].tournaments[2].name,
            "Rocket League Championship Series/Season 4/Oceania/League Play"
        );
    }

    #[test]
    fn test_last_season_has_no_finals() {
        let seasons = rlcs_seasons();
        assert_eq!(seasons.len(), 9);
        let s9 = seasons.last().unwrap();
        assert!(s9.sections.iter().all(|s| s.name != "Finals"));
    }

    #[test]
    fn test_tournament_names_are_unique() {
        let seasons = rlcs_seasons();
        let mut names: Vec<&str> = seasons.iter().flat_map(|s| s.tournaments()).map(|t| t.name.as_str()).collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn test_find_in_skeleton_reports_section_position() {
        let seasons = rlcs_seasons();
        let (season, index, tournament) =
            find_in_skeleton(&seasons, "Rocket League Championship Series/Season 2").unwrap();
        assert_eq!(season.season, "2");
        assert_eq!(index, 1);
        assert_eq!(tournament.region, Region::World);
        assert!(find_in_skeleton(&seasons, "Nope").is_none());
    }
}
