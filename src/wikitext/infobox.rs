use log::debug;

use crate::domain::{INFERABLE_REGIONS, Region, region_from_display_name};

pub const INFOBOX_OPEN: &str = "{{Infobox";
const TEMPLATE_OPEN: &str = "{{";
const TEMPLATE_CLOSE: &str = "}}";

const START_FIELD: &str = "|sdate=";
const END_FIELD: &str = "|edate=";
const TYPE_FIELD: &str = "|type=";
const COUNTRY_FIELD: &str = "|country=";

const TYPE_OFFLINE: &str = "Offline";

/// Dates and region read from a tournament's lead section.
/// Missing fields come back empty rather than as an error.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InfoboxDetails {
    pub start: String,
    pub end: String,
    pub region: Region,
}

#[derive(Default)]
struct Fields<'a> {
    start: Option<&'a str>,
    end: Option<&'a str>,
    kind: Option<&'a str>,
    country: Option<&'a str>,
}

impl<'a> Fields<'a> {
    fn read(&mut self, line: &'a str) {
        let slots = [
            (START_FIELD, &mut self.start),
            (END_FIELD, &mut self.end),
            (TYPE_FIELD, &mut self.kind),
            (COUNTRY_FIELD, &mut self.country),
        ];
        for (prefix, slot) in slots {
            if let Some(value) = line.strip_prefix(prefix) {
                if slot.is_none() {
                    *slot = Some(value.trim());
                }
                return;
            }
        }
    }
}

/// Parse start date, end date and region out of the infobox template.
pub fn parse_infobox(wikitext: &str) -> InfoboxDetails {
    let mut fields = Fields::default();
    let mut in_infobox = false;
    let mut depth = 0;

    for line in wikitext.lines().map(str::trim_end) {
        if !in_infobox {
            if line.starts_with(INFOBOX_OPEN) {
                in_infobox = true;
                depth = template_depth_change(line);
                if depth <= 0 {
                    break;
                }
            }
            continue;
        }
        // Lines inside nested templates belong to those templates
        if depth == 1 {
            fields.read(line);
        }
        depth += template_depth_change(line);
        if depth <= 0 {
            break;
        }
    }

    if !in_infobox {
        debug!("No infobox block found");
        return InfoboxDetails::default();
    }

    InfoboxDetails {
        start: fields.start.unwrap_or_default().to_string(),
        end: fields.end.unwrap_or_default().to_string(),
        region: derive_region(fields.kind.unwrap_or(TYPE_OFFLINE), fields.country.unwrap_or_default()),
    }
}

fn template_depth_change(line: &str) -> i32 {
    line.matches(TEMPLATE_OPEN).count() as i32 - line.matches(TEMPLATE_CLOSE).count() as i32
}

/// Offline events are international; online ones take the region of their country.
fn derive_region(kind: &str, country: &str) -> Region {
    if kind == TYPE_OFFLINE {
        return Region::World;
    }
    region_from_display_name(country)
        .filter(|r| INFERABLE_REGIONS.contains(r))
        .unwrap_or(Region::None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offline_is_world_regardless_of_country() {
        let wikitext = r#"{{Infobox league
|name=Rocket League Championship Series Season 1
|sdate=2016-06-25
|edate=2016-06-26
|type=Offline
|country=United States
}}"#;
        let details = parse_infobox(wikitext);
        assert_eq!(details.start, "2016-06-25");
        assert_eq!(details.end, "2016-06-26");
        assert_eq!(details.region, Region::World);
    }

    #[test]
    fn test_online_takes_country_region() {
        let wikitext = "{{Infobox league\n|sdate=2016-04-16\n|edate=2016-04-17\n|type=Online\n|country=Europe\n}}";
        let details = parse_infobox(wikitext);
        assert_eq!(details.region, Region::Europe);
    }

    #[test]
    fn test_type_defaults_to_offline() {
        let details = parse_infobox("{{Infobox league\n|sdate=2016-04-16\n|country=Europe\n}}");
        assert_eq!(details.region, Region::World);
        assert_eq!(details.end, "");
    }

    #[test]
    fn test_online_with_unknown_country_has_no_region() {
        let details = parse_infobox("{{Infobox league\n|type=Online\n|country=Brazil\n}}");
        assert_eq!(details.region, Region::None);

        let details = parse_infobox("{{Infobox league\n|type=Online\n|country=South America\n}}");
        assert_eq!(details.region, Region::None);
    }

    #[test]
    fn test_missing_infobox_is_empty() {
        let details = parse_infobox("Some prose about the event.\n|sdate=2016-01-01");
        assert_eq!(details, InfoboxDetails::default());
        assert_eq!(details.region, Region::None);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let wikitext = "{{Infobox league\n|sdate=2016-04-16\n|sdate=2017-01-01\n|type=Online\n|country=Oceania\n}}";
        assert_eq!(parse_infobox(wikitext).start, "2016-04-16");
    }

    #[test]
    fn test_fields_after_block_end_are_ignored() {
        let wikitext = "{{Infobox league\n|type=Online\n|country=North America\n}}\n{{Other\n|sdate=2019-01-01\n}}";
        let details = parse_infobox(wikitext);
        assert_eq!(details.region, Region::NorthAmerica);
        assert_eq!(details.start, "");
    }

    #[test]
    fn test_nested_template_does_not_end_block() {
        let wikitext = "{{Infobox league\n|prizepool={{Currency\n|amount=50000\n|type=Offline\n}}\n|type=Online\n|country=Europe\n|sdate=2016-09-10\n|edate=2016-10-30\n}}";
        let details = parse_infobox(wikitext);
        assert_eq!(details.start, "2016-09-10");
        assert_eq!(details.end, "2016-10-30");
        assert_eq!(details.region, Region::Europe);
    }

    #[test]
    fn test_inline_templates_keep_block_open() {
        let wikitext = "{{Infobox league\n|sponsor={{Abbr|RL|Rocket League}}\n|type=Online\n|country=Oceania\n}}\n|country=Europe";
        assert_eq!(parse_infobox(wikitext).region, Region::Oceania);
    }

    #[test]
    fn test_tolerates_crlf_line_endings() {
        let wikitext = "{{Infobox league\r\n|sdate=2016-04-16\r\n|type=Online\r\n|country=Europe\r\n}}\r\n";
        let details = parse_infobox(wikitext);
        assert_eq!(details.start, "2016-04-16");
        assert_eq!(details.region, Region::Europe);
    }
}
