use crate::api::models::SectionEntry;
use crate::errors::WikitextError;

/// Find the first section whose title or anchor contains `title` (case-insensitive).
///
/// `Ok(None)` means no section matched. A matching section whose index is not a
/// number is a structural failure rather than a miss.
pub fn find_section_index(
    sections: &[SectionEntry],
    title: &str,
) -> Result<Option<i32>, WikitextError> {
    let needle = title.to_lowercase();

    let Some(section) = sections.iter().find(|s| matches_title(s, &needle)) else {
        return Ok(None);
    };

    section
        .index
        .trim()
        .parse::<i32>()
        .map(Some)
        .map_err(|_| WikitextError::NonNumericSectionIndex {
            title: section.line.clone(),
            index: section.index.clone(),
        })
}

fn matches_title(section: &SectionEntry, needle: &str) -> bool {
    section.line.to_lowercase().contains(needle) || section.anchor.to_lowercase().contains(needle)
}
