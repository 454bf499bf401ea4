use chrono::NaiveDate;

const SORTABLE_FORMAT: &str = "%Y-%m-%d";

/// Character used by wiki editors for an unknown date component ("2016-??-??").
pub const PLACEHOLDER: char = '?';

/// True when `date` is a zero-padded `YYYY-MM-DD` calendar date, the only form for
/// which string comparison matches chronological order.
pub fn is_sortable_date(date: &str) -> bool {
    date.len() == 10 && NaiveDate::parse_from_str(date, SORTABLE_FORMAT).is_ok()
}

pub fn has_placeholder(date: &str) -> bool {
    date.contains(PLACEHOLDER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sortable_dates() {
        assert!(is_sortable_date("2015-06-02"));
        assert!(is_sortable_date("2020-02-29"));
    }

    #[test]
    fn test_unsortable_dates() {
        assert!(!is_sortable_date("2015-6-2"));
        assert!(!is_sortable_date("2015-02-30"));
        assert!(!is_sortable_date("June 2, 2015"));
        assert!(!is_sortable_date("2016-??-??"));
        assert!(!is_sortable_date(""));
    }

    #[test]
    fn test_placeholder_detection() {
        assert!(has_placeholder("2016-??-??"));
        assert!(!has_placeholder("2016-01-01"));
    }
}
