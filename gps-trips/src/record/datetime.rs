use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// formats carrying an utc offset
const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%z"];

/// formats without an offset, these are read as utc
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// parse a timestamp and normalize it to utc.
///
/// Accepted, in this order:
/// * RFC 3339, e.g. `2024-01-01T00:00:00Z` or `2024-01-01T02:00:00.5+02:00`
/// * `2024-01-01 02:00:00+02:00`
/// * `2024-01-01T00:00:00`, `2024-01-01 00:00:00`, optionally with fractional seconds
/// * `2024-01-01T00:00`, `2024-01-01 00:00`
/// * `2024-01-01` (midnight)
/// * `@1704067200` (unix seconds)
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Some(epoch) = s.strip_prefix('@') {
        return epoch
            .parse::<i64>()
            .ok()
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single());
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&ndt));
        }
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ndt| Utc.from_utc_datetime(&ndt))
}

#[cfg(test)]
mod tests {
    use super::parse_timestamp;
    use chrono::{TimeZone, Utc};

    #[test]
    fn accepted_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        for s in [
            "2024-01-01T00:00:00Z",
            "2024-01-01T00:00:00+00:00",
            "2024-01-01T02:00:00+02:00",
            "2024-01-01 02:00:00+02:00",
            "2023-12-31 19:00:00-0500",
            "2024-01-01T00:00:00",
            "2024-01-01 00:00:00",
            "2024-01-01T00:00",
            "2024-01-01 00:00",
            "2024-01-01",
            " 2024-01-01T00:00:00 ",
            "@1704067200",
        ] {
            assert_eq!(parse_timestamp(s), Some(expected), "{}", s);
        }
    }

    #[test]
    fn fractional_seconds() {
        let ts = parse_timestamp("2024-01-01T00:00:00.250").unwrap();
        assert_eq!(ts.timestamp_millis(), 1704067200250);
        let ts = parse_timestamp("2024-01-01T00:00:00.5Z").unwrap();
        assert_eq!(ts.timestamp_millis(), 1704067200500);
    }

    #[test]
    fn rejected_formats() {
        for s in [
            "",
            "not-a-date",
            "2024-13-01T00:00:00",
            "2024-02-30",
            "01/02/2024",
            "@",
            "@abc",
            "2024-01-01T25:00:00",
        ] {
            assert_eq!(parse_timestamp(s), None, "{}", s);
        }
    }
}
