use chrono::{NaiveDate, NaiveDateTime};

/// Header label formats to try, date-time shapes before date-only so a
/// time-of-day component is consumed (and then discarded) instead of
/// failing the parse. ISO `T` separators appear when ODS date cells come
/// through as DateTimeIso strings.
pub const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%d/%m/%Y",
    "%Y/%m/%d",
];

/// Parse one header label as a calendar date. Any time component is
/// discarded; only the date part survives.
pub fn parse_observation_date(label: &str) -> Option<NaiveDate> {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        return None;
    }

    for fmt in DATE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt.date());
        }
        if let Ok(d) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(d);
        }
    }
    None
}

/// Normalize raw header labels into calendar dates, preserving order.
/// Labels that fail to parse map to `None` and get dropped by the table
/// builder. Two labels that normalize to the same date stay distinct
/// columns; nothing is merged here.
pub fn normalize_headers(labels: &[String]) -> Vec<Option<NaiveDate>> {
    labels
        .iter()
        .map(|label| {
            let parsed = parse_observation_date(label);
            if parsed.is_none() && !label.trim().is_empty() {
                tracing::warn!(label = %label, "dropping header that does not parse as a date");
            }
            parsed
        })
        .collect()
}
