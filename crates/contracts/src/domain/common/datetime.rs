use chrono::{DateTime, NaiveDateTime};

/// Parse a timestamp as the API and `datetime-local` inputs produce it:
/// `2024-03-15T14:02`, `2024-03-15T14:02:26`, `2024-03-15T14:02:26.123` or
/// an RFC 3339 value with offset (its local wall-clock part is kept).
pub fn parse_api_datetime(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M") {
        return Some(dt);
    }
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.naive_local())
}
