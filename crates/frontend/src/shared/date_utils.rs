//! Date and time display helpers.
//!
//! The API sends naive local timestamps (`2024-03-15T18:30:00.123`); the UI
//! shows them as `15.03.2024 18:30`.

use chrono::{Local, NaiveDateTime};
use contracts::domain::common::parse_api_datetime;

/// Format an API timestamp as DD.MM.YYYY HH:MM, or return it unchanged when
/// it cannot be parsed
pub fn format_datetime(datetime_str: &str) -> String {
    match parse_api_datetime(datetime_str) {
        Some(dt) => dt.format("%d.%m.%Y %H:%M").to_string(),
        None => datetime_str.to_string(),
    }
}

/// Format the date part as DD.MM.YYYY
/// Example: "2001-04-02T00:00:00" -> "02.04.2001"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match chrono::NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d.%m.%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Wall clock time of the browser, the reference for delivery time checks
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Value for an `<input type="datetime-local">` one hour from `now`
pub fn default_delivery_input(now: NaiveDateTime) -> String {
    (now + chrono::Duration::hours(1))
        .format("%Y-%m-%dT%H:%M")
        .to_string()
}
