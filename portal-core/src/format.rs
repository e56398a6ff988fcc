use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};

pub const MISSING_DATE: &str = "N/A";
const PLACEHOLDER_PHOTO: &str = "https://placehold.co/100x100/E2E8F0/4A5568?text=";

pub fn decode_grade(grade: &str) -> String {
    let code = grade.trim().to_uppercase();
    match code.as_str() {
        "P" => "Pre-K".to_string(),
        "0" | "K" => "KG".to_string(),
        _ => format!("Grade {code}"),
    }
}

/// Timestamps with an offset land on the viewer's calendar day in `tz`.
/// Date-only and offset-free forms keep the day as written.
fn parse_date_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(tz).date_naive());
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d);
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%m/%d/%Y").ok()
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    parse_date_in(raw, &Local)
}

fn format_date_in<Tz: TimeZone>(raw: Option<&str>, tz: &Tz) -> String {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return MISSING_DATE.to_string();
    };
    match parse_date_in(raw, tz) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// en-US long form ("May 1, 2024") in the browser's time zone.
/// Unparsable input is returned as-is.
pub fn format_date(raw: Option<&str>) -> String {
    format_date_in(raw, &Local)
}

/// Parsed ISO form, used for ordering and input validation.
pub fn iso_date(raw: &str) -> Option<String> {
    parse_date(raw.trim()).map(|d| d.format("%Y-%m-%d").to_string())
}

pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect()
}

pub fn placeholder_photo(name: &str) -> String {
    format!("{PLACEHOLDER_PHOTO}{}", initials(name))
}
