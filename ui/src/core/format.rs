//! Formatting helpers for presenting records and scores.

use time::{format_description::well_known::Rfc3339, macros::format_description, OffsetDateTime};

/// Parse an RFC3339 backend timestamp; `None` when the format drifts.
pub fn parse_timestamp(raw: &str) -> Option<OffsetDateTime> {
    OffsetDateTime::parse(raw, &Rfc3339).ok()
}

/// Render a backend timestamp as a short date badge, e.g. `02 Jan 2026`.
/// Unparseable input falls back to the raw string so the card still renders.
pub fn format_date(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(ts) => ts
            .format(&format_description!(
                "[day] [month repr:short] [year]"
            ))
            .unwrap_or_else(|_| raw.to_string()),
        None => raw.to_string(),
    }
}

/// Score with one decimal place, e.g. `7.4`.
pub fn format_score(value: f64) -> String {
    format!("{value:.1}")
}

/// Compact UTC stamp for export filenames.
pub fn timestamp_slug() -> String {
    OffsetDateTime::now_utc()
        .format(&format_description!(
            "[year][month][day]_[hour][minute][second]"
        ))
        .unwrap_or_else(|_| "export".into())
}
