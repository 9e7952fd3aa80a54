/// Launch date formatting.
///
/// Upstream dates are ISO strings (UTC) whose meaningful granularity varies
/// per record, so formatting respects the declared precision and malformed
/// input degrades to a placeholder instead of an error.
use crate::domain::DatePrecision;
use chrono::{DateTime, Datelike, Utc};

pub const DATE_TBD: &str = "Date TBD";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormat {
    #[default]
    Short,
    Long,
    Relative,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOptions {
    pub format: DateFormat,
    pub include_time: bool,
    pub precision: Option<DatePrecision>,
}

/// Format a raw launch timestamp. Unparseable input returns `"Date TBD"`.
pub fn format_date(raw: &str, opts: &FormatOptions) -> String {
    let date = match raw.parse::<DateTime<Utc>>() {
        Ok(d) => d,
        Err(_) => return DATE_TBD.to_string(),
    };

    if opts.format == DateFormat::Relative {
        return relative_from(date, Utc::now());
    }

    match opts.precision {
        Some(DatePrecision::Year) => return date.year().to_string(),
        Some(DatePrecision::Month) => return date.format("%B %Y").to_string(),
        _ => {}
    }

    let date_part = match opts.format {
        DateFormat::Long => date.format("%B %-d, %Y"),
        _ => date.format("%b %-d, %Y"),
    };

    if opts.include_time || opts.precision == Some(DatePrecision::Hour) {
        format!("{}, {} UTC", date_part, date.format("%-I:%M %p"))
    } else {
        date_part.to_string()
    }
}

/// Relative description against an explicit reference instant. Only the
/// largest whole unit is shown; under a minute collapses to "just now".
pub fn relative_from(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    const INTERVALS: [(&str, i64); 6] = [
        ("year", 31_536_000),
        ("month", 2_592_000),
        ("week", 604_800),
        ("day", 86_400),
        ("hour", 3_600),
        ("minute", 60),
    ];

    let diff_seconds = (date - now).num_seconds();
    let abs_seconds = diff_seconds.abs();

    for (unit, seconds) in INTERVALS {
        let value = abs_seconds / seconds;
        if value >= 1 {
            let plural = if value > 1 { "s" } else { "" };
            return if diff_seconds < 0 {
                format!("{value} {unit}{plural} ago")
            } else {
                format!("in {value} {unit}{plural}")
            };
        }
    }

    "just now".to_string()
}

/// Launch card date: short format at the record's precision.
pub fn format_launch_card_date(raw: &str, precision: Option<DatePrecision>) -> String {
    format_date(
        raw,
        &FormatOptions {
            format: DateFormat::Short,
            precision,
            ..Default::default()
        },
    )
}

/// Dashboard timestamp: short date with time.
pub fn format_dashboard_date_time(raw: &str) -> String {
    format_date(
        raw,
        &FormatOptions {
            format: DateFormat::Short,
            include_time: true,
            ..Default::default()
        },
    )
}

/// Upcoming launch date: relative to now.
pub fn format_upcoming_launch_date(raw: &str) -> String {
    format_date(
        raw,
        &FormatOptions {
            format: DateFormat::Relative,
            ..Default::default()
        },
    )
}
