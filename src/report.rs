/// Summary report rendering (the export sink).
///
/// Renders a metrics value plus the filters it was computed under into a
/// plain-text document served as a download. The layout mirrors the
/// dashboard's exported summary: title, generated-at line, applied filters,
/// key metrics.
use crate::datefmt::{format_date, DateFormat, FormatOptions};
use crate::domain::DashboardMetrics;
use crate::filters::{FilterState, RocketFilter, SuccessFilter, VideoFilter};
use crate::metrics::{rocket_display_name, REFERENCE_YEAR};
use chrono::{DateTime, Utc};
use std::fmt::Write;

pub const REPORT_FILENAME: &str = "launch-analytics-report.txt";

/// Render the summary document. Pure with respect to the injected timestamp.
pub fn render_report(
    metrics: &DashboardMetrics,
    filter: &FilterState,
    generated_at: DateTime<Utc>,
) -> String {
    let mut out = String::new();

    let generated = format_date(
        &generated_at.to_rfc3339(),
        &FormatOptions {
            format: DateFormat::Long,
            include_time: true,
            precision: None,
        },
    );

    let _ = writeln!(out, "Launch Analytics Report");
    let _ = writeln!(out, "=======================");
    let _ = writeln!(out, "Generated: {generated}");
    let _ = writeln!(out);

    let _ = writeln!(out, "Applied Filters");
    let _ = writeln!(out, "---------------");
    if filter.is_identity() {
        let _ = writeln!(out, "None");
    } else {
        for line in describe_filters(filter) {
            let _ = writeln!(out, "{line}");
        }
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "Key Metrics");
    let _ = writeln!(out, "-----------");
    let _ = writeln!(out, "Total Launches: {}", metrics.total_launches);
    let _ = writeln!(
        out,
        "Upcoming Launches ({REFERENCE_YEAR}): {}",
        metrics.upcoming_launches
    );
    let _ = writeln!(out, "Success Rate: {}%", metrics.success_rate);
    match &metrics.most_used_rocket {
        Some(rocket) => {
            let _ = writeln!(
                out,
                "Most Used Rocket: {} ({} launches)",
                rocket.name, rocket.count
            );
        }
        None => {
            let _ = writeln!(out, "Most Used Rocket: N/A");
        }
    }

    out
}

fn describe_filters(filter: &FilterState) -> Vec<String> {
    let mut lines = Vec::new();

    match filter.success {
        SuccessFilter::All => {}
        SuccessFilter::Successful => lines.push("Outcome: successful only".to_string()),
        SuccessFilter::Failed => lines.push("Outcome: failed only".to_string()),
    }
    if let Some(from) = filter.date_from {
        lines.push(format!("From: {from}"));
    }
    if let Some(to) = filter.date_to {
        lines.push(format!("To: {to}"));
    }
    if let RocketFilter::Id(ref id) = filter.rocket {
        lines.push(format!("Rocket: {}", rocket_display_name(id)));
    }
    match filter.has_video {
        VideoFilter::All => {}
        VideoFilter::Yes => lines.push("Video: with webcast".to_string()),
        VideoFilter::No => lines.push("Video: without webcast".to_string()),
    }

    lines
}
