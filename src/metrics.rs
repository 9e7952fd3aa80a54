/// Dashboard metrics aggregation.
///
/// Every function here is a pure reduction over a launch collection: no I/O,
/// no failure modes. Malformed or absent fields drop a record out of the
/// statistic in question instead of poisoning the whole computation.
use crate::domain::{DashboardMetrics, LaunchRecord, RocketUsage};
use chrono::Datelike;

/// Calendar year treated as "upcoming" by the dashboard. This matches the
/// dataset-snapshot convention the dashboard shipped with (NOT a future-date
/// comparison and NOT the `upcoming` flag); see DESIGN.md before changing it.
pub const REFERENCE_YEAR: i32 = 2022;

/// Static rocket id -> display name table for the SpaceX fleet.
const ROCKET_NAMES: [(&str, &str); 4] = [
    ("5e9d0d95eda69955f709d1eb", "Falcon 1"),
    ("5e9d0d95eda69973a809d1ec", "Falcon 9"),
    ("5e9d0d95eda69974db09d1ed", "Falcon Heavy"),
    ("5e9d0d96eda699382d09d1ee", "Starship"),
];

/// Display name for a rocket id, falling back to the raw id when unmapped.
pub fn rocket_display_name(id: &str) -> String {
    ROCKET_NAMES
        .iter()
        .find(|(known, _)| *known == id)
        .map(|(_, name)| (*name).to_string())
        .unwrap_or_else(|| id.to_string())
}

pub fn total_launches(records: &[LaunchRecord]) -> usize {
    records.len()
}

/// Count of launches whose date parses into the reference year. Records with
/// missing or unparseable dates are excluded.
pub fn upcoming_launches(records: &[LaunchRecord]) -> usize {
    records
        .iter()
        .filter(|r| {
            r.date_parsed()
                .map(|d| d.year() == REFERENCE_YEAR)
                .unwrap_or(false)
        })
        .count()
}

/// Integer success percentage over completed launches.
///
/// A launch is completed when `upcoming == false` and `success` is defined;
/// unknown outcomes never count against the rate. Empty completed set -> 0.
pub fn success_rate(records: &[LaunchRecord]) -> u8 {
    let completed: Vec<&LaunchRecord> = records
        .iter()
        .filter(|r| !r.upcoming && r.success.is_some())
        .collect();

    if completed.is_empty() {
        return 0;
    }

    let successes = completed
        .iter()
        .filter(|r| r.success == Some(true))
        .count();

    (100.0 * successes as f64 / completed.len() as f64).round() as u8
}

/// The rocket id appearing most often among records that carry one, with
/// ties broken by first appearance in the input. `None` when no record has a
/// rocket id.
pub fn most_used_rocket(records: &[LaunchRecord]) -> Option<RocketUsage> {
    // Insertion-ordered tally so ties resolve to the earliest-seen id.
    let mut order: Vec<&str> = Vec::new();
    let mut counts: Vec<usize> = Vec::new();

    for record in records {
        let Some(rocket) = record.rocket.as_deref() else {
            continue;
        };
        match order.iter().position(|id| *id == rocket) {
            Some(i) => counts[i] += 1,
            None => {
                order.push(rocket);
                counts.push(1);
            }
        }
    }

    // Strict comparison keeps the earliest-seen id on equal counts.
    let mut best: Option<(usize, usize)> = None;
    for (i, &count) in counts.iter().enumerate() {
        if best.map_or(true, |(_, top)| count > top) {
            best = Some((i, count));
        }
    }

    best.map(|(i, count)| RocketUsage {
        id: order[i].to_string(),
        name: rocket_display_name(order[i]),
        count,
    })
}

/// Reduce a launch collection into the full dashboard summary.
pub fn compute_metrics(records: &[LaunchRecord]) -> DashboardMetrics {
    DashboardMetrics {
        total_launches: total_launches(records),
        upcoming_launches: upcoming_launches(records),
        success_rate: success_rate(records),
        most_used_rocket: most_used_rocket(records),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn launch(id: &str, date_utc: Option<&str>, success: Option<bool>, upcoming: bool, rocket: Option<&str>) -> LaunchRecord {
        LaunchRecord {
            id: id.to_string(),
            name: format!("Launch {id}"),
            date_utc: date_utc.map(str::to_string),
            date_precision: None,
            success,
            upcoming,
            rocket: rocket.map(str::to_string),
            launchpad: None,
            details: None,
            payloads: None,
            cores: None,
            links: None,
        }
    }

    const FALCON_9: &str = "5e9d0d95eda69973a809d1ec";
    const FALCON_HEAVY: &str = "5e9d0d95eda69974db09d1ed";

    #[test]
    fn empty_collection_yields_zeroed_metrics() {
        assert_eq!(
            compute_metrics(&[]),
            DashboardMetrics {
                total_launches: 0,
                upcoming_launches: 0,
                success_rate: 0,
                most_used_rocket: None,
            }
        );
    }

    #[test]
    fn total_is_input_length_regardless_of_fields() {
        let records = vec![
            launch("1", None, None, true, None),
            launch("2", Some("garbage"), Some(false), false, None),
            launch("3", Some("2020-03-01T00:00:00.000Z"), Some(true), false, None),
        ];
        assert_eq!(total_launches(&records), 3);
    }

    #[test]
    fn upcoming_counts_reference_year_only() {
        let records = vec![
            launch("1", Some("2022-01-15T00:00:00.000Z"), None, false, None),
            launch("2", Some("2022-06-20T12:00:00.000Z"), None, false, None),
            launch("3", Some("2021-12-31T23:59:59.999Z"), Some(true), false, None),
            launch("4", Some("not-a-date"), None, true, None),
            launch("5", None, None, true, None),
        ];
        assert_eq!(upcoming_launches(&records), 2);
    }

    #[test]
    fn success_rate_rounds_half_up() {
        let records = vec![
            launch("1", Some("2020-01-01T00:00:00.000Z"), Some(true), false, None),
            launch("2", Some("2020-02-01T00:00:00.000Z"), Some(true), false, None),
            launch("3", Some("2020-03-01T00:00:00.000Z"), Some(false), false, None),
        ];
        // 2/3 = 66.67 -> 67
        assert_eq!(success_rate(&records), 67);
    }

    #[test]
    fn success_rate_ignores_unknown_and_upcoming() {
        // upcoming=false with success=None is a data-quality gap, still
        // excluded from the rate.
        let records = vec![
            launch("1", None, None, false, None),
            launch("2", None, None, true, None),
            launch("3", None, Some(true), true, None),
        ];
        assert_eq!(success_rate(&records), 0);

        let records = vec![
            launch("1", None, Some(true), false, None),
            launch("2", None, None, false, None),
        ];
        assert_eq!(success_rate(&records), 100);
    }

    #[test]
    fn most_used_rocket_resolves_display_name() {
        let records = vec![
            launch("1", None, Some(true), false, Some(FALCON_9)),
            launch("2", None, Some(true), false, Some(FALCON_9)),
            launch("3", None, Some(true), false, Some(FALCON_HEAVY)),
        ];
        assert_eq!(
            most_used_rocket(&records),
            Some(RocketUsage {
                id: FALCON_9.to_string(),
                name: "Falcon 9".to_string(),
                count: 2,
            })
        );
    }

    #[test]
    fn most_used_rocket_tie_goes_to_first_seen() {
        let records = vec![
            launch("1", None, None, false, Some(FALCON_HEAVY)),
            launch("2", None, None, false, Some(FALCON_9)),
            launch("3", None, None, false, Some(FALCON_HEAVY)),
            launch("4", None, None, false, Some(FALCON_9)),
        ];
        let usage = most_used_rocket(&records).unwrap();
        assert_eq!(usage.id, FALCON_HEAVY);
        assert_eq!(usage.count, 2);
    }

    #[test]
    fn most_used_rocket_falls_back_to_raw_id() {
        let records = vec![launch("1", None, None, false, Some("mystery-rocket"))];
        let usage = most_used_rocket(&records).unwrap();
        assert_eq!(usage.name, "mystery-rocket");
    }

    #[test]
    fn most_used_rocket_none_without_rocket_ids() {
        let records = vec![launch("1", None, Some(true), false, None)];
        assert_eq!(most_used_rocket(&records), None);
    }

    #[test]
    fn end_to_end_scenario() {
        let records = vec![
            launch("1", Some("2021-01-01T00:00:00.000Z"), Some(true), false, Some(FALCON_9)),
            launch("2", Some("2021-02-01T00:00:00.000Z"), Some(true), false, Some(FALCON_9)),
            launch("3", Some("2021-03-01T00:00:00.000Z"), Some(false), false, Some("B")),
        ];
        let metrics = compute_metrics(&records);
        assert_eq!(metrics.total_launches, 3);
        assert_eq!(metrics.upcoming_launches, 0);
        assert_eq!(metrics.success_rate, 67);
        let rocket = metrics.most_used_rocket.unwrap();
        assert_eq!(rocket.id, FALCON_9);
        assert_eq!(rocket.count, 2);
    }
}
