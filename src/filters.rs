/// Filter predicate engine for the launch list.
///
/// Predicates are independent and conjunctive; filtering is stable (original
/// relative order preserved) and idempotent. The default `FilterState`
/// matches everything.
use crate::domain::LaunchRecord;
use chrono::{NaiveDate, NaiveTime};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuccessFilter {
    #[default]
    All,
    Successful,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RocketFilter {
    #[default]
    All,
    Id(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VideoFilter {
    #[default]
    All,
    Yes,
    No,
}

/// Active inclusion predicates over a launch collection.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterState {
    pub success: SuccessFilter,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub rocket: RocketFilter,
    pub has_video: VideoFilter,
}

impl FilterState {
    /// True when every predicate is inactive (the identity filter).
    pub fn is_identity(&self) -> bool {
        *self == Self::default()
    }
}

fn matches(launch: &LaunchRecord, filter: &FilterState) -> bool {
    match filter.success {
        SuccessFilter::All => {}
        // Upcoming launches have no outcome yet and fall out of both
        // non-"all" branches regardless of their success value.
        SuccessFilter::Successful => {
            if launch.upcoming || launch.success != Some(true) {
                return false;
            }
        }
        SuccessFilter::Failed => {
            if launch.upcoming || launch.success != Some(false) {
                return false;
            }
        }
    }

    if let Some(from) = filter.date_from {
        let floor = from.and_time(NaiveTime::MIN).and_utc();
        match launch.date_parsed() {
            Some(date) if date >= floor => {}
            _ => return false,
        }
    }

    if let Some(to) = filter.date_to {
        // End-of-day inclusive.
        let ceiling = to
            .and_time(NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap())
            .and_utc();
        match launch.date_parsed() {
            Some(date) if date <= ceiling => {}
            _ => return false,
        }
    }

    if let RocketFilter::Id(ref id) = filter.rocket {
        if launch.rocket.as_deref() != Some(id.as_str()) {
            return false;
        }
    }

    match filter.has_video {
        VideoFilter::All => {}
        VideoFilter::Yes => {
            if !launch.has_video() {
                return false;
            }
        }
        VideoFilter::No => {
            if launch.has_video() {
                return false;
            }
        }
    }

    true
}

/// Keep the launches satisfying every active predicate, in input order.
pub fn apply_filters(records: &[LaunchRecord], filter: &FilterState) -> Vec<LaunchRecord> {
    records
        .iter()
        .filter(|r| matches(r, filter))
        .cloned()
        .collect()
}

/// Case-insensitive substring match against name or details. An empty or
/// whitespace-only query is a no-op. Applied after the structural filters.
pub fn search_launches(records: &[LaunchRecord], query: &str) -> Vec<LaunchRecord> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|r| {
            r.name.to_lowercase().contains(&query)
                || r.details
                    .as_deref()
                    .map(|d| d.to_lowercase().contains(&query))
                    .unwrap_or(false)
        })
        .cloned()
        .collect()
}
