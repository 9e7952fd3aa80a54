/// Domain models for the application
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How much of a launch timestamp is meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatePrecision {
    Year,
    Month,
    Day,
    Hour,
}

/// One launch-vehicle event as served by the SpaceX v5 API.
///
/// `date_utc` stays a raw wire string: upstream data occasionally carries
/// malformed timestamps, and an unparseable date is a distinct "unknown date"
/// state rather than a deserialization failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub date_utc: Option<String>,
    #[serde(default)]
    pub date_precision: Option<DatePrecision>,
    /// Tri-state: `None` means unknown/not-applicable, never "failed".
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub upcoming: bool,
    #[serde(default)]
    pub rocket: Option<String>,
    #[serde(default)]
    pub launchpad: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub payloads: Option<Vec<String>>,
    #[serde(default)]
    pub cores: Option<Vec<LaunchCore>>,
    #[serde(default)]
    pub links: Option<LaunchLinks>,
}

impl LaunchRecord {
    /// Parsed launch instant, or `None` when the raw value is missing or
    /// unparseable.
    pub fn date_parsed(&self) -> Option<DateTime<Utc>> {
        self.date_utc
            .as_deref()
            .and_then(|s| s.parse::<DateTime<Utc>>().ok())
    }

    /// Whether a video link (webcast URL or video-platform id) is present.
    pub fn has_video(&self) -> bool {
        self.links
            .as_ref()
            .map(|l| l.webcast.is_some() || l.youtube_id.is_some())
            .unwrap_or(false)
    }
}

/// Nested link block; everything may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LaunchLinks {
    #[serde(default)]
    pub patch: Option<LaunchPatch>,
    #[serde(default)]
    pub webcast: Option<String>,
    #[serde(default)]
    pub youtube_id: Option<String>,
    #[serde(default)]
    pub article: Option<String>,
    #[serde(default)]
    pub wikipedia: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LaunchPatch {
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
}

/// First-stage core detail block, display only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LaunchCore {
    #[serde(default)]
    pub core: Option<String>,
    #[serde(default)]
    pub flight: Option<u32>,
    #[serde(default)]
    pub reused: Option<bool>,
    #[serde(default)]
    pub landing_attempt: Option<bool>,
    #[serde(default)]
    pub landing_success: Option<bool>,
    #[serde(default)]
    pub landing_type: Option<String>,
    #[serde(default)]
    pub landpad: Option<String>,
}

/// Summary statistics over a launch collection; derived, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardMetrics {
    pub total_launches: usize,
    pub upcoming_launches: usize,
    /// Integer percent in [0, 100].
    pub success_rate: u8,
    pub most_used_rocket: Option<RocketUsage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RocketUsage {
    pub id: String,
    pub name: String,
    pub count: usize,
}

/// Health check response
#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
    pub now: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_parsed_accepts_iso_utc() {
        let launch: LaunchRecord = serde_json::from_value(serde_json::json!({
            "id": "abc",
            "name": "Demo",
            "date_utc": "2022-06-15T10:30:00.000Z"
        }))
        .unwrap();
        assert!(launch.date_parsed().is_some());
    }

    #[test]
    fn date_parsed_is_none_for_garbage() {
        let launch: LaunchRecord = serde_json::from_value(serde_json::json!({
            "id": "abc",
            "name": "Demo",
            "date_utc": "not-a-date"
        }))
        .unwrap();
        assert_eq!(launch.date_parsed(), None);
    }

    #[test]
    fn has_video_checks_webcast_and_youtube() {
        let mut launch: LaunchRecord = serde_json::from_value(serde_json::json!({
            "id": "abc",
            "name": "Demo"
        }))
        .unwrap();
        assert!(!launch.has_video());

        launch.links = Some(LaunchLinks {
            youtube_id: Some("dLQ2tZEH6G0".to_string()),
            ..Default::default()
        });
        assert!(launch.has_video());
    }
}
