/// HTTP request handlers
use crate::domain::{Health, LaunchRecord};
use crate::errors::ApiError;
use crate::filters::{FilterState, RocketFilter, SuccessFilter, VideoFilter};
use crate::report::REPORT_FILENAME;
use crate::services::{DashboardService, LaunchService, LaunchView, DEFAULT_PER_PAGE};
use axum::{
    extract::{Path, Query, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::warn;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub launch_service: Arc<LaunchService>,
    pub dashboard_service: Arc<DashboardService>,
}

/// Successful response wrapper
#[derive(Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub ok: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self { ok: true, data }
    }
}

/// Query parameters accepted by the listing and report endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct LaunchListParams {
    pub success: Option<String>,
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    pub rocket: Option<String>,
    pub has_video: Option<String>,
    pub q: Option<String>,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

impl LaunchListParams {
    /// Translate raw query values into a `FilterState`, rejecting anything
    /// that is neither an inactive value nor a recognized active one.
    pub fn filter_state(&self) -> Result<FilterState, ApiError> {
        let success = match self.success.as_deref() {
            None | Some("all") => SuccessFilter::All,
            Some("successful") => SuccessFilter::Successful,
            Some("failed") => SuccessFilter::Failed,
            Some(other) => {
                return Err(ApiError::InvalidInput(format!(
                    "unknown success filter '{other}'"
                )))
            }
        };

        let date_from = self
            .date_from
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(parse_filter_date)
            .transpose()?;
        let date_to = self
            .date_to
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(parse_filter_date)
            .transpose()?;

        let rocket = match self.rocket.as_deref() {
            None | Some("all") | Some("") => RocketFilter::All,
            Some(id) => RocketFilter::Id(id.to_string()),
        };

        let has_video = match self.has_video.as_deref() {
            None | Some("all") => VideoFilter::All,
            Some("yes") => VideoFilter::Yes,
            Some("no") => VideoFilter::No,
            Some(other) => {
                return Err(ApiError::InvalidInput(format!(
                    "unknown video filter '{other}'"
                )))
            }
        };

        Ok(FilterState {
            success,
            date_from,
            date_to,
            rocket,
            has_video,
        })
    }
}

fn parse_filter_date(raw: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ApiError::InvalidInput(format!("invalid date '{raw}', expected YYYY-MM-DD")))
}

/// Health check handler
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok",
        now: Utc::now(),
    })
}

/// Filtered, searched, paginated launch listing
pub async fn list_launches(
    Query(params): Query<LaunchListParams>,
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    let filter = params.filter_state()?;
    let listing = state.dashboard_service.launches(
        &filter,
        params.q.as_deref().unwrap_or(""),
        params.page.unwrap_or(1),
        params.per_page.unwrap_or(DEFAULT_PER_PAGE),
    );
    Ok(Json(serde_json::json!(SuccessResponse::new(listing))))
}

/// Ten most recent completed launches. Fetch failures degrade to an empty
/// panel rather than an error page.
pub async fn latest_launches(State(state): State<AppState>) -> Json<Value> {
    let launches = match state.launch_service.latest().await {
        Ok(launches) => launches,
        Err(e) => {
            warn!("latest launches fetch failed: {e}");
            Vec::new()
        }
    };
    Json(launch_panel(launches, LaunchView::dashboard))
}

/// Launches in the reference-year window (the dashboard's upcoming panel).
pub async fn upcoming_launches(State(state): State<AppState>) -> Json<Value> {
    let launches = match state.launch_service.reference_year().await {
        Ok(launches) => launches,
        Err(e) => {
            warn!("upcoming launches fetch failed: {e}");
            Vec::new()
        }
    };
    Json(launch_panel(launches, LaunchView::upcoming))
}

fn launch_panel(launches: Vec<LaunchRecord>, view: fn(LaunchRecord) -> LaunchView) -> Value {
    let items: Vec<LaunchView> = launches.into_iter().map(view).collect();
    serde_json::json!(SuccessResponse::new(serde_json::json!({
        "count": items.len(),
        "items": items,
    })))
}

/// Dashboard summary metrics over the current snapshot
pub async fn dashboard_metrics(State(state): State<AppState>) -> Json<Value> {
    let metrics = state.dashboard_service.metrics();
    Json(serde_json::json!(SuccessResponse::new(serde_json::json!({
        "metrics": metrics,
        "fetched_at": state.dashboard_service.fetched_at(),
    }))))
}

/// Resolve a launchpad id to its display name (cached)
pub async fn launchpad_name(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Json<Value> {
    let name = state.dashboard_service.launchpad_name(&id).await;
    Json(serde_json::json!(SuccessResponse::new(serde_json::json!({
        "id": id,
        "name": name,
    }))))
}

/// Trigger a full collection sync
pub async fn refresh(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let count = state.launch_service.sync().await?;
    Ok(Json(serde_json::json!(SuccessResponse::new(
        serde_json::json!({
            "synced": count,
        })
    ))))
}

/// Download the summary report for the filtered snapshot
pub async fn report(
    Query(params): Query<LaunchListParams>,
    State(state): State<AppState>,
) -> Result<Response, ApiError> {
    let filter = params.filter_state()?;
    let body = state.dashboard_service.report(&filter);

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{REPORT_FILENAME}\""),
            ),
        ],
        body,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_params_yield_identity_filter() {
        let params = LaunchListParams::default();
        assert!(params.filter_state().unwrap().is_identity());
    }

    #[test]
    fn all_values_are_inactive() {
        let params = LaunchListParams {
            success: Some("all".to_string()),
            rocket: Some("all".to_string()),
            has_video: Some("all".to_string()),
            date_from: Some("".to_string()),
            ..Default::default()
        };
        assert!(params.filter_state().unwrap().is_identity());
    }

    #[test]
    fn active_params_translate() {
        let params = LaunchListParams {
            success: Some("failed".to_string()),
            date_from: Some("2020-01-01".to_string()),
            date_to: Some("2021-12-31".to_string()),
            rocket: Some("5e9d0d95eda69973a809d1ec".to_string()),
            has_video: Some("yes".to_string()),
            ..Default::default()
        };
        let filter = params.filter_state().unwrap();
        assert_eq!(filter.success, SuccessFilter::Failed);
        assert_eq!(filter.date_from, NaiveDate::from_ymd_opt(2020, 1, 1));
        assert_eq!(filter.date_to, NaiveDate::from_ymd_opt(2021, 12, 31));
        assert_eq!(
            filter.rocket,
            RocketFilter::Id("5e9d0d95eda69973a809d1ec".to_string())
        );
        assert_eq!(filter.has_video, VideoFilter::Yes);
    }

    #[test]
    fn bad_values_are_rejected() {
        let params = LaunchListParams {
            success: Some("exploded".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            params.filter_state(),
            Err(ApiError::InvalidInput(_))
        ));

        let params = LaunchListParams {
            date_from: Some("01/01/2020".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            params.filter_state(),
            Err(ApiError::InvalidInput(_))
        ));
    }
}
