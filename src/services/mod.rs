/// Business logic services layer
use crate::clients::{LaunchClient, LaunchpadClient};
use crate::datefmt::{
    format_dashboard_date_time, format_launch_card_date, format_upcoming_launch_date, DATE_TBD,
};
use crate::domain::{DashboardMetrics, LaunchRecord};
use crate::errors::ApiResult;
use crate::filters::{apply_filters, search_launches, FilterState};
use crate::metrics::compute_metrics;
use crate::report::render_report;
use crate::store::{LaunchStore, NameCache};
use chrono::Utc;
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

pub const DEFAULT_PER_PAGE: usize = 20;

/// Launch collection sync service
pub struct LaunchService {
    store: Arc<LaunchStore>,
    client: LaunchClient,
}

impl LaunchService {
    pub fn new(store: Arc<LaunchStore>, client: LaunchClient) -> Self {
        Self { store, client }
    }

    /// Fetch the full collection and swap it into the store. A failed fetch
    /// leaves the previous snapshot untouched.
    pub async fn sync(&self) -> ApiResult<usize> {
        let launches = self.client.fetch_all_launches().await?;
        let count = launches.len();
        self.store.replace_all(launches);
        info!(count, "launch collection synced");
        Ok(count)
    }

    /// The ten most recent completed launches, straight from the API.
    pub async fn latest(&self) -> ApiResult<Vec<LaunchRecord>> {
        self.client.fetch_latest_launches().await
    }

    /// Launches in the dashboard's reference-year window, oldest first.
    pub async fn reference_year(&self) -> ApiResult<Vec<LaunchRecord>> {
        self.client.fetch_reference_year_launches().await
    }
}

/// A launch enriched with its formatted display date.
#[derive(Debug, Serialize)]
pub struct LaunchView {
    #[serde(flatten)]
    pub record: LaunchRecord,
    pub date_display: String,
}

impl LaunchView {
    /// Card rendering: short date at the record's declared precision.
    pub fn card(record: LaunchRecord) -> Self {
        let date_display = record
            .date_utc
            .as_deref()
            .map(|raw| format_launch_card_date(raw, record.date_precision))
            .unwrap_or_else(|| DATE_TBD.to_string());
        Self { record, date_display }
    }

    /// Dashboard rendering: short date with launch time.
    pub fn dashboard(record: LaunchRecord) -> Self {
        let date_display = record
            .date_utc
            .as_deref()
            .map(format_dashboard_date_time)
            .unwrap_or_else(|| DATE_TBD.to_string());
        Self { record, date_display }
    }

    /// Upcoming-panel rendering: relative date.
    pub fn upcoming(record: LaunchRecord) -> Self {
        let date_display = record
            .date_utc
            .as_deref()
            .map(format_upcoming_launch_date)
            .unwrap_or_else(|| DATE_TBD.to_string());
        Self { record, date_display }
    }
}

/// One page of a filtered launch listing.
#[derive(Debug, Serialize)]
pub struct LaunchListing {
    pub total: usize,
    pub page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub items: Vec<LaunchView>,
}

/// Slice a filtered collection into a listing page. Pages are 1-based; an
/// out-of-range page yields an empty item list, not an error.
pub fn paginate(records: Vec<LaunchRecord>, page: usize, per_page: usize) -> LaunchListing {
    let per_page = per_page.max(1);
    let page = page.max(1);
    let total = records.len();
    let total_pages = total.div_ceil(per_page);

    let start = (page - 1).saturating_mul(per_page);
    let items = if start >= total {
        Vec::new()
    } else {
        records[start..(start + per_page).min(total)]
            .iter()
            .cloned()
            .map(LaunchView::card)
            .collect()
    };

    LaunchListing {
        total,
        page,
        per_page,
        total_pages,
        items,
    }
}

/// Dashboard aggregation and presentation service
pub struct DashboardService {
    store: Arc<LaunchStore>,
    launchpad_client: LaunchpadClient,
    name_cache: NameCache,
}

impl DashboardService {
    pub fn new(store: Arc<LaunchStore>, launchpad_client: LaunchpadClient) -> Self {
        Self {
            store,
            launchpad_client,
            name_cache: NameCache::new(),
        }
    }

    /// Summary metrics over the current snapshot.
    pub fn metrics(&self) -> DashboardMetrics {
        compute_metrics(&self.store.snapshot())
    }

    /// When the snapshot was last replaced, if it ever was.
    pub fn fetched_at(&self) -> Option<chrono::DateTime<Utc>> {
        self.store.fetched_at()
    }

    /// Filtered, searched, paginated launch listing. Structural filters run
    /// first, then the text search, then pagination.
    pub fn launches(
        &self,
        filter: &FilterState,
        search: &str,
        page: usize,
        per_page: usize,
    ) -> LaunchListing {
        let filtered = apply_filters(&self.store.snapshot(), filter);
        let searched = search_launches(&filtered, search);
        paginate(searched, page, per_page)
    }

    /// Launchpad display name, memoized for the process lifetime.
    pub async fn launchpad_name(&self, launchpad_id: &str) -> String {
        if let Some(name) = self.name_cache.get(launchpad_id) {
            return name;
        }
        let name = self.launchpad_client.fetch_name(launchpad_id).await;
        self.name_cache
            .insert(launchpad_id.to_string(), name.clone());
        name
    }

    /// Summary report over the filtered snapshot.
    pub fn report(&self, filter: &FilterState) -> String {
        let filtered = apply_filters(&self.store.snapshot(), filter);
        let metrics = compute_metrics(&filtered);
        render_report(&metrics, filter, Utc::now())
    }
}
