/// External API clients module
use crate::domain::LaunchRecord;
use crate::errors::{ApiError, ApiResult};
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

/// HTTP client wrapper with common configuration
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("launch-dashboard-service/1.0")
            .build()?;
        Ok(Self { client })
    }

    pub fn get_client(&self) -> &Client {
        &self.client
    }
}

/// One page of the launches query endpoint, normalized at the boundary.
/// Nothing downstream ever sees the raw page JSON.
#[derive(Debug, Deserialize)]
pub struct LaunchPage {
    #[serde(default)]
    pub docs: Vec<LaunchRecord>,
    #[serde(rename = "hasNextPage", default)]
    pub has_next_page: bool,
}

/// SpaceX launches client (v5 query endpoint)
pub struct LaunchClient {
    http_client: HttpClient,
    base_url: String,
    page_limit: u32,
}

impl LaunchClient {
    pub fn new(base_url: String, page_limit: u32) -> ApiResult<Self> {
        Ok(Self {
            http_client: HttpClient::new()?,
            base_url,
            page_limit,
        })
    }

    /// Fetch every launch, newest first, walking the paginated query
    /// endpoint until the server signals the end of the collection.
    ///
    /// Any page failure aborts the whole fetch: callers get the complete
    /// collection or an error, never a silently truncated set.
    pub async fn fetch_all_launches(&self) -> ApiResult<Vec<LaunchRecord>> {
        self.fetch_paged(None, json!({ "date_utc": "desc" })).await
    }

    /// The ten most recent completed launches (the dashboard's latest panel).
    pub async fn fetch_latest_launches(&self) -> ApiResult<Vec<LaunchRecord>> {
        let page = self
            .query_page(Some(json!({ "upcoming": false })), json!({ "date_utc": "desc" }), 1, 10)
            .await?;
        Ok(page.docs)
    }

    /// Launches inside the dashboard's reference-year window, oldest first.
    pub async fn fetch_reference_year_launches(&self) -> ApiResult<Vec<LaunchRecord>> {
        let query = json!({
            "date_utc": {
                "$gte": "2022-01-01T00:00:00.000Z",
                "$lte": "2022-12-31T23:59:59.999Z"
            }
        });
        self.fetch_paged(Some(query), json!({ "date_utc": "asc" })).await
    }

    async fn fetch_paged(&self, query: Option<Value>, sort: Value) -> ApiResult<Vec<LaunchRecord>> {
        let mut all = Vec::new();
        let mut current_page = 1u32;

        loop {
            let page = self
                .query_page(query.clone(), sort.clone(), current_page, self.page_limit)
                .await?;
            debug!(page = current_page, docs = page.docs.len(), "fetched launch page");

            let empty = page.docs.is_empty();
            all.extend(page.docs);

            if empty || !page.has_next_page {
                break;
            }
            current_page += 1;
        }

        Ok(all)
    }

    async fn query_page(
        &self,
        query: Option<Value>,
        sort: Value,
        page: u32,
        limit: u32,
    ) -> ApiResult<LaunchPage> {
        let mut body = json!({
            "options": {
                "page": page,
                "limit": limit,
                "sort": sort,
            }
        });
        if let Some(query) = query {
            body["query"] = query;
        }

        let resp = self
            .http_client
            .get_client()
            .post(format!("{}/v5/launches/query", self.base_url))
            .json(&body)
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(ApiError::UpstreamStatus {
                status: resp.status(),
                context: "launches query",
            });
        }

        let page: LaunchPage = resp.json().await?;
        Ok(page)
    }
}

/// Launchpad name resolution client (v4 endpoint)
pub struct LaunchpadClient {
    http_client: HttpClient,
    base_url: String,
}

impl LaunchpadClient {
    pub fn new(base_url: String) -> ApiResult<Self> {
        Ok(Self {
            http_client: HttpClient::new()?,
            base_url,
        })
    }

    /// Resolve a launchpad id to its display name. Any failure falls back to
    /// the raw id; display must never break on a lookup miss.
    pub async fn fetch_name(&self, launchpad_id: &str) -> String {
        let url = format!("{}/v4/launchpads/{}", self.base_url, launchpad_id);

        let resp = match self.http_client.get_client().get(&url).send().await {
            Ok(resp) if resp.status().is_success() => resp,
            _ => return launchpad_id.to_string(),
        };

        let body: Value = match resp.json().await {
            Ok(body) => body,
            Err(_) => return launchpad_id.to_string(),
        };

        body.get("name")
            .and_then(Value::as_str)
            .or_else(|| body.get("full_name").and_then(Value::as_str))
            .map(str::to_string)
            .unwrap_or_else(|| launchpad_id.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_page_normalizes_missing_fields() {
        let page: LaunchPage = serde_json::from_value(json!({})).unwrap();
        assert!(page.docs.is_empty());
        assert!(!page.has_next_page);
    }

    #[test]
    fn launch_page_deserializes_docs_and_cursor() {
        let page: LaunchPage = serde_json::from_value(json!({
            "docs": [
                { "id": "1", "name": "FalconSat", "upcoming": false, "success": false },
                { "id": "2", "name": "DemoSat" }
            ],
            "hasNextPage": true,
            "totalDocs": 205
        }))
        .unwrap();
        assert_eq!(page.docs.len(), 2);
        assert!(page.has_next_page);
        assert_eq!(page.docs[0].success, Some(false));
        assert_eq!(page.docs[1].success, None);
    }
}
