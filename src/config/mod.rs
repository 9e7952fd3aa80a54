/// Application configuration module
use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub spacex_api_url: String,
    pub bind_addr: String,
    pub sync_every_seconds: u64,
    pub page_limit: u32,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let spacex_api_url = env::var("SPACEX_API_URL")
            .unwrap_or_else(|_| "https://api.spacexdata.com".to_string());

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let sync_every_seconds = env_u64("SYNC_EVERY_SECONDS", 3600);
        let page_limit = env_u64("PAGE_LIMIT", 200) as u32;

        Ok(Self {
            spacex_api_url,
            bind_addr,
            sync_every_seconds,
            page_limit,
        })
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}
