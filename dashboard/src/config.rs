use anyhow::anyhow;
use chrono::NaiveTime;
use chrono_tz::Tz;
use std::env;
use std::time::Duration;

use crate::utils::time::parse_time_of_day;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_RECENT_LIMIT: usize = 10;

/// Arrivals at or before this time of day are on time.
pub fn default_late_cutoff() -> NaiveTime {
    NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default()
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub time_zone: Tz,
    pub late_cutoff: NaiveTime,
    pub recent_limit: usize,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            time_zone: Tz::UTC,
            late_cutoff: default_late_cutoff(),
            recent_limit: DEFAULT_RECENT_LIMIT,
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let api_base_url = env::var("HRIS_API_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        let time_zone_name = env::var("HRIS_TIMEZONE").unwrap_or_else(|_| "UTC".to_string());
        let time_zone: Tz = time_zone_name
            .parse()
            .map_err(|_| anyhow!("Invalid HRIS_TIMEZONE value: {}", time_zone_name))?;

        let late_cutoff = match env::var("HRIS_LATE_CUTOFF") {
            Ok(value) => parse_time_of_day(&value)
                .ok_or_else(|| anyhow!("Invalid HRIS_LATE_CUTOFF value: {}", value))?,
            Err(_) => default_late_cutoff(),
        };

        let recent_limit = env::var("HRIS_RECENT_LIMIT")
            .unwrap_or_else(|_| DEFAULT_RECENT_LIMIT.to_string());
        let recent_limit: usize = recent_limit
            .parse()
            .map_err(|_| anyhow!("Invalid HRIS_RECENT_LIMIT value: {}", recent_limit))?;

        let timeout = env::var("HRIS_REQUEST_TIMEOUT_SECS").unwrap_or_else(|_| "30".to_string());
        let timeout_secs: u64 = timeout
            .parse()
            .map_err(|_| anyhow!("Invalid HRIS_REQUEST_TIMEOUT_SECS value: {}", timeout))?;

        Ok(Config::default()
            .with_base_url(api_base_url)
            .with_time_zone(time_zone)
            .with_late_cutoff(late_cutoff)
            .with_recent_limit(recent_limit)
            .with_request_timeout(Duration::from_secs(timeout_secs)))
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api_base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_time_zone(mut self, time_zone: Tz) -> Self {
        self.time_zone = time_zone;
        self
    }

    pub fn with_late_cutoff(mut self, cutoff: NaiveTime) -> Self {
        self.late_cutoff = cutoff;
        self
    }

    pub fn with_recent_limit(mut self, limit: usize) -> Self {
        self.recent_limit = limit;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}
