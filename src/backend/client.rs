use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::backend::models::{
    AlertFeed, BarMetrics, BatteryReport, CapitalCities, ComfortReport, ConditionReport,
    DamReport, Forecast, Rainfall24h, SampleBatch, SunLookup, TideTable, TopStats, TrainingDays,
    WarningFeed, Weather24h, WeeklyStats, WeeklyTrends,
};
use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::series::Period;

/// HTTP client for the weather-station backend and the external
/// sunrise/sunset lookup.
///
/// All requests carry an explicit timeout so a hung fetch bounds a panel's
/// staleness instead of freezing it silently.
pub struct BackendClient {
    http_client: Client,
    base_url: String,
    sun_api_base_url: String,
    station_latitude: f64,
    station_longitude: f64,
    station_tzid: String,
}

impl BackendClient {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.backend_timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http_client,
            base_url: config.backend_base_url.trim_end_matches('/').to_string(),
            sun_api_base_url: config.sun_api_base_url.trim_end_matches('/').to_string(),
            station_latitude: config.station_latitude,
            station_longitude: config.station_longitude,
            station_tzid: config.station_tzid.clone(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path_and_query: &str) -> AppResult<T> {
        let url = format!("{}{}", self.base_url, path_and_query);

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Backend(format!("Request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::Backend(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().await.unwrap_or_default()
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| AppError::Backend(format!("Failed to get response text: {e}")))?;

        serde_json::from_str(&text).map_err(|e| {
            tracing::error!(
                error = %e,
                path = path_and_query,
                body_preview = %text.chars().take(500).collect::<String>(),
                "Failed to parse backend response"
            );
            AppError::Backend(format!("Failed to parse response: {e}"))
        })
    }

    /// Get the sample series for the given period.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Backend` if the request fails or returns an error status.
    pub async fn samples(&self, period: Period) -> AppResult<SampleBatch> {
        self.get_json(&format!("/api/data?period={}", period.as_str()))
            .await
    }

    pub async fn forecast(&self) -> AppResult<Forecast> {
        self.get_json("/api/forecast").await
    }

    pub async fn training_days(&self) -> AppResult<TrainingDays> {
        self.get_json("/api/training_days").await
    }

    pub async fn rainfall_24h(&self) -> AppResult<Rainfall24h> {
        self.get_json("/api/rainfall_24h").await
    }

    pub async fn battery(&self) -> AppResult<BatteryReport> {
        self.get_json("/api/battery").await
    }

    pub async fn bar_metrics(&self) -> AppResult<BarMetrics> {
        self.get_json("/api/bar_metrics").await
    }

    pub async fn weather_condition(&self) -> AppResult<ConditionReport> {
        self.get_json("/api/weather_condition").await
    }

    pub async fn qfd_alerts(&self) -> AppResult<AlertFeed> {
        self.get_json("/api/qfd_alerts").await
    }

    pub async fn bom_warnings(&self) -> AppResult<WarningFeed> {
        self.get_json("/api/bom_warnings").await
    }

    pub async fn top_stats(&self) -> AppResult<TopStats> {
        self.get_json("/api/top_stats").await
    }

    pub async fn weather_24h(&self) -> AppResult<Weather24h> {
        self.get_json("/api/weather_24h").await
    }

    pub async fn tides(&self) -> AppResult<TideTable> {
        self.get_json("/api/tides").await
    }

    pub async fn dam_levels(&self) -> AppResult<DamReport> {
        self.get_json("/api/dam-levels").await
    }

    pub async fn weekly_stats_trends(&self) -> AppResult<WeeklyTrends> {
        self.get_json("/api/weekly_stats_trends").await
    }

    /// Legacy per-week endpoints, used as a fallback when the combined
    /// trends endpoint errors.
    pub async fn weekly_stats_current(&self) -> AppResult<WeeklyStats> {
        self.get_json("/api/weekly_stats_current").await
    }

    pub async fn weekly_stats_previous(&self) -> AppResult<WeeklyStats> {
        self.get_json("/api/weekly_stats_previous").await
    }

    pub async fn comfort_levels(&self) -> AppResult<ComfortReport> {
        self.get_json("/api/comfort_levels").await
    }

    pub async fn capital_cities(&self) -> AppResult<CapitalCities> {
        self.get_json("/api/capital_cities").await
    }

    /// Read the `Last-Modified` header of a static asset via a HEAD request.
    ///
    /// Used for the camera snapshot and timelapse "as of" timestamps.
    /// A missing or unparseable header yields `None`, never an error.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Backend` if the request itself fails.
    pub async fn head_last_modified(&self, path: &str) -> AppResult<Option<DateTime<Utc>>> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .http_client
            .head(&url)
            .send()
            .await
            .map_err(|e| AppError::Backend(format!("HEAD request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::Backend(format!(
                "HTTP {} for HEAD {path}",
                response.status()
            )));
        }

        let last_modified = response
            .headers()
            .get(reqwest::header::LAST_MODIFIED)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| DateTime::parse_from_rfc2822(s).ok())
            .map(|t| t.with_timezone(&Utc));

        Ok(last_modified)
    }

    /// Fetch today's sunrise/sunset from the external lookup service.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Backend` if the request fails or returns an error status.
    pub async fn sun_lookup(&self) -> AppResult<SunLookup> {
        let url = format!(
            "{}/json?lat={}&lng={}&date=today&tzid={}",
            self.sun_api_base_url, self.station_latitude, self.station_longitude, self.station_tzid
        );

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Backend(format!("Sun lookup request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(AppError::Backend(format!(
                "Sun lookup HTTP {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::Backend(format!("Failed to parse sun lookup response: {e}")))
    }
}
