use std::env;

#[derive(Debug, Clone)]
pub enum Deployment {
    Local,
    Dev,
    Stage,
    Prod,
}

impl Deployment {
    #[must_use]
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "dev" | "development" => Self::Dev,
            "stage" | "staging" => Self::Stage,
            "prod" | "production" => Self::Prod,
            _ => Self::Local,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // Weather backend
    pub backend_base_url: String,
    pub backend_timeout_seconds: u64,

    // Station site (drives the sunrise/sunset lookup and local-time math)
    pub station_latitude: f64,
    pub station_longitude: f64,
    pub station_tzid: String,
    pub station_utc_offset_hours: i32,
    pub sun_api_base_url: String,

    // Poll intervals
    pub poll_samples_seconds: u64,
    pub poll_bar_metrics_seconds: u64,
    pub poll_camera_seconds: u64,
    pub poll_comfort_seconds: u64,
    pub poll_alerts_seconds: u64,
    pub poll_warnings_seconds: u64,
    pub poll_hourly_seconds: u64,
    pub poll_battery_seconds: u64,

    // API settings
    pub api_host: String,
    pub api_port: u16,

    // Rate limiting
    pub disable_rate_limiting: bool,
    pub rate_limit_panels_per_second: u64,
    pub rate_limit_panels_burst: u32,
    pub rate_limit_export_per_second: u64,
    pub rate_limit_export_burst: u32,
    pub export_concurrent_limit: usize,

    // Upstream response caching
    pub cache_ttl_seconds: u64,
    pub cache_max_bytes: u64,

    // Application metadata
    pub deployment: Deployment,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if required environment variables are not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            // Weather backend
            backend_base_url: env::var("BACKEND_BASE_URL")
                .map_err(|_| ConfigError::Missing("BACKEND_BASE_URL"))?,
            backend_timeout_seconds: env::var("BACKEND_TIMEOUT_SECONDS")
                .unwrap_or_else(|_| "15".to_string())
                .parse()
                .unwrap_or(15),

            // Station site. Defaults are the reference deployment in
            // south-east Queensland (fixed UTC+10, no DST).
            station_latitude: env::var("STATION_LATITUDE")
                .unwrap_or_else(|_| "-27.4073".to_string())
                .parse()
                .unwrap_or(-27.4073),
            station_longitude: env::var("STATION_LONGITUDE")
                .unwrap_or_else(|_| "152.9199".to_string())
                .parse()
                .unwrap_or(152.9199),
            station_tzid: env::var("STATION_TZID")
                .unwrap_or_else(|_| "Australia/Brisbane".to_string()),
            station_utc_offset_hours: env::var("STATION_UTC_OFFSET_HOURS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
            sun_api_base_url: env::var("SUN_API_BASE_URL")
                .unwrap_or_else(|_| "https://api.sunrise-sunset.org".to_string()),

            // Poll intervals
            poll_samples_seconds: env::var("POLL_SAMPLES_SECONDS")
                .unwrap_or_else(|_| "300".to_string())
                .parse()
                .unwrap_or(300),
            poll_bar_metrics_seconds: env::var("POLL_BAR_METRICS_SECONDS")
                .unwrap_or_else(|_| "300".to_string())
                .parse()
                .unwrap_or(300),
            poll_camera_seconds: env::var("POLL_CAMERA_SECONDS")
                .unwrap_or_else(|_| "300".to_string())
                .parse()
                .unwrap_or(300),
            poll_comfort_seconds: env::var("POLL_COMFORT_SECONDS")
                .unwrap_or_else(|_| "300".to_string())
                .parse()
                .unwrap_or(300),
            poll_alerts_seconds: env::var("POLL_ALERTS_SECONDS")
                .unwrap_or_else(|_| "1800".to_string())
                .parse()
                .unwrap_or(1800),
            poll_warnings_seconds: env::var("POLL_WARNINGS_SECONDS")
                .unwrap_or_else(|_| "21600".to_string())
                .parse()
                .unwrap_or(21_600),
            poll_hourly_seconds: env::var("POLL_HOURLY_SECONDS")
                .unwrap_or_else(|_| "3600".to_string())
                .parse()
                .unwrap_or(3600),
            poll_battery_seconds: env::var("POLL_BATTERY_SECONDS")
                .unwrap_or_else(|_| "43200".to_string())
                .parse()
                .unwrap_or(43_200),

            // API settings
            api_host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            api_port: env::var("API_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),

            // Rate limiting
            disable_rate_limiting: env::var("DISABLE_RATE_LIMITING")
                .unwrap_or_else(|_| "false".to_string())
                .parse()
                .unwrap_or(false),
            rate_limit_panels_per_second: env::var("RATE_LIMIT_PANELS_PER_SECOND")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .unwrap_or(10),
            rate_limit_panels_burst: env::var("RATE_LIMIT_PANELS_BURST")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .unwrap_or(60),
            rate_limit_export_per_second: env::var("RATE_LIMIT_EXPORT_PER_SECOND")
                .unwrap_or_else(|_| "1".to_string())
                .parse()
                .unwrap_or(1),
            rate_limit_export_burst: env::var("RATE_LIMIT_EXPORT_BURST")
                .unwrap_or_else(|_| "5".to_string())
                .parse()
                .unwrap_or(5),
            export_concurrent_limit: env::var("EXPORT_CONCURRENT_LIMIT")
                .unwrap_or_else(|_| "2".to_string())
                .parse()
                .unwrap_or(2),

            // Upstream response caching
            cache_ttl_seconds: env::var("CACHE_TTL_SECONDS")
                .unwrap_or_else(|_| "600".to_string())
                .parse()
                .unwrap_or(600),
            cache_max_bytes: env::var("CACHE_MAX_BYTES")
                .unwrap_or_else(|_| "16777216".to_string())
                .parse()
                .unwrap_or(16_777_216), // 16MB default

            // Application metadata
            deployment: Deployment::from_str(
                &env::var("DEPLOYMENT").unwrap_or_else(|_| "local".to_string()),
            ),
        })
    }

    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
