use chrono::FixedOffset;
use moka::future::Cache;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::astro::SunWindow;
use crate::backend::BackendClient;
use crate::backend::models::{Forecast, SampleBatch};
use crate::config::Config;
use crate::render::PanelStore;
use crate::series::Period;

/// Cache for generated export responses. Key is the request params, value is
/// the serialized body. Weighted by byte size to enforce a memory limit.
pub type ResponseCache = Cache<String, Arc<Vec<u8>>>;

/// Cross-task dashboard state.
///
/// `latest_samples` and `latest_forecast` are deliberate last-write-wins
/// snapshots: the samples poller writes them, the conditions updater reads
/// them, and a reader may observe a value from an older or newer tick than
/// its own. Do not add versioning here without also revisiting the refresh
/// contract in DESIGN.md.
#[derive(Debug, Default)]
pub struct DashboardState {
    latest_samples: RwLock<Option<Arc<SampleBatch>>>,
    latest_forecast: RwLock<Option<Arc<Forecast>>>,
    current_period: RwLock<Period>,
    sun_window: RwLock<Option<SunWindow>>,
    /// Bumped on every period switch; in-flight sample fetches from a
    /// superseded selection are discarded on arrival.
    period_generation: AtomicU64,
}

impl DashboardState {
    pub fn set_latest_samples(&self, batch: Arc<SampleBatch>) {
        *self.latest_samples.write().expect("state lock poisoned") = Some(batch);
    }

    #[must_use]
    pub fn latest_samples(&self) -> Option<Arc<SampleBatch>> {
        self.latest_samples
            .read()
            .expect("state lock poisoned")
            .clone()
    }

    pub fn set_latest_forecast(&self, forecast: Arc<Forecast>) {
        *self.latest_forecast.write().expect("state lock poisoned") = Some(forecast);
    }

    #[must_use]
    pub fn latest_forecast(&self) -> Option<Arc<Forecast>> {
        self.latest_forecast
            .read()
            .expect("state lock poisoned")
            .clone()
    }

    #[must_use]
    pub fn current_period(&self) -> Period {
        *self.current_period.read().expect("state lock poisoned")
    }

    /// Switch the period selection. Returns the new generation stamp.
    pub fn set_period(&self, period: Period) -> u64 {
        *self.current_period.write().expect("state lock poisoned") = period;
        self.period_generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    #[must_use]
    pub fn period_generation(&self) -> u64 {
        self.period_generation.load(Ordering::SeqCst)
    }

    pub fn set_sun_window(&self, window: Option<SunWindow>) {
        *self.sun_window.write().expect("state lock poisoned") = window;
    }

    #[must_use]
    pub fn sun_window(&self) -> Option<SunWindow> {
        *self.sun_window.read().expect("state lock poisoned")
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub backend: Arc<BackendClient>,
    pub panels: Arc<PanelStore>,
    pub dashboard: Arc<DashboardState>,
    pub response_cache: ResponseCache,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config, backend: BackendClient) -> Self {
        // Cache weighted by byte size, not entry count
        let cache: ResponseCache = Cache::builder()
            .weigher(|_key: &String, value: &Arc<Vec<u8>>| -> u32 {
                value.len().try_into().unwrap_or(u32::MAX)
            })
            .max_capacity(config.cache_max_bytes)
            .time_to_live(Duration::from_secs(config.cache_ttl_seconds))
            .build();

        Self {
            config: Arc::new(config),
            backend: Arc::new(backend),
            panels: Arc::new(PanelStore::new()),
            dashboard: Arc::new(DashboardState::default()),
            response_cache: cache,
        }
    }

    /// The station's fixed UTC offset as a chrono offset.
    #[must_use]
    pub fn local_offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.config.station_utc_offset_hours * 3600)
            .unwrap_or_else(|| FixedOffset::east_opt(0).expect("zero offset is valid"))
    }
}
