pub mod cache;
pub mod export;
pub mod health;
pub mod panels;
mod rate_limit;

use axum::{
    Router,
    routing::{get, put},
};
use std::sync::Arc;
use tower_governor::{GovernorLayer, governor::GovernorConfigBuilder};

use rate_limit::FallbackIpKeyExtractor;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    limit::RequestBodyLimitLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::common::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthz,
        panels::list_panels,
        panels::get_panel,
        panels::get_period,
        panels::set_period,
        export::export_csv,
    ),
    components(
        schemas(
            panels::PanelsResponse,
            panels::PeriodResponse,
            panels::SetPeriodRequest,
            crate::render::Panel,
            crate::render::PanelView,
            crate::render::ConditionsView,
            crate::render::ForecastView,
            crate::render::UvView,
            crate::render::AirQualityView,
            crate::render::BarAreaView,
            crate::render::ComfortScaleView,
            crate::render::ComfortLevelsView,
            crate::render::BatteryView,
            crate::render::BatteryCell,
            crate::render::CameraView,
            crate::render::TimelapseView,
            crate::render::AlertsView,
            crate::render::AlertView,
            crate::render::WarningsView,
            crate::render::WarningView,
            crate::render::StatEntry,
            crate::render::TopStatsView,
            crate::render::TidesView,
            crate::render::TideView,
            crate::render::DamsView,
            crate::render::DamView,
            crate::render::WeeklyStatsView,
            crate::render::WeeklyCard,
            crate::render::CitiesView,
            crate::render::CityView,
            crate::render::SunView,
            crate::chart::ChartSpec,
            crate::chart::ChartSeries,
            crate::chart::Tick,
            crate::chart::Theme,
            crate::chart::ThemePalette,
            crate::classify::Scale,
            crate::classify::AlertPalette,
            crate::classify::TrendCue,
            crate::series::Period,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "panels", description = "Rendered dashboard panels"),
        (name = "export", description = "CSV export"),
    ),
    info(
        title = "PWS Dash API",
        description = "Dashboard state service for a personal weather station",
        version = "0.1.0"
    )
)]
struct ApiDoc;

pub fn build_router(state: AppState) -> Router {
    let config = &state.config;

    if config.disable_rate_limiting {
        tracing::warn!("Rate limiting DISABLED");
    } else {
        tracing::info!(
            panels_rate = %format!("{}/s burst {}", config.rate_limit_panels_per_second, config.rate_limit_panels_burst),
            export_rate = %format!("{}/s burst {}", config.rate_limit_export_per_second, config.rate_limit_export_burst),
            export_concurrent = config.export_concurrent_limit,
            "Rate limiting configured"
        );
    }

    // Base routes without rate limiting
    let panel_routes_base = Router::new()
        .route("/panels", get(panels::list_panels))
        .route("/panels/{panel_id}", get(panels::get_panel))
        .route("/period", get(panels::get_period))
        .route("/period", put(panels::set_period));

    let export_routes_base = Router::new().route("/export.csv", get(export::export_csv));

    // Combine API routes, conditionally applying rate limiting
    let api_routes = if config.disable_rate_limiting {
        Router::new()
            .merge(panel_routes_base)
            .merge(export_routes_base)
    } else {
        let panels_limiter = GovernorConfigBuilder::default()
            .key_extractor(FallbackIpKeyExtractor)
            .per_second(config.rate_limit_panels_per_second)
            .burst_size(config.rate_limit_panels_burst)
            .finish()
            .expect("Failed to create panels rate limiter");

        let export_limiter = GovernorConfigBuilder::default()
            .key_extractor(FallbackIpKeyExtractor)
            .per_second(config.rate_limit_export_per_second)
            .burst_size(config.rate_limit_export_burst)
            .finish()
            .expect("Failed to create export rate limiter");

        Router::new()
            .merge(panel_routes_base.layer(GovernorLayer {
                config: Arc::new(panels_limiter),
            }))
            .merge(export_routes_base.layer(GovernorLayer {
                config: Arc::new(export_limiter),
            }))
    }
    .layer(RequestBodyLimitLayer::new(64 * 1024)); // 64KB body limit

    // Health check routes (NO rate limiting)
    let health_routes = Router::new().route("/healthz", get(health::healthz));

    // OpenAPI documentation
    let docs_routes = Router::new().merge(Scalar::with_url("/docs", ApiDoc::openapi()));

    // Combine all routes
    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .merge(docs_routes)
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
