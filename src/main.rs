//! Marthinus Rentals backend
//!
//! Serves the vacation-rental site pages and the JSON API behind them.
//! Catalog and bookings live in memory and reset on restart.

mod api;
mod auth;
mod calendar;
mod config;
mod data;
mod errors;
mod models;
mod pricing;
mod search;
mod views;

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::{Config, LogFormat};
use data::{BookingStore, Catalog};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub bookings: Arc<BookingStore>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    match config.log_format {
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
    }

    tracing::info!("Starting Marthinus Rentals backend");
    tracing::info!("Bind address: {}", config.bind_addr);

    if config.admin_psk.is_none() {
        tracing::warn!("No admin PSK configured (RENTALS_ADMIN_PSK). Admin dashboard is open!");
    }
    if config.simulated_latency_ms > 0 {
        tracing::info!("Simulating {}ms latency on API calls", config.simulated_latency_ms);
    }

    // Seed catalog and bookings
    let catalog = Arc::new(data::init_catalog(&config));
    let bookings = Arc::new(BookingStore::new(data::mock_bookings()));

    let state = AppState {
        catalog,
        bookings,
        config: Arc::new(config.clone()),
    };

    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_psk = state.config.admin_psk.clone();
    let page_psk = state.config.admin_psk.clone();
    let latency = Duration::from_millis(state.config.simulated_latency_ms);

    // Admin API (PSK guarded)
    let admin_routes = Router::new()
        .route("/dashboard", get(api::get_dashboard))
        .route("/bookings", get(api::list_bookings))
        .route("/bookings/{id}", get(api::get_booking))
        .route("/bookings/{id}/confirm", post(api::confirm_booking))
        .route("/bookings/{id}/cancel", post(api::cancel_booking))
        .layer(middleware::from_fn(move |req, next| {
            auth::admin_auth_layer(api_psk.clone(), req, next)
        }));

    let api_routes = Router::new()
        // Catalog
        .route("/properties", get(api::list_properties))
        .route("/properties/featured", get(api::featured_properties))
        .route("/properties/{id}", get(api::get_property))
        .route("/properties/{id}/availability", get(api::get_availability))
        .route("/properties/{id}/quote", get(api::get_quote))
        .route("/amenities", get(api::list_amenities))
        // Forms
        .route("/booking", post(api::create_booking))
        .route("/contact", post(api::submit_contact))
        // Date picker
        .route("/calendar", get(api::get_calendar))
        .nest("/admin", admin_routes)
        .layer(middleware::from_fn(move |req, next| {
            simulate_latency(latency, req, next)
        }));

    // Pages
    let admin_page = Router::new()
        .route("/admin", get(views::admin_page))
        .layer(middleware::from_fn(move |req, next| {
            auth::admin_auth_layer(page_psk.clone(), req, next)
        }));

    let page_routes = Router::new()
        .route("/", get(views::home_page))
        .route("/properties", get(views::properties_page))
        .route("/properties/{id}", get(views::property_page))
        .route("/contact", get(views::contact_page))
        .merge(admin_page);

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(page_routes)
        .merge(health_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Delay API responses to mimic a remote backend.
async fn simulate_latency(delay: Duration, request: Request, next: Next) -> Response {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }
    next.run(request).await
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
