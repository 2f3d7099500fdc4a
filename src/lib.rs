//! Back-office de bike sharing
//!
//! API REST sobre PostgreSQL: registro/login de usuarios, inventario de
//! kendaraan y stasiun, catálogo de layanan, reportes de incidentes y el
//! ciclo de vida de rentas (el motor en services::rental_service).

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{routing::get, Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use middleware::cors::cors_middleware;
use state::AppState;

/// Armar el router completo de la aplicación
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/auth", routes::auth_routes::create_auth_router(state.clone()))
        .nest(
            "/kendaraan",
            routes::vehicle_routes::create_kendaraan_router(state.clone()),
        )
        .nest(
            "/stasiun",
            routes::station_routes::create_stasiun_router(state.clone()),
        )
        .nest(
            "/layanan",
            routes::service_routes::create_layanan_router(state.clone()),
        )
        .nest(
            "/transaksi",
            routes::rental_routes::create_transaksi_router(state.clone()),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors_middleware())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "service": "sepeda-backoffice",
        "status": "healthy"
    }))
}
