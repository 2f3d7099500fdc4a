//! DTOs de stasiun.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::station::Stasiun;

/// Request para crear un stasiun
#[derive(Debug, Deserialize, Validate)]
pub struct CreateStasiunRequest {
    #[validate(length(min = 1, max = 100))]
    pub nama_stasiun: String,

    #[validate(length(max = 255))]
    pub alamat: Option<String>,

    /// Estado inicial opcional; default 'active'
    pub status: Option<String>,

    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Request para actualizar un stasiun
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateStasiunRequest {
    #[validate(length(min = 1, max = 100))]
    pub nama_stasiun: Option<String>,

    #[validate(length(max = 255))]
    pub alamat: Option<String>,

    pub status: Option<String>,

    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Response de stasiun; available_bikes solo se llena en el detalle
#[derive(Debug, Serialize)]
pub struct StasiunResponse {
    pub stasiun_id: Uuid,
    pub nama_stasiun: String,
    pub alamat: Option<String>,
    pub status: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_bikes: Option<i64>,
}

impl From<Stasiun> for StasiunResponse {
    fn from(s: Stasiun) -> Self {
        Self {
            stasiun_id: s.stasiun_id,
            nama_stasiun: s.nama_stasiun,
            alamat: s.alamat,
            status: s.status,
            latitude: s.latitude,
            longitude: s.longitude,
            available_bikes: None,
        }
    }
}

/// Filtros de listado de stasiun
#[derive(Debug, Deserialize)]
pub struct StasiunFilters {
    pub status: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

/// Entrada del resumen por stasiun (solo admin)
#[derive(Debug, Serialize)]
pub struct StasiunSummaryEntry {
    pub stasiun: StasiunResponse,
    pub available_bikes: i64,
    pub total_bikes: i64,
    pub utilization_rate: f64,
}

/// Conteo de estaciones para las estadísticas globales
#[derive(Debug, Serialize)]
pub struct StationCounts {
    pub total: i64,
    pub active: i64,
    pub inactive: i64,
}

/// Conteo de bicicletas para las estadísticas globales
#[derive(Debug, Serialize)]
pub struct BikeCounts {
    pub total: i64,
    pub available: i64,
    pub in_use: i64,
}

/// Estadísticas globales del sistema (solo admin)
#[derive(Debug, Serialize)]
pub struct SystemStatistics {
    pub stations: StationCounts,
    pub bikes: BikeCounts,
    pub overall_utilization_rate: f64,
}
