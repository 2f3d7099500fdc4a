//! DTOs de laporan (reportes de incidentes).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::report::LogLaporan;

/// Request para crear un laporan sobre un kendaraan
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLaporanRequest {
    #[validate(length(min = 1, max = 2000))]
    pub laporan: String,
}

/// Request para actualizar un laporan
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLaporanRequest {
    #[validate(length(min = 1, max = 2000))]
    pub laporan: Option<String>,

    pub status: Option<String>,

    pub tanggal_pemeliharaan: Option<DateTime<Utc>>,
}

/// Response de laporan
#[derive(Debug, Serialize)]
pub struct LaporanResponse {
    pub log_laporan_id: Uuid,
    pub kendaraan_id: Uuid,
    pub nrp: String,
    pub tanggal_laporan: DateTime<Utc>,
    pub laporan: String,
    pub tanggal_pemeliharaan: Option<DateTime<Utc>>,
    pub status: String,
}

impl From<LogLaporan> for LaporanResponse {
    fn from(l: LogLaporan) -> Self {
        Self {
            log_laporan_id: l.log_laporan_id,
            kendaraan_id: l.kendaraan_id,
            nrp: l.nrp,
            tanggal_laporan: l.tanggal_laporan,
            laporan: l.laporan,
            tanggal_pemeliharaan: l.tanggal_pemeliharaan,
            status: l.status,
        }
    }
}

/// Filtros de listado de laporan
#[derive(Debug, Deserialize)]
pub struct LaporanFilters {
    pub status: Option<String>,
    pub kendaraan_id: Option<Uuid>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}
