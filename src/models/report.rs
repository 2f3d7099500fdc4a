//! Modelo de LogLaporan (reporte de incidente sobre un kendaraan)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// LogLaporan principal - mapea exactamente a la tabla log_laporan
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LogLaporan {
    pub log_laporan_id: Uuid,
    pub kendaraan_id: Uuid,
    pub nrp: String,
    pub tanggal_laporan: DateTime<Utc>,
    pub laporan: String,
    pub tanggal_pemeliharaan: Option<DateTime<Utc>>,
    pub status: String,
}

/// Estado de un reporte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportStatus {
    Reported,
    InMaintenance,
    Resolved,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Reported => "reported",
            ReportStatus::InMaintenance => "in_maintenance",
            ReportStatus::Resolved => "resolved",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "reported" => Some(ReportStatus::Reported),
            "in_maintenance" => Some(ReportStatus::InMaintenance),
            "resolved" => Some(ReportStatus::Resolved),
            _ => None,
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
