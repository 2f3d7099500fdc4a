//! Modelo de Stasiun (punto de retiro y devolución)

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Stasiun principal - mapea exactamente a la tabla stasiun
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Stasiun {
    pub stasiun_id: Uuid,
    pub nama_stasiun: String,
    pub alamat: Option<String>,
    pub status: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Estado de un stasiun
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StationStatus {
    Active,
    Inactive,
}

impl StationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StationStatus::Active => "active",
            StationStatus::Inactive => "inactive",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "active" => Some(StationStatus::Active),
            "inactive" => Some(StationStatus::Inactive),
            _ => None,
        }
    }
}

impl std::fmt::Display for StationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
