//! Modelo de Kendaraan (bicicleta rentable)
//!
//! Mapea exactamente a la tabla kendaraan. El campo stasiun_id es NULL
//! mientras el kendaraan está rentado.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Kendaraan principal - mapea exactamente a la tabla kendaraan
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Kendaraan {
    pub kendaraan_id: Uuid,
    pub merk: String,
    pub tipe: String,
    pub status: String,
    pub stasiun_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Kendaraan con el nombre de su stasiun (para listados con JOIN)
#[derive(Debug, Clone, FromRow)]
pub struct KendaraanWithStasiun {
    pub kendaraan_id: Uuid,
    pub merk: String,
    pub tipe: String,
    pub status: String,
    pub stasiun_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub stasiun_nama: Option<String>,
}

/// Estado de un kendaraan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleStatus {
    Available,
    Rented,
    Maintenance,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "available",
            VehicleStatus::Rented => "rented",
            VehicleStatus::Maintenance => "maintenance",
        }
    }

    /// Parseo case-insensitive: el sistema original persistía sentinelas
    /// con mayúsculas inconsistentes, el enum normaliza a minúsculas.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "available" => Some(VehicleStatus::Available),
            "rented" => Some(VehicleStatus::Rented),
            "maintenance" => Some(VehicleStatus::Maintenance),
            _ => None,
        }
    }
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_case_insensitive() {
        assert_eq!(VehicleStatus::parse("available"), Some(VehicleStatus::Available));
        assert_eq!(VehicleStatus::parse("AVAILABLE"), Some(VehicleStatus::Available));
        assert_eq!(VehicleStatus::parse("Rented"), Some(VehicleStatus::Rented));
        assert_eq!(VehicleStatus::parse("tersedia"), None);
        assert_eq!(VehicleStatus::parse(""), None);
    }

    #[test]
    fn test_status_round_trip() {
        for status in [
            VehicleStatus::Available,
            VehicleStatus::Rented,
            VehicleStatus::Maintenance,
        ] {
            assert_eq!(VehicleStatus::parse(status.as_str()), Some(status));
        }
    }
}
