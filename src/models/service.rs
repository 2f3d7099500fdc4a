//! Modelos de Layanan (catálogo de servicios) y TransaksiLayanan
//! (servicio adjuntado a una transacción).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Layanan principal - mapea exactamente a la tabla layanan
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Layanan {
    pub layanan_id: Uuid,
    pub nama_layanan: String,
    pub deskripsi: Option<String>,
    pub biaya_dasar: Decimal,
    pub aktif: bool,
}

/// TransaksiLayanan - línea de servicio adjuntada a una transacción.
/// El costo cobrado (biaya_aktual) puede diferir del precio base del catálogo.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TransaksiLayanan {
    pub transaksi_layanan_id: Uuid,
    pub transaksi_id: Uuid,
    pub layanan_id: Uuid,
    pub biaya_aktual: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Estado de una línea de servicio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceLineStatus {
    Pending,
    Completed,
    Cancelled,
}

impl ServiceLineStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceLineStatus::Pending => "pending",
            ServiceLineStatus::Completed => "completed",
            ServiceLineStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "pending" => Some(ServiceLineStatus::Pending),
            "completed" => Some(ServiceLineStatus::Completed),
            "cancelled" => Some(ServiceLineStatus::Cancelled),
            _ => None,
        }
    }
}

impl std::fmt::Display for ServiceLineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
