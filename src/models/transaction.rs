//! Modelo de Transaksi (ciclo de vida de una renta)
//!
//! Registro financiero: nunca se borra en el flujo normal. El estado
//! solo avanza ongoing -> completed, o ongoing -> cancelled por la vía
//! administrativa.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Transaksi principal - mapea exactamente a la tabla transaksi
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Transaksi {
    pub transaksi_id: Uuid,
    pub user_nrp: String,
    pub kendaraan_id: Uuid,
    pub stasiun_ambil_id: Uuid,
    pub stasiun_kembali_id: Option<Uuid>,
    pub waktu_mulai: DateTime<Utc>,
    pub waktu_selesai: Option<DateTime<Utc>>,
    pub waktu_pembayaran: Option<DateTime<Utc>>,
    pub status_transaksi: String,
    pub payment_gateway_ref: Option<String>,
    pub total_biaya: Decimal,
    pub deposit_dipegang: Decimal,
}

/// Estado de una transacción
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionStatus {
    Ongoing,
    Completed,
    Cancelled,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionStatus::Ongoing => "ongoing",
            TransactionStatus::Completed => "completed",
            TransactionStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "ongoing" => Some(TransactionStatus::Ongoing),
            "completed" => Some(TransactionStatus::Completed),
            "cancelled" => Some(TransactionStatus::Cancelled),
            _ => None,
        }
    }

    /// Estados terminales: no admiten más transiciones
    pub fn is_terminal(&self) -> bool {
        matches!(self, TransactionStatus::Completed | TransactionStatus::Cancelled)
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_states() {
        assert!(!TransactionStatus::Ongoing.is_terminal());
        assert!(TransactionStatus::Completed.is_terminal());
        assert!(TransactionStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_parse_round_trip() {
        for status in [
            TransactionStatus::Ongoing,
            TransactionStatus::Completed,
            TransactionStatus::Cancelled,
        ] {
            assert_eq!(TransactionStatus::parse(status.as_str()), Some(status));
        }
    }
}
