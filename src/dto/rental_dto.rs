//! DTOs del motor de rentas.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::service::TransaksiLayanan;
use crate::models::transaction::Transaksi;

/// Request para iniciar una renta
#[derive(Debug, Deserialize)]
pub struct RentRequest {
    pub kendaraan_id: Uuid,
    pub stasiun_ambil_id: Uuid,
    pub deposit: Option<Decimal>,
}

/// Request para devolver un kendaraan
#[derive(Debug, Deserialize)]
pub struct ReturnRequest {
    pub transaksi_id: Uuid,
    pub stasiun_kembali_id: Uuid,
}

/// Request para adjuntar un layanan a una renta en curso
#[derive(Debug, Deserialize)]
pub struct AddServiceRequest {
    pub transaksi_id: Uuid,
    pub layanan_id: Uuid,
    /// Override opcional del precio base del catálogo
    pub biaya_aktual: Option<Decimal>,
}

/// Response de una línea de servicio
#[derive(Debug, Serialize)]
pub struct TransaksiLayananResponse {
    pub transaksi_layanan_id: Uuid,
    pub layanan_id: Uuid,
    pub biaya_aktual: Decimal,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl From<TransaksiLayanan> for TransaksiLayananResponse {
    fn from(l: TransaksiLayanan) -> Self {
        Self {
            transaksi_layanan_id: l.transaksi_layanan_id,
            layanan_id: l.layanan_id,
            biaya_aktual: l.biaya_aktual,
            status: l.status,
            created_at: l.created_at,
        }
    }
}

/// Response de transacción con sus líneas de servicio
#[derive(Debug, Serialize)]
pub struct TransaksiResponse {
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
    pub layanan: Vec<TransaksiLayananResponse>,
}

impl TransaksiResponse {
    pub fn from_parts(t: Transaksi, lines: Vec<TransaksiLayanan>) -> Self {
        Self {
            transaksi_id: t.transaksi_id,
            user_nrp: t.user_nrp,
            kendaraan_id: t.kendaraan_id,
            stasiun_ambil_id: t.stasiun_ambil_id,
            stasiun_kembali_id: t.stasiun_kembali_id,
            waktu_mulai: t.waktu_mulai,
            waktu_selesai: t.waktu_selesai,
            waktu_pembayaran: t.waktu_pembayaran,
            status_transaksi: t.status_transaksi,
            payment_gateway_ref: t.payment_gateway_ref,
            total_biaya: t.total_biaya,
            deposit_dipegang: t.deposit_dipegang,
            layanan: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Transaksi> for TransaksiResponse {
    fn from(t: Transaksi) -> Self {
        Self::from_parts(t, Vec::new())
    }
}

/// Filtros de listado de transacciones
#[derive(Debug, Deserialize)]
pub struct TransaksiFilters {
    pub status: Option<String>,
    pub user_nrp: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}
