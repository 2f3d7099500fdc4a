//! DTOs del catálogo de layanan.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::service::Layanan;

/// Request para crear un layanan
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLayananRequest {
    #[validate(length(min = 1, max = 100))]
    pub nama_layanan: String,

    #[validate(length(max = 2000))]
    pub deskripsi: Option<String>,

    pub biaya_dasar: Decimal,

    /// Default true
    pub aktif: Option<bool>,
}

/// Request para actualizar un layanan
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLayananRequest {
    #[validate(length(min = 1, max = 100))]
    pub nama_layanan: Option<String>,

    #[validate(length(max = 2000))]
    pub deskripsi: Option<String>,

    pub biaya_dasar: Option<Decimal>,

    pub aktif: Option<bool>,
}

/// Response de layanan
#[derive(Debug, Serialize)]
pub struct LayananResponse {
    pub layanan_id: Uuid,
    pub nama_layanan: String,
    pub deskripsi: Option<String>,
    pub biaya_dasar: Decimal,
    pub aktif: bool,
}

impl From<Layanan> for LayananResponse {
    fn from(l: Layanan) -> Self {
        Self {
            layanan_id: l.layanan_id,
            nama_layanan: l.nama_layanan,
            deskripsi: l.deskripsi,
            biaya_dasar: l.biaya_dasar,
            aktif: l.aktif,
        }
    }
}
