//! DTOs de kendaraan.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle::{Kendaraan, KendaraanWithStasiun};

/// Request para crear un kendaraan
#[derive(Debug, Deserialize, Validate)]
pub struct CreateKendaraanRequest {
    #[validate(length(min = 1, max = 50))]
    pub merk: String,

    #[validate(length(min = 1, max = 50))]
    pub tipe: String,

    /// Estado inicial opcional; default 'available'
    pub status: Option<String>,

    pub stasiun_id: Option<Uuid>,
}

/// Request para actualizar un kendaraan
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateKendaraanRequest {
    #[validate(length(min = 1, max = 50))]
    pub merk: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub tipe: Option<String>,

    pub status: Option<String>,

    pub stasiun_id: Option<Uuid>,
}

/// Response de kendaraan
#[derive(Debug, Serialize)]
pub struct KendaraanResponse {
    pub kendaraan_id: Uuid,
    pub merk: String,
    pub tipe: String,
    pub status: String,
    pub stasiun_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stasiun_nama: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Kendaraan> for KendaraanResponse {
    fn from(k: Kendaraan) -> Self {
        Self {
            kendaraan_id: k.kendaraan_id,
            merk: k.merk,
            tipe: k.tipe,
            status: k.status,
            stasiun_id: k.stasiun_id,
            stasiun_nama: None,
            created_at: k.created_at,
        }
    }
}

impl From<KendaraanWithStasiun> for KendaraanResponse {
    fn from(k: KendaraanWithStasiun) -> Self {
        Self {
            kendaraan_id: k.kendaraan_id,
            merk: k.merk,
            tipe: k.tipe,
            status: k.status,
            stasiun_id: k.stasiun_id,
            stasiun_nama: k.stasiun_nama,
            created_at: k.created_at,
        }
    }
}

/// Filtros de listado de kendaraan
#[derive(Debug, Deserialize)]
pub struct KendaraanFilters {
    pub status: Option<String>,
    pub stasiun_id: Option<Uuid>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}
