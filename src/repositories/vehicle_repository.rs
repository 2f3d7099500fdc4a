use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::common::PageParams;
use crate::models::vehicle::{Kendaraan, KendaraanWithStasiun, VehicleStatus};
use crate::utils::errors::{not_found_error, AppError};

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        merk: String,
        tipe: String,
        status: VehicleStatus,
        stasiun_id: Option<Uuid>,
    ) -> Result<Kendaraan, AppError> {
        let kendaraan = sqlx::query_as::<_, Kendaraan>(
            r#"
            INSERT INTO kendaraan (kendaraan_id, merk, tipe, status, stasiun_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(merk)
        .bind(tipe)
        .bind(status.as_str())
        .bind(stasiun_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(kendaraan)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Kendaraan>, AppError> {
        let kendaraan =
            sqlx::query_as::<_, Kendaraan>("SELECT * FROM kendaraan WHERE kendaraan_id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(kendaraan)
    }

    /// Listado paginado con el nombre del stasiun (LEFT JOIN, como el
    /// listado original)
    pub async fn list(
        &self,
        status: Option<&str>,
        stasiun_id: Option<Uuid>,
        page: &PageParams,
    ) -> Result<(Vec<KendaraanWithStasiun>, i64), AppError> {
        let items = sqlx::query_as::<_, KendaraanWithStasiun>(
            r#"
            SELECT k.kendaraan_id, k.merk, k.tipe, k.status, k.stasiun_id, k.created_at,
                   s.nama_stasiun AS stasiun_nama
            FROM kendaraan k
            LEFT JOIN stasiun s ON k.stasiun_id = s.stasiun_id
            WHERE ($1::text IS NULL OR k.status = $1)
              AND ($2::uuid IS NULL OR k.stasiun_id = $2)
            ORDER BY k.created_at DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(status)
        .bind(stasiun_id)
        .bind(page.per_page())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM kendaraan k
            WHERE ($1::text IS NULL OR k.status = $1)
              AND ($2::uuid IS NULL OR k.stasiun_id = $2)
            "#,
        )
        .bind(status)
        .bind(stasiun_id)
        .fetch_one(&self.pool)
        .await?;

        Ok((items, total))
    }

    pub async fn update(
        &self,
        id: Uuid,
        merk: Option<String>,
        tipe: Option<String>,
        status: Option<VehicleStatus>,
        stasiun_id: Option<Uuid>,
    ) -> Result<Kendaraan, AppError> {
        // Obtener kendaraan actual para mergear campos opcionales
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Kendaraan", &id.to_string()))?;

        let kendaraan = sqlx::query_as::<_, Kendaraan>(
            r#"
            UPDATE kendaraan
            SET merk = $2, tipe = $3, status = $4, stasiun_id = $5
            WHERE kendaraan_id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(merk.unwrap_or(current.merk))
        .bind(tipe.unwrap_or(current.tipe))
        .bind(status.map(|s| s.as_str().to_string()).unwrap_or(current.status))
        .bind(stasiun_id.or(current.stasiun_id))
        .fetch_one(&self.pool)
        .await?;

        Ok(kendaraan)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let kendaraan = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Kendaraan", &id.to_string()))?;

        // Un kendaraan rentado tiene una transacción ongoing que lo referencia
        if VehicleStatus::parse(&kendaraan.status) == Some(VehicleStatus::Rented) {
            return Err(AppError::Conflict(
                "Cannot delete a rented kendaraan".to_string(),
            ));
        }

        sqlx::query("DELETE FROM kendaraan WHERE kendaraan_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn count_by_station(&self, stasiun_id: Uuid) -> Result<i64, AppError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM kendaraan WHERE stasiun_id = $1")
                .bind(stasiun_id)
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }

    pub async fn count_available_by_station(&self, stasiun_id: Uuid) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM kendaraan WHERE stasiun_id = $1 AND status = $2",
        )
        .bind(stasiun_id)
        .bind(VehicleStatus::Available.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    pub async fn count_total(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM kendaraan")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn count_by_status(&self, status: VehicleStatus) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM kendaraan WHERE status = $1")
            .bind(status.as_str())
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
