use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::common::PageParams;
use crate::models::station::{StationStatus, Stasiun};
use crate::utils::errors::{not_found_error, AppError};

pub struct StationRepository {
    pool: PgPool,
}

impl StationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        nama_stasiun: String,
        alamat: Option<String>,
        status: StationStatus,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<Stasiun, AppError> {
        let stasiun = sqlx::query_as::<_, Stasiun>(
            r#"
            INSERT INTO stasiun (stasiun_id, nama_stasiun, alamat, status, latitude, longitude)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(nama_stasiun)
        .bind(alamat)
        .bind(status.as_str())
        .bind(latitude)
        .bind(longitude)
        .fetch_one(&self.pool)
        .await?;

        Ok(stasiun)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Stasiun>, AppError> {
        let stasiun = sqlx::query_as::<_, Stasiun>("SELECT * FROM stasiun WHERE stasiun_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(stasiun)
    }

    pub async fn list(
        &self,
        status: Option<&str>,
        page: &PageParams,
    ) -> Result<(Vec<Stasiun>, i64), AppError> {
        let items = sqlx::query_as::<_, Stasiun>(
            r#"
            SELECT * FROM stasiun
            WHERE ($1::text IS NULL OR status = $1)
            ORDER BY nama_stasiun
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(status)
        .bind(page.per_page())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM stasiun WHERE ($1::text IS NULL OR status = $1)",
        )
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok((items, total))
    }

    pub async fn list_active(&self) -> Result<Vec<Stasiun>, AppError> {
        let items = sqlx::query_as::<_, Stasiun>(
            "SELECT * FROM stasiun WHERE status = $1 ORDER BY nama_stasiun",
        )
        .bind(StationStatus::Active.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    pub async fn update(
        &self,
        id: Uuid,
        nama_stasiun: Option<String>,
        alamat: Option<String>,
        status: Option<StationStatus>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<Stasiun, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Stasiun", &id.to_string()))?;

        let stasiun = sqlx::query_as::<_, Stasiun>(
            r#"
            UPDATE stasiun
            SET nama_stasiun = $2, alamat = $3, status = $4, latitude = $5, longitude = $6
            WHERE stasiun_id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nama_stasiun.unwrap_or(current.nama_stasiun))
        .bind(alamat.or(current.alamat))
        .bind(status.map(|s| s.as_str().to_string()).unwrap_or(current.status))
        .bind(latitude.or(current.latitude))
        .bind(longitude.or(current.longitude))
        .fetch_one(&self.pool)
        .await?;

        Ok(stasiun)
    }

    /// Borrado con guarda referencial: un stasiun con kendaraan no se borra
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Stasiun", &id.to_string()))?;

        let bikes_count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM kendaraan WHERE stasiun_id = $1")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        if bikes_count > 0 {
            return Err(AppError::Conflict(
                "Cannot delete station with bikes. Please relocate bikes first.".to_string(),
            ));
        }

        sqlx::query("DELETE FROM stasiun WHERE stasiun_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn count_total(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM stasiun")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    pub async fn count_by_status(&self, status: StationStatus) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM stasiun WHERE status = $1")
            .bind(status.as_str())
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
