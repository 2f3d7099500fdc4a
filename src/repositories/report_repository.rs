use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::common::PageParams;
use crate::models::report::{LogLaporan, ReportStatus};
use crate::utils::errors::{not_found_error, AppError};

pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        kendaraan_id: Uuid,
        nrp: &str,
        laporan: String,
    ) -> Result<LogLaporan, AppError> {
        let log = sqlx::query_as::<_, LogLaporan>(
            r#"
            INSERT INTO log_laporan (log_laporan_id, kendaraan_id, nrp, laporan, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(kendaraan_id)
        .bind(nrp)
        .bind(laporan)
        .bind(ReportStatus::Reported.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(log)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<LogLaporan>, AppError> {
        let log =
            sqlx::query_as::<_, LogLaporan>("SELECT * FROM log_laporan WHERE log_laporan_id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(log)
    }

    pub async fn list(
        &self,
        kendaraan_id: Option<Uuid>,
        status: Option<&str>,
        page: &PageParams,
    ) -> Result<(Vec<LogLaporan>, i64), AppError> {
        let items = sqlx::query_as::<_, LogLaporan>(
            r#"
            SELECT * FROM log_laporan
            WHERE ($1::uuid IS NULL OR kendaraan_id = $1)
              AND ($2::text IS NULL OR status = $2)
            ORDER BY tanggal_laporan DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(kendaraan_id)
        .bind(status)
        .bind(page.per_page())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM log_laporan
            WHERE ($1::uuid IS NULL OR kendaraan_id = $1)
              AND ($2::text IS NULL OR status = $2)
            "#,
        )
        .bind(kendaraan_id)
        .bind(status)
        .fetch_one(&self.pool)
        .await?;

        Ok((items, total))
    }

    pub async fn update(
        &self,
        id: Uuid,
        laporan: Option<String>,
        status: Option<ReportStatus>,
        tanggal_pemeliharaan: Option<chrono::DateTime<chrono::Utc>>,
    ) -> Result<LogLaporan, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Laporan", &id.to_string()))?;

        let log = sqlx::query_as::<_, LogLaporan>(
            r#"
            UPDATE log_laporan
            SET laporan = $2, status = $3, tanggal_pemeliharaan = $4
            WHERE log_laporan_id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(laporan.unwrap_or(current.laporan))
        .bind(status.map(|s| s.as_str().to_string()).unwrap_or(current.status))
        .bind(tanggal_pemeliharaan.or(current.tanggal_pemeliharaan))
        .fetch_one(&self.pool)
        .await?;

        Ok(log)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Laporan", &id.to_string()))?;

        sqlx::query("DELETE FROM log_laporan WHERE log_laporan_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
