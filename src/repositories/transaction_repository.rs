use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::common::PageParams;
use crate::models::service::TransaksiLayanan;
use crate::models::transaction::{TransactionStatus, Transaksi};
use crate::utils::errors::AppError;

/// Lecturas sobre el libro de rentas. Las mutaciones del ciclo de vida
/// viven en el RentalService, dentro de su límite transaccional.
pub struct TransactionRepository {
    pool: PgPool,
}

impl TransactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Transaksi>, AppError> {
        let transaksi =
            sqlx::query_as::<_, Transaksi>("SELECT * FROM transaksi WHERE transaksi_id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(transaksi)
    }

    pub async fn service_lines(&self, transaksi_id: Uuid) -> Result<Vec<TransaksiLayanan>, AppError> {
        let lines = sqlx::query_as::<_, TransaksiLayanan>(
            "SELECT * FROM transaksi_layanan WHERE transaksi_id = $1 ORDER BY created_at",
        )
        .bind(transaksi_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(lines)
    }

    pub async fn active_for_user(&self, nrp: &str) -> Result<Option<Transaksi>, AppError> {
        let transaksi = sqlx::query_as::<_, Transaksi>(
            "SELECT * FROM transaksi WHERE user_nrp = $1 AND status_transaksi = $2",
        )
        .bind(nrp)
        .bind(TransactionStatus::Ongoing.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(transaksi)
    }

    pub async fn history_for_user(&self, nrp: &str) -> Result<Vec<Transaksi>, AppError> {
        let items = sqlx::query_as::<_, Transaksi>(
            "SELECT * FROM transaksi WHERE user_nrp = $1 ORDER BY waktu_mulai DESC",
        )
        .bind(nrp)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    pub async fn list(
        &self,
        status: Option<&str>,
        user_nrp: Option<&str>,
        page: &PageParams,
    ) -> Result<(Vec<Transaksi>, i64), AppError> {
        let items = sqlx::query_as::<_, Transaksi>(
            r#"
            SELECT * FROM transaksi
            WHERE ($1::text IS NULL OR status_transaksi = $1)
              AND ($2::text IS NULL OR user_nrp = $2)
            ORDER BY waktu_mulai DESC
            LIMIT $3 OFFSET $4
            "#,
        )
        .bind(status)
        .bind(user_nrp)
        .bind(page.per_page())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM transaksi
            WHERE ($1::text IS NULL OR status_transaksi = $1)
              AND ($2::text IS NULL OR user_nrp = $2)
            "#,
        )
        .bind(status)
        .bind(user_nrp)
        .fetch_one(&self.pool)
        .await?;

        Ok((items, total))
    }
}
