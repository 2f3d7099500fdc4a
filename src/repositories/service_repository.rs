use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::service::{Layanan, ServiceLineStatus};
use crate::utils::errors::{not_found_error, AppError};

pub struct ServiceRepository {
    pool: PgPool,
}

impl ServiceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        nama_layanan: String,
        deskripsi: Option<String>,
        biaya_dasar: Decimal,
        aktif: bool,
    ) -> Result<Layanan, AppError> {
        let layanan = sqlx::query_as::<_, Layanan>(
            r#"
            INSERT INTO layanan (layanan_id, nama_layanan, deskripsi, biaya_dasar, aktif)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(nama_layanan)
        .bind(deskripsi)
        .bind(biaya_dasar)
        .bind(aktif)
        .fetch_one(&self.pool)
        .await?;

        Ok(layanan)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Layanan>, AppError> {
        let layanan = sqlx::query_as::<_, Layanan>("SELECT * FROM layanan WHERE layanan_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(layanan)
    }

    /// El catálogo público solo muestra entradas activas, como el original
    pub async fn list_active(&self) -> Result<Vec<Layanan>, AppError> {
        let items = sqlx::query_as::<_, Layanan>(
            "SELECT * FROM layanan WHERE aktif = TRUE ORDER BY nama_layanan",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    pub async fn update(
        &self,
        id: Uuid,
        nama_layanan: Option<String>,
        deskripsi: Option<String>,
        biaya_dasar: Option<Decimal>,
        aktif: Option<bool>,
    ) -> Result<Layanan, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Layanan", &id.to_string()))?;

        let layanan = sqlx::query_as::<_, Layanan>(
            r#"
            UPDATE layanan
            SET nama_layanan = $2, deskripsi = $3, biaya_dasar = $4, aktif = $5
            WHERE layanan_id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nama_layanan.unwrap_or(current.nama_layanan))
        .bind(deskripsi.or(current.deskripsi))
        .bind(biaya_dasar.unwrap_or(current.biaya_dasar))
        .bind(aktif.unwrap_or(current.aktif))
        .fetch_one(&self.pool)
        .await?;

        Ok(layanan)
    }

    /// Borrado con guarda referencial: un layanan con líneas pending no se borra
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Layanan", &id.to_string()))?;

        let pending: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM transaksi_layanan WHERE layanan_id = $1 AND status = $2)",
        )
        .bind(id)
        .bind(ServiceLineStatus::Pending.as_str())
        .fetch_one(&self.pool)
        .await?;

        if pending {
            return Err(AppError::Conflict(
                "Cannot delete layanan with pending transaction services".to_string(),
            ));
        }

        sqlx::query("DELETE FROM layanan WHERE layanan_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
