//! Motor de rentas
//!
//! Máquina de estados del ciclo de vida de una transacción:
//!
//! ```text
//! [none] --start_rental--> ongoing --end_rental--> completed
//! ongoing --attach_service--> ongoing
//! ongoing --cancel (admin)--> cancelled
//! ```
//!
//! Cada operación mutante corre dentro de una transacción SQL con updates
//! condicionados al estado previo esperado (concurrencia optimista): dos
//! start_rental simultáneos sobre el mismo kendaraan no pueden tener éxito
//! ambos, y un fallo en cualquier paso revierte todos los anteriores.

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::dto::rental_dto::{AddServiceRequest, RentRequest, ReturnRequest, TransaksiResponse};
use crate::models::service::{Layanan, ServiceLineStatus, TransaksiLayanan};
use crate::models::station::Stasiun;
use crate::models::transaction::{TransactionStatus, Transaksi};
use crate::models::vehicle::{Kendaraan, VehicleStatus};
use crate::services::pricing::Tariff;
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub struct RentalService {
    pool: PgPool,
    tariff: Tariff,
}

impl RentalService {
    pub fn new(pool: PgPool, tariff: Tariff) -> Self {
        Self { pool, tariff }
    }

    /// Iniciar una renta: crea la transacción ongoing y marca el kendaraan
    /// como rentado, todo o nada.
    pub async fn start_rental(&self, nrp: &str, request: &RentRequest) -> AppResult<TransaksiResponse> {
        let deposit = request.deposit.unwrap_or(Decimal::ZERO);
        if deposit < Decimal::ZERO {
            return Err(AppError::BadRequest("deposit cannot be negative".to_string()));
        }

        let mut tx = self.pool.begin().await?;

        // Política: a lo sumo una renta activa por usuario
        let has_active: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM transaksi WHERE user_nrp = $1 AND status_transaksi = $2)",
        )
        .bind(nrp)
        .bind(TransactionStatus::Ongoing.as_str())
        .fetch_one(&mut *tx)
        .await?;

        if has_active {
            return Err(AppError::Conflict(
                "You already have an active rental".to_string(),
            ));
        }

        let kendaraan =
            sqlx::query_as::<_, Kendaraan>("SELECT * FROM kendaraan WHERE kendaraan_id = $1")
                .bind(request.kendaraan_id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| not_found_error("Kendaraan", &request.kendaraan_id.to_string()))?;

        if VehicleStatus::parse(&kendaraan.status) != Some(VehicleStatus::Available) {
            return Err(AppError::Conflict(format!(
                "Kendaraan is not available (status: {})",
                kendaraan.status
            )));
        }

        sqlx::query_as::<_, Stasiun>("SELECT * FROM stasiun WHERE stasiun_id = $1")
            .bind(request.stasiun_ambil_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| not_found_error("Stasiun", &request.stasiun_ambil_id.to_string()))?;

        if kendaraan.stasiun_id != Some(request.stasiun_ambil_id) {
            return Err(AppError::Conflict(
                "Kendaraan is not at the specified station".to_string(),
            ));
        }

        // Update condicionado al estado previo: si otra renta ganó la
        // carrera, rows_affected es 0 y abortamos sin tocar nada.
        let claimed = sqlx::query(
            "UPDATE kendaraan SET status = $1, stasiun_id = NULL WHERE kendaraan_id = $2 AND status = $3",
        )
        .bind(VehicleStatus::Rented.as_str())
        .bind(kendaraan.kendaraan_id)
        .bind(VehicleStatus::Available.as_str())
        .execute(&mut *tx)
        .await?;

        if claimed.rows_affected() == 0 {
            return Err(AppError::Conflict(
                "Kendaraan is no longer available".to_string(),
            ));
        }

        let reference = Uuid::new_v4().simple().to_string()[..8].to_uppercase();

        let transaksi = sqlx::query_as::<_, Transaksi>(
            r#"
            INSERT INTO transaksi
                (transaksi_id, user_nrp, kendaraan_id, stasiun_ambil_id,
                 status_transaksi, payment_gateway_ref, total_biaya, deposit_dipegang)
            VALUES ($1, $2, $3, $4, $5, $6, 0, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(nrp)
        .bind(kendaraan.kendaraan_id)
        .bind(request.stasiun_ambil_id)
        .bind(TransactionStatus::Ongoing.as_str())
        .bind(&reference)
        .bind(deposit)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        info!(
            "Renta iniciada: transaksi {} kendaraan {} por {}",
            transaksi.transaksi_id, transaksi.kendaraan_id, nrp
        );

        Ok(TransaksiResponse::from_parts(transaksi, Vec::new()))
    }

    /// Adjuntar un layanan a una renta en curso: crea la línea pending y
    /// acumula su costo en el total, de forma segura ante adjuntos
    /// concurrentes sobre la misma transacción.
    pub async fn attach_service(
        &self,
        nrp: &str,
        is_admin: bool,
        request: &AddServiceRequest,
    ) -> AppResult<TransaksiResponse> {
        if let Some(cost) = request.biaya_aktual {
            if cost < Decimal::ZERO {
                return Err(AppError::BadRequest(
                    "biaya_aktual cannot be negative".to_string(),
                ));
            }
        }

        let mut tx = self.pool.begin().await?;

        let transaksi = self
            .fetch_owned_ongoing(&mut tx, request.transaksi_id, nrp, is_admin)
            .await?;

        let layanan = sqlx::query_as::<_, Layanan>("SELECT * FROM layanan WHERE layanan_id = $1")
            .bind(request.layanan_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| not_found_error("Layanan", &request.layanan_id.to_string()))?;

        if !layanan.aktif {
            return Err(AppError::Conflict("Layanan is not active".to_string()));
        }

        let cost = request.biaya_aktual.unwrap_or(layanan.biaya_dasar);

        sqlx::query(
            r#"
            INSERT INTO transaksi_layanan
                (transaksi_layanan_id, transaksi_id, layanan_id, biaya_aktual, status)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(transaksi.transaksi_id)
        .bind(layanan.layanan_id)
        .bind(cost)
        .bind(ServiceLineStatus::Pending.as_str())
        .execute(&mut *tx)
        .await?;

        // Read-modify-write en el servidor, condicionado a que la renta
        // siga ongoing (una devolución concurrente aborta el adjunto).
        let updated = sqlx::query_as::<_, Transaksi>(
            r#"
            UPDATE transaksi SET total_biaya = total_biaya + $1
            WHERE transaksi_id = $2 AND status_transaksi = $3
            RETURNING *
            "#,
        )
        .bind(cost)
        .bind(transaksi.transaksi_id)
        .bind(TransactionStatus::Ongoing.as_str())
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::Conflict("Transaksi is no longer ongoing".to_string()))?;

        let lines = self.fetch_lines(&mut tx, updated.transaksi_id).await?;

        tx.commit().await?;

        info!(
            "Layanan {} adjuntado a transaksi {} (costo {})",
            layanan.layanan_id, updated.transaksi_id, cost
        );

        Ok(TransaksiResponse::from_parts(updated, lines))
    }

    /// Devolver el kendaraan: calcula el costo final, cierra la
    /// transacción y restaura el kendaraan en el stasiun de devolución.
    pub async fn end_rental(
        &self,
        nrp: &str,
        is_admin: bool,
        request: &ReturnRequest,
    ) -> AppResult<TransaksiResponse> {
        let mut tx = self.pool.begin().await?;

        let transaksi = self
            .fetch_owned_ongoing(&mut tx, request.transaksi_id, nrp, is_admin)
            .await?;

        sqlx::query_as::<_, Stasiun>("SELECT * FROM stasiun WHERE stasiun_id = $1")
            .bind(request.stasiun_kembali_id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| not_found_error("Stasiun", &request.stasiun_kembali_id.to_string()))?;

        let now = Utc::now();
        let elapsed = now - transaksi.waktu_mulai;

        // La suma de layanan se recalcula desde las líneas, no desde el
        // acumulado, para que el total final sea autoritativo.
        let lines = self.fetch_lines(&mut tx, transaksi.transaksi_id).await?;
        let service_costs: Vec<Decimal> = lines.iter().map(|l| l.biaya_aktual).collect();
        let total = self.tariff.total_cost(elapsed, &service_costs);

        let updated = sqlx::query_as::<_, Transaksi>(
            r#"
            UPDATE transaksi
            SET stasiun_kembali_id = $1, waktu_selesai = $2,
                status_transaksi = $3, total_biaya = $4
            WHERE transaksi_id = $5 AND status_transaksi = $6
            RETURNING *
            "#,
        )
        .bind(request.stasiun_kembali_id)
        .bind(now)
        .bind(TransactionStatus::Completed.as_str())
        .bind(total)
        .bind(transaksi.transaksi_id)
        .bind(TransactionStatus::Ongoing.as_str())
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::Conflict("Transaksi is no longer ongoing".to_string()))?;

        sqlx::query("UPDATE kendaraan SET status = $1, stasiun_id = $2 WHERE kendaraan_id = $3")
            .bind(VehicleStatus::Available.as_str())
            .bind(request.stasiun_kembali_id)
            .bind(updated.kendaraan_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE transaksi_layanan SET status = $1 WHERE transaksi_id = $2 AND status = $3")
            .bind(ServiceLineStatus::Completed.as_str())
            .bind(updated.transaksi_id)
            .bind(ServiceLineStatus::Pending.as_str())
            .execute(&mut *tx)
            .await?;

        let lines = self.fetch_lines(&mut tx, updated.transaksi_id).await?;

        tx.commit().await?;

        info!(
            "Renta finalizada: transaksi {} total {}",
            updated.transaksi_id, updated.total_biaya
        );

        Ok(TransaksiResponse::from_parts(updated, lines))
    }

    /// Cancelación administrativa: la transacción queda cancelled y el
    /// kendaraan vuelve disponible al stasiun de retiro.
    pub async fn cancel_rental(&self, transaksi_id: Uuid) -> AppResult<TransaksiResponse> {
        let mut tx = self.pool.begin().await?;

        let transaksi =
            sqlx::query_as::<_, Transaksi>("SELECT * FROM transaksi WHERE transaksi_id = $1")
                .bind(transaksi_id)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| not_found_error("Transaksi", &transaksi_id.to_string()))?;

        if TransactionStatus::parse(&transaksi.status_transaksi) != Some(TransactionStatus::Ongoing)
        {
            return Err(AppError::Conflict(format!(
                "Transaksi is not ongoing (status: {})",
                transaksi.status_transaksi
            )));
        }

        let updated = sqlx::query_as::<_, Transaksi>(
            r#"
            UPDATE transaksi
            SET status_transaksi = $1, waktu_selesai = $2, total_biaya = 0
            WHERE transaksi_id = $3 AND status_transaksi = $4
            RETURNING *
            "#,
        )
        .bind(TransactionStatus::Cancelled.as_str())
        .bind(Utc::now())
        .bind(transaksi.transaksi_id)
        .bind(TransactionStatus::Ongoing.as_str())
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::Conflict("Transaksi is no longer ongoing".to_string()))?;

        sqlx::query("UPDATE kendaraan SET status = $1, stasiun_id = $2 WHERE kendaraan_id = $3")
            .bind(VehicleStatus::Available.as_str())
            .bind(updated.stasiun_ambil_id)
            .bind(updated.kendaraan_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("UPDATE transaksi_layanan SET status = $1 WHERE transaksi_id = $2 AND status = $3")
            .bind(ServiceLineStatus::Cancelled.as_str())
            .bind(updated.transaksi_id)
            .bind(ServiceLineStatus::Pending.as_str())
            .execute(&mut *tx)
            .await?;

        let lines = self.fetch_lines(&mut tx, updated.transaksi_id).await?;

        tx.commit().await?;

        info!("Renta cancelada: transaksi {}", updated.transaksi_id);

        Ok(TransaksiResponse::from_parts(updated, lines))
    }

    /// Cargar una transacción verificando pertenencia y estado ongoing
    async fn fetch_owned_ongoing(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        transaksi_id: Uuid,
        nrp: &str,
        is_admin: bool,
    ) -> AppResult<Transaksi> {
        let transaksi =
            sqlx::query_as::<_, Transaksi>("SELECT * FROM transaksi WHERE transaksi_id = $1")
                .bind(transaksi_id)
                .fetch_optional(&mut **tx)
                .await?
                .ok_or_else(|| not_found_error("Transaksi", &transaksi_id.to_string()))?;

        if !is_admin && transaksi.user_nrp != nrp {
            return Err(AppError::Forbidden(
                "Transaksi does not belong to you".to_string(),
            ));
        }

        if TransactionStatus::parse(&transaksi.status_transaksi) != Some(TransactionStatus::Ongoing)
        {
            return Err(AppError::Conflict(format!(
                "Transaksi is not ongoing (status: {})",
                transaksi.status_transaksi
            )));
        }

        Ok(transaksi)
    }

    async fn fetch_lines(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        transaksi_id: Uuid,
    ) -> AppResult<Vec<TransaksiLayanan>> {
        let lines = sqlx::query_as::<_, TransaksiLayanan>(
            "SELECT * FROM transaksi_layanan WHERE transaksi_id = $1 ORDER BY created_at",
        )
        .bind(transaksi_id)
        .fetch_all(&mut **tx)
        .await?;

        Ok(lines)
    }
}
