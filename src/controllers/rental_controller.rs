use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::common::{ApiResponse, PageParams, Paginated};
use crate::dto::rental_dto::{
    AddServiceRequest, RentRequest, ReturnRequest, TransaksiFilters, TransaksiResponse,
};
use crate::models::transaction::TransactionStatus;
use crate::models::user::UserRole;
use crate::repositories::transaction_repository::TransactionRepository;
use crate::services::pricing::Tariff;
use crate::services::rental_service::RentalService;
use crate::utils::errors::{AppError, AppResult};

pub struct RentalController {
    service: RentalService,
    repository: TransactionRepository,
}

impl RentalController {
    pub fn new(pool: PgPool, tariff: Tariff) -> Self {
        Self {
            service: RentalService::new(pool.clone(), tariff),
            repository: TransactionRepository::new(pool),
        }
    }

    pub async fn rent(
        &self,
        nrp: &str,
        request: RentRequest,
    ) -> AppResult<ApiResponse<TransaksiResponse>> {
        let transaksi = self.service.start_rental(nrp, &request).await?;

        Ok(ApiResponse::success_with_message(
            transaksi,
            "Kendaraan rentado exitosamente".to_string(),
        ))
    }

    pub async fn return_rental(
        &self,
        nrp: &str,
        role: UserRole,
        request: ReturnRequest,
    ) -> AppResult<ApiResponse<TransaksiResponse>> {
        let transaksi = self
            .service
            .end_rental(nrp, role == UserRole::Admin, &request)
            .await?;

        Ok(ApiResponse::success_with_message(
            transaksi,
            "Kendaraan devuelto exitosamente".to_string(),
        ))
    }

    pub async fn add_service(
        &self,
        nrp: &str,
        role: UserRole,
        request: AddServiceRequest,
    ) -> AppResult<ApiResponse<TransaksiResponse>> {
        let transaksi = self
            .service
            .attach_service(nrp, role == UserRole::Admin, &request)
            .await?;

        Ok(ApiResponse::success_with_message(
            transaksi,
            "Layanan agregado a la transacción".to_string(),
        ))
    }

    pub async fn cancel(&self, transaksi_id: Uuid) -> AppResult<ApiResponse<TransaksiResponse>> {
        let transaksi = self.service.cancel_rental(transaksi_id).await?;

        Ok(ApiResponse::success_with_message(
            transaksi,
            "Transacción cancelada".to_string(),
        ))
    }

    /// Renta activa del caller, con sus líneas de servicio
    pub async fn active(&self, nrp: &str) -> AppResult<ApiResponse<Option<TransaksiResponse>>> {
        let active = self.repository.active_for_user(nrp).await?;

        match active {
            Some(transaksi) => {
                let lines = self.repository.service_lines(transaksi.transaksi_id).await?;
                Ok(ApiResponse::success_with_message(
                    Some(TransaksiResponse::from_parts(transaksi, lines)),
                    "Active rental found".to_string(),
                ))
            }
            None => Ok(ApiResponse::success_with_message(
                None,
                "No active rental found".to_string(),
            )),
        }
    }

    pub async fn my_rentals(&self, nrp: &str) -> AppResult<Vec<TransaksiResponse>> {
        let items = self.repository.history_for_user(nrp).await?;

        Ok(items.into_iter().map(Into::into).collect())
    }

    /// Listado paginado: el admin ve todo, un usuario solo sus propias filas
    pub async fn list(
        &self,
        nrp: &str,
        role: UserRole,
        filters: TransaksiFilters,
    ) -> AppResult<Paginated<TransaksiResponse>> {
        if let Some(ref status) = filters.status {
            TransactionStatus::parse(status)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown status: {}", status)))?;
        }

        let page = PageParams {
            page: filters.page,
            per_page: filters.per_page,
        };

        let status = filters
            .status
            .as_deref()
            .and_then(TransactionStatus::parse)
            .map(|s| s.as_str());

        let user_filter = if role == UserRole::Admin {
            filters.user_nrp.clone()
        } else {
            Some(nrp.to_string())
        };

        let (items, total) = self
            .repository
            .list(status, user_filter.as_deref(), &page)
            .await?;

        Ok(Paginated::new(
            items.into_iter().map(Into::into).collect(),
            total,
            page.page(),
            page.per_page(),
        ))
    }
}
