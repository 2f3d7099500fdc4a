use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::{ApiResponse, PageParams, Paginated};
use crate::dto::report_dto::{
    CreateLaporanRequest, LaporanFilters, LaporanResponse, UpdateLaporanRequest,
};
use crate::models::report::ReportStatus;
use crate::models::user::UserRole;
use crate::repositories::report_repository::ReportRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub struct ReportController {
    repository: ReportRepository,
    vehicles: VehicleRepository,
}

impl ReportController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ReportRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        kendaraan_id: Uuid,
        nrp: &str,
        request: CreateLaporanRequest,
    ) -> AppResult<ApiResponse<LaporanResponse>> {
        request.validate()?;

        self.vehicles
            .find_by_id(kendaraan_id)
            .await?
            .ok_or_else(|| not_found_error("Kendaraan", &kendaraan_id.to_string()))?;

        let log = self
            .repository
            .create(kendaraan_id, nrp, request.laporan)
            .await?;

        Ok(ApiResponse::success_with_message(
            log.into(),
            "Laporan creado exitosamente".to_string(),
        ))
    }

    pub async fn list_for_vehicle(
        &self,
        kendaraan_id: Uuid,
        filters: LaporanFilters,
    ) -> AppResult<Paginated<LaporanResponse>> {
        self.vehicles
            .find_by_id(kendaraan_id)
            .await?
            .ok_or_else(|| not_found_error("Kendaraan", &kendaraan_id.to_string()))?;

        let page = PageParams {
            page: filters.page,
            per_page: filters.per_page,
        };

        let (items, total) = self
            .repository
            .list(Some(kendaraan_id), filters.status.as_deref(), &page)
            .await?;

        Ok(Paginated::new(
            items.into_iter().map(Into::into).collect(),
            total,
            page.page(),
            page.per_page(),
        ))
    }

    /// Listado global de laporan (solo admin)
    pub async fn list_all(&self, filters: LaporanFilters) -> AppResult<Paginated<LaporanResponse>> {
        let page = PageParams {
            page: filters.page,
            per_page: filters.per_page,
        };

        let (items, total) = self
            .repository
            .list(filters.kendaraan_id, filters.status.as_deref(), &page)
            .await?;

        Ok(Paginated::new(
            items.into_iter().map(Into::into).collect(),
            total,
            page.page(),
            page.per_page(),
        ))
    }

    /// El admin puede tocar todo; el reportero solo el texto de su propio
    /// laporan mientras siga en estado 'reported'.
    pub async fn update(
        &self,
        id: Uuid,
        nrp: &str,
        role: UserRole,
        request: UpdateLaporanRequest,
    ) -> AppResult<ApiResponse<LaporanResponse>> {
        request.validate()?;

        let log = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Laporan", &id.to_string()))?;

        let log = if role == UserRole::Admin {
            let status = match request.status.as_deref() {
                Some(value) => Some(
                    ReportStatus::parse(value).ok_or_else(|| {
                        AppError::BadRequest(format!("Unknown status: {}", value))
                    })?,
                ),
                None => None,
            };

            self.repository
                .update(id, request.laporan, status, request.tanggal_pemeliharaan)
                .await?
        } else {
            if log.nrp != nrp {
                return Err(AppError::Forbidden("Access denied".to_string()));
            }
            if ReportStatus::parse(&log.status) != Some(ReportStatus::Reported) {
                return Err(AppError::Forbidden(
                    "Cannot update laporan that is already processed".to_string(),
                ));
            }
            if request.status.is_some() || request.tanggal_pemeliharaan.is_some() {
                return Err(AppError::Forbidden(
                    "Only admins can update laporan status".to_string(),
                ));
            }

            self.repository.update(id, request.laporan, None, None).await?
        };

        Ok(ApiResponse::success_with_message(
            log.into(),
            "Laporan actualizado exitosamente".to_string(),
        ))
    }

    /// Borrado: admin siempre; el reportero solo mientras siga 'reported'
    pub async fn delete(&self, id: Uuid, nrp: &str, role: UserRole) -> AppResult<ApiResponse<()>> {
        let log = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Laporan", &id.to_string()))?;

        if role != UserRole::Admin
            && (log.nrp != nrp || ReportStatus::parse(&log.status) != Some(ReportStatus::Reported))
        {
            return Err(AppError::Forbidden("Access denied".to_string()));
        }

        self.repository.delete(id).await?;

        Ok(ApiResponse::message_only(
            "Laporan eliminado exitosamente".to_string(),
        ))
    }
}
