use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::{ApiResponse, PageParams, Paginated};
use crate::dto::vehicle_dto::{
    CreateKendaraanRequest, KendaraanFilters, KendaraanResponse, UpdateKendaraanRequest,
};
use crate::models::vehicle::VehicleStatus;
use crate::repositories::station_repository::StationRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub struct VehicleController {
    repository: VehicleRepository,
    stations: StationRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool.clone()),
            stations: StationRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateKendaraanRequest,
    ) -> AppResult<ApiResponse<KendaraanResponse>> {
        request.validate()?;

        let status = match request.status.as_deref() {
            Some(value) => VehicleStatus::parse(value)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown status: {}", value)))?,
            None => VehicleStatus::Available,
        };

        // Un kendaraan rentado solo puede existir vía el motor de rentas
        if status == VehicleStatus::Rented {
            return Err(AppError::BadRequest(
                "A kendaraan cannot be created as rented".to_string(),
            ));
        }

        // stasiun_id siempre es una referencia validada, nunca un id suelto
        if let Some(stasiun_id) = request.stasiun_id {
            self.stations
                .find_by_id(stasiun_id)
                .await?
                .ok_or_else(|| not_found_error("Stasiun", &stasiun_id.to_string()))?;
        }

        let kendaraan = self
            .repository
            .create(request.merk, request.tipe, status, request.stasiun_id)
            .await?;

        Ok(ApiResponse::success_with_message(
            kendaraan.into(),
            "Kendaraan creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> AppResult<KendaraanResponse> {
        let kendaraan = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Kendaraan", &id.to_string()))?;

        Ok(kendaraan.into())
    }

    pub async fn list(&self, filters: KendaraanFilters) -> AppResult<Paginated<KendaraanResponse>> {
        if let Some(ref status) = filters.status {
            VehicleStatus::parse(status)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown status: {}", status)))?;
        }

        let page = PageParams {
            page: filters.page,
            per_page: filters.per_page,
        };

        let status = filters
            .status
            .as_deref()
            .and_then(VehicleStatus::parse)
            .map(|s| s.as_str());

        let (items, total) = self
            .repository
            .list(status, filters.stasiun_id, &page)
            .await?;

        Ok(Paginated::new(
            items.into_iter().map(Into::into).collect(),
            total,
            page.page(),
            page.per_page(),
        ))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateKendaraanRequest,
    ) -> AppResult<ApiResponse<KendaraanResponse>> {
        request.validate()?;

        let status = match request.status.as_deref() {
            Some(value) => Some(
                VehicleStatus::parse(value)
                    .ok_or_else(|| AppError::BadRequest(format!("Unknown status: {}", value)))?,
            ),
            None => None,
        };

        if let Some(stasiun_id) = request.stasiun_id {
            self.stations
                .find_by_id(stasiun_id)
                .await?
                .ok_or_else(|| not_found_error("Stasiun", &stasiun_id.to_string()))?;
        }

        let kendaraan = self
            .repository
            .update(id, request.merk, request.tipe, status, request.stasiun_id)
            .await?;

        Ok(ApiResponse::success_with_message(
            kendaraan.into(),
            "Kendaraan actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<ApiResponse<()>> {
        self.repository.delete(id).await?;

        Ok(ApiResponse::message_only(
            "Kendaraan eliminado exitosamente".to_string(),
        ))
    }
}
