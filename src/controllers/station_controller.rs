use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::{ApiResponse, PageParams, Paginated};
use crate::dto::station_dto::{
    BikeCounts, CreateStasiunRequest, StasiunFilters, StasiunResponse, StasiunSummaryEntry,
    StationCounts, SystemStatistics, UpdateStasiunRequest,
};
use crate::dto::vehicle_dto::{KendaraanFilters, KendaraanResponse};
use crate::models::station::StationStatus;
use crate::models::vehicle::VehicleStatus;
use crate::repositories::station_repository::StationRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub struct StationController {
    repository: StationRepository,
    vehicles: VehicleRepository,
}

fn utilization(total: i64, available: i64) -> f64 {
    if total > 0 {
        ((total - available) as f64 / total as f64 * 10000.0).round() / 100.0
    } else {
        0.0
    }
}

impl StationController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: StationRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateStasiunRequest,
    ) -> AppResult<ApiResponse<StasiunResponse>> {
        request.validate()?;

        let status = match request.status.as_deref() {
            Some(value) => StationStatus::parse(value)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown status: {}", value)))?,
            None => StationStatus::Active,
        };

        let stasiun = self
            .repository
            .create(
                request.nama_stasiun,
                request.alamat,
                status,
                request.latitude,
                request.longitude,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            stasiun.into(),
            "Stasiun creado exitosamente".to_string(),
        ))
    }

    /// Detalle de un stasiun con su conteo de bicicletas disponibles
    pub async fn get_by_id(&self, id: Uuid) -> AppResult<StasiunResponse> {
        let stasiun = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Stasiun", &id.to_string()))?;

        let available = self.vehicles.count_available_by_station(id).await?;

        let mut response: StasiunResponse = stasiun.into();
        response.available_bikes = Some(available);

        Ok(response)
    }

    pub async fn list(&self, filters: StasiunFilters) -> AppResult<Paginated<StasiunResponse>> {
        if let Some(ref status) = filters.status {
            StationStatus::parse(status)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown status: {}", status)))?;
        }

        let page = PageParams {
            page: filters.page,
            per_page: filters.per_page,
        };

        let status = filters
            .status
            .as_deref()
            .and_then(StationStatus::parse)
            .map(|s| s.as_str());

        let (items, total) = self.repository.list(status, &page).await?;

        Ok(Paginated::new(
            items.into_iter().map(Into::into).collect(),
            total,
            page.page(),
            page.per_page(),
        ))
    }

    /// Kendaraan estacionados en un stasiun (con filtro de estado)
    pub async fn vehicles_at(
        &self,
        id: Uuid,
        filters: KendaraanFilters,
    ) -> AppResult<Paginated<KendaraanResponse>> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Stasiun", &id.to_string()))?;

        let page = PageParams {
            page: filters.page,
            per_page: filters.per_page,
        };

        let status = filters
            .status
            .as_deref()
            .and_then(VehicleStatus::parse)
            .map(|s| s.as_str());

        let (items, total) = self.vehicles.list(status, Some(id), &page).await?;

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
        request: UpdateStasiunRequest,
    ) -> AppResult<ApiResponse<StasiunResponse>> {
        request.validate()?;

        let status = match request.status.as_deref() {
            Some(value) => Some(
                StationStatus::parse(value)
                    .ok_or_else(|| AppError::BadRequest(format!("Unknown status: {}", value)))?,
            ),
            None => None,
        };

        let stasiun = self
            .repository
            .update(
                id,
                request.nama_stasiun,
                request.alamat,
                status,
                request.latitude,
                request.longitude,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            stasiun.into(),
            "Stasiun actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<ApiResponse<()>> {
        self.repository.delete(id).await?;

        Ok(ApiResponse::message_only(
            "Stasiun eliminado exitosamente".to_string(),
        ))
    }

    /// Resumen de ocupación por stasiun activo (solo admin)
    pub async fn summary(&self) -> AppResult<Vec<StasiunSummaryEntry>> {
        let stations = self.repository.list_active().await?;

        let mut summary = Vec::with_capacity(stations.len());
        for stasiun in stations {
            let total = self.vehicles.count_by_station(stasiun.stasiun_id).await?;
            let available = self
                .vehicles
                .count_available_by_station(stasiun.stasiun_id)
                .await?;

            summary.push(StasiunSummaryEntry {
                stasiun: stasiun.into(),
                available_bikes: available,
                total_bikes: total,
                utilization_rate: utilization(total, available),
            });
        }

        Ok(summary)
    }

    /// Estadísticas globales de estaciones y bicicletas (solo admin)
    pub async fn statistics(&self) -> AppResult<SystemStatistics> {
        let total_stations = self.repository.count_total().await?;
        let active_stations = self.repository.count_by_status(StationStatus::Active).await?;

        let total_bikes = self.vehicles.count_total().await?;
        let available_bikes = self
            .vehicles
            .count_by_status(VehicleStatus::Available)
            .await?;

        Ok(SystemStatistics {
            stations: StationCounts {
                total: total_stations,
                active: active_stations,
                inactive: total_stations - active_stations,
            },
            bikes: BikeCounts {
                total: total_bikes,
                available: available_bikes,
                in_use: total_bikes - available_bikes,
            },
            overall_utilization_rate: utilization(total_bikes, available_bikes),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utilization_rate() {
        assert_eq!(utilization(10, 4), 60.0);
        assert_eq!(utilization(0, 0), 0.0);
        assert_eq!(utilization(3, 1), 66.67);
    }
}
