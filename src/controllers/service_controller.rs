use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::service_dto::{CreateLayananRequest, LayananResponse, UpdateLayananRequest};
use crate::repositories::service_repository::ServiceRepository;
use crate::utils::errors::{AppError, AppResult};

pub struct ServiceController {
    repository: ServiceRepository,
}

impl ServiceController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ServiceRepository::new(pool),
        }
    }

    pub async fn list_active(&self) -> AppResult<Vec<LayananResponse>> {
        let items = self.repository.list_active().await?;

        Ok(items.into_iter().map(Into::into).collect())
    }

    pub async fn create(
        &self,
        request: CreateLayananRequest,
    ) -> AppResult<ApiResponse<LayananResponse>> {
        request.validate()?;

        if request.biaya_dasar < Decimal::ZERO {
            return Err(AppError::BadRequest(
                "biaya_dasar cannot be negative".to_string(),
            ));
        }

        let layanan = self
            .repository
            .create(
                request.nama_layanan,
                request.deskripsi,
                request.biaya_dasar,
                request.aktif.unwrap_or(true),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            layanan.into(),
            "Layanan creado exitosamente".to_string(),
        ))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateLayananRequest,
    ) -> AppResult<ApiResponse<LayananResponse>> {
        request.validate()?;

        if let Some(biaya) = request.biaya_dasar {
            if biaya < Decimal::ZERO {
                return Err(AppError::BadRequest(
                    "biaya_dasar cannot be negative".to_string(),
                ));
            }
        }

        let layanan = self
            .repository
            .update(
                id,
                request.nama_layanan,
                request.deskripsi,
                request.biaya_dasar,
                request.aktif,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            layanan.into(),
            "Layanan actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<ApiResponse<()>> {
        self.repository.delete(id).await?;

        Ok(ApiResponse::message_only(
            "Layanan eliminado exitosamente".to_string(),
        ))
    }
}
