use axum::{
    extract::{Path, State},
    http::StatusCode,
    middleware,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::service_controller::ServiceController;
use crate::dto::common::ApiResponse;
use crate::dto::service_dto::{CreateLayananRequest, LayananResponse, UpdateLayananRequest};
use crate::middleware::auth::{auth_middleware, AdminUser, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_layanan_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_layanan).post(create_layanan))
        .route(
            "/:id",
            axum::routing::put(update_layanan).delete(delete_layanan),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn list_layanan(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
) -> Result<Json<ApiResponse<Vec<LayananResponse>>>, AppError> {
    let controller = ServiceController::new(state.pool.clone());
    let response = controller.list_active().await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn create_layanan(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Json(request): Json<CreateLayananRequest>,
) -> Result<(StatusCode, Json<ApiResponse<LayananResponse>>), AppError> {
    let controller = ServiceController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_layanan(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateLayananRequest>,
) -> Result<Json<ApiResponse<LayananResponse>>, AppError> {
    let controller = ServiceController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_layanan(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = ServiceController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}
