use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::station_controller::StationController;
use crate::dto::common::{ApiResponse, Paginated};
use crate::dto::station_dto::{
    CreateStasiunRequest, StasiunFilters, StasiunResponse, StasiunSummaryEntry, SystemStatistics,
    UpdateStasiunRequest,
};
use crate::dto::vehicle_dto::{KendaraanFilters, KendaraanResponse};
use crate::middleware::auth::{auth_middleware, AdminUser, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_stasiun_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_stasiun).post(create_stasiun))
        .route("/summary", get(summary))
        .route("/statistics", get(statistics))
        .route(
            "/:id",
            get(get_stasiun).put(update_stasiun).delete(delete_stasiun),
        )
        .route("/:id/kendaraan", get(stasiun_kendaraan))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn list_stasiun(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Query(filters): Query<StasiunFilters>,
) -> Result<Json<Paginated<StasiunResponse>>, AppError> {
    let controller = StationController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn get_stasiun(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<StasiunResponse>, AppError> {
    let controller = StationController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn create_stasiun(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Json(request): Json<CreateStasiunRequest>,
) -> Result<(StatusCode, Json<ApiResponse<StasiunResponse>>), AppError> {
    let controller = StationController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_stasiun(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateStasiunRequest>,
) -> Result<Json<ApiResponse<StasiunResponse>>, AppError> {
    let controller = StationController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_stasiun(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = StationController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}

async fn stasiun_kendaraan(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Query(filters): Query<KendaraanFilters>,
) -> Result<Json<Paginated<KendaraanResponse>>, AppError> {
    let controller = StationController::new(state.pool.clone());
    let response = controller.vehicles_at(id, filters).await?;
    Ok(Json(response))
}

async fn summary(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> Result<Json<Vec<StasiunSummaryEntry>>, AppError> {
    let controller = StationController::new(state.pool.clone());
    let response = controller.summary().await?;
    Ok(Json(response))
}

async fn statistics(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> Result<Json<SystemStatistics>, AppError> {
    let controller = StationController::new(state.pool.clone());
    let response = controller.statistics().await?;
    Ok(Json(response))
}
