use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::report_controller::ReportController;
use crate::controllers::vehicle_controller::VehicleController;
use crate::dto::common::{ApiResponse, Paginated};
use crate::dto::report_dto::{
    CreateLaporanRequest, LaporanFilters, LaporanResponse, UpdateLaporanRequest,
};
use crate::dto::vehicle_dto::{
    CreateKendaraanRequest, KendaraanFilters, KendaraanResponse, UpdateKendaraanRequest,
};
use crate::middleware::auth::{auth_middleware, AdminUser, AuthenticatedUser};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_kendaraan_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_kendaraan).post(create_kendaraan))
        .route("/laporan", get(list_all_laporan))
        .route(
            "/laporan/:id",
            axum::routing::put(update_laporan).delete(delete_laporan),
        )
        .route(
            "/:id",
            get(get_kendaraan)
                .put(update_kendaraan)
                .delete(delete_kendaraan),
        )
        .route("/:id/laporan", get(list_laporan).post(create_laporan))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

async fn list_kendaraan(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Query(filters): Query<KendaraanFilters>,
) -> Result<Json<Paginated<KendaraanResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn get_kendaraan(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<KendaraanResponse>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn create_kendaraan(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Json(request): Json<CreateKendaraanRequest>,
) -> Result<(StatusCode, Json<ApiResponse<KendaraanResponse>>), AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_kendaraan(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateKendaraanRequest>,
) -> Result<Json<ApiResponse<KendaraanResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_kendaraan(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.delete(id).await?;
    Ok(Json(response))
}

async fn list_laporan(
    State(state): State<AppState>,
    _user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Query(filters): Query<LaporanFilters>,
) -> Result<Json<Paginated<LaporanResponse>>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    let response = controller.list_for_vehicle(id, filters).await?;
    Ok(Json(response))
}

async fn create_laporan(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(request): Json<CreateLaporanRequest>,
) -> Result<(StatusCode, Json<ApiResponse<LaporanResponse>>), AppError> {
    let controller = ReportController::new(state.pool.clone());
    let response = controller.create(id, &user.nrp, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn update_laporan(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateLaporanRequest>,
) -> Result<Json<ApiResponse<LaporanResponse>>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    let response = controller.update(id, &user.nrp, user.role, request).await?;
    Ok(Json(response))
}

async fn delete_laporan(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    let response = controller.delete(id, &user.nrp, user.role).await?;
    Ok(Json(response))
}

async fn list_all_laporan(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Query(filters): Query<LaporanFilters>,
) -> Result<Json<Paginated<LaporanResponse>>, AppError> {
    let controller = ReportController::new(state.pool.clone());
    let response = controller.list_all(filters).await?;
    Ok(Json(response))
}
