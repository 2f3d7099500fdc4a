use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::rental_controller::RentalController;
use crate::dto::common::{ApiResponse, Paginated};
use crate::dto::rental_dto::{
    AddServiceRequest, RentRequest, ReturnRequest, TransaksiFilters, TransaksiResponse,
};
use crate::middleware::auth::{auth_middleware, AdminUser, AuthenticatedUser};
use crate::services::pricing::Tariff;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_transaksi_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_transaksi))
        .route("/rent", post(rent))
        .route("/return", post(return_rental))
        .route("/add-service", post(add_service))
        .route("/active", get(active))
        .route("/my-rentals", get(my_rentals))
        .route("/:id/cancel", post(cancel))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}

fn controller(state: &AppState) -> RentalController {
    RentalController::new(state.pool.clone(), Tariff::from(&state.config))
}

async fn rent(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<RentRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TransaksiResponse>>), AppError> {
    let response = controller(&state).rent(&user.nrp, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn return_rental(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<ReturnRequest>,
) -> Result<Json<ApiResponse<TransaksiResponse>>, AppError> {
    let response = controller(&state)
        .return_rental(&user.nrp, user.role, request)
        .await?;
    Ok(Json(response))
}

async fn add_service(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Json(request): Json<AddServiceRequest>,
) -> Result<Json<ApiResponse<TransaksiResponse>>, AppError> {
    let response = controller(&state)
        .add_service(&user.nrp, user.role, request)
        .await?;
    Ok(Json(response))
}

async fn active(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<ApiResponse<Option<TransaksiResponse>>>, AppError> {
    let response = controller(&state).active(&user.nrp).await?;
    Ok(Json(response))
}

async fn my_rentals(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<ApiResponse<Vec<TransaksiResponse>>>, AppError> {
    let response = controller(&state).my_rentals(&user.nrp).await?;
    Ok(Json(ApiResponse::success(response)))
}

async fn list_transaksi(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Query(filters): Query<TransaksiFilters>,
) -> Result<Json<Paginated<TransaksiResponse>>, AppError> {
    let response = controller(&state)
        .list(&user.nrp, user.role, filters)
        .await?;
    Ok(Json(response))
}

async fn cancel(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<TransaksiResponse>>, AppError> {
    let response = controller(&state).cancel(id).await?;
    Ok(Json(response))
}
