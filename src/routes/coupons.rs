use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, patch, post},
};
use uuid::Uuid;

use crate::{
    dto::coupons::{CouponList, CreateCouponRequest, UpdateCouponRequest},
    error::AppResult,
    middleware::auth::{AuthSession, require_admin},
    models::Coupon,
    response::ApiResponse,
    services::coupon_service,
    state::AppState,
};

// The whole coupon surface is admin-only.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_coupon))
        .route("/", get(get_coupons))
        .route("/{id}", get(get_coupon))
        .route("/{id}", patch(update_coupon))
        .route("/{id}", delete(delete_coupon))
}

#[utoipa::path(
    post,
    path = "/api/coupons",
    request_body = CreateCouponRequest,
    responses(
        (status = 200, description = "Create coupon (admin only)", body = ApiResponse<Coupon>),
        (status = 409, description = "Coupon code taken"),
        (status = 422, description = "Discount out of range"),
    ),
    security(("cookie_auth" = [])),
    tag = "Coupons"
)]
pub async fn create_coupon(
    State(state): State<AppState>,
    session: AuthSession,
    Json(payload): Json<CreateCouponRequest>,
) -> AppResult<Json<ApiResponse<Coupon>>> {
    require_admin(&state.orm, &session).await?;
    let resp = coupon_service::create_coupon(&state.orm, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/coupons",
    responses(
        (status = 200, description = "List coupons (admin only)", body = ApiResponse<CouponList>),
    ),
    security(("cookie_auth" = [])),
    tag = "Coupons"
)]
pub async fn get_coupons(
    State(state): State<AppState>,
    session: AuthSession,
) -> AppResult<Json<ApiResponse<CouponList>>> {
    require_admin(&state.orm, &session).await?;
    let resp = coupon_service::get_coupons(&state.orm).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/coupons/{id}",
    params(("id" = Uuid, Path, description = "Coupon ID")),
    responses(
        (status = 200, description = "Get coupon (admin only)", body = ApiResponse<Coupon>),
        (status = 404, description = "Coupon not found"),
    ),
    security(("cookie_auth" = [])),
    tag = "Coupons"
)]
pub async fn get_coupon(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Coupon>>> {
    require_admin(&state.orm, &session).await?;
    let resp = coupon_service::get_coupon(&state.orm, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/coupons/{id}",
    params(("id" = Uuid, Path, description = "Coupon ID")),
    request_body = UpdateCouponRequest,
    responses(
        (status = 200, description = "Partially update coupon (admin only)", body = ApiResponse<Coupon>),
        (status = 422, description = "Discount out of range"),
    ),
    security(("cookie_auth" = [])),
    tag = "Coupons"
)]
pub async fn update_coupon(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCouponRequest>,
) -> AppResult<Json<ApiResponse<Coupon>>> {
    require_admin(&state.orm, &session).await?;
    let resp = coupon_service::update_coupon(&state.orm, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/coupons/{id}",
    params(("id" = Uuid, Path, description = "Coupon ID")),
    responses(
        (status = 200, description = "Delete coupon (admin only)"),
        (status = 404, description = "Coupon not found"),
    ),
    security(("cookie_auth" = [])),
    tag = "Coupons"
)]
pub async fn delete_coupon(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    require_admin(&state.orm, &session).await?;
    let resp = coupon_service::delete_coupon(&state.orm, id).await?;
    Ok(Json(resp))
}
