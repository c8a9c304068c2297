use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, patch, post},
};
use uuid::Uuid;

use crate::{
    dto::addresses::{AddressList, CreateAddressRequest, UpdateAddressRequest},
    error::AppResult,
    middleware::auth::{AuthSession, current_user},
    models::Address,
    response::ApiResponse,
    services::address_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_address))
        .route("/", get(get_my_addresses))
        .route("/{id}", get(get_address))
        .route("/{id}", patch(update_address))
        .route("/{id}", delete(delete_address))
}

#[utoipa::path(
    post,
    path = "/api/addresses",
    request_body = CreateAddressRequest,
    responses(
        (status = 200, description = "Create an address on the caller's profile", body = ApiResponse<Address>),
        (status = 403, description = "profile_id is not the caller's"),
        (status = 404, description = "No profile yet"),
    ),
    security(("cookie_auth" = [])),
    tag = "Addresses"
)]
pub async fn create_address(
    State(state): State<AppState>,
    session: AuthSession,
    Json(payload): Json<CreateAddressRequest>,
) -> AppResult<Json<ApiResponse<Address>>> {
    let user = current_user(&state.orm, &session).await?;
    let resp = address_service::create_address(&state.orm, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/addresses",
    responses(
        (status = 200, description = "List the caller's addresses", body = ApiResponse<AddressList>),
    ),
    security(("cookie_auth" = [])),
    tag = "Addresses"
)]
pub async fn get_my_addresses(
    State(state): State<AppState>,
    session: AuthSession,
) -> AppResult<Json<ApiResponse<AddressList>>> {
    let user = current_user(&state.orm, &session).await?;
    let resp = address_service::get_my_addresses(&state.orm, &user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/addresses/{id}",
    params(("id" = Uuid, Path, description = "Address ID")),
    responses(
        (status = 200, description = "Get one of the caller's addresses", body = ApiResponse<Address>),
        (status = 404, description = "Address not found"),
    ),
    security(("cookie_auth" = [])),
    tag = "Addresses"
)]
pub async fn get_address(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Address>>> {
    let user = current_user(&state.orm, &session).await?;
    let resp = address_service::get_address(&state.orm, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/addresses/{id}",
    params(("id" = Uuid, Path, description = "Address ID")),
    request_body = UpdateAddressRequest,
    responses(
        (status = 200, description = "Partially update an address", body = ApiResponse<Address>),
        (status = 404, description = "Address not found"),
    ),
    security(("cookie_auth" = [])),
    tag = "Addresses"
)]
pub async fn update_address(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAddressRequest>,
) -> AppResult<Json<ApiResponse<Address>>> {
    let user = current_user(&state.orm, &session).await?;
    let resp = address_service::update_address(&state.orm, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/addresses/{id}",
    params(("id" = Uuid, Path, description = "Address ID")),
    responses(
        (status = 200, description = "Delete an address"),
        (status = 404, description = "Address not found"),
    ),
    security(("cookie_auth" = [])),
    tag = "Addresses"
)]
pub async fn delete_address(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let user = current_user(&state.orm, &session).await?;
    let resp = address_service::delete_address(&state.orm, &user, id).await?;
    Ok(Json(resp))
}
