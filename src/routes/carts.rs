use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, patch, post},
};
use uuid::Uuid;

use crate::{
    dto::carts::{AddCartItemRequest, CartWithItems, UpdateCartItemRequest},
    error::AppResult,
    middleware::auth::{AuthSession, current_user},
    models::{Cart, CartItem},
    response::ApiResponse,
    services::cart_service,
    state::AppState,
};

// Everything here operates on the calling user's own cart.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_cart))
        .route("/me", get(get_my_cart))
        .route("/me", delete(delete_my_cart))
        .route("/items", post(add_item))
        .route("/items/{id}", patch(update_item))
        .route("/items/{id}", delete(remove_item))
}

#[utoipa::path(
    post,
    path = "/api/carts",
    responses(
        (status = 200, description = "Create the caller's cart", body = ApiResponse<Cart>),
        (status = 409, description = "Cart already exists"),
    ),
    security(("cookie_auth" = [])),
    tag = "Carts"
)]
pub async fn create_cart(
    State(state): State<AppState>,
    session: AuthSession,
) -> AppResult<Json<ApiResponse<Cart>>> {
    let user = current_user(&state.orm, &session).await?;
    let resp = cart_service::create_cart(&state.orm, &user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/carts/me",
    responses(
        (status = 200, description = "Get the caller's cart with items", body = ApiResponse<CartWithItems>),
        (status = 404, description = "No cart yet"),
    ),
    security(("cookie_auth" = [])),
    tag = "Carts"
)]
pub async fn get_my_cart(
    State(state): State<AppState>,
    session: AuthSession,
) -> AppResult<Json<ApiResponse<CartWithItems>>> {
    let user = current_user(&state.orm, &session).await?;
    let resp = cart_service::get_my_cart(&state.orm, &user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/carts/me",
    responses(
        (status = 200, description = "Delete the caller's cart and its items"),
        (status = 404, description = "No cart yet"),
    ),
    security(("cookie_auth" = [])),
    tag = "Carts"
)]
pub async fn delete_my_cart(
    State(state): State<AppState>,
    session: AuthSession,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let user = current_user(&state.orm, &session).await?;
    let resp = cart_service::delete_my_cart(&state.orm, &user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/carts/items",
    request_body = AddCartItemRequest,
    responses(
        (status = 200, description = "Add a product to the caller's cart", body = ApiResponse<CartItem>),
        (status = 404, description = "Cart or product not found"),
    ),
    security(("cookie_auth" = [])),
    tag = "Carts"
)]
pub async fn add_item(
    State(state): State<AppState>,
    session: AuthSession,
    Json(payload): Json<AddCartItemRequest>,
) -> AppResult<Json<ApiResponse<CartItem>>> {
    let user = current_user(&state.orm, &session).await?;
    let resp = cart_service::add_item(&state.orm, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/carts/items/{id}",
    params(("id" = Uuid, Path, description = "Cart item ID")),
    request_body = UpdateCartItemRequest,
    responses(
        (status = 200, description = "Update a cart item's quantity", body = ApiResponse<CartItem>),
        (status = 404, description = "Item not found in the caller's cart"),
    ),
    security(("cookie_auth" = [])),
    tag = "Carts"
)]
pub async fn update_item(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCartItemRequest>,
) -> AppResult<Json<ApiResponse<CartItem>>> {
    let user = current_user(&state.orm, &session).await?;
    let resp = cart_service::update_item(&state.orm, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/carts/items/{id}",
    params(("id" = Uuid, Path, description = "Cart item ID")),
    responses(
        (status = 200, description = "Remove an item from the caller's cart"),
        (status = 404, description = "Item not found in the caller's cart"),
    ),
    security(("cookie_auth" = [])),
    tag = "Carts"
)]
pub async fn remove_item(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let user = current_user(&state.orm, &session).await?;
    let resp = cart_service::remove_item(&state.orm, &user, id).await?;
    Ok(Json(resp))
}
