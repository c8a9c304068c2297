use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, patch, post},
};
use uuid::Uuid;

use crate::{
    dto::orders::{
        AddOrderProductRequest, CreateOrderRequest, OrderList, OrderWithProducts,
        UpdateOrderProductRequest,
    },
    error::AppResult,
    middleware::auth::{AuthSession, current_user},
    models::{Order, OrderProduct},
    response::ApiResponse,
    services::order_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_order))
        .route("/", get(get_my_orders))
        .route("/{id}", get(get_order))
        .route("/{id}", delete(delete_order))
        .route("/{id}/products", post(add_product))
        .route("/{id}/products/{product_id}", patch(update_product_quantity))
        .route("/{id}/products/{product_id}", delete(remove_product))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Create an order for the caller", body = ApiResponse<Order>),
        (status = 404, description = "Coupon code not found"),
    ),
    security(("cookie_auth" = [])),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    session: AuthSession,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<Json<ApiResponse<Order>>> {
    let user = current_user(&state.orm, &session).await?;
    let resp = order_service::create_order(&state.orm, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    responses(
        (status = 200, description = "List the caller's orders", body = ApiResponse<OrderList>),
    ),
    security(("cookie_auth" = [])),
    tag = "Orders"
)]
pub async fn get_my_orders(
    State(state): State<AppState>,
    session: AuthSession,
) -> AppResult<Json<ApiResponse<OrderList>>> {
    let user = current_user(&state.orm, &session).await?;
    let resp = order_service::get_my_orders(&state.orm, &user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(("id" = Uuid, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Get one of the caller's orders with line items", body = ApiResponse<OrderWithProducts>),
        (status = 404, description = "Order not found"),
    ),
    security(("cookie_auth" = [])),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<OrderWithProducts>>> {
    let user = current_user(&state.orm, &session).await?;
    let resp = order_service::get_order(&state.orm, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    params(("id" = Uuid, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Delete one of the caller's orders"),
        (status = 404, description = "Order not found"),
    ),
    security(("cookie_auth" = [])),
    tag = "Orders"
)]
pub async fn delete_order(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let user = current_user(&state.orm, &session).await?;
    let resp = order_service::delete_order(&state.orm, &user, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/orders/{id}/products",
    params(("id" = Uuid, Path, description = "Order ID")),
    request_body = AddOrderProductRequest,
    responses(
        (status = 200, description = "Add a product line to the order", body = ApiResponse<OrderProduct>),
        (status = 404, description = "Order or product not found"),
    ),
    security(("cookie_auth" = [])),
    tag = "Orders"
)]
pub async fn add_product(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
    Json(payload): Json<AddOrderProductRequest>,
) -> AppResult<Json<ApiResponse<OrderProduct>>> {
    let user = current_user(&state.orm, &session).await?;
    let resp = order_service::add_product(&state.orm, &user, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/orders/{id}/products/{product_id}",
    params(
        ("id" = Uuid, Path, description = "Order ID"),
        ("product_id" = Uuid, Path, description = "Product ID"),
    ),
    request_body = UpdateOrderProductRequest,
    responses(
        (status = 200, description = "Update a line item's quantity", body = ApiResponse<OrderProduct>),
        (status = 404, description = "Line item not found"),
    ),
    security(("cookie_auth" = [])),
    tag = "Orders"
)]
pub async fn update_product_quantity(
    State(state): State<AppState>,
    session: AuthSession,
    Path((id, product_id)): Path<(Uuid, Uuid)>,
    Json(payload): Json<UpdateOrderProductRequest>,
) -> AppResult<Json<ApiResponse<OrderProduct>>> {
    let user = current_user(&state.orm, &session).await?;
    let resp =
        order_service::update_product_quantity(&state.orm, &user, id, product_id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/orders/{id}/products/{product_id}",
    params(
        ("id" = Uuid, Path, description = "Order ID"),
        ("product_id" = Uuid, Path, description = "Product ID"),
    ),
    responses(
        (status = 200, description = "Remove a line item"),
        (status = 404, description = "Line item not found"),
    ),
    security(("cookie_auth" = [])),
    tag = "Orders"
)]
pub async fn remove_product(
    State(state): State<AppState>,
    session: AuthSession,
    Path((id, product_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let user = current_user(&state.orm, &session).await?;
    let resp = order_service::remove_product(&state.orm, &user, id, product_id).await?;
    Ok(Json(resp))
}
