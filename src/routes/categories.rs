use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, patch, post},
};
use uuid::Uuid;

use crate::{
    dto::categories::{CategoryList, CreateCategoryRequest, UpdateCategoryRequest},
    dto::products::ProductList,
    error::AppResult,
    middleware::auth::{AuthSession, require_admin},
    models::Category,
    response::ApiResponse,
    services::{category_service, product_service},
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_category))
        .route("/", get(get_categories))
        .route("/{id}", get(get_category))
        .route("/{id}/products", get(get_category_products))
        .route("/{id}", patch(update_category))
        .route("/{id}", delete(delete_category))
}

#[utoipa::path(
    post,
    path = "/api/categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 200, description = "Create category (admin only)", body = ApiResponse<Category>),
        (status = 409, description = "Category name taken"),
    ),
    security(("cookie_auth" = [])),
    tag = "Categories"
)]
pub async fn create_category(
    State(state): State<AppState>,
    session: AuthSession,
    Json(payload): Json<CreateCategoryRequest>,
) -> AppResult<Json<ApiResponse<Category>>> {
    require_admin(&state.orm, &session).await?;
    let resp = category_service::create_category(&state.orm, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/categories",
    responses(
        (status = 200, description = "List categories", body = ApiResponse<CategoryList>),
    ),
    tag = "Categories"
)]
pub async fn get_categories(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<CategoryList>>> {
    let resp = category_service::get_categories(&state.orm).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}",
    params(("id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Get category", body = ApiResponse<Category>),
        (status = 404, description = "Category not found"),
    ),
    tag = "Categories"
)]
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Category>>> {
    let resp = category_service::get_category(&state.orm, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/categories/{id}/products",
    params(("id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Products in a category", body = ApiResponse<ProductList>),
    ),
    tag = "Categories"
)]
pub async fn get_category_products(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<ProductList>>> {
    let resp = product_service::list_products_by_category(&state.orm, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/categories/{id}",
    params(("id" = Uuid, Path, description = "Category ID")),
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Update category (admin only)", body = ApiResponse<Category>),
    ),
    security(("cookie_auth" = [])),
    tag = "Categories"
)]
pub async fn update_category(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateCategoryRequest>,
) -> AppResult<Json<ApiResponse<Category>>> {
    require_admin(&state.orm, &session).await?;
    let resp = category_service::update_category(&state.orm, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/categories/{id}",
    params(("id" = Uuid, Path, description = "Category ID")),
    responses(
        (status = 200, description = "Delete category (admin only)"),
        (status = 404, description = "Category not found"),
    ),
    security(("cookie_auth" = [])),
    tag = "Categories"
)]
pub async fn delete_category(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    require_admin(&state.orm, &session).await?;
    let resp = category_service::delete_category(&state.orm, id).await?;
    Ok(Json(resp))
}
