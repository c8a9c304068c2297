use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, patch, post},
};

use crate::{
    dto::users::{CreateUserRequest, RoleChangeRequest, UpdateUserRequest, UserList},
    error::AppResult,
    middleware::auth::{AuthSession, require_admin, require_super_admin},
    models::User,
    response::ApiResponse,
    services::user_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_user))
        .route("/", get(get_users))
        .route("/create-super-admin", post(create_super_admin))
        .route("/activate-admin", post(activate_admin))
        .route("/deactivate-admin", post(deactivate_admin))
        .route("/deactivate-user", post(deactivate_user))
        .route("/{username}", get(get_user))
        .route("/{username}", patch(update_user))
        .route("/{username}", delete(delete_user))
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "Create user", body = ApiResponse<User>),
        (status = 409, description = "Username or email taken"),
        (status = 422, description = "Validation failed"),
    ),
    tag = "Users"
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> AppResult<Json<ApiResponse<User>>> {
    let resp = user_service::create_user(&state.orm, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/users/create-super-admin",
    responses(
        (status = 200, description = "Bootstrap the super admin from deployment secrets", body = ApiResponse<User>),
        (status = 409, description = "Super admin already exists"),
    ),
    tag = "Users"
)]
pub async fn create_super_admin(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<User>>> {
    let resp = user_service::create_super_admin(&state).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/users/activate-admin",
    request_body = RoleChangeRequest,
    responses(
        (status = 200, description = "Grant ADMIN role", body = ApiResponse<User>),
        (status = 403, description = "Super admin access required"),
    ),
    security(("cookie_auth" = [])),
    tag = "Users"
)]
pub async fn activate_admin(
    State(state): State<AppState>,
    session: AuthSession,
    Json(payload): Json<RoleChangeRequest>,
) -> AppResult<Json<ApiResponse<User>>> {
    require_super_admin(&state.orm, &session).await?;
    let resp = user_service::change_admin_rights(&state.orm, &payload.username, true).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/users/deactivate-admin",
    request_body = RoleChangeRequest,
    responses(
        (status = 200, description = "Revoke ADMIN role", body = ApiResponse<User>),
        (status = 403, description = "Super admin access required"),
    ),
    security(("cookie_auth" = [])),
    tag = "Users"
)]
pub async fn deactivate_admin(
    State(state): State<AppState>,
    session: AuthSession,
    Json(payload): Json<RoleChangeRequest>,
) -> AppResult<Json<ApiResponse<User>>> {
    require_super_admin(&state.orm, &session).await?;
    let resp = user_service::change_admin_rights(&state.orm, &payload.username, false).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/users/deactivate-user",
    request_body = RoleChangeRequest,
    responses(
        (status = 200, description = "Toggle user activity", body = ApiResponse<User>),
        (status = 403, description = "Admin access required"),
    ),
    security(("cookie_auth" = [])),
    tag = "Users"
)]
pub async fn deactivate_user(
    State(state): State<AppState>,
    session: AuthSession,
    Json(payload): Json<RoleChangeRequest>,
) -> AppResult<Json<ApiResponse<User>>> {
    require_admin(&state.orm, &session).await?;
    let resp = user_service::change_user_activity(&state.orm, &payload.username).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "List users (admin only)", body = ApiResponse<UserList>),
        (status = 403, description = "Admin access required"),
    ),
    security(("cookie_auth" = [])),
    tag = "Users"
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: AuthSession,
) -> AppResult<Json<ApiResponse<UserList>>> {
    require_admin(&state.orm, &session).await?;
    let resp = user_service::get_users(&state.orm).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/users/{username}",
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "Get user (admin only)", body = ApiResponse<User>),
        (status = 404, description = "User not found"),
    ),
    security(("cookie_auth" = [])),
    tag = "Users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: AuthSession,
    Path(username): Path<String>,
) -> AppResult<Json<ApiResponse<User>>> {
    require_admin(&state.orm, &session).await?;
    let resp = user_service::get_user_by_username(&state.orm, &username).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/users/{username}",
    params(("username" = String, Path, description = "Username")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Partially update user (admin only)", body = ApiResponse<User>),
        (status = 403, description = "Super admin rows are immutable"),
    ),
    security(("cookie_auth" = [])),
    tag = "Users"
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: AuthSession,
    Path(username): Path<String>,
    Json(payload): Json<UpdateUserRequest>,
) -> AppResult<Json<ApiResponse<User>>> {
    require_admin(&state.orm, &session).await?;
    let resp = user_service::update_user(&state.orm, &username, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/users/{username}",
    params(("username" = String, Path, description = "Username")),
    responses(
        (status = 200, description = "Delete user (super admin only)"),
        (status = 403, description = "Super admin rows are immutable"),
    ),
    security(("cookie_auth" = [])),
    tag = "Users"
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: AuthSession,
    Path(username): Path<String>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    require_super_admin(&state.orm, &session).await?;
    let resp = user_service::delete_user(&state.orm, &username).await?;
    Ok(Json(resp))
}
