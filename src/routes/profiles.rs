use axum::{
    Json, Router,
    extract::State,
    routing::{delete, get, patch, post},
};

use crate::{
    dto::profiles::{CreateProfileRequest, ProfileList, UpdateProfileRequest},
    error::AppResult,
    middleware::auth::{AuthSession, current_user, require_admin},
    models::Profile,
    response::ApiResponse,
    services::profile_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_profile))
        .route("/", get(get_profiles))
        .route("/me", get(get_my_profile))
        .route("/me", patch(update_my_profile))
        .route("/me", delete(delete_my_profile))
}

#[utoipa::path(
    post,
    path = "/api/profiles",
    request_body = CreateProfileRequest,
    responses(
        (status = 200, description = "Create the caller's profile", body = ApiResponse<Profile>),
        (status = 409, description = "Profile already exists"),
    ),
    security(("cookie_auth" = [])),
    tag = "Profiles"
)]
pub async fn create_profile(
    State(state): State<AppState>,
    session: AuthSession,
    Json(payload): Json<CreateProfileRequest>,
) -> AppResult<Json<ApiResponse<Profile>>> {
    let user = current_user(&state.orm, &session).await?;
    let resp = profile_service::create_profile(&state.orm, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/profiles",
    responses(
        (status = 200, description = "List profiles (admin only)", body = ApiResponse<ProfileList>),
        (status = 403, description = "Admin access required"),
    ),
    security(("cookie_auth" = [])),
    tag = "Profiles"
)]
pub async fn get_profiles(
    State(state): State<AppState>,
    session: AuthSession,
) -> AppResult<Json<ApiResponse<ProfileList>>> {
    require_admin(&state.orm, &session).await?;
    let resp = profile_service::get_profiles(&state.orm).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/profiles/me",
    responses(
        (status = 200, description = "Get the caller's profile", body = ApiResponse<Profile>),
        (status = 404, description = "No profile yet"),
    ),
    security(("cookie_auth" = [])),
    tag = "Profiles"
)]
pub async fn get_my_profile(
    State(state): State<AppState>,
    session: AuthSession,
) -> AppResult<Json<ApiResponse<Profile>>> {
    let user = current_user(&state.orm, &session).await?;
    let resp = profile_service::get_my_profile(&state.orm, &user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/profiles/me",
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Partially update the caller's profile", body = ApiResponse<Profile>),
        (status = 404, description = "No profile yet"),
    ),
    security(("cookie_auth" = [])),
    tag = "Profiles"
)]
pub async fn update_my_profile(
    State(state): State<AppState>,
    session: AuthSession,
    Json(payload): Json<UpdateProfileRequest>,
) -> AppResult<Json<ApiResponse<Profile>>> {
    let user = current_user(&state.orm, &session).await?;
    let resp = profile_service::update_my_profile(&state.orm, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/profiles/me",
    responses(
        (status = 200, description = "Delete the caller's profile"),
        (status = 404, description = "No profile yet"),
    ),
    security(("cookie_auth" = [])),
    tag = "Profiles"
)]
pub async fn delete_my_profile(
    State(state): State<AppState>,
    session: AuthSession,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let user = current_user(&state.orm, &session).await?;
    let resp = profile_service::delete_my_profile(&state.orm, &user).await?;
    Ok(Json(resp))
}
