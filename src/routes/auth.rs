use axum::{
    Form, Json, Router,
    extract::State,
    http::header,
    response::IntoResponse,
    routing::post,
};

use crate::{
    dto::auth::{LoginForm, TokenData},
    error::AppResult,
    middleware::auth::ACCESS_TOKEN_COOKIE,
    response::{ApiResponse, Meta},
    services::auth_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Login user, sets the access_token cookie", body = ApiResponse<TokenData>),
        (status = 401, description = "Invalid username or password"),
        (status = 403, description = "User inactive"),
    ),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Form(payload): Form<LoginForm>,
) -> AppResult<impl IntoResponse> {
    let data = auth_service::login(&state, payload).await?;

    // The embedded space in `Bearer <token>` requires a quoted cookie value.
    let cookie = format!(
        "{ACCESS_TOKEN_COOKIE}=\"Bearer {}\"; HttpOnly; Path=/",
        data.access_token
    );

    let body = Json(ApiResponse::success("Logged in", data, Some(Meta::empty())));
    Ok(([(header::SET_COOKIE, cookie)], body))
}
