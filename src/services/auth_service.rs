use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

use crate::{
    auth::password::verify_password,
    dto::auth::{LoginForm, TokenData},
    entity::users::{Column, Entity as Users},
    error::{AppError, AppResult},
    state::AppState,
};

/// Authenticate a username/password pair and issue an access token. Unknown
/// user and wrong password are indistinguishable to the caller; an inactive
/// account is reported separately.
pub async fn login(state: &AppState, payload: LoginForm) -> AppResult<TokenData> {
    let LoginForm { username, password } = payload;

    let user = Users::find()
        .filter(Column::Username.eq(username.as_str()))
        .one(&state.orm)
        .await?
        .ok_or(AppError::Unauthenticated)?;

    if !verify_password(&password, &user.hashed_password) {
        return Err(AppError::Unauthenticated);
    }

    if !user.is_active {
        return Err(AppError::Forbidden);
    }

    let token = state.tokens.issue(&user)?;
    tracing::info!(username = %user.username, "user logged in");

    Ok(TokenData {
        access_token: token,
        token_type: "Bearer".to_string(),
    })
}
