use axum::{
    extract::{FromRef, FromRequestParts},
    http::header,
};
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

use crate::{
    auth::token::Claims,
    entity::users::{self, Column, Entity as Users},
    error::{AppError, AppResult},
    state::AppState,
};

pub const ACCESS_TOKEN_COOKIE: &str = "access_token";

/// Verified caller identity, resolved from the `access_token` cookie. Holding
/// one proves the token checked out; role checks still hit the database.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub username: String,
}

impl<S> FromRequestParts<S> for AuthSession
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &S,
    ) -> Result<Self, Self::Rejection> {
        let state = AppState::from_ref(state);

        let cookie_header = parts
            .headers
            .get(header::COOKIE)
            .and_then(|value| value.to_str().ok())
            .ok_or(AppError::Unauthenticated)?;

        let raw = cookie_value(cookie_header, ACCESS_TOKEN_COOKIE)
            .ok_or(AppError::Unauthenticated)?;
        let token = strip_bearer(raw).ok_or(AppError::Unauthenticated)?;

        let claims: Claims = state.tokens.verify(token)?;
        Ok(AuthSession {
            username: claims.sub,
        })
    }
}

fn cookie_value<'a>(header: &'a str, name: &str) -> Option<&'a str> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then_some(value)
    })
}

/// The cookie holds `Bearer <token>`, quoted because of the embedded space.
fn strip_bearer(value: &str) -> Option<&str> {
    let value = value.trim_matches('"');
    value.strip_prefix("Bearer ").map(str::trim)
}

/// Resolve the session's user row. A verified token whose subject no longer
/// exists is treated as not authenticated.
pub async fn current_user<C: ConnectionTrait>(
    conn: &C,
    session: &AuthSession,
) -> AppResult<users::Model> {
    Users::find()
        .filter(Column::Username.eq(session.username.as_str()))
        .one(conn)
        .await?
        .ok_or(AppError::Unauthenticated)
}

pub async fn require_admin<C: ConnectionTrait>(
    conn: &C,
    session: &AuthSession,
) -> AppResult<users::Model> {
    let user = current_user(conn, session).await?;
    if !user.role.is_admin() {
        return Err(AppError::Forbidden);
    }
    Ok(user)
}

pub async fn require_super_admin<C: ConnectionTrait>(
    conn: &C,
    session: &AuthSession,
) -> AppResult<users::Model> {
    let user = current_user(conn, session).await?;
    if !user.role.is_super_admin() {
        return Err(AppError::Forbidden);
    }
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_cookie_among_others() {
        let header = "theme=dark; access_token=\"Bearer abc.def.ghi\"; lang=en";
        let raw = cookie_value(header, ACCESS_TOKEN_COOKIE).unwrap();
        assert_eq!(strip_bearer(raw).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn unquoted_value_is_accepted() {
        assert_eq!(strip_bearer("Bearer tok"), Some("tok"));
    }

    #[test]
    fn wrong_scheme_is_rejected() {
        assert_eq!(strip_bearer("Basic dXNlcg=="), None);
        assert_eq!(strip_bearer("bearer tok"), None);
    }

    #[test]
    fn missing_cookie_yields_none() {
        assert!(cookie_value("theme=dark; lang=en", ACCESS_TOKEN_COOKIE).is_none());
    }
}
