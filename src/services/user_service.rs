use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    auth::password::hash_password,
    db::OrmConn,
    dto::users::{CreateUserRequest, UpdateUserRequest, UserList},
    entity::users::{ActiveModel, Column, Entity as Users, Model as UserModel, Role},
    error::{AppError, AppResult},
    models::User,
    response::{ApiResponse, Meta},
    state::AppState,
};

const MIN_USERNAME_LEN: usize = 3;

fn validate_username(username: &str) -> AppResult<()> {
    if username.chars().count() < MIN_USERNAME_LEN {
        return Err(AppError::Validation(format!(
            "username must be at least {MIN_USERNAME_LEN} characters"
        )));
    }
    Ok(())
}

fn validate_email(email: &str) -> AppResult<()> {
    if !email.contains('@') {
        return Err(AppError::Validation("invalid email".to_string()));
    }
    Ok(())
}

pub async fn create_user(
    conn: &OrmConn,
    payload: CreateUserRequest,
) -> AppResult<ApiResponse<User>> {
    validate_username(&payload.username)?;
    validate_email(&payload.email)?;

    let user = ActiveModel {
        id: Set(Uuid::new_v4()),
        username: Set(payload.username),
        email: Set(payload.email),
        hashed_password: Set(hash_password(&payload.password)?),
        is_active: Set(true),
        role: Set(Role::User),
        created_at: NotSet,
    }
    .insert(conn)
    .await
    .map_err(duplicate_user_err)?;

    Ok(ApiResponse::success("User created", user.into(), None))
}

/// One-time bootstrap. Credentials come from the deployment config, never the
/// request; a second call conflicts.
pub async fn create_super_admin(state: &AppState) -> AppResult<ApiResponse<User>> {
    let txn = state.orm.begin().await?;

    let existing = Users::find()
        .filter(Column::Role.eq(Role::SuperAdmin))
        .one(&txn)
        .await?;
    if existing.is_some() {
        return Err(AppError::Conflict("Super admin already exists".to_string()));
    }

    let user = ActiveModel {
        id: Set(Uuid::new_v4()),
        username: Set(state.super_admin.username.clone()),
        email: Set(state.super_admin.email.clone()),
        hashed_password: Set(hash_password(&state.super_admin.password)?),
        is_active: Set(true),
        role: Set(Role::SuperAdmin),
        created_at: NotSet,
    }
    .insert(&txn)
    .await
    .map_err(duplicate_user_err)?;

    txn.commit().await?;
    tracing::info!(username = %user.username, "super admin bootstrapped");

    Ok(ApiResponse::success("Super admin created", user.into(), None))
}

pub async fn get_users(conn: &OrmConn) -> AppResult<ApiResponse<UserList>> {
    let items = Users::find()
        .order_by_asc(Column::CreatedAt)
        .all(conn)
        .await?
        .into_iter()
        .map(User::from)
        .collect::<Vec<_>>();

    let total = items.len() as i64;
    Ok(ApiResponse::success(
        "Users",
        UserList { items },
        Some(Meta::single_page(total)),
    ))
}

pub async fn get_user_by_username(conn: &OrmConn, username: &str) -> AppResult<ApiResponse<User>> {
    let user = find_by_username(conn, username).await?;
    Ok(ApiResponse::success("User", user.into(), None))
}

/// Partial update; absent fields keep their stored value. SUPER_ADMIN rows are
/// immutable through this surface.
pub async fn update_user(
    conn: &OrmConn,
    username: &str,
    payload: UpdateUserRequest,
) -> AppResult<ApiResponse<User>> {
    if let Some(new_username) = payload.username.as_deref() {
        validate_username(new_username)?;
    }
    if let Some(email) = payload.email.as_deref() {
        validate_email(email)?;
    }

    let txn = conn.begin().await?;
    let user = find_by_username(&txn, username).await?;
    if user.role.is_super_admin() {
        return Err(AppError::Forbidden);
    }

    let mut active: ActiveModel = user.into();
    if let Some(new_username) = payload.username {
        active.username = Set(new_username);
    }
    if let Some(email) = payload.email {
        active.email = Set(email);
    }
    if let Some(password) = payload.password {
        active.hashed_password = Set(hash_password(&password)?);
    }

    let user = active.update(&txn).await.map_err(duplicate_user_err)?;
    txn.commit().await?;

    Ok(ApiResponse::success("User updated", user.into(), None))
}

pub async fn delete_user(conn: &OrmConn, username: &str) -> AppResult<ApiResponse<serde_json::Value>> {
    let txn = conn.begin().await?;
    let user = find_by_username(&txn, username).await?;
    if user.role.is_super_admin() {
        return Err(AppError::Forbidden);
    }

    Users::delete_by_id(user.id).exec(&txn).await?;
    txn.commit().await?;

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

/// Grant or revoke the ADMIN role. Idempotent: setting the current role is a
/// successful no-op. SUPER_ADMIN can never be the target.
pub async fn change_admin_rights(
    conn: &OrmConn,
    username: &str,
    make_admin: bool,
) -> AppResult<ApiResponse<User>> {
    let txn = conn.begin().await?;
    let user = find_by_username(&txn, username).await?;
    if user.role.is_super_admin() {
        return Err(AppError::Forbidden);
    }

    let target = if make_admin { Role::Admin } else { Role::User };
    if user.role == target {
        return Ok(ApiResponse::success("Role unchanged", user.into(), None));
    }

    let mut active: ActiveModel = user.into();
    active.role = Set(target);
    let user = active.update(&txn).await?;
    txn.commit().await?;

    tracing::info!(username = %user.username, role = ?user.role, "role changed");
    Ok(ApiResponse::success("Role updated", user.into(), None))
}

/// Toggle the active flag. SUPER_ADMIN can never be the target.
pub async fn change_user_activity(
    conn: &OrmConn,
    username: &str,
) -> AppResult<ApiResponse<User>> {
    let txn = conn.begin().await?;
    let user = find_by_username(&txn, username).await?;
    if user.role.is_super_admin() {
        return Err(AppError::Forbidden);
    }

    let was_active = user.is_active;
    let mut active: ActiveModel = user.into();
    active.is_active = Set(!was_active);
    let user = active.update(&txn).await?;
    txn.commit().await?;

    Ok(ApiResponse::success("Activity changed", user.into(), None))
}

async fn find_by_username<C: sea_orm::ConnectionTrait>(
    conn: &C,
    username: &str,
) -> AppResult<UserModel> {
    Users::find()
        .filter(Column::Username.eq(username))
        .one(conn)
        .await?
        .ok_or(AppError::NotFound)
}

fn duplicate_user_err(err: sea_orm::DbErr) -> AppError {
    if matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ) {
        return AppError::Conflict("User with that username or email already exists".to_string());
    }
    err.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_usernames_are_rejected() {
        assert!(matches!(
            validate_username("ab"),
            Err(AppError::Validation(_))
        ));
        assert!(validate_username("abc").is_ok());
    }

    #[test]
    fn email_needs_at_sign() {
        assert!(validate_email("a@b.c").is_ok());
        assert!(matches!(
            validate_email("nope"),
            Err(AppError::Validation(_))
        ));
    }
}
