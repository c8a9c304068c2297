use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use uuid::Uuid;

use crate::{
    db::OrmConn,
    dto::profiles::{CreateProfileRequest, ProfileList, UpdateProfileRequest},
    entity::{
        profiles::{ActiveModel, Column, Entity as Profiles, Model as ProfileModel},
        users::Model as UserModel,
    },
    error::{AppError, AppResult},
    models::Profile,
    response::{ApiResponse, Meta},
};

/// One profile per user; a second create conflicts on the unique user_id.
pub async fn create_profile(
    conn: &OrmConn,
    user: &UserModel,
    payload: CreateProfileRequest,
) -> AppResult<ApiResponse<Profile>> {
    let profile = ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user.id),
        first_name: Set(payload.first_name),
        last_name: Set(payload.last_name),
        phone_number: Set(payload.phone_number),
        created_at: NotSet,
    }
    .insert(conn)
    .await
    .map_err(|err| {
        if matches!(
            err.sql_err(),
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
        ) {
            AppError::Conflict("Profile already exists".to_string())
        } else {
            err.into()
        }
    })?;

    Ok(ApiResponse::success("Profile created", profile.into(), None))
}

pub async fn get_profiles(conn: &OrmConn) -> AppResult<ApiResponse<ProfileList>> {
    let items = Profiles::find()
        .order_by_asc(Column::CreatedAt)
        .all(conn)
        .await?
        .into_iter()
        .map(Profile::from)
        .collect::<Vec<_>>();

    let total = items.len() as i64;
    Ok(ApiResponse::success(
        "Profiles",
        ProfileList { items },
        Some(Meta::single_page(total)),
    ))
}

pub async fn get_my_profile(conn: &OrmConn, user: &UserModel) -> AppResult<ApiResponse<Profile>> {
    let profile = find_profile(conn, user).await?;
    Ok(ApiResponse::success("Profile", profile.into(), None))
}

pub async fn update_my_profile(
    conn: &OrmConn,
    user: &UserModel,
    payload: UpdateProfileRequest,
) -> AppResult<ApiResponse<Profile>> {
    let txn = conn.begin().await?;
    let profile = find_profile(&txn, user).await?;

    let mut active: ActiveModel = profile.into();
    if let Some(first_name) = payload.first_name {
        active.first_name = Set(first_name);
    }
    if let Some(last_name) = payload.last_name {
        active.last_name = Set(last_name);
    }
    if let Some(phone_number) = payload.phone_number {
        active.phone_number = Set(Some(phone_number));
    }

    let profile = active.update(&txn).await?;
    txn.commit().await?;

    Ok(ApiResponse::success("Profile updated", profile.into(), None))
}

pub async fn delete_my_profile(
    conn: &OrmConn,
    user: &UserModel,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let txn = conn.begin().await?;
    let profile = find_profile(&txn, user).await?;

    Profiles::delete_by_id(profile.id).exec(&txn).await?;
    txn.commit().await?;

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

pub async fn find_profile<C: ConnectionTrait>(
    conn: &C,
    user: &UserModel,
) -> AppResult<ProfileModel> {
    Profiles::find()
        .filter(Column::UserId.eq(user.id))
        .one(conn)
        .await?
        .ok_or(AppError::NotFound)
}
