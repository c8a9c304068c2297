use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use uuid::Uuid;

use crate::{
    db::OrmConn,
    dto::addresses::{AddressList, CreateAddressRequest, UpdateAddressRequest},
    entity::{
        addresses::{ActiveModel, Column, Entity as Addresses, Model as AddressModel},
        users::Model as UserModel,
    },
    error::{AppError, AppResult},
    models::Address,
    response::{ApiResponse, Meta},
    services::profile_service::find_profile,
};

/// Addresses hang off the caller's profile; the profile_id in the payload must
/// be the caller's own.
pub async fn create_address(
    conn: &OrmConn,
    user: &UserModel,
    payload: CreateAddressRequest,
) -> AppResult<ApiResponse<Address>> {
    let txn = conn.begin().await?;
    let profile = find_profile(&txn, user).await?;
    if profile.id != payload.profile_id {
        return Err(AppError::Forbidden);
    }

    let address = ActiveModel {
        id: Set(Uuid::new_v4()),
        profile_id: Set(profile.id),
        street: Set(payload.street),
        city: Set(payload.city),
        state: Set(payload.state),
        postal_code: Set(payload.postal_code),
        country: Set(payload.country),
        created_at: NotSet,
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;
    Ok(ApiResponse::success("Address created", address.into(), None))
}

pub async fn get_my_addresses(
    conn: &OrmConn,
    user: &UserModel,
) -> AppResult<ApiResponse<AddressList>> {
    let profile = find_profile(conn, user).await?;

    let items = Addresses::find()
        .filter(Column::ProfileId.eq(profile.id))
        .order_by_asc(Column::CreatedAt)
        .all(conn)
        .await?
        .into_iter()
        .map(Address::from)
        .collect::<Vec<_>>();

    let total = items.len() as i64;
    Ok(ApiResponse::success(
        "Addresses",
        AddressList { items },
        Some(Meta::single_page(total)),
    ))
}

pub async fn get_address(
    conn: &OrmConn,
    user: &UserModel,
    id: Uuid,
) -> AppResult<ApiResponse<Address>> {
    let address = find_own_address(conn, user, id).await?;
    Ok(ApiResponse::success("Address", address.into(), None))
}

pub async fn update_address(
    conn: &OrmConn,
    user: &UserModel,
    id: Uuid,
    payload: UpdateAddressRequest,
) -> AppResult<ApiResponse<Address>> {
    let txn = conn.begin().await?;
    let address = find_own_address(&txn, user, id).await?;

    let mut active: ActiveModel = address.into();
    if let Some(street) = payload.street {
        active.street = Set(street);
    }
    if let Some(city) = payload.city {
        active.city = Set(city);
    }
    if let Some(state) = payload.state {
        active.state = Set(state);
    }
    if let Some(postal_code) = payload.postal_code {
        active.postal_code = Set(postal_code);
    }
    if let Some(country) = payload.country {
        active.country = Set(country);
    }

    let address = active.update(&txn).await?;
    txn.commit().await?;

    Ok(ApiResponse::success("Address updated", address.into(), None))
}

pub async fn delete_address(
    conn: &OrmConn,
    user: &UserModel,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let txn = conn.begin().await?;
    let address = find_own_address(&txn, user, id).await?;

    Addresses::delete_by_id(address.id).exec(&txn).await?;
    txn.commit().await?;

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

async fn find_own_address<C: ConnectionTrait>(
    conn: &C,
    user: &UserModel,
    id: Uuid,
) -> AppResult<AddressModel> {
    let profile = find_profile(conn, user).await?;
    Addresses::find_by_id(id)
        .filter(Column::ProfileId.eq(profile.id))
        .one(conn)
        .await?
        .ok_or(AppError::NotFound)
}
