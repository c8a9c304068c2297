use chrono::{Duration, Utc};
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set, TransactionTrait};
use uuid::Uuid;

use crate::{
    db::OrmConn,
    dto::coupons::{CouponList, CreateCouponRequest, UpdateCouponRequest},
    entity::coupons::{ActiveModel, Column, Entity as Coupons},
    error::{AppError, AppResult},
    models::Coupon,
    response::{ApiResponse, Meta},
};

/// Discount is a percentage, bounds inclusive.
fn validate_discount(discount: i32) -> AppResult<()> {
    if !(0..=100).contains(&discount) {
        return Err(AppError::Validation(
            "discount must be between 0 and 100".to_string(),
        ));
    }
    Ok(())
}

pub async fn create_coupon(
    conn: &OrmConn,
    payload: CreateCouponRequest,
) -> AppResult<ApiResponse<Coupon>> {
    validate_discount(payload.discount)?;

    let now = Utc::now();
    let coupon = ActiveModel {
        id: Set(Uuid::new_v4()),
        code: Set(payload.code),
        discount: Set(payload.discount),
        valid_from: Set(payload.valid_from.unwrap_or(now).into()),
        valid_until: Set(payload
            .valid_until
            .unwrap_or(now + Duration::days(3))
            .into()),
        active: Set(payload.active),
        created_at: NotSet,
    }
    .insert(conn)
    .await?;

    Ok(ApiResponse::success("Coupon created", coupon.into(), None))
}

pub async fn get_coupons(conn: &OrmConn) -> AppResult<ApiResponse<CouponList>> {
    let items = Coupons::find()
        .order_by_asc(Column::CreatedAt)
        .all(conn)
        .await?
        .into_iter()
        .map(Coupon::from)
        .collect::<Vec<_>>();

    let total = items.len() as i64;
    Ok(ApiResponse::success(
        "Coupons",
        CouponList { items },
        Some(Meta::single_page(total)),
    ))
}

pub async fn get_coupon(conn: &OrmConn, id: Uuid) -> AppResult<ApiResponse<Coupon>> {
    let coupon = Coupons::find_by_id(id)
        .one(conn)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Coupon", coupon.into(), None))
}

pub async fn update_coupon(
    conn: &OrmConn,
    id: Uuid,
    payload: UpdateCouponRequest,
) -> AppResult<ApiResponse<Coupon>> {
    if let Some(discount) = payload.discount {
        validate_discount(discount)?;
    }

    let txn = conn.begin().await?;
    let existing = Coupons::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: ActiveModel = existing.into();
    if let Some(code) = payload.code {
        active.code = Set(code);
    }
    if let Some(discount) = payload.discount {
        active.discount = Set(discount);
    }
    if let Some(valid_from) = payload.valid_from {
        active.valid_from = Set(valid_from.into());
    }
    if let Some(valid_until) = payload.valid_until {
        active.valid_until = Set(valid_until.into());
    }
    if let Some(is_active) = payload.active {
        active.active = Set(is_active);
    }

    let coupon = active.update(&txn).await?;
    txn.commit().await?;

    Ok(ApiResponse::success("Coupon updated", coupon.into(), None))
}

pub async fn delete_coupon(conn: &OrmConn, id: Uuid) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Coupons::delete_by_id(id).exec(conn).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discount_bounds_are_inclusive() {
        assert!(validate_discount(0).is_ok());
        assert!(validate_discount(100).is_ok());
        assert!(matches!(
            validate_discount(101),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            validate_discount(-1),
            Err(AppError::Validation(_))
        ));
    }
}
