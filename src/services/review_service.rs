use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    db::OrmConn,
    dto::reviews::{CreateReviewRequest, ReviewList, UpdateReviewRequest},
    entity::{
        products::Entity as Products,
        reviews::{ActiveModel, Column, Entity as Reviews},
    },
    error::{AppError, AppResult},
    models::Review,
    response::{ApiResponse, Meta},
};

pub async fn create_review(
    conn: &OrmConn,
    payload: CreateReviewRequest,
) -> AppResult<ApiResponse<Review>> {
    if payload.review_text.trim().is_empty() {
        return Err(AppError::Validation("review text must not be empty".to_string()));
    }

    let txn = conn.begin().await?;
    Products::find_by_id(payload.product_id)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound)?;

    let review = ActiveModel {
        id: Set(Uuid::new_v4()),
        product_id: Set(payload.product_id),
        review_text: Set(payload.review_text),
        rating: Set(payload.rating),
        created_at: NotSet,
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;
    Ok(ApiResponse::success("Review created", review.into(), None))
}

pub async fn get_reviews_for_product(
    conn: &OrmConn,
    product_id: Uuid,
) -> AppResult<ApiResponse<ReviewList>> {
    let items = Reviews::find()
        .filter(Column::ProductId.eq(product_id))
        .order_by_desc(Column::CreatedAt)
        .all(conn)
        .await?
        .into_iter()
        .map(Review::from)
        .collect::<Vec<_>>();

    let total = items.len() as i64;
    Ok(ApiResponse::success(
        "Reviews",
        ReviewList { items },
        Some(Meta::single_page(total)),
    ))
}

pub async fn get_review(conn: &OrmConn, id: Uuid) -> AppResult<ApiResponse<Review>> {
    let review = Reviews::find_by_id(id)
        .one(conn)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Review", review.into(), None))
}

pub async fn update_review(
    conn: &OrmConn,
    id: Uuid,
    payload: UpdateReviewRequest,
) -> AppResult<ApiResponse<Review>> {
    let txn = conn.begin().await?;
    let existing = Reviews::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: ActiveModel = existing.into();
    if let Some(review_text) = payload.review_text {
        if review_text.trim().is_empty() {
            return Err(AppError::Validation("review text must not be empty".to_string()));
        }
        active.review_text = Set(review_text);
    }
    if let Some(rating) = payload.rating {
        active.rating = Set(rating);
    }

    let review = active.update(&txn).await?;
    txn.commit().await?;

    Ok(ApiResponse::success("Review updated", review.into(), None))
}

pub async fn delete_review(conn: &OrmConn, id: Uuid) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Reviews::delete_by_id(id).exec(conn).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
