use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, EntityTrait, QueryOrder, Set, TransactionTrait};
use uuid::Uuid;

use crate::{
    db::OrmConn,
    dto::categories::{CategoryList, CreateCategoryRequest, UpdateCategoryRequest},
    entity::categories::{ActiveModel, Column, Entity as Categories},
    error::{AppError, AppResult},
    models::Category,
    response::{ApiResponse, Meta},
};

pub async fn create_category(
    conn: &OrmConn,
    payload: CreateCategoryRequest,
) -> AppResult<ApiResponse<Category>> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("category name must not be empty".to_string()));
    }

    let category = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name),
        created_at: NotSet,
    }
    .insert(conn)
    .await?;

    Ok(ApiResponse::success("Category created", category.into(), None))
}

pub async fn get_categories(conn: &OrmConn) -> AppResult<ApiResponse<CategoryList>> {
    let items = Categories::find()
        .order_by_asc(Column::Name)
        .all(conn)
        .await?
        .into_iter()
        .map(Category::from)
        .collect::<Vec<_>>();

    let total = items.len() as i64;
    Ok(ApiResponse::success(
        "Categories",
        CategoryList { items },
        Some(Meta::single_page(total)),
    ))
}

pub async fn get_category(conn: &OrmConn, id: Uuid) -> AppResult<ApiResponse<Category>> {
    let category = Categories::find_by_id(id)
        .one(conn)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Category", category.into(), None))
}

pub async fn update_category(
    conn: &OrmConn,
    id: Uuid,
    payload: UpdateCategoryRequest,
) -> AppResult<ApiResponse<Category>> {
    let txn = conn.begin().await?;
    let existing = Categories::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: ActiveModel = existing.into();
    if let Some(name) = payload.name {
        if name.trim().is_empty() {
            return Err(AppError::Validation("category name must not be empty".to_string()));
        }
        active.name = Set(name);
    }

    let category = active.update(&txn).await?;
    txn.commit().await?;

    Ok(ApiResponse::success("Category updated", category.into(), None))
}

pub async fn delete_category(conn: &OrmConn, id: Uuid) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Categories::delete_by_id(id).exec(conn).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
