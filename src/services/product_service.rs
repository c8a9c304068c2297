use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    db::OrmConn,
    dto::products::{CreateProductRequest, ProductList, UpdateProductRequest},
    entity::{
        categories::Entity as Categories,
        products::{ActiveModel, Column, Entity as Products},
    },
    error::{AppError, AppResult},
    models::Product,
    response::{ApiResponse, Meta},
    routes::params::Pagination,
};

pub async fn create_product(
    conn: &OrmConn,
    payload: CreateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    if payload.price < 0 {
        return Err(AppError::Validation("price must not be negative".to_string()));
    }
    if payload.quantity < 0 {
        return Err(AppError::Validation("quantity must not be negative".to_string()));
    }

    let txn = conn.begin().await?;

    // Fail the foreign key up front with a useful status.
    Categories::find_by_id(payload.category_id)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound)?;

    let product = ActiveModel {
        id: Set(Uuid::new_v4()),
        category_id: Set(payload.category_id),
        name: Set(payload.name),
        description: Set(payload.description),
        price: Set(payload.price),
        quantity: Set(payload.quantity),
        available: Set(payload.available.unwrap_or(true)),
        created_at: NotSet,
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;
    Ok(ApiResponse::success("Product created", product.into(), None))
}

pub async fn list_products(
    conn: &OrmConn,
    pagination: Pagination,
) -> AppResult<ApiResponse<ProductList>> {
    let (page, limit, offset) = pagination.normalize();

    let finder = Products::find().order_by_desc(Column::CreatedAt);
    let total = finder.clone().count(conn).await? as i64;

    let items = finder
        .limit(limit as u64)
        .offset(offset as u64)
        .all(conn)
        .await?
        .into_iter()
        .map(Product::from)
        .collect();

    Ok(ApiResponse::success(
        "Products",
        ProductList { items },
        Some(Meta::new(page, limit, total)),
    ))
}

pub async fn get_product(conn: &OrmConn, id: Uuid) -> AppResult<ApiResponse<Product>> {
    let product = Products::find_by_id(id)
        .one(conn)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Product", product.into(), None))
}

pub async fn list_products_by_category(
    conn: &OrmConn,
    category_id: Uuid,
) -> AppResult<ApiResponse<ProductList>> {
    let items = Products::find()
        .filter(Column::CategoryId.eq(category_id))
        .order_by_desc(Column::CreatedAt)
        .all(conn)
        .await?
        .into_iter()
        .map(Product::from)
        .collect::<Vec<_>>();

    let total = items.len() as i64;
    Ok(ApiResponse::success(
        "Products",
        ProductList { items },
        Some(Meta::single_page(total)),
    ))
}

pub async fn update_product(
    conn: &OrmConn,
    id: Uuid,
    payload: UpdateProductRequest,
) -> AppResult<ApiResponse<Product>> {
    if matches!(payload.price, Some(p) if p < 0) {
        return Err(AppError::Validation("price must not be negative".to_string()));
    }
    if matches!(payload.quantity, Some(q) if q < 0) {
        return Err(AppError::Validation("quantity must not be negative".to_string()));
    }

    let txn = conn.begin().await?;
    let existing = Products::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: ActiveModel = existing.into();
    if let Some(category_id) = payload.category_id {
        Categories::find_by_id(category_id)
            .one(&txn)
            .await?
            .ok_or(AppError::NotFound)?;
        active.category_id = Set(category_id);
    }
    if let Some(name) = payload.name {
        active.name = Set(name);
    }
    if let Some(description) = payload.description {
        active.description = Set(description);
    }
    if let Some(price) = payload.price {
        active.price = Set(price);
    }
    if let Some(quantity) = payload.quantity {
        active.quantity = Set(quantity);
    }
    if let Some(available) = payload.available {
        active.available = Set(available);
    }

    let product = active.update(&txn).await?;
    txn.commit().await?;

    Ok(ApiResponse::success("Product updated", product.into(), None))
}

pub async fn delete_product(conn: &OrmConn, id: Uuid) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = Products::delete_by_id(id).exec(conn).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}
