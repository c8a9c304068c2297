use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use uuid::Uuid;

use crate::{
    db::OrmConn,
    dto::carts::{AddCartItemRequest, CartWithItems, UpdateCartItemRequest},
    entity::{
        cart_items::{
            ActiveModel as CartItemActive, Column as CartItemCol, Entity as CartItems,
        },
        carts::{ActiveModel as CartActive, Column as CartCol, Entity as Carts, Model as CartModel},
        products::Entity as Products,
    },
    entity::users::Model as UserModel,
    error::{AppError, AppResult},
    models::{Cart, CartItem},
    response::{ApiResponse, Meta},
};

/// One cart per user; a second create conflicts on the unique user_id.
pub async fn create_cart(conn: &OrmConn, user: &UserModel) -> AppResult<ApiResponse<Cart>> {
    let cart = CartActive {
        id: Set(Uuid::new_v4()),
        user_id: Set(user.id),
        created_at: NotSet,
    }
    .insert(conn)
    .await
    .map_err(|err| {
        if matches!(
            err.sql_err(),
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
        ) {
            AppError::Conflict("Cart already exists".to_string())
        } else {
            err.into()
        }
    })?;

    Ok(ApiResponse::success("Cart created", cart.into(), None))
}

pub async fn get_my_cart(conn: &OrmConn, user: &UserModel) -> AppResult<ApiResponse<CartWithItems>> {
    let cart = find_cart(conn, user).await?;

    let items = CartItems::find()
        .filter(CartItemCol::CartId.eq(cart.id))
        .order_by_asc(CartItemCol::CreatedAt)
        .all(conn)
        .await?
        .into_iter()
        .map(CartItem::from)
        .collect();

    Ok(ApiResponse::success(
        "Cart",
        CartWithItems {
            cart: cart.into(),
            items,
        },
        Some(Meta::empty()),
    ))
}

pub async fn delete_my_cart(
    conn: &OrmConn,
    user: &UserModel,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let txn = conn.begin().await?;
    let cart = find_cart(&txn, user).await?;

    CartItems::delete_many()
        .filter(CartItemCol::CartId.eq(cart.id))
        .exec(&txn)
        .await?;
    Carts::delete_by_id(cart.id).exec(&txn).await?;
    txn.commit().await?;

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

/// Adding a product already in the cart bumps its quantity.
pub async fn add_item(
    conn: &OrmConn,
    user: &UserModel,
    payload: AddCartItemRequest,
) -> AppResult<ApiResponse<CartItem>> {
    if payload.quantity <= 0 {
        return Err(AppError::Validation("quantity must be positive".to_string()));
    }

    let txn = conn.begin().await?;
    let cart = find_cart(&txn, user).await?;

    Products::find_by_id(payload.product_id)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound)?;

    let existing = CartItems::find()
        .filter(CartItemCol::CartId.eq(cart.id))
        .filter(CartItemCol::ProductId.eq(payload.product_id))
        .one(&txn)
        .await?;

    let item = match existing {
        Some(item) => {
            let quantity = item
                .quantity
                .checked_add(payload.quantity)
                .ok_or_else(|| AppError::Validation("quantity too large".to_string()))?;
            let mut active: CartItemActive = item.into();
            active.quantity = Set(quantity);
            active.update(&txn).await?
        }
        None => {
            CartItemActive {
                id: Set(Uuid::new_v4()),
                cart_id: Set(cart.id),
                product_id: Set(payload.product_id),
                quantity: Set(payload.quantity),
                created_at: NotSet,
            }
            .insert(&txn)
            .await?
        }
    };

    txn.commit().await?;
    Ok(ApiResponse::success("Item added", item.into(), None))
}

pub async fn update_item(
    conn: &OrmConn,
    user: &UserModel,
    item_id: Uuid,
    payload: UpdateCartItemRequest,
) -> AppResult<ApiResponse<CartItem>> {
    if matches!(payload.quantity, Some(q) if q <= 0) {
        return Err(AppError::Validation("quantity must be positive".to_string()));
    }

    let txn = conn.begin().await?;
    let cart = find_cart(&txn, user).await?;

    let item = CartItems::find_by_id(item_id)
        .filter(CartItemCol::CartId.eq(cart.id))
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: CartItemActive = item.into();
    if let Some(quantity) = payload.quantity {
        active.quantity = Set(quantity);
    }

    let item = active.update(&txn).await?;
    txn.commit().await?;

    Ok(ApiResponse::success("Item updated", item.into(), None))
}

pub async fn remove_item(
    conn: &OrmConn,
    user: &UserModel,
    item_id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let txn = conn.begin().await?;
    let cart = find_cart(&txn, user).await?;

    let result = CartItems::delete_many()
        .filter(CartItemCol::Id.eq(item_id))
        .filter(CartItemCol::CartId.eq(cart.id))
        .exec(&txn)
        .await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    txn.commit().await?;
    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

async fn find_cart<C: ConnectionTrait>(conn: &C, user: &UserModel) -> AppResult<CartModel> {
    Carts::find()
        .filter(CartCol::UserId.eq(user.id))
        .one(conn)
        .await?
        .ok_or(AppError::NotFound)
}
