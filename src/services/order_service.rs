use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use uuid::Uuid;

use crate::{
    db::OrmConn,
    dto::orders::{
        AddOrderProductRequest, CreateOrderRequest, OrderList, OrderWithProducts,
        UpdateOrderProductRequest,
    },
    entity::{
        coupons::{Column as CouponCol, Entity as Coupons},
        order_products::{
            ActiveModel as OrderProductActive, Column as OrderProductCol, Entity as OrderProducts,
        },
        orders::{ActiveModel as OrderActive, Column as OrderCol, Entity as Orders, Model as OrderModel},
        products::Entity as Products,
        users::Model as UserModel,
    },
    error::{AppError, AppResult},
    models::{Order, OrderProduct},
    response::{ApiResponse, Meta},
};

/// Create an empty order for the caller. A coupon code is resolved and
/// attached when given; its validity window and active flag are not consulted.
pub async fn create_order(
    conn: &OrmConn,
    user: &UserModel,
    payload: CreateOrderRequest,
) -> AppResult<ApiResponse<Order>> {
    let txn = conn.begin().await?;

    let coupon_id = match payload.coupon_code {
        Some(code) => {
            let coupon = Coupons::find()
                .filter(CouponCol::Code.eq(code.as_str()))
                .one(&txn)
                .await?
                .ok_or(AppError::NotFound)?;
            Some(coupon.id)
        }
        None => None,
    };

    let order = OrderActive {
        id: Set(Uuid::new_v4()),
        user_id: Set(user.id),
        coupon_id: Set(coupon_id),
        created_at: NotSet,
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;
    Ok(ApiResponse::success("Order created", order.into(), None))
}

pub async fn get_my_orders(conn: &OrmConn, user: &UserModel) -> AppResult<ApiResponse<OrderList>> {
    let items = Orders::find()
        .filter(OrderCol::UserId.eq(user.id))
        .order_by_desc(OrderCol::CreatedAt)
        .all(conn)
        .await?
        .into_iter()
        .map(Order::from)
        .collect::<Vec<_>>();

    let total = items.len() as i64;
    Ok(ApiResponse::success(
        "Orders",
        OrderList { items },
        Some(Meta::single_page(total)),
    ))
}

pub async fn get_order(
    conn: &OrmConn,
    user: &UserModel,
    id: Uuid,
) -> AppResult<ApiResponse<OrderWithProducts>> {
    let order = find_own_order(conn, user, id).await?;

    let products = OrderProducts::find()
        .filter(OrderProductCol::OrderId.eq(order.id))
        .all(conn)
        .await?
        .into_iter()
        .map(OrderProduct::from)
        .collect();

    Ok(ApiResponse::success(
        "Order",
        OrderWithProducts {
            order: order.into(),
            products,
        },
        Some(Meta::empty()),
    ))
}

/// Add a line item; (order, product) is the composite key, so adding the same
/// product again bumps the quantity instead.
pub async fn add_product(
    conn: &OrmConn,
    user: &UserModel,
    order_id: Uuid,
    payload: AddOrderProductRequest,
) -> AppResult<ApiResponse<OrderProduct>> {
    if payload.quantity <= 0 {
        return Err(AppError::Validation("quantity must be positive".to_string()));
    }

    let txn = conn.begin().await?;
    let order = find_own_order(&txn, user, order_id).await?;

    Products::find_by_id(payload.product_id)
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound)?;

    let existing = OrderProducts::find_by_id((order.id, payload.product_id))
        .one(&txn)
        .await?;

    let line = match existing {
        Some(line) => {
            let quantity = line
                .quantity
                .checked_add(payload.quantity)
                .ok_or_else(|| AppError::Validation("quantity too large".to_string()))?;
            let mut active: OrderProductActive = line.into();
            active.quantity = Set(quantity);
            active.update(&txn).await?
        }
        None => {
            OrderProductActive {
                order_id: Set(order.id),
                product_id: Set(payload.product_id),
                quantity: Set(payload.quantity),
            }
            .insert(&txn)
            .await?
        }
    };

    txn.commit().await?;
    Ok(ApiResponse::success("Product added", line.into(), None))
}

pub async fn update_product_quantity(
    conn: &OrmConn,
    user: &UserModel,
    order_id: Uuid,
    product_id: Uuid,
    payload: UpdateOrderProductRequest,
) -> AppResult<ApiResponse<OrderProduct>> {
    if matches!(payload.quantity, Some(q) if q <= 0) {
        return Err(AppError::Validation("quantity must be positive".to_string()));
    }

    let txn = conn.begin().await?;
    let order = find_own_order(&txn, user, order_id).await?;

    let line = OrderProducts::find_by_id((order.id, product_id))
        .one(&txn)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: OrderProductActive = line.into();
    if let Some(quantity) = payload.quantity {
        active.quantity = Set(quantity);
    }

    let line = active.update(&txn).await?;
    txn.commit().await?;

    Ok(ApiResponse::success("Line updated", line.into(), None))
}

pub async fn remove_product(
    conn: &OrmConn,
    user: &UserModel,
    order_id: Uuid,
    product_id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let txn = conn.begin().await?;
    let order = find_own_order(&txn, user, order_id).await?;

    let result = OrderProducts::delete_by_id((order.id, product_id))
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

pub async fn delete_order(
    conn: &OrmConn,
    user: &UserModel,
    id: Uuid,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let txn = conn.begin().await?;
    let order = find_own_order(&txn, user, id).await?;

    OrderProducts::delete_many()
        .filter(OrderProductCol::OrderId.eq(order.id))
        .exec(&txn)
        .await?;
    Orders::delete_by_id(order.id).exec(&txn).await?;
    txn.commit().await?;

    Ok(ApiResponse::success(
        "Deleted",
        serde_json::json!({}),
        Some(Meta::empty()),
    ))
}

/// Orders are only visible to their owner through this surface.
async fn find_own_order<C: ConnectionTrait>(
    conn: &C,
    user: &UserModel,
    id: Uuid,
) -> AppResult<OrderModel> {
    Orders::find_by_id(id)
        .filter(OrderCol::UserId.eq(user.id))
        .one(conn)
        .await?
        .ok_or(AppError::NotFound)
}
