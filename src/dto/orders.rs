use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{Order, OrderProduct};

#[derive(Deserialize, Debug, ToSchema)]
pub struct CreateOrderRequest {
    /// Attached as-is; the coupon's window and active flag are not checked.
    pub coupon_code: Option<String>,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct AddOrderProductRequest {
    pub product_id: Uuid,
    pub quantity: i32,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct UpdateOrderProductRequest {
    pub quantity: Option<i32>,
}

#[derive(Serialize, ToSchema)]
pub struct OrderWithProducts {
    pub order: Order,
    pub products: Vec<OrderProduct>,
}

#[derive(Serialize, ToSchema)]
pub struct OrderList {
    pub items: Vec<Order>,
}
