use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{Cart, CartItem};

#[derive(Deserialize, Debug, ToSchema)]
pub struct AddCartItemRequest {
    pub product_id: Uuid,
    pub quantity: i32,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct UpdateCartItemRequest {
    pub quantity: Option<i32>,
}

#[derive(Serialize, ToSchema)]
pub struct CartWithItems {
    pub cart: Cart,
    pub items: Vec<CartItem>,
}
