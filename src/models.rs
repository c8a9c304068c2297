use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entity;
use crate::entity::reviews::Rating;
use crate::entity::users::Role;

/// Public view of a user; the password digest never leaves the service layer.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub is_active: bool,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl From<entity::users::Model> for User {
    fn from(m: entity::users::Model) -> Self {
        Self {
            id: m.id,
            username: m.username,
            email: m.email,
            is_active: m.is_active,
            role: m.role,
            created_at: m.created_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Profile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<entity::profiles::Model> for Profile {
    fn from(m: entity::profiles::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            first_name: m.first_name,
            last_name: m.last_name,
            phone_number: m.phone_number,
            created_at: m.created_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Address {
    pub id: Uuid,
    pub profile_id: Uuid,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: i32,
    pub country: String,
    pub created_at: DateTime<Utc>,
}

impl From<entity::addresses::Model> for Address {
    fn from(m: entity::addresses::Model) -> Self {
        Self {
            id: m.id,
            profile_id: m.profile_id,
            street: m.street,
            city: m.city,
            state: m.state,
            postal_code: m.postal_code,
            country: m.country,
            created_at: m.created_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<entity::categories::Model> for Category {
    fn from(m: entity::categories::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            created_at: m.created_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub category_id: Uuid,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub quantity: i32,
    pub available: bool,
    pub created_at: DateTime<Utc>,
}

impl From<entity::products::Model> for Product {
    fn from(m: entity::products::Model) -> Self {
        Self {
            id: m.id,
            category_id: m.category_id,
            name: m.name,
            description: m.description,
            price: m.price,
            quantity: m.quantity,
            available: m.available,
            created_at: m.created_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Cart {
    pub id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<entity::carts::Model> for Cart {
    fn from(m: entity::carts::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            created_at: m.created_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CartItem {
    pub id: Uuid,
    pub cart_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
}

impl From<entity::cart_items::Model> for CartItem {
    fn from(m: entity::cart_items::Model) -> Self {
        Self {
            id: m.id,
            cart_id: m.cart_id,
            product_id: m.product_id,
            quantity: m.quantity,
            created_at: m.created_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    pub coupon_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<entity::orders::Model> for Order {
    fn from(m: entity::orders::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            coupon_id: m.coupon_id,
            created_at: m.created_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderProduct {
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub quantity: i32,
}

impl From<entity::order_products::Model> for OrderProduct {
    fn from(m: entity::order_products::Model) -> Self {
        Self {
            order_id: m.order_id,
            product_id: m.product_id,
            quantity: m.quantity,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Coupon {
    pub id: Uuid,
    pub code: String,
    pub discount: i32,
    pub valid_from: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<entity::coupons::Model> for Coupon {
    fn from(m: entity::coupons::Model) -> Self {
        Self {
            id: m.id,
            code: m.code,
            discount: m.discount,
            valid_from: m.valid_from.with_timezone(&Utc),
            valid_until: m.valid_until.with_timezone(&Utc),
            active: m.active,
            created_at: m.created_at.with_timezone(&Utc),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Review {
    pub id: Uuid,
    pub product_id: Uuid,
    pub review_text: String,
    pub rating: Rating,
    pub created_at: DateTime<Utc>,
}

impl From<entity::reviews::Model> for Review {
    fn from(m: entity::reviews::Model) -> Self {
        Self {
            id: m.id,
            product_id: m.product_id,
            review_text: m.review_text,
            rating: m.rating,
            created_at: m.created_at.with_timezone(&Utc),
        }
    }
}
