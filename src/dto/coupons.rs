use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Coupon;

#[derive(Deserialize, Debug, ToSchema)]
pub struct CreateCouponRequest {
    pub code: String,
    pub discount: i32,
    pub valid_from: Option<DateTime<Utc>>,
    pub valid_until: Option<DateTime<Utc>>,
    pub active: bool,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct UpdateCouponRequest {
    pub code: Option<String>,
    pub discount: Option<i32>,
    pub valid_from: Option<DateTime<Utc>>,
    pub valid_until: Option<DateTime<Utc>>,
    pub active: Option<bool>,
}

#[derive(Serialize, ToSchema)]
pub struct CouponList {
    pub items: Vec<Coupon>,
}
