use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::Address;

#[derive(Deserialize, Debug, ToSchema)]
pub struct CreateAddressRequest {
    pub profile_id: Uuid,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: i32,
    pub country: String,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct UpdateAddressRequest {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<i32>,
    pub country: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct AddressList {
    pub items: Vec<Address>,
}
