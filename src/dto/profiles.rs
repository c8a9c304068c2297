use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Profile;

#[derive(Deserialize, Debug, ToSchema)]
pub struct CreateProfileRequest {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct UpdateProfileRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ProfileList {
    pub items: Vec<Profile>,
}
