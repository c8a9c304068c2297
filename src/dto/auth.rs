use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Login payload, form-encoded like an OAuth2 password grant.
#[derive(Deserialize, Debug, ToSchema)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TokenData {
    pub access_token: String,
    pub token_type: String,
}
