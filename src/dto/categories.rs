use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Category;

#[derive(Deserialize, Debug, ToSchema)]
pub struct CreateCategoryRequest {
    pub name: String,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct CategoryList {
    pub items: Vec<Category>,
}
