use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entity::reviews::Rating;
use crate::models::Review;

#[derive(Deserialize, Debug, ToSchema)]
pub struct CreateReviewRequest {
    pub product_id: Uuid,
    pub review_text: String,
    pub rating: Rating,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct UpdateReviewRequest {
    pub review_text: Option<String>,
    pub rating: Option<Rating>,
}

#[derive(Serialize, ToSchema)]
pub struct ReviewList {
    pub items: Vec<Review>,
}
