use axum::Router;

use crate::state::AppState;

pub mod addresses;
pub mod auth;
pub mod carts;
pub mod categories;
pub mod coupons;
pub mod doc;
pub mod health;
pub mod orders;
pub mod params;
pub mod products;
pub mod profiles;
pub mod reviews;
pub mod users;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/users", users::router())
        .nest("/categories", categories::router())
        .nest("/products", products::router())
        .nest("/coupons", coupons::router())
        .nest("/reviews", reviews::router())
        .nest("/carts", carts::router())
        .nest("/orders", orders::router())
        .nest("/profiles", profiles::router())
        .nest("/addresses", addresses::router())
}
