pub mod addresses;
pub mod auth;
pub mod carts;
pub mod categories;
pub mod coupons;
pub mod orders;
pub mod products;
pub mod profiles;
pub mod reviews;
pub mod users;
