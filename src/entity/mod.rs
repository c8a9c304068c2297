pub mod addresses;
pub mod cart_items;
pub mod carts;
pub mod categories;
pub mod coupons;
pub mod order_products;
pub mod orders;
pub mod products;
pub mod profiles;
pub mod reviews;
pub mod users;

pub use addresses::Entity as Addresses;
pub use cart_items::Entity as CartItems;
pub use carts::Entity as Carts;
pub use categories::Entity as Categories;
pub use coupons::Entity as Coupons;
pub use order_products::Entity as OrderProducts;
pub use orders::Entity as Orders;
pub use products::Entity as Products;
pub use profiles::Entity as Profiles;
pub use reviews::Entity as Reviews;
pub use users::Entity as Users;
