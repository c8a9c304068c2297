use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{ApiKey, ApiKeyValue, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        addresses::AddressList,
        auth::TokenData,
        carts::CartWithItems,
        categories::CategoryList,
        coupons::CouponList,
        orders::{OrderList, OrderWithProducts},
        products::ProductList,
        profiles::ProfileList,
        reviews::ReviewList,
        users::UserList,
    },
    entity::{reviews::Rating, users::Role},
    models::{
        Address, Cart, CartItem, Category, Coupon, Order, OrderProduct, Product, Profile, Review,
        User,
    },
    response::{ApiResponse, ErrorData, Meta},
    routes::{
        addresses, auth, carts, categories, coupons, health, orders, params, products, profiles,
        reviews, users,
    },
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "cookie_auth",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("access_token"))),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        auth::login,
        users::create_user,
        users::create_super_admin,
        users::activate_admin,
        users::deactivate_admin,
        users::deactivate_user,
        users::get_users,
        users::get_user,
        users::update_user,
        users::delete_user,
        categories::create_category,
        categories::get_categories,
        categories::get_category,
        categories::get_category_products,
        categories::update_category,
        categories::delete_category,
        products::create_product,
        products::list_products,
        products::get_product,
        products::update_product,
        products::delete_product,
        coupons::create_coupon,
        coupons::get_coupons,
        coupons::get_coupon,
        coupons::update_coupon,
        coupons::delete_coupon,
        reviews::create_review,
        reviews::get_product_reviews,
        reviews::get_review,
        reviews::update_review,
        reviews::delete_review,
        carts::create_cart,
        carts::get_my_cart,
        carts::delete_my_cart,
        carts::add_item,
        carts::update_item,
        carts::remove_item,
        orders::create_order,
        orders::get_my_orders,
        orders::get_order,
        orders::delete_order,
        orders::add_product,
        orders::update_product_quantity,
        orders::remove_product,
        profiles::create_profile,
        profiles::get_profiles,
        profiles::get_my_profile,
        profiles::update_my_profile,
        profiles::delete_my_profile,
        addresses::create_address,
        addresses::get_my_addresses,
        addresses::get_address,
        addresses::update_address,
        addresses::delete_address,
    ),
    components(
        schemas(
            User,
            Profile,
            Address,
            Category,
            Product,
            Cart,
            CartItem,
            Order,
            OrderProduct,
            Coupon,
            Review,
            Role,
            Rating,
            TokenData,
            UserList,
            CategoryList,
            ProductList,
            CouponList,
            ReviewList,
            CartWithItems,
            OrderList,
            OrderWithProducts,
            ProfileList,
            AddressList,
            params::Pagination,
            Meta,
            ErrorData,
            ApiResponse<User>,
            ApiResponse<Product>,
            ApiResponse<Coupon>,
            ApiResponse<TokenData>,
            ApiResponse<OrderWithProducts>,
            ApiResponse<CartWithItems>
        )
    ),
    security(
        ("cookie_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Users", description = "User and role management"),
        (name = "Categories", description = "Category endpoints"),
        (name = "Products", description = "Product endpoints"),
        (name = "Coupons", description = "Coupon endpoints"),
        (name = "Reviews", description = "Review endpoints"),
        (name = "Carts", description = "Cart endpoints"),
        (name = "Orders", description = "Order endpoints"),
        (name = "Profiles", description = "Profile endpoints"),
        (name = "Addresses", description = "Address endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
