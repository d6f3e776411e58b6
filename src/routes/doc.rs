use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{Credentials, LoginResponse, RegisterResponse, UserList},
        cart::{AddToCartRequest, AddToCartResponse, MessageResponse, RemoveFromCartResponse},
        orders::PlaceOrderResponse,
    },
    error::ErrorBody,
    models::{Cart, CartLine, Item, ItemStatus, Order, OrderCart, OrderStatus, User},
    routes::{auth, cart, health, items, orders},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        health::service_info,
        auth::register,
        auth::login,
        auth::users,
        items::list_items,
        cart::get_cart,
        cart::add_to_cart,
        cart::remove_from_cart,
        cart::clear_cart,
        orders::place_order,
        orders::list_orders
    ),
    components(
        schemas(
            Item,
            ItemStatus,
            CartLine,
            Cart,
            Order,
            OrderCart,
            OrderStatus,
            User,
            Credentials,
            RegisterResponse,
            LoginResponse,
            UserList,
            AddToCartRequest,
            AddToCartResponse,
            RemoveFromCartResponse,
            MessageResponse,
            PlaceOrderResponse,
            ErrorBody,
            health::HealthData,
            health::ServiceInfo
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Users", description = "Demo registration and login"),
        (name = "Items", description = "Catalog endpoints"),
        (name = "Cart", description = "Cart endpoints"),
        (name = "Orders", description = "Order endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
