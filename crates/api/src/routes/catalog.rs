//! Route definitions for the catalog variant.

use axum::routing::get;
use axum::Router;

use crate::handlers::{brand, category, order, product, supplier, user};
use crate::state::AppState;

/// Routes mounted at `/api` by `catalog-api`.
///
/// ```text
/// GET /products                    -> product::list       (paginated)
/// GET /products/search             -> product::search     (paginated, filtered)
/// GET /products/featured           -> product::featured
/// GET /products/{id}               -> product::get_by_id
/// GET /products/{id}/full          -> product::full
/// GET /products/{id}/reviews       -> product::reviews    (paginated)
///
/// GET /categories                  -> category::list
/// GET /categories/{id}             -> category::get_by_id
/// GET /categories/{id}/children    -> category::children
/// GET /categories/{id}/products    -> category::products  (paginated)
///
/// GET /brands[/{id}]               -> brand::list / brand::get_by_id
/// GET /suppliers[/{id}]            -> supplier::list / supplier::get_by_id
/// GET /users[/{id}]                -> user::list / user::get_by_id
/// GET /users/{id}/orders           -> user::orders
/// GET /orders/{id}                 -> order::get_by_id
/// ```
pub fn router() -> Router<AppState> {
    let product_routes = Router::new()
        .route("/", get(product::list))
        .route("/search", get(product::search))
        .route("/featured", get(product::featured))
        .route("/{id}", get(product::get_by_id))
        .route("/{id}/full", get(product::full))
        .route("/{id}/reviews", get(product::reviews));

    let category_routes = Router::new()
        .route("/", get(category::list))
        .route("/{id}", get(category::get_by_id))
        .route("/{id}/children", get(category::children))
        .route("/{id}/products", get(category::products));

    let brand_routes = Router::new()
        .route("/", get(brand::list))
        .route("/{id}", get(brand::get_by_id));

    let supplier_routes = Router::new()
        .route("/", get(supplier::list))
        .route("/{id}", get(supplier::get_by_id));

    let user_routes = Router::new()
        .route("/", get(user::list))
        .route("/{id}", get(user::get_by_id))
        .route("/{id}/orders", get(user::orders));

    Router::new()
        .nest("/products", product_routes)
        .nest("/categories", category_routes)
        .nest("/brands", brand_routes)
        .nest("/suppliers", supplier_routes)
        .nest("/users", user_routes)
        .route("/orders/{id}", get(order::get_by_id))
}
