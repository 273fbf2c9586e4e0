//! API route definitions

use axum::{
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{
    self, CreatedResponse, ErrorDetail, ErrorResponse, MessageResponse, UpdatedResponse,
};
use crate::config::Config;
use crate::store::ItemStore;
use crate::types::Item;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shopping List API",
        version = "0.1.0",
        description = "In-memory shopping list"
    ),
    tags(
        (name = "general", description = "Service information"),
        (name = "shopping_list", description = "Shopping list items")
    ),
    paths(
        handlers::index,
        handlers::list_items,
        handlers::get_item,
        handlers::create_item,
        handlers::update_item,
    ),
    components(schemas(
        Item,
        MessageResponse,
        CreatedResponse,
        UpdatedResponse,
        ErrorResponse,
        ErrorDetail,
    ))
)]
pub struct ApiDoc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: ItemStore,
}

impl AppState {
    pub fn new(store: ItemStore) -> Self {
        Self { store }
    }
}

/// Create the API router with default settings
pub fn create_router(state: AppState) -> Router {
    create_router_with_config(state, &Config::default())
}

/// Create the API router, honoring the docs and CORS switches in `config`
pub fn create_router_with_config(state: AppState, config: &Config) -> Router {
    let mut router = Router::new()
        .route("/", get(handlers::index))

        // Shopping list
        .route(
            "/shopping_list/",
            get(handlers::list_items).post(handlers::create_item),
        )
        .route(
            "/shopping_list/{id}",
            get(handlers::get_item).put(handlers::update_item),
        )
        .route(
            "/shopping_list",
            get(handlers::redirect_to_list).post(handlers::redirect_to_list),
        )
        .route(
            "/shopping_list/{id}/",
            get(handlers::redirect_to_item).put(handlers::redirect_to_item),
        );

    // OpenAPI spec and Swagger UI
    if config.enable_docs {
        router = router.merge(SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi()));
    }

    router = router
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .fallback(handlers::not_found);

    if config.cors {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        router = router.layer(cors);
    }

    router
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
