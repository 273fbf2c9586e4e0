//! HTTP API layer

mod routes;
mod handlers;

pub use handlers::{CreatedResponse, ErrorDetail, ErrorResponse, MessageResponse, UpdatedResponse};
pub use routes::{create_router, create_router_with_config, ApiDoc, AppState};
