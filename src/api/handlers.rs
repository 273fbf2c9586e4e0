//! API request handlers

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Redirect,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use super::routes::AppState;
use crate::error::Error;
use crate::types::Item;

// Response types

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Greeting text
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedResponse {
    /// Confirmation text
    pub message: String,
    /// The item as stored
    pub new_item: Item,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct UpdatedResponse {
    /// Confirmation text
    pub message: String,
    /// The item after the update
    pub updated_item: Item,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error details
    pub detail: ErrorDetail,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Human readable reason
    pub message: String,
}

pub type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            detail: ErrorDetail {
                message: message.into(),
            },
        }),
    )
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        let status = match err {
            Error::NoItems | Error::ItemNotFound(_) => StatusCode::NOT_FOUND,
            Error::ItemAlreadyExists(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::debug!("Request failed with {}: {}", status, err);
        api_error(status, err.to_string())
    }
}

fn path_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    path.map(|Path(id)| id).map_err(|rejection| {
        tracing::debug!("Rejected item id: {}", rejection.body_text());
        api_error(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
    })
}

fn item_body(body: Result<Json<Item>, JsonRejection>) -> Result<Item, ApiError> {
    body.map(|Json(item)| item).map_err(|rejection| {
        tracing::debug!("Rejected item payload: {}", rejection.body_text());
        api_error(StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
    })
}

// Handlers

/// Welcome message
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Greeting", body = MessageResponse)
    ),
    tag = "general"
)]
pub async fn index() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello, World!".into(),
    })
}

/// List all items on the shopping list
#[utoipa::path(
    get,
    path = "/shopping_list/",
    responses(
        (status = 200, description = "All items in insertion order", body = Vec<Item>),
        (status = 404, description = "The list is empty", body = ErrorResponse)
    ),
    tag = "shopping_list"
)]
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = state.store.list().await;

    if items.is_empty() {
        return Err(Error::NoItems.into());
    }

    Ok(Json(items))
}

/// Get every item with the given id
#[utoipa::path(
    get,
    path = "/shopping_list/{id}",
    params(
        ("id" = i64, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Matching items", body = Vec<Item>),
        (status = 404, description = "No item has this id", body = ErrorResponse),
        (status = 422, description = "Id is not an integer", body = ErrorResponse)
    ),
    tag = "shopping_list"
)]
pub async fn get_item(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Vec<Item>>, ApiError> {
    let id = path_id(path)?;
    let items = state.store.find_by_id(id).await;

    if items.is_empty() {
        return Err(Error::ItemNotFound(id).into());
    }

    Ok(Json(items))
}

/// Add a new item
#[utoipa::path(
    post,
    path = "/shopping_list/",
    request_body = Item,
    responses(
        (status = 201, description = "Item added", body = CreatedResponse),
        (status = 400, description = "An item with this name exists", body = ErrorResponse),
        (status = 422, description = "Malformed item", body = ErrorResponse)
    ),
    tag = "shopping_list"
)]
pub async fn create_item(
    State(state): State<AppState>,
    body: Result<Json<Item>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let item = item_body(body)?;
    let item = state.store.create(item).await?;

    tracing::info!("Added item {} ({})", item.id, item.name);

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Item added successfully".into(),
            new_item: item,
        }),
    ))
}

/// Replace the fields of the first item with the given id
#[utoipa::path(
    put,
    path = "/shopping_list/{id}",
    params(
        ("id" = i64, Path, description = "Item id")
    ),
    request_body = Item,
    responses(
        (status = 200, description = "Item updated", body = UpdatedResponse),
        (status = 404, description = "No item has this id", body = ErrorResponse),
        (status = 422, description = "Malformed id or item", body = ErrorResponse)
    ),
    tag = "shopping_list"
)]
pub async fn update_item(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<Item>, JsonRejection>,
) -> Result<Json<UpdatedResponse>, ApiError> {
    let id = path_id(path)?;
    let item = item_body(body)?;
    let item = state.store.update(id, item).await?;

    tracing::info!("Updated item {} ({})", id, item.name);

    Ok(Json(UpdatedResponse {
        message: "Item updated successfully".into(),
        updated_item: item,
    }))
}

/// `/shopping_list` without the trailing slash
pub async fn redirect_to_list() -> Redirect {
    Redirect::temporary("/shopping_list/")
}

/// `/shopping_list/{id}/` with a stray trailing slash
pub async fn redirect_to_item(Path(id): Path<String>) -> Redirect {
    Redirect::temporary(&format!("/shopping_list/{}", id))
}

pub async fn not_found() -> ApiError {
    api_error(StatusCode::NOT_FOUND, "Not Found")
}

pub async fn method_not_allowed() -> ApiError {
    api_error(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}
