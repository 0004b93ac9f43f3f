//! One handler set shared by every record collection.
//!
//! Reads answer JSON, writes answer a plain-text confirmation. The handlers
//! are generic over [`RecordService`] and mounted once per entity.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde_json::Value;

use service::RecordService;

use crate::errors::JsonApiError;
use crate::state::AppState;

pub async fn list<S: RecordService>(State(state): State<AppState>) -> Result<Json<Vec<S::Record>>, JsonApiError> {
    Ok(Json(S::list(&state.db).await?))
}

pub async fn fetch<S: RecordService>(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<S::Record>, JsonApiError> {
    let Path(id) = id?;
    Ok(Json(S::get(&state.db, id).await?))
}

pub async fn create<S: RecordService>(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, JsonApiError> {
    let Json(body) = body?;
    let created = S::create(&state.db, body).await?;
    let location = format!("/{}/{}", S::COLLECTION, created.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], created.message))
}

pub async fn replace<S: RecordService>(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<String, JsonApiError> {
    let Path(id) = id?;
    let Json(body) = body?;
    Ok(S::replace(&state.db, id, body).await?)
}

pub async fn remove<S: RecordService>(
    State(state): State<AppState>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<String, JsonApiError> {
    let Path(id) = id?;
    Ok(S::delete(&state.db, id).await?)
}

/// `/<collection>/` (with or without the slash) and `/<collection>/:id`.
pub fn record_routes<S: RecordService>() -> Router<AppState> {
    let collection = get(list::<S>).post(create::<S>);
    Router::new()
        .route(&format!("/{}/", S::COLLECTION), collection.clone())
        .route(&format!("/{}", S::COLLECTION), collection)
        .route(
            &format!("/{}/:id", S::COLLECTION),
            get(fetch::<S>).put(replace::<S>).delete(remove::<S>),
        )
}
