//! JSON CRUD handlers under `/api/items`.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use std::str::FromStr;

use super::AppState;
use crate::domain::{Item, ItemDraft, ItemId};
use crate::error::AppError;

/// A path id that does not parse cannot match any row.
pub(crate) fn parse_item_id(raw: &str) -> Result<ItemId, AppError> {
    ItemId::from_str(raw).map_err(|_| AppError::item_not_found())
}

fn parse_body(body: Result<Json<Value>, JsonRejection>) -> Result<ItemDraft, AppError> {
    let Json(value) = body.map_err(|e| AppError::BadRequest(e.body_text()))?;
    Ok(ItemDraft::from_json(&value)?)
}

pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>, AppError> {
    let items = state.repo.list_items().await?;
    Ok(Json(items))
}

pub async fn get_item(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Item>, AppError> {
    let id = parse_item_id(&id)?;

    state
        .repo
        .get_item(id)
        .await?
        .map(Json)
        .ok_or_else(AppError::item_not_found)
}

pub async fn create_item(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>), AppError> {
    let draft = parse_body(body)?;

    let id = state.repo.create_item(&draft).await?;
    tracing::debug!(%id, "Created item");

    Ok((StatusCode::CREATED, Json(Item::from_draft(id, draft))))
}

pub async fn update_item(
    Path(id): Path<String>,
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Item>, AppError> {
    // Body problems are reported before lookup misses.
    let draft = parse_body(body)?;
    let id = parse_item_id(&id)?;

    if !state.repo.update_item(id, &draft).await? {
        return Err(AppError::item_not_found());
    }

    Ok(Json(Item::from_draft(id, draft)))
}

pub async fn delete_item(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let id = parse_item_id(&id)?;

    if !state.repo.delete_item(id).await? {
        return Err(AppError::item_not_found());
    }

    Ok(StatusCode::NO_CONTENT)
}
