//! Server-rendered item pages under `/items`.
//!
//! Successful writes redirect back to the list; failures answer with a plain
//! text body.

use axum::extract::rejection::FormRejection;
use axum::extract::{Path, State};
use axum::response::{Html, Redirect};
use axum::Form;
use serde::Deserialize;

use super::items::parse_item_id;
use super::{views, AppState};
use crate::domain::ItemDraft;
use crate::error::{AppError, PageError};

#[derive(Debug, Deserialize)]
pub struct ItemForm {
    pub name: Option<String>,
    pub notes: Option<String>,
}

fn parse_form(form: Result<Form<ItemForm>, FormRejection>) -> Result<ItemDraft, PageError> {
    let Form(form) = form.map_err(|e| AppError::BadRequest(e.body_text()))?;
    Ok(ItemDraft::new(form.name, form.notes)?)
}

pub async fn list_page(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let items = state.repo.list_items().await?;
    Ok(Html(views::items_list(&items)))
}

pub async fn create_page() -> Html<String> {
    Html(views::create_form())
}

pub async fn create_submit(
    State(state): State<AppState>,
    form: Result<Form<ItemForm>, FormRejection>,
) -> Result<Redirect, PageError> {
    let draft = parse_form(form)?;
    state.repo.create_item(&draft).await?;
    Ok(Redirect::to("/items"))
}

pub async fn update_page(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Html<String>, PageError> {
    let id = parse_item_id(&id)?;

    let item = state
        .repo
        .get_item(id)
        .await?
        .ok_or_else(AppError::item_not_found)?;

    Ok(Html(views::update_form(&item)))
}

pub async fn update_submit(
    Path(id): Path<String>,
    State(state): State<AppState>,
    form: Result<Form<ItemForm>, FormRejection>,
) -> Result<Redirect, PageError> {
    let draft = parse_form(form)?;
    let id = parse_item_id(&id)?;

    if !state.repo.update_item(id, &draft).await? {
        return Err(AppError::item_not_found().into());
    }

    Ok(Redirect::to("/items"))
}

pub async fn delete_submit(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, PageError> {
    let id = parse_item_id(&id)?;

    if !state.repo.delete_item(id).await? {
        return Err(AppError::item_not_found().into());
    }

    Ok(Redirect::to("/items"))
}
