use super::{require_name, store_failure};
use crate::dtos::{CatResponse, CreateCatRequest, Lookup, NameQuery, NameResponse};
use crate::models::Cat;
use crate::services::metrics::{record_created, record_updated};
use crate::startup::AppState;
use crate::utils::{QueryParams, ValidatedJson};
use askama::Template;
use axum::{
    extract::State,
    response::IntoResponse,
    Json,
};
use service_core::error::AppError;

pub const SEARCH_NAME_MESSAGE: &str = "Name is required to perform a search";
pub const NO_CATS_MESSAGE: &str = "No cats found";

#[derive(Template)]
#[template(path = "cats.html")]
pub struct CatsTemplate {
    pub cats: Vec<Cat>,
}

pub async fn list_cats(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let cats = state
        .cats
        .find_all()
        .await
        .map_err(|e| store_failure("list_cats", e))?;

    Ok(CatsTemplate { cats })
}

pub async fn get_last_cat_name(State(state): State<AppState>) -> Json<NameResponse> {
    let cat = state.last_cat.get().await;
    Json(NameResponse { name: cat.name })
}

pub async fn create_cat(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateCatRequest>,
) -> Result<Json<CatResponse>, AppError> {
    let cat = req.into_cat()?;

    state
        .cats
        .save(&cat)
        .await
        .map_err(|e| store_failure("create_cat", e))?;

    tracing::info!(cat_id = %cat.id, cat_name = %cat.name, beds = cat.beds_owned, "Cat created");
    record_created("cat");

    let response = CatResponse::from(&cat);
    state.last_cat.set(cat).await;

    Ok(Json(response))
}

pub async fn search_cat(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<NameQuery>,
) -> Result<Json<Lookup<CatResponse>>, AppError> {
    let name = require_name(query.name, SEARCH_NAME_MESSAGE)?;

    let found = state
        .cats
        .find_by_name(&name)
        .await
        .map_err(|e| store_failure("search_cat", e))?;

    Ok(Json(match found {
        Some(cat) => Lookup::Found(CatResponse::from(&cat)),
        None => {
            tracing::debug!(cat_name = %name, "No cat matched search");
            Lookup::missing(NO_CATS_MESSAGE)
        }
    }))
}

pub async fn increment_last_cat_beds(
    State(state): State<AppState>,
) -> Result<Json<CatResponse>, AppError> {
    // Held across the save so concurrent increments each count.
    let mut last = state.last_cat.lock().await;

    let mut cat = last.clone();
    cat.add_bed()?;

    state
        .cats
        .save(&cat)
        .await
        .map_err(|e| store_failure("increment_last_cat_beds", e))?;

    tracing::info!(cat_id = %cat.id, beds = cat.beds_owned, "Cat bed count incremented");
    record_updated("cat");

    let response = CatResponse::from(&cat);
    *last = cat;

    Ok(Json(response))
}
