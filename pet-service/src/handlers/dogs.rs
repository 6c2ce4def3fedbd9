use super::{require_name, store_failure};
use crate::dtos::{CreateDogRequest, DogResponse, Lookup, NameQuery, NameResponse};
use crate::models::Dog;
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

pub const UPDATE_NAME_MESSAGE: &str = "Name is required to update a dog";
pub const NO_DOGS_MESSAGE: &str = "No dogs found";

#[derive(Template)]
#[template(path = "dogs.html")]
pub struct DogsTemplate {
    pub dogs: Vec<Dog>,
}

pub async fn list_dogs(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let dogs = state
        .dogs
        .find_all()
        .await
        .map_err(|e| store_failure("list_dogs", e))?;

    Ok(DogsTemplate { dogs })
}

pub async fn get_last_dog_name(State(state): State<AppState>) -> Json<NameResponse> {
    let dog = state.last_dog.get().await;
    Json(NameResponse { name: dog.name })
}

pub async fn create_dog(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateDogRequest>,
) -> Result<Json<DogResponse>, AppError> {
    let dog = req.into_dog()?;

    state
        .dogs
        .save(&dog)
        .await
        .map_err(|e| store_failure("create_dog", e))?;

    tracing::info!(dog_id = %dog.id, dog_name = %dog.name, breed = %dog.breed, "Dog created");
    record_created("dog");

    let response = DogResponse::from(&dog);
    state.last_dog.set(dog).await;

    Ok(Json(response))
}

/// Add a year to the first dog with the given name.
pub async fn increment_dog_age(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<NameQuery>,
) -> Result<Json<Lookup<DogResponse>>, AppError> {
    let name = require_name(query.name, UPDATE_NAME_MESSAGE)?;

    let Some(mut dog) = state
        .dogs
        .find_by_name(&name)
        .await
        .map_err(|e| store_failure("find_dog", e))?
    else {
        return Ok(Json(Lookup::missing(NO_DOGS_MESSAGE)));
    };

    dog.have_birthday()?;

    state
        .dogs
        .save(&dog)
        .await
        .map_err(|e| store_failure("increment_dog_age", e))?;

    tracing::info!(dog_id = %dog.id, age = dog.age, "Dog age incremented");
    record_updated("dog");

    let response = DogResponse::from(&dog);
    state.last_dog.set(dog).await;

    Ok(Json(Lookup::Found(response)))
}
