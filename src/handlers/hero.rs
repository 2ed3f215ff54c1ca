//! Hero handlers: list, create, read (with team), partial update, delete.

use super::parse_id;
use crate::error::AppError;
use crate::extractors::JsonObject;
use crate::model::{Hero, HeroCreate, HeroUpdate, HeroWithTeam};
use crate::openapi::HeroUpdateSchema;
use crate::response::Message;
use crate::service::HeroService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

const NOT_FOUND: &str = "Hero not found";

#[utoipa::path(get, path = "/heroes", tag = "heroes",
    responses((status = 200, description = "All heroes", body = [Hero])))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Hero>>, AppError> {
    let heroes = HeroService::list(&state.pool).await?;
    Ok(Json(heroes))
}

#[utoipa::path(post, path = "/heroes/", tag = "heroes", request_body = HeroCreate,
    responses(
        (status = 200, description = "Created hero", body = Hero),
        (status = 422, description = "Missing or mistyped fields"),
    ))]
pub async fn create(
    State(state): State<AppState>,
    JsonObject(body): JsonObject,
) -> Result<Json<Hero>, AppError> {
    let new = HeroCreate::from_body(&body)?;
    let hero = HeroService::create(&state.pool, &new).await?;
    tracing::info!(id = hero.id, "hero created");
    Ok(Json(hero))
}

#[utoipa::path(get, path = "/heroes/{hero_id}", tag = "heroes",
    params(("hero_id" = i32, Path, description = "Hero id")),
    responses(
        (status = 200, description = "Hero with its team", body = HeroWithTeam),
        (status = 404, description = "Hero not found"),
    ))]
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<HeroWithTeam>, AppError> {
    let id = parse_id(&id_str, "hero_id")?;
    let hero = HeroService::read_with_team(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    Ok(Json(hero))
}

#[utoipa::path(patch, path = "/heroes/{hero_id}", tag = "heroes", request_body = HeroUpdateSchema,
    params(("hero_id" = i32, Path, description = "Hero id")),
    responses(
        (status = 200, description = "Updated hero", body = Hero),
        (status = 404, description = "Hero not found"),
        (status = 422, description = "Mistyped fields"),
    ))]
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonObject(body): JsonObject,
) -> Result<Json<Hero>, AppError> {
    let id = parse_id(&id_str, "hero_id")?;
    let changes = HeroUpdate::from_body(&body)?;
    let hero = HeroService::update(&state.pool, id, &changes)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    Ok(Json(hero))
}

#[utoipa::path(delete, path = "/heroes/{hero_id}", tag = "heroes",
    params(("hero_id" = i32, Path, description = "Hero id")),
    responses(
        (status = 200, description = "Hero deleted", body = Message),
        (status = 404, description = "Hero not found"),
    ))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Message>, AppError> {
    let id = parse_id(&id_str, "hero_id")?;
    if !HeroService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(NOT_FOUND.into()));
    }
    tracing::info!(id, "hero deleted");
    Ok(Json(Message::deleted("Hero")))
}
