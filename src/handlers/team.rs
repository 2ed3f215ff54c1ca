//! Team handlers: list, create, read (with heroes), partial update, delete.

use super::parse_id;
use crate::error::AppError;
use crate::extractors::JsonObject;
use crate::model::{Team, TeamCreate, TeamUpdate, TeamWithHeroes};
use crate::openapi::TeamUpdateSchema;
use crate::response::Message;
use crate::service::TeamService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

const NOT_FOUND: &str = "Team not found";

#[utoipa::path(get, path = "/teams", tag = "teams",
    responses((status = 200, description = "All teams", body = [Team])))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Team>>, AppError> {
    let teams = TeamService::list(&state.pool).await?;
    Ok(Json(teams))
}

#[utoipa::path(post, path = "/teams/", tag = "teams", request_body = TeamCreate,
    responses(
        (status = 200, description = "Created team", body = Team),
        (status = 422, description = "Missing or mistyped fields"),
    ))]
pub async fn create(
    State(state): State<AppState>,
    JsonObject(body): JsonObject,
) -> Result<Json<Team>, AppError> {
    let new = TeamCreate::from_body(&body)?;
    let team = TeamService::create(&state.pool, &new).await?;
    tracing::info!(id = team.id, "team created");
    Ok(Json(team))
}

#[utoipa::path(get, path = "/teams/{team_id}", tag = "teams",
    params(("team_id" = i32, Path, description = "Team id")),
    responses(
        (status = 200, description = "Team with its heroes", body = TeamWithHeroes),
        (status = 404, description = "Team not found"),
    ))]
pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<TeamWithHeroes>, AppError> {
    let id = parse_id(&id_str, "team_id")?;
    let team = TeamService::read_with_heroes(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    Ok(Json(team))
}

#[utoipa::path(patch, path = "/teams/{team_id}", tag = "teams", request_body = TeamUpdateSchema,
    params(("team_id" = i32, Path, description = "Team id")),
    responses(
        (status = 200, description = "Updated team", body = Team),
        (status = 404, description = "Team not found"),
        (status = 422, description = "Mistyped fields"),
    ))]
pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    JsonObject(body): JsonObject,
) -> Result<Json<Team>, AppError> {
    let id = parse_id(&id_str, "team_id")?;
    let changes = TeamUpdate::from_body(&body)?;
    let team = TeamService::update(&state.pool, id, &changes)
        .await?
        .ok_or_else(|| AppError::NotFound(NOT_FOUND.into()))?;
    Ok(Json(team))
}

#[utoipa::path(delete, path = "/teams/{team_id}", tag = "teams",
    params(("team_id" = i32, Path, description = "Team id")),
    responses(
        (status = 200, description = "Team deleted; its heroes are detached", body = Message),
        (status = 404, description = "Team not found"),
    ))]
pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<Json<Message>, AppError> {
    let id = parse_id(&id_str, "team_id")?;
    if !TeamService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound(NOT_FOUND.into()));
    }
    tracing::info!(id, "team deleted");
    Ok(Json(Message::deleted("Team")))
}
