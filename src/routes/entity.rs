//! Hero and team CRUD routes.
//! Collection paths answer both with and without the trailing slash.

use crate::handlers::{hero, team};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn entity_routes(state: AppState) -> Router {
    Router::new()
        .route("/heroes", get(hero::list).post(hero::create))
        .route("/heroes/", get(hero::list).post(hero::create))
        .route(
            "/heroes/:hero_id",
            get(hero::read).patch(hero::update).delete(hero::delete),
        )
        .route("/teams", get(team::list).post(team::create))
        .route("/teams/", get(team::list).post(team::create))
        .route(
            "/teams/:team_id",
            get(team::read).patch(team::update).delete(team::delete),
        )
        .with_state(state)
}
