//! OpenAPI document served at `/openapi.json`.

use crate::model::{Hero, HeroCreate, HeroWithTeam, Team, TeamCreate, TeamWithHeroes};
use crate::response::{Greeting, Message};
use utoipa::{OpenApi, ToSchema};

/// Hero update body. Every field is optional; only the keys sent are applied,
/// and an explicit `null` clears `age` or `team_id`.
#[derive(ToSchema)]
#[schema(title = "HeroUpdate")]
pub struct HeroUpdateSchema {
    pub name: Option<String>,
    pub secret_name: Option<String>,
    pub age: Option<i32>,
    pub team_id: Option<i32>,
}

/// Team update body. Only the keys sent are applied.
#[derive(ToSchema)]
#[schema(title = "TeamUpdate")]
pub struct TeamUpdateSchema {
    pub name: Option<String>,
    pub headquarters: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    info(title = "Hero API"),
    paths(
        crate::routes::common::root,
        crate::handlers::hero::list,
        crate::handlers::hero::create,
        crate::handlers::hero::read,
        crate::handlers::hero::update,
        crate::handlers::hero::delete,
        crate::handlers::team::list,
        crate::handlers::team::create,
        crate::handlers::team::read,
        crate::handlers::team::update,
        crate::handlers::team::delete,
    ),
    components(schemas(
        Hero,
        HeroCreate,
        HeroUpdateSchema,
        HeroWithTeam,
        Team,
        TeamCreate,
        TeamUpdateSchema,
        TeamWithHeroes,
        Message,
        Greeting,
    )),
    tags(
        (name = "heroes", description = "Hero CRUD"),
        (name = "teams", description = "Team CRUD"),
    )
)]
pub struct ApiDoc;
