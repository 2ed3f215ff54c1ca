//! Hero API: CRUD REST service for heroes and teams backed by PostgreSQL.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod service;
pub mod settings;
pub mod state;
pub mod store;
pub mod telemetry;

pub use error::{AppError, ConfigError, FieldError};
pub use model::{Hero, HeroCreate, HeroUpdate, HeroWithTeam, Team, TeamCreate, TeamUpdate, TeamWithHeroes};
pub use routes::{app, common_routes, entity_routes};
pub use service::{HeroService, TeamService};
pub use settings::Settings;
pub use state::AppState;
pub use store::{connect, connect_lazy, ensure_tables};
pub use telemetry::init_tracing;
