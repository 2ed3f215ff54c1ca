//! Store operations for heroes and teams, plus request validation.

mod hero;
mod team;
pub mod validation;
pub use hero::HeroService;
pub use team::TeamService;
pub use validation::RequestValidator;
