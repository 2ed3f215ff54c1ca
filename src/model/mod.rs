//! Hero and Team entities with their create, update, read and expanded views.

mod hero;
mod team;

pub use hero::{Hero, HeroChange, HeroCreate, HeroUpdate, HeroWithTeam};
pub use team::{Team, TeamChange, TeamCreate, TeamUpdate, TeamWithHeroes};
