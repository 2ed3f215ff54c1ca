use super::Hero;
use crate::error::AppError;
use crate::service::validation::{text_field, FieldRule, RequestValidator};
use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Persisted team row; also the read view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow, ToSchema)]
pub struct Team {
    pub id: i32,
    pub name: String,
    pub headquarters: String,
}

const RULES: &[FieldRule] = &[FieldRule::text("name"), FieldRule::text("headquarters")];

#[derive(Clone, Debug, PartialEq, Eq, ToSchema)]
pub struct TeamCreate {
    pub name: String,
    pub headquarters: String,
}

impl TeamCreate {
    pub fn from_body(body: &Map<String, Value>) -> Result<Self, AppError> {
        RequestValidator::validate(body, RULES)?;
        Ok(Self {
            name: text_field(body, "name").unwrap_or_default(),
            headquarters: text_field(body, "headquarters").unwrap_or_default(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TeamChange {
    Name(String),
    Headquarters(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TeamUpdate {
    changes: Vec<TeamChange>,
}

impl TeamUpdate {
    pub fn from_body(body: &Map<String, Value>) -> Result<Self, AppError> {
        RequestValidator::validate_partial(body, RULES)?;
        let mut changes = Vec::new();
        if let Some(name) = text_field(body, "name") {
            changes.push(TeamChange::Name(name));
        }
        if let Some(headquarters) = text_field(body, "headquarters") {
            changes.push(TeamChange::Headquarters(headquarters));
        }
        Ok(Self { changes })
    }

    pub fn changes(&self) -> &[TeamChange] {
        &self.changes
    }
}

impl Team {
    pub fn apply(&mut self, update: &TeamUpdate) {
        for change in update.changes() {
            match change {
                TeamChange::Name(v) => self.name = v.clone(),
                TeamChange::Headquarters(v) => self.headquarters = v.clone(),
            }
        }
    }
}

/// Team read view with its member heroes embedded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct TeamWithHeroes {
    #[serde(flatten)]
    pub team: Team,
    pub heroes: Vec<Hero>,
}
