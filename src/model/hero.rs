use super::Team;
use crate::error::AppError;
use crate::service::validation::{integer_field, text_field, FieldRule, RequestValidator};
use serde::Serialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Persisted hero row; also the read view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow, ToSchema)]
pub struct Hero {
    pub id: i32,
    pub name: String,
    pub secret_name: String,
    pub age: Option<i32>,
    pub team_id: Option<i32>,
}

const RULES: &[FieldRule] = &[
    FieldRule::text("name"),
    FieldRule::text("secret_name"),
    FieldRule::optional_integer("age"),
    FieldRule::optional_integer("team_id"),
];

/// Create view: every hero field except the server-assigned id.
#[derive(Clone, Debug, PartialEq, Eq, ToSchema)]
pub struct HeroCreate {
    pub name: String,
    pub secret_name: String,
    pub age: Option<i32>,
    pub team_id: Option<i32>,
}

impl HeroCreate {
    pub fn from_body(body: &Map<String, Value>) -> Result<Self, AppError> {
        RequestValidator::validate(body, RULES)?;
        Ok(Self {
            name: text_field(body, "name").unwrap_or_default(),
            secret_name: text_field(body, "secret_name").unwrap_or_default(),
            age: integer_field(body, "age"),
            team_id: integer_field(body, "team_id"),
        })
    }
}

/// A single field assignment carried by a partial update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HeroChange {
    Name(String),
    SecretName(String),
    Age(Option<i32>),
    TeamId(Option<i32>),
}

/// Update view: only the keys the caller actually sent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeroUpdate {
    changes: Vec<HeroChange>,
}

impl HeroUpdate {
    pub fn from_body(body: &Map<String, Value>) -> Result<Self, AppError> {
        RequestValidator::validate_partial(body, RULES)?;
        let mut changes = Vec::new();
        if let Some(name) = text_field(body, "name") {
            changes.push(HeroChange::Name(name));
        }
        if let Some(secret_name) = text_field(body, "secret_name") {
            changes.push(HeroChange::SecretName(secret_name));
        }
        if body.contains_key("age") {
            changes.push(HeroChange::Age(integer_field(body, "age")));
        }
        if body.contains_key("team_id") {
            changes.push(HeroChange::TeamId(integer_field(body, "team_id")));
        }
        Ok(Self { changes })
    }

    pub fn changes(&self) -> &[HeroChange] {
        &self.changes
    }
}

impl Hero {
    /// Apply each change in order; fields without a change are left as they are.
    pub fn apply(&mut self, update: &HeroUpdate) {
        for change in update.changes() {
            match change {
                HeroChange::Name(v) => self.name = v.clone(),
                HeroChange::SecretName(v) => self.secret_name = v.clone(),
                HeroChange::Age(v) => self.age = *v,
                HeroChange::TeamId(v) => self.team_id = *v,
            }
        }
    }
}

/// Hero read view with its owning team embedded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct HeroWithTeam {
    #[serde(flatten)]
    pub hero: Hero,
    pub team: Option<Team>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(v: Value) -> Map<String, Value> {
        v.as_object().cloned().unwrap_or_default()
    }

    fn ajmal() -> Hero {
        Hero {
            id: 7,
            name: "Ajmal Khan".into(),
            secret_name: "AK".into(),
            age: Some(31),
            team_id: Some(2),
        }
    }

    #[test]
    fn create_without_age_leaves_it_empty() {
        let new = HeroCreate::from_body(&body(json!({"name": "Ameen Alam", "secret_name": "AM"}))).unwrap();
        assert_eq!(
            new,
            HeroCreate {
                name: "Ameen Alam".into(),
                secret_name: "AM".into(),
                age: None,
                team_id: None,
            }
        );
    }

    #[test]
    fn create_missing_secret_name_is_rejected() {
        let err = HeroCreate::from_body(&body(json!({"name": "Ameen Aalam"}))).unwrap_err();
        assert!(matches!(err, AppError::Validation(ref e) if e[0].field == "secret_name"));
    }

    #[test]
    fn patch_only_touches_sent_fields() {
        let mut hero = ajmal();
        let update = HeroUpdate::from_body(&body(json!({"name": "Nizamani"}))).unwrap();
        hero.apply(&update);
        assert_eq!(hero.id, 7);
        assert_eq!(hero.name, "Nizamani");
        assert_eq!(hero.secret_name, "AK");
        assert_eq!(hero.age, Some(31));
        assert_eq!(hero.team_id, Some(2));
    }

    #[test]
    fn explicit_null_clears_optional_fields() {
        let mut hero = ajmal();
        let update = HeroUpdate::from_body(&body(json!({"team_id": null}))).unwrap();
        assert_eq!(update.changes(), &[HeroChange::TeamId(None)]);
        hero.apply(&update);
        assert_eq!(hero.team_id, None);
        assert_eq!(hero.age, Some(31));
    }

    #[test]
    fn whole_number_age_and_numeric_team_id_are_accepted() {
        let new = HeroCreate::from_body(&body(json!({
            "name": "Ameen Alam",
            "secret_name": "AM",
            "age": 30.0
        })))
        .unwrap();
        assert_eq!(new.age, Some(30));

        let update = HeroUpdate::from_body(&body(json!({"team_id": "4"}))).unwrap();
        assert_eq!(update.changes(), &[HeroChange::TeamId(Some(4))]);

        let update = HeroUpdate::from_body(&body(json!({"team_id": 4.0}))).unwrap();
        assert_eq!(update.changes(), &[HeroChange::TeamId(Some(4))]);

        assert!(HeroUpdate::from_body(&body(json!({"team_id": 4.5}))).is_err());
        assert!(HeroUpdate::from_body(&body(json!({"team_id": "four"}))).is_err());
    }

    #[test]
    fn explicit_null_name_is_rejected() {
        assert!(HeroUpdate::from_body(&body(json!({"name": null}))).is_err());
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let update = HeroUpdate::from_body(&body(json!({}))).unwrap();
        assert!(update.changes().is_empty());
        let mut hero = ajmal();
        hero.apply(&update);
        assert_eq!(hero, ajmal());
    }

    #[test]
    fn expanded_view_flattens_hero_fields() {
        let view = HeroWithTeam {
            hero: ajmal(),
            team: None,
        };
        let v = serde_json::to_value(&view).unwrap();
        assert_eq!(
            v,
            json!({
                "id": 7,
                "name": "Ajmal Khan",
                "secret_name": "AK",
                "age": 31,
                "team_id": 2,
                "team": null
            })
        );
    }
}
