//! Fixed response bodies.

use serde::Serialize;
use utoipa::ToSchema;

/// Confirmation returned by delete endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn deleted(resource: &str) -> Self {
        Self {
            message: format!("{} deleted successfully", resource),
        }
    }
}

/// Root liveness payload, `{"Hello":"World"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ToSchema)]
pub struct Greeting {
    #[serde(rename = "Hello")]
    pub hello: String,
}

impl Greeting {
    pub fn world() -> Self {
        Self {
            hello: "World".to_string(),
        }
    }
}
