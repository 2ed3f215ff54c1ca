//! HTTP handlers for hero and team CRUD.

pub mod hero;
pub mod team;

use crate::error::AppError;

/// Parse a path id; anything that is not a 32-bit integer is a validation error.
fn parse_id(id_str: &str, param: &str) -> Result<i32, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::validation(param, "must be an integer"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_id_accepts_integers_only() {
        assert_eq!(parse_id("42", "hero_id").unwrap(), 42);
        assert!(parse_id("abc", "hero_id").is_err());
        assert!(parse_id("99999999999", "hero_id").is_err());
        assert!(parse_id("1.5", "team_id").is_err());
        assert!(parse_id(" 7", "hero_id").is_err());
        assert!(parse_id("7 ", "team_id").is_err());
    }
}
