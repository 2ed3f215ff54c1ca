//! Team persistence against PostgreSQL.

use crate::error::AppError;
use crate::model::{Hero, Team, TeamCreate, TeamUpdate, TeamWithHeroes};
use sqlx::PgPool;

const SELECT_TEAM: &str = "SELECT id, name, headquarters FROM team";

pub struct TeamService;

impl TeamService {
    pub async fn list(pool: &PgPool) -> Result<Vec<Team>, AppError> {
        let sql = format!("{} ORDER BY id", SELECT_TEAM);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Team>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    pub async fn create(pool: &PgPool, new: &TeamCreate) -> Result<Team, AppError> {
        tracing::debug!(name = %new.name, "insert team");
        let team = sqlx::query_as::<_, Team>(
            "INSERT INTO team (name, headquarters) VALUES ($1, $2) RETURNING id, name, headquarters",
        )
        .bind(&new.name)
        .bind(&new.headquarters)
        .fetch_one(pool)
        .await?;
        Ok(team)
    }

    pub async fn read(pool: &PgPool, id: i32) -> Result<Option<Team>, AppError> {
        let sql = format!("{} WHERE id = $1", SELECT_TEAM);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Team>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Fetch one team and its heroes on a single pooled connection.
    pub async fn read_with_heroes(pool: &PgPool, id: i32) -> Result<Option<TeamWithHeroes>, AppError> {
        let mut conn = pool.acquire().await?;
        let sql = format!("{} WHERE id = $1", SELECT_TEAM);
        tracing::debug!(sql = %sql, id, "query");
        let Some(team) = sqlx::query_as::<_, Team>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
        else {
            return Ok(None);
        };
        let heroes = sqlx::query_as::<_, Hero>(
            "SELECT id, name, secret_name, age, team_id FROM hero WHERE team_id = $1 ORDER BY id",
        )
        .bind(team.id)
        .fetch_all(&mut *conn)
        .await?;
        Ok(Some(TeamWithHeroes { team, heroes }))
    }

    /// Read-modify-write inside one transaction with the row locked. Returns None if the id does not exist.
    pub async fn update(pool: &PgPool, id: i32, update: &TeamUpdate) -> Result<Option<Team>, AppError> {
        let mut tx = pool.begin().await?;
        let sql = format!("{} WHERE id = $1 FOR UPDATE", SELECT_TEAM);
        tracing::debug!(sql = %sql, id, "query (tx)");
        let Some(mut team) = sqlx::query_as::<_, Team>(&sql)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };
        team.apply(update);
        let updated = sqlx::query_as::<_, Team>(
            "UPDATE team SET name = $2, headquarters = $3 WHERE id = $1 RETURNING id, name, headquarters",
        )
        .bind(team.id)
        .bind(&team.name)
        .bind(&team.headquarters)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(Some(updated))
    }

    /// Delete one team by id. Member heroes keep existing with `team_id` set to NULL.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, AppError> {
        tracing::debug!(id, "delete team");
        let deleted: Option<(i32,)> = sqlx::query_as("DELETE FROM team WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(deleted.is_some())
    }
}
