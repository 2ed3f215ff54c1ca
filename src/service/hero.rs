//! Hero persistence against PostgreSQL.

use crate::error::AppError;
use crate::model::{Hero, HeroCreate, HeroUpdate, HeroWithTeam, Team};
use sqlx::PgPool;

const SELECT_HERO: &str = "SELECT id, name, secret_name, age, team_id FROM hero";

pub struct HeroService;

impl HeroService {
    /// Every hero, in primary key order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Hero>, AppError> {
        let sql = format!("{} ORDER BY id", SELECT_HERO);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Hero>(&sql).fetch_all(pool).await?;
        Ok(rows)
    }

    /// Insert one hero and return it with its assigned id.
    pub async fn create(pool: &PgPool, new: &HeroCreate) -> Result<Hero, AppError> {
        tracing::debug!(name = %new.name, "insert hero");
        let hero = sqlx::query_as::<_, Hero>(
            "INSERT INTO hero (name, secret_name, age, team_id) VALUES ($1, $2, $3, $4) \
             RETURNING id, name, secret_name, age, team_id",
        )
        .bind(&new.name)
        .bind(&new.secret_name)
        .bind(new.age)
        .bind(new.team_id)
        .fetch_one(pool)
        .await?;
        Ok(hero)
    }

    pub async fn read(pool: &PgPool, id: i32) -> Result<Option<Hero>, AppError> {
        let sql = format!("{} WHERE id = $1", SELECT_HERO);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, Hero>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    /// Fetch one hero and its team on a single pooled connection.
    pub async fn read_with_team(pool: &PgPool, id: i32) -> Result<Option<HeroWithTeam>, AppError> {
        let mut conn = pool.acquire().await?;
        let sql = format!("{} WHERE id = $1", SELECT_HERO);
        tracing::debug!(sql = %sql, id, "query");
        let Some(hero) = sqlx::query_as::<_, Hero>(&sql)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
        else {
            return Ok(None);
        };
        let team = match hero.team_id {
            Some(team_id) => {
                sqlx::query_as::<_, Team>("SELECT id, name, headquarters FROM team WHERE id = $1")
                    .bind(team_id)
                    .fetch_optional(&mut *conn)
                    .await?
            }
            None => None,
        };
        Ok(Some(HeroWithTeam { hero, team }))
    }

    /// Read-modify-write inside one transaction with the row locked. Returns None if the id does not exist.
    pub async fn update(pool: &PgPool, id: i32, update: &HeroUpdate) -> Result<Option<Hero>, AppError> {
        let mut tx = pool.begin().await?;
        let sql = format!("{} WHERE id = $1 FOR UPDATE", SELECT_HERO);
        tracing::debug!(sql = %sql, id, "query (tx)");
        let Some(mut hero) = sqlx::query_as::<_, Hero>(&sql)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };
        hero.apply(update);
        let updated = sqlx::query_as::<_, Hero>(
            "UPDATE hero SET name = $2, secret_name = $3, age = $4, team_id = $5 WHERE id = $1 \
             RETURNING id, name, secret_name, age, team_id",
        )
        .bind(hero.id)
        .bind(&hero.name)
        .bind(&hero.secret_name)
        .bind(hero.age)
        .bind(hero.team_id)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        Ok(Some(updated))
    }

    /// Delete one hero by id. Returns false if no row had that id.
    pub async fn delete(pool: &PgPool, id: i32) -> Result<bool, AppError> {
        tracing::debug!(id, "delete hero");
        let deleted: Option<(i32,)> = sqlx::query_as("DELETE FROM hero WHERE id = $1 RETURNING id")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(deleted.is_some())
    }
}
