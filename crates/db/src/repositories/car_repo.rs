//! Repository for the `cars` table.
//!
//! Reads return [`CarDetails`] (joined with model and brand) ordered by
//! id, which is insertion order.

use carcatalog_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::car::{CarDetails, CarValues};

const DETAILS_SELECT: &str = "SELECT c.id, c.model_id, m.name AS model_name, m.brand_id, \
     b.name AS brand_name, c.year, c.fuel, c.doors, c.color, c.price, c.registered_at, \
     c.created_at, c.updated_at \
     FROM cars c \
     JOIN car_models m ON m.id = c.model_id \
     JOIN brands b ON b.id = m.brand_id";

/// Provides CRUD and lookup operations for cars.
pub struct CarRepo;

impl CarRepo {
    /// Insert a car, returning its new id.
    pub async fn create<'e, E: PgExecutor<'e>>(
        executor: E,
        values: &CarValues,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO cars (model_id, registered_at, year, fuel, doors, color, price)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id",
        )
        .bind(values.model_id)
        .bind(values.registered_at)
        .bind(values.year)
        .bind(&values.fuel)
        .bind(values.doors)
        .bind(&values.color)
        .bind(values.price)
        .fetch_one(executor)
        .await
    }

    pub async fn find_details_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CarDetails>, sqlx::Error> {
        let query = format!("{DETAILS_SELECT} WHERE c.id = $1");
        sqlx::query_as::<_, CarDetails>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM cars WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<CarDetails>, sqlx::Error> {
        let query = format!("{DETAILS_SELECT} ORDER BY c.id");
        sqlx::query_as::<_, CarDetails>(&query).fetch_all(pool).await
    }

    pub async fn list_by_model(
        pool: &PgPool,
        model_id: DbId,
    ) -> Result<Vec<CarDetails>, sqlx::Error> {
        let query = format!("{DETAILS_SELECT} WHERE c.model_id = $1 ORDER BY c.id");
        sqlx::query_as::<_, CarDetails>(&query)
            .bind(model_id)
            .fetch_all(pool)
            .await
    }

    pub async fn list_by_brand(
        pool: &PgPool,
        brand_id: DbId,
    ) -> Result<Vec<CarDetails>, sqlx::Error> {
        let query = format!("{DETAILS_SELECT} WHERE m.brand_id = $1 ORDER BY c.id");
        sqlx::query_as::<_, CarDetails>(&query)
            .bind(brand_id)
            .fetch_all(pool)
            .await
    }

    pub async fn list_by_year(pool: &PgPool, year: i32) -> Result<Vec<CarDetails>, sqlx::Error> {
        let query = format!("{DETAILS_SELECT} WHERE c.year = $1 ORDER BY c.id");
        sqlx::query_as::<_, CarDetails>(&query)
            .bind(year)
            .fetch_all(pool)
            .await
    }

    /// `fuel` must already be in stored (uppercase) form.
    pub async fn list_by_fuel(pool: &PgPool, fuel: &str) -> Result<Vec<CarDetails>, sqlx::Error> {
        let query = format!("{DETAILS_SELECT} WHERE c.fuel = $1 ORDER BY c.id");
        sqlx::query_as::<_, CarDetails>(&query)
            .bind(fuel)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive color match.
    pub async fn list_by_color(pool: &PgPool, color: &str) -> Result<Vec<CarDetails>, sqlx::Error> {
        let query = format!("{DETAILS_SELECT} WHERE LOWER(c.color) = LOWER($1) ORDER BY c.id");
        sqlx::query_as::<_, CarDetails>(&query)
            .bind(color)
            .fetch_all(pool)
            .await
    }

    /// Cars priced within `[min, max]`, inclusive.
    pub async fn list_by_price_range(
        pool: &PgPool,
        min: f64,
        max: f64,
    ) -> Result<Vec<CarDetails>, sqlx::Error> {
        let query = format!("{DETAILS_SELECT} WHERE c.price BETWEEN $1 AND $2 ORDER BY c.id");
        sqlx::query_as::<_, CarDetails>(&query)
            .bind(min)
            .bind(max)
            .fetch_all(pool)
            .await
    }

    /// Replace every mutable column of a car.
    ///
    /// Returns `false` if no row with the given `id` exists.
    pub async fn update<'e, E: PgExecutor<'e>>(
        executor: E,
        id: DbId,
        values: &CarValues,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE cars SET
                model_id = $2,
                registered_at = $3,
                year = $4,
                fuel = $5,
                doors = $6,
                color = $7,
                price = $8
             WHERE id = $1",
        )
        .bind(id)
        .bind(values.model_id)
        .bind(values.registered_at)
        .bind(values.year)
        .bind(&values.fuel)
        .bind(values.doors)
        .bind(&values.color)
        .bind(values.price)
        .execute(executor)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a car. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
