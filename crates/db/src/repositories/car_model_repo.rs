//! Repository for the `car_models` table.

use carcatalog_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::car_model::{CarModel, CarModelDetails, CreateCarModel, UpdateCarModel};

const COLUMNS: &str = "id, brand_id, name, reference_price, created_at, updated_at";

/// Joined projection backing [`CarModelDetails`].
const DETAILS_SELECT: &str = "SELECT m.id, m.brand_id, b.name AS brand_name, m.name, \
     m.reference_price, m.created_at, m.updated_at \
     FROM car_models m JOIN brands b ON b.id = m.brand_id";

/// Provides CRUD operations for car models.
pub struct CarModelRepo;

impl CarModelRepo {
    /// Insert a new model, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateCarModel) -> Result<CarModel, sqlx::Error> {
        let query = format!(
            "INSERT INTO car_models (brand_id, name, reference_price)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CarModel>(&query)
            .bind(input.brand_id)
            .bind(&input.name)
            .bind(input.reference_price)
            .fetch_one(pool)
            .await
    }

    /// Insert a model known only by name (no reference price yet).
    pub async fn create_named<'e, E: PgExecutor<'e>>(
        executor: E,
        brand_id: DbId,
        name: &str,
    ) -> Result<CarModel, sqlx::Error> {
        let query = format!(
            "INSERT INTO car_models (brand_id, name) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CarModel>(&query)
            .bind(brand_id)
            .bind(name)
            .fetch_one(executor)
            .await
    }

    pub async fn find_by_id<'e, E: PgExecutor<'e>>(
        executor: E,
        id: DbId,
    ) -> Result<Option<CarModel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM car_models WHERE id = $1");
        sqlx::query_as::<_, CarModel>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find a model by exact name. Names are unique across the catalog.
    pub async fn find_by_name<'e, E: PgExecutor<'e>>(
        executor: E,
        name: &str,
    ) -> Result<Option<CarModel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM car_models WHERE name = $1");
        sqlx::query_as::<_, CarModel>(&query)
            .bind(name)
            .fetch_optional(executor)
            .await
    }

    pub async fn exists_by_name(pool: &PgPool, name: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM car_models WHERE name = $1)")
            .bind(name)
            .fetch_one(pool)
            .await
    }

    pub async fn find_details_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CarModelDetails>, sqlx::Error> {
        let query = format!("{DETAILS_SELECT} WHERE m.id = $1");
        sqlx::query_as::<_, CarModelDetails>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all models ordered by brand name, then model name.
    pub async fn list_details(pool: &PgPool) -> Result<Vec<CarModelDetails>, sqlx::Error> {
        let query = format!("{DETAILS_SELECT} ORDER BY b.name, m.name");
        sqlx::query_as::<_, CarModelDetails>(&query)
            .fetch_all(pool)
            .await
    }

    /// List the models of one brand, ordered by name.
    pub async fn list_by_brand(
        pool: &PgPool,
        brand_id: DbId,
    ) -> Result<Vec<CarModelDetails>, sqlx::Error> {
        let query = format!("{DETAILS_SELECT} WHERE m.brand_id = $1 ORDER BY m.name");
        sqlx::query_as::<_, CarModelDetails>(&query)
            .bind(brand_id)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring search on the model name.
    pub async fn search_by_name(
        pool: &PgPool,
        fragment: &str,
    ) -> Result<Vec<CarModelDetails>, sqlx::Error> {
        let query = format!(
            "{DETAILS_SELECT} WHERE m.name ILIKE '%' || $1 || '%' ORDER BY m.name"
        );
        sqlx::query_as::<_, CarModelDetails>(&query)
            .bind(escape_like(fragment))
            .fetch_all(pool)
            .await
    }

    /// Replace a model's brand, name and reference price.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCarModel,
    ) -> Result<Option<CarModel>, sqlx::Error> {
        let query = format!(
            "UPDATE car_models SET
                brand_id = $2,
                name = $3,
                reference_price = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CarModel>(&query)
            .bind(id)
            .bind(input.brand_id)
            .bind(&input.name)
            .bind(input.reference_price)
            .fetch_optional(pool)
            .await
    }

    /// Delete a model and its cars in one transaction. Returns `true` if
    /// the model row was removed.
    pub async fn delete_cascade(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM cars WHERE model_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM car_models WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            tx.rollback().await?;
            return Ok(false);
        }

        tx.commit().await?;
        Ok(true)
    }
}

/// Escape `%`, `_` and `\` so user input matches literally inside ILIKE.
fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
