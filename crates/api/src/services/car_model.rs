//! Car model operations.
//!
//! Every model belongs to an existing brand, and model names are unique
//! across the whole catalog.

use carcatalog_core::error::CoreError;
use carcatalog_core::types::DbId;
use carcatalog_core::validation::normalize_name;
use carcatalog_db::models::car_model::{CarModelDetails, CreateCarModel, UpdateCarModel};
use carcatalog_db::repositories::{BrandRepo, CarModelRepo};
use carcatalog_db::DbPool;
use validator::Validate;

use crate::error::AppResult;

const ENTITY: &str = "Model";

pub async fn list(pool: &DbPool) -> AppResult<Vec<CarModelDetails>> {
    Ok(CarModelRepo::list_details(pool).await?)
}

pub async fn get(pool: &DbPool, id: DbId) -> AppResult<CarModelDetails> {
    let model = CarModelRepo::find_details_by_id(pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
    Ok(model)
}

/// Models of one brand. An unknown brand is a not-found, not an empty list.
pub async fn list_by_brand(pool: &DbPool, brand_id: DbId) -> AppResult<Vec<CarModelDetails>> {
    ensure_brand(pool, brand_id).await?;
    Ok(CarModelRepo::list_by_brand(pool, brand_id).await?)
}

/// Case-insensitive substring search on the model name.
pub async fn search(pool: &DbPool, name: &str) -> AppResult<Vec<CarModelDetails>> {
    let fragment = name.trim();
    if fragment.is_empty() {
        return Err(CoreError::Validation("Search term must not be blank".into()).into());
    }
    Ok(CarModelRepo::search_by_name(pool, fragment).await?)
}

/// Create a model under an existing brand.
///
/// Nothing is written when the brand is missing or the name is taken.
pub async fn create(pool: &DbPool, input: CreateCarModel) -> AppResult<CarModelDetails> {
    let input = normalized(input)?;
    ensure_brand(pool, input.brand_id).await?;

    if CarModelRepo::exists_by_name(pool, &input.name).await? {
        return Err(duplicate(&input.name).into());
    }

    let model = CarModelRepo::create(pool, &input).await?;
    tracing::info!(model_id = model.id, brand_id = model.brand_id, "Model created");
    get(pool, model.id).await
}

/// Replace a model's brand, name and reference price.
pub async fn update(
    pool: &DbPool,
    id: DbId,
    input: UpdateCarModel,
) -> AppResult<CarModelDetails> {
    let input = normalized(input)?;

    if CarModelRepo::find_by_id(pool, id).await?.is_none() {
        return Err(CoreError::NotFound { entity: ENTITY, id }.into());
    }
    ensure_brand(pool, input.brand_id).await?;

    if let Some(other) = CarModelRepo::find_by_name(pool, &input.name).await? {
        if other.id != id {
            return Err(duplicate(&input.name).into());
        }
    }

    CarModelRepo::update(pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
    tracing::info!(model_id = id, brand_id = input.brand_id, "Model updated");
    get(pool, id).await
}

/// Delete a model and its cars.
pub async fn delete(pool: &DbPool, id: DbId) -> AppResult<()> {
    if !CarModelRepo::delete_cascade(pool, id).await? {
        return Err(CoreError::NotFound { entity: ENTITY, id }.into());
    }
    tracing::info!(model_id = id, "Model deleted");
    Ok(())
}

async fn ensure_brand(pool: &DbPool, brand_id: DbId) -> AppResult<()> {
    if !BrandRepo::exists(pool, brand_id).await? {
        return Err(CoreError::NotFound {
            entity: "Brand",
            id: brand_id,
        }
        .into());
    }
    Ok(())
}

fn normalized(input: CreateCarModel) -> AppResult<CreateCarModel> {
    input.validate()?;
    let name = normalize_name(&input.name).map_err(CoreError::Validation)?;
    Ok(CreateCarModel { name, ..input })
}

fn duplicate(name: &str) -> CoreError {
    CoreError::Conflict(format!("Model '{name}' already exists"))
}
