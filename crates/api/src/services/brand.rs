//! Brand operations.

use carcatalog_core::error::CoreError;
use carcatalog_core::types::DbId;
use carcatalog_core::validation::normalize_name;
use carcatalog_db::models::brand::{Brand, CreateBrand, UpdateBrand};
use carcatalog_db::repositories::BrandRepo;
use carcatalog_db::DbPool;
use validator::Validate;

use crate::error::AppResult;

const ENTITY: &str = "Brand";

pub async fn list(pool: &DbPool) -> AppResult<Vec<Brand>> {
    Ok(BrandRepo::list(pool).await?)
}

pub async fn get(pool: &DbPool, id: DbId) -> AppResult<Brand> {
    let brand = BrandRepo::find_by_id(pool, id)
        .await?
        .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
    Ok(brand)
}

/// Exact-name lookup after trimming.
pub async fn find_by_name(pool: &DbPool, name: &str) -> AppResult<Brand> {
    let name = name.trim();
    let brand = BrandRepo::find_by_name(pool, name)
        .await?
        .ok_or_else(|| CoreError::NotFoundByName {
            entity: ENTITY,
            name: name.to_string(),
        })?;
    Ok(brand)
}

/// Create a brand. Fails with a conflict when the trimmed name is taken.
pub async fn create(pool: &DbPool, input: CreateBrand) -> AppResult<Brand> {
    let input = normalized(input)?;

    if BrandRepo::exists_by_name(pool, &input.name).await? {
        return Err(duplicate(&input.name).into());
    }

    let brand = BrandRepo::create(pool, &input).await?;
    tracing::info!(brand_id = brand.id, name = %brand.name, "Brand created");
    Ok(brand)
}

/// Rename a brand. Keeping its own name is allowed; taking another brand's is not.
pub async fn update(pool: &DbPool, id: DbId, input: UpdateBrand) -> AppResult<Brand> {
    let input = normalized(input)?;

    if BrandRepo::find_by_id(pool, id).await?.is_none() {
        return Err(CoreError::NotFound { entity: ENTITY, id }.into());
    }
    if let Some(other) = BrandRepo::find_by_name(pool, &input.name).await? {
        if other.id != id {
            return Err(duplicate(&input.name).into());
        }
    }

    let brand = BrandRepo::update(pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound { entity: ENTITY, id })?;
    tracing::info!(brand_id = brand.id, name = %brand.name, "Brand updated");
    Ok(brand)
}

/// Delete a brand with its models and their cars.
pub async fn delete(pool: &DbPool, id: DbId) -> AppResult<()> {
    if !BrandRepo::delete_cascade(pool, id).await? {
        return Err(CoreError::NotFound { entity: ENTITY, id }.into());
    }
    tracing::info!(brand_id = id, "Brand deleted");
    Ok(())
}

fn normalized(input: CreateBrand) -> AppResult<CreateBrand> {
    input.validate()?;
    let name = normalize_name(&input.name).map_err(CoreError::Validation)?;
    Ok(CreateBrand { name })
}

fn duplicate(name: &str) -> CoreError {
    CoreError::Conflict(format!("Brand '{name}' already exists"))
}
