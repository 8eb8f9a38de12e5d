//! Handlers for the `/api/marcas` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use carcatalog_core::types::DbId;
use carcatalog_db::models::brand::{Brand, CreateBrand, UpdateBrand};

use crate::error::AppResult;
use crate::query::NameQuery;
use crate::services::brand as service;
use crate::state::AppState;

/// POST /api/marcas
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateBrand>,
) -> AppResult<(StatusCode, Json<Brand>)> {
    let brand = service::create(&state.pool, input).await?;
    Ok((StatusCode::CREATED, Json(brand)))
}

/// GET /api/marcas
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Brand>>> {
    Ok(Json(service::list(&state.pool).await?))
}

/// GET /api/marcas/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Brand>> {
    Ok(Json(service::get(&state.pool, id).await?))
}

/// GET /api/marcas/buscar?nome=
pub async fn find_by_name(
    State(state): State<AppState>,
    Query(params): Query<NameQuery>,
) -> AppResult<Json<Brand>> {
    Ok(Json(service::find_by_name(&state.pool, &params.nome).await?))
}

/// PUT /api/marcas/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBrand>,
) -> AppResult<Json<Brand>> {
    Ok(Json(service::update(&state.pool, id, input).await?))
}

/// DELETE /api/marcas/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    service::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
