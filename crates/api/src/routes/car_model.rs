//! Route definitions for the `/modelos` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::car_model;
use crate::state::AppState;

/// Routes mounted at `/modelos`.
///
/// ```text
/// GET    /                      -> list
/// POST   /                      -> create
/// GET    /buscar?nome=          -> search
/// GET    /marca/{marca_id}      -> list_by_brand
/// GET    /{id}                  -> get_by_id
/// PUT    /{id}                  -> update
/// DELETE /{id}                  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(car_model::list).post(car_model::create))
        .route("/buscar", get(car_model::search))
        .route("/marca/{marca_id}", get(car_model::list_by_brand))
        .route(
            "/{id}",
            get(car_model::get_by_id)
                .put(car_model::update)
                .delete(car_model::delete),
        )
}
