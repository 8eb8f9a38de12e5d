//! Route definitions for the `/marcas` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::brand;
use crate::state::AppState;

/// Routes mounted at `/marcas`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create
/// GET    /buscar?nome=     -> find_by_name
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(brand::list).post(brand::create))
        .route("/buscar", get(brand::find_by_name))
        .route(
            "/{id}",
            get(brand::get_by_id)
                .put(brand::update)
                .delete(brand::delete),
        )
}
