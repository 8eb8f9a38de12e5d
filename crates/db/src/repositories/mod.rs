//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` (or any executor, where the call may run inside
//! a caller's transaction) as the first argument.

pub mod brand_repo;
pub mod car_model_repo;
pub mod car_repo;

pub use brand_repo::BrandRepo;
pub use car_model_repo::CarModelRepo;
pub use car_repo::CarRepo;
