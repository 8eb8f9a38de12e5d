//! Shared in-memory store of every car the UI shows.
//!
//! Backend records are loaded through [`CatalogApi`] and followed by the
//! static external records. Only backend records may be added, updated or
//! removed.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use carcatalog_core::types::DbId;
use tokio::sync::RwLock;

use crate::api::CatalogApi;
use crate::catalog::CatalogCar;
use crate::fixtures::EXTERNAL_CARS;
use crate::wire::BackendCar;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    /// The record comes from the external source and cannot be changed.
    #[error("Car {id} comes from the external source and is read-only")]
    ReadOnly { id: DbId },

    #[error("Car {id} is not in the store")]
    Missing { id: DbId },
}

/// Partial update. Only present, non-empty values are applied: blank
/// strings and zero numbers leave the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarPatch {
    pub model_name: Option<String>,
    pub brand_name: Option<String>,
    pub year: Option<i32>,
    pub fuel: Option<String>,
    pub doors: Option<i32>,
    pub color: Option<String>,
    pub price: Option<f64>,
    pub model_id: Option<DbId>,
}

impl From<&BackendCar> for CarPatch {
    fn from(car: &BackendCar) -> Self {
        Self {
            model_name: Some(car.model_name.clone()),
            brand_name: Some(car.brand_name.clone()),
            year: Some(car.year),
            fuel: Some(car.fuel.clone()),
            doors: Some(car.doors),
            color: Some(car.color.clone()),
            price: Some(car.price),
            model_id: Some(car.model_id),
        }
    }
}

impl CarPatch {
    fn apply(&self, car: &mut CatalogCar) {
        fn text(target: &mut String, value: &Option<String>) {
            if let Some(v) = value.as_deref().filter(|v| !v.is_empty()) {
                *target = v.to_string();
            }
        }

        text(&mut car.model_name, &self.model_name);
        text(&mut car.fuel, &self.fuel);
        text(&mut car.color, &self.color);
        if let Some(brand) = self.brand_name.as_deref().filter(|v| !v.is_empty()) {
            car.brand_name = Some(brand.to_string());
        }
        if let Some(year) = self.year.filter(|v| *v != 0) {
            car.year = year;
        }
        if let Some(doors) = self.doors.filter(|v| *v != 0) {
            car.doors = doors;
        }
        if let Some(price) = self.price.filter(|v| *v != 0.0 && !v.is_nan()) {
            car.price = price;
        }
        if let Some(model_id) = self.model_id.filter(|v| *v != 0) {
            car.model_id = Some(model_id);
        }
    }
}

#[derive(Debug, Default)]
pub struct CarStore {
    cars: RwLock<Vec<CatalogCar>>,
    loading: AtomicBool,
}

impl CarStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-filled with `cars`, without touching the backend.
    pub fn with_cars(cars: Vec<CatalogCar>) -> Self {
        Self {
            cars: RwLock::new(cars),
            loading: AtomicBool::new(false),
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::Acquire)
    }

    /// Replace the contents with backend cars followed by the external
    /// records. Returns the number of cars held afterwards.
    ///
    /// A failed backend fetch, or one still pending after `guard`, is
    /// logged and treated as an empty backend list. The pending fetch is
    /// dropped when `guard` elapses, so a late response never lands in the
    /// store; call `load` again to pick up backend cars.
    pub async fn load(&self, api: &CatalogApi, guard: Duration) -> usize {
        self.loading.store(true, Ordering::Release);

        let backend = match tokio::time::timeout(guard, api.list_cars()).await {
            Ok(Ok(cars)) => cars,
            Ok(Err(e)) => {
                tracing::warn!(error = %e, "Failed to load backend cars");
                Vec::new()
            }
            Err(_) => {
                tracing::warn!(
                    guard_secs = guard.as_secs_f64(),
                    "Backend cars not loaded in time, showing external cars only",
                );
                Vec::new()
            }
        };

        let backend_count = backend.len();
        let mut cars: Vec<CatalogCar> = backend.into_iter().map(CatalogCar::from).collect();
        cars.extend(EXTERNAL_CARS.iter().map(CatalogCar::from));
        let total = cars.len();

        *self.cars.write().await = cars;
        self.loading.store(false, Ordering::Release);

        tracing::info!(backend = backend_count, total, "Car store loaded");
        total
    }

    pub async fn snapshot(&self) -> Vec<CatalogCar> {
        self.cars.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.cars.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.cars.read().await.is_empty()
    }

    /// The first record with `id`, whatever its origin.
    pub async fn get(&self, id: DbId) -> Option<CatalogCar> {
        self.cars.read().await.iter().find(|c| c.id == id).cloned()
    }

    pub async fn find_backend(&self, id: DbId) -> Option<CatalogCar> {
        self.cars
            .read()
            .await
            .iter()
            .find(|c| c.id == id && c.is_backend())
            .cloned()
    }

    /// Append a backend record.
    pub async fn add(&self, car: CatalogCar) -> Result<(), StoreError> {
        if !car.is_backend() {
            return Err(StoreError::ReadOnly { id: car.id });
        }
        self.cars.write().await.push(car);
        Ok(())
    }

    /// Merge `patch` into the backend record `id` and return the result.
    pub async fn update(&self, id: DbId, patch: &CarPatch) -> Result<CatalogCar, StoreError> {
        let mut cars = self.cars.write().await;
        let index = backend_index(&cars, id)?;
        patch.apply(&mut cars[index]);
        Ok(cars[index].clone())
    }

    /// Remove the backend record `id` and return it.
    pub async fn remove(&self, id: DbId) -> Result<CatalogCar, StoreError> {
        let mut cars = self.cars.write().await;
        let index = backend_index(&cars, id)?;
        Ok(cars.remove(index))
    }
}

fn backend_index(cars: &[CatalogCar], id: DbId) -> Result<usize, StoreError> {
    if let Some(index) = cars.iter().position(|c| c.id == id && c.is_backend()) {
        return Ok(index);
    }
    if cars.iter().any(|c| c.id == id) {
        Err(StoreError::ReadOnly { id })
    } else {
        Err(StoreError::Missing { id })
    }
}
