//! Create / edit / delete flows over the store and the REST API.
//!
//! Each flow reports its outcome as a [`Notice`] for the UI to surface. The
//! store is kept in step with the backend: records the backend no longer
//! knows are dropped locally.

use std::sync::Arc;

use carcatalog_core::types::DbId;

use crate::api::CatalogApi;
use crate::catalog::CatalogCar;
use crate::error::ClientError;
use crate::form::CarForm;
use crate::store::{CarPatch, CarStore};

const LOCAL_MISSING: &str = "Car not found. It may have been removed.";
const SERVER_MISSING: &str = "Car not found on the server. It may have been removed.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    fn deleted(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Delete,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

pub struct CarManager {
    api: Arc<CatalogApi>,
    store: Arc<CarStore>,
}

impl CarManager {
    pub fn new(api: Arc<CatalogApi>, store: Arc<CarStore>) -> Self {
        Self { api, store }
    }

    pub fn store(&self) -> &Arc<CarStore> {
        &self.store
    }

    /// Validate `form`, create the car and add it to the store.
    pub async fn create(&self, form: &CarForm) -> Notice {
        let payload = match form.to_payload() {
            Ok(payload) => payload,
            Err(e) => return Notice::error(format!("Failed to register car: {e}")),
        };

        match self.api.create_car(&payload).await {
            Ok(car) => {
                let id = car.id;
                if let Err(e) = self.store.add(CatalogCar::from(car)).await {
                    tracing::warn!(car_id = id, error = %e, "Created car not added to store");
                }
                tracing::info!(car_id = id, "Car registered");
                Notice::success("Car registered successfully!")
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to register car");
                Notice::error(format!("Failed to register car: {}", describe(&e)))
            }
        }
    }

    /// Open the edit form for `car`. External records are refused.
    ///
    /// The form references the model by name only, so renaming the model or
    /// brand moves the car instead of being overridden by its current model id.
    pub fn begin_edit(&self, car: &CatalogCar) -> Result<CarForm, Notice> {
        if !car.is_backend() {
            return Err(Notice::error("External API cars cannot be edited"));
        }
        Ok(CarForm::from_car(car))
    }

    /// Ask for delete confirmation of `car`. External records are refused.
    pub fn begin_delete(&self, car: &CatalogCar) -> Result<(), Notice> {
        if !car.is_backend() {
            return Err(Notice::error("External API cars cannot be deleted"));
        }
        Ok(())
    }

    /// Send the edited form for car `id` and merge the result into the store.
    pub async fn save_edit(&self, id: DbId, form: &CarForm) -> Notice {
        if let Err(notice) = self.ensure_live(id).await {
            return notice;
        }
        let payload = match form.to_payload() {
            Ok(payload) => payload,
            Err(e) => return Notice::error(format!("Failed to update car: {e}")),
        };

        match self.api.update_car(id, &payload).await {
            Ok(car) => {
                if let Err(e) = self.store.update(id, &CarPatch::from(&car)).await {
                    tracing::warn!(car_id = id, error = %e, "Updated car not merged into store");
                }
                tracing::info!(car_id = id, "Car updated");
                Notice::success("Car updated successfully!")
            }
            Err(e) => self.failed("update", id, &e).await,
        }
    }

    /// Delete car `id` on the backend and drop it from the store.
    pub async fn confirm_delete(&self, id: DbId) -> Notice {
        if let Err(notice) = self.ensure_live(id).await {
            return notice;
        }

        match self.api.delete_car(id).await {
            Ok(()) => {
                self.forget(id).await;
                tracing::info!(car_id = id, "Car deleted");
                Notice::deleted("Car deleted successfully!")
            }
            Err(e) => self.failed("delete", id, &e).await,
        }
    }

    /// The car must be a backend record in the store and still exist on
    /// the backend. A car the backend no longer has is dropped locally.
    async fn ensure_live(&self, id: DbId) -> Result<(), Notice> {
        match self.store.get(id).await {
            None => return Err(Notice::error(LOCAL_MISSING)),
            Some(car) if !car.is_backend() => {
                return Err(Notice::error("External API cars cannot be changed"))
            }
            Some(_) => {}
        }

        if !self.api.car_exists(id).await {
            self.forget(id).await;
            return Err(Notice::error(SERVER_MISSING));
        }
        Ok(())
    }

    async fn failed(&self, action: &str, id: DbId, err: &ClientError) -> Notice {
        tracing::error!(car_id = id, action, error = %err, "Car request failed");
        if err.is_not_found() {
            self.forget(id).await;
            return Notice::error(SERVER_MISSING);
        }
        Notice::error(format!("Failed to {action} car: {}", describe(err)))
    }

    async fn forget(&self, id: DbId) {
        if let Err(e) = self.store.remove(id).await {
            tracing::debug!(car_id = id, error = %e, "Nothing to remove from store");
        }
    }
}

/// Prefer the backend's own error message over the transport-level one.
fn describe(err: &ClientError) -> String {
    err.server_message().unwrap_or_else(|| err.to_string())
}
