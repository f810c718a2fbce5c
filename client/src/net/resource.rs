//! Generic CRUD over one REST collection (`/things`, `/things/{id}`).

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::api::{ApiClient, ApiError, Transport};
use crate::util::storage::Storage;

/// A collection path plus the record type it holds.
#[derive(Debug)]
pub struct Resource<R> {
    path: &'static str,
    _record: PhantomData<fn() -> R>,
}

impl<R> Resource<R> {
    pub const fn new(path: &'static str) -> Self {
        Self { path, _record: PhantomData }
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    pub fn item_path(&self, id: i64) -> String {
        format!("{}/{id}", self.path)
    }
}

impl<R: Serialize + DeserializeOwned> Resource<R> {
    /// # Errors
    ///
    /// Propagates the `ApiError` of the underlying request.
    pub async fn list<T: Transport, S: Storage>(&self, api: &ApiClient<T, S>) -> Result<Vec<R>, ApiError> {
        api.get(self.path).await
    }

    /// # Errors
    ///
    /// Propagates the `ApiError` of the underlying request.
    pub async fn get_by_id<T: Transport, S: Storage>(&self, api: &ApiClient<T, S>, id: i64) -> Result<R, ApiError> {
        api.get(&self.item_path(id)).await
    }

    /// # Errors
    ///
    /// Propagates the `ApiError` of the underlying request.
    pub async fn create<T: Transport, S: Storage>(&self, api: &ApiClient<T, S>, record: &R) -> Result<R, ApiError> {
        api.post(self.path, record).await
    }

    /// # Errors
    ///
    /// Propagates the `ApiError` of the underlying request.
    pub async fn update<T: Transport, S: Storage>(
        &self,
        api: &ApiClient<T, S>,
        id: i64,
        record: &R,
    ) -> Result<R, ApiError> {
        api.put(&self.item_path(id), record).await
    }

    /// # Errors
    ///
    /// Propagates the `ApiError` of the underlying request.
    pub async fn delete<T: Transport, S: Storage>(&self, api: &ApiClient<T, S>, id: i64) -> Result<(), ApiError> {
        api.delete(&self.item_path(id)).await
    }
}
