//! Exercise catalog endpoints.

#[cfg(test)]
#[path = "exercises_test.rs"]
mod exercises_test;

use super::api::{ApiClient, ApiError, Transport};
use super::resource::Resource;
use super::types::Exercise;
use crate::util::storage::Storage;

pub const EXERCISES: Resource<Exercise> = Resource::new("/exercises");

/// # Errors
///
/// Returns the `ApiError` of the failed request.
pub async fn list<T: Transport, S: Storage>(api: &ApiClient<T, S>) -> Result<Vec<Exercise>, ApiError> {
    EXERCISES.list(api).await
}

/// # Errors
///
/// Returns the `ApiError` of the failed request.
pub async fn get_by_id<T: Transport, S: Storage>(api: &ApiClient<T, S>, id: i64) -> Result<Exercise, ApiError> {
    EXERCISES.get_by_id(api, id).await
}

/// # Errors
///
/// Returns the `ApiError` of the failed request.
pub async fn create<T: Transport, S: Storage>(api: &ApiClient<T, S>, exercise: &Exercise) -> Result<Exercise, ApiError> {
    EXERCISES.create(api, exercise).await
}

/// # Errors
///
/// Returns the `ApiError` of the failed request.
pub async fn update<T: Transport, S: Storage>(
    api: &ApiClient<T, S>,
    id: i64,
    exercise: &Exercise,
) -> Result<Exercise, ApiError> {
    EXERCISES.update(api, id, exercise).await
}

/// # Errors
///
/// Returns the `ApiError` of the failed request.
pub async fn delete<T: Transport, S: Storage>(api: &ApiClient<T, S>, id: i64) -> Result<(), ApiError> {
    EXERCISES.delete(api, id).await
}
