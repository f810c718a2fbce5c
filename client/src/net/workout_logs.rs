//! Workout log endpoints.

#[cfg(test)]
#[path = "workout_logs_test.rs"]
mod workout_logs_test;

use super::api::{ApiClient, ApiError, Transport};
use super::resource::Resource;
use super::types::WorkoutLog;
use crate::util::storage::Storage;

pub const WORKOUT_LOGS: Resource<WorkoutLog> = Resource::new("/workout-logs");

/// # Errors
///
/// Returns the `ApiError` of the failed request.
pub async fn list<T: Transport, S: Storage>(api: &ApiClient<T, S>) -> Result<Vec<WorkoutLog>, ApiError> {
    WORKOUT_LOGS.list(api).await
}

/// # Errors
///
/// Returns the `ApiError` of the failed request.
pub async fn get_by_id<T: Transport, S: Storage>(api: &ApiClient<T, S>, id: i64) -> Result<WorkoutLog, ApiError> {
    WORKOUT_LOGS.get_by_id(api, id).await
}

/// # Errors
///
/// Returns the `ApiError` of the failed request.
pub async fn create<T: Transport, S: Storage>(api: &ApiClient<T, S>, log: &WorkoutLog) -> Result<WorkoutLog, ApiError> {
    WORKOUT_LOGS.create(api, log).await
}

/// # Errors
///
/// Returns the `ApiError` of the failed request.
pub async fn update<T: Transport, S: Storage>(
    api: &ApiClient<T, S>,
    id: i64,
    log: &WorkoutLog,
) -> Result<WorkoutLog, ApiError> {
    WORKOUT_LOGS.update(api, id, log).await
}

/// # Errors
///
/// Returns the `ApiError` of the failed request.
pub async fn delete<T: Transport, S: Storage>(api: &ApiClient<T, S>, id: i64) -> Result<(), ApiError> {
    WORKOUT_LOGS.delete(api, id).await
}
