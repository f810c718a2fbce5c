//! Workout plan endpoints.

#[cfg(test)]
#[path = "workout_plans_test.rs"]
mod workout_plans_test;

use super::api::{ApiClient, ApiError, Transport};
use super::resource::Resource;
use super::types::WorkoutPlan;
use crate::util::storage::Storage;

pub const WORKOUT_PLANS: Resource<WorkoutPlan> = Resource::new("/workout-plans");

/// # Errors
///
/// Returns the `ApiError` of the failed request.
pub async fn list<T: Transport, S: Storage>(api: &ApiClient<T, S>) -> Result<Vec<WorkoutPlan>, ApiError> {
    WORKOUT_PLANS.list(api).await
}

/// # Errors
///
/// Returns the `ApiError` of the failed request.
pub async fn get_by_id<T: Transport, S: Storage>(api: &ApiClient<T, S>, id: i64) -> Result<WorkoutPlan, ApiError> {
    WORKOUT_PLANS.get_by_id(api, id).await
}

/// # Errors
///
/// Returns the `ApiError` of the failed request.
pub async fn create<T: Transport, S: Storage>(api: &ApiClient<T, S>, plan: &WorkoutPlan) -> Result<WorkoutPlan, ApiError> {
    WORKOUT_PLANS.create(api, plan).await
}

/// # Errors
///
/// Returns the `ApiError` of the failed request.
pub async fn update<T: Transport, S: Storage>(
    api: &ApiClient<T, S>,
    id: i64,
    plan: &WorkoutPlan,
) -> Result<WorkoutPlan, ApiError> {
    WORKOUT_PLANS.update(api, id, plan).await
}

/// # Errors
///
/// Returns the `ApiError` of the failed request.
pub async fn delete<T: Transport, S: Storage>(api: &ApiClient<T, S>, id: i64) -> Result<(), ApiError> {
    WORKOUT_PLANS.delete(api, id).await
}
