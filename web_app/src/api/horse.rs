//! # Horse API Module
//!
//! Listing, lookup and lifecycle of the sanctuary's horses. Deleting a horse
//! removes its medical history with it.

use crate::{consts, metric, models, repo, rest::errors::ApiError};

/// Lists horses ordered by name, optionally restricted to one health status.
///
/// # Arguments
/// * `filter` - Offset, page size and optional health status
/// * `repo` - Repository instance for database operations
///
/// # Returns
/// * `Result<Vec<models::horse::Horse>, ApiError>` - Possibly empty page of horses
pub async fn list_horses(
    filter: &models::horse::HorseFilter,
    repo: &repo::ImplAppRepo,
) -> Result<Vec<models::horse::Horse>, ApiError> {
    let _span = logfire::span!("list_horses").entered();

    Ok(repo.list_horses(filter).await?)
}

/// Retrieves a horse with its full medical history, most recent event first.
///
/// # Errors
/// * `ApiError::NotFound` - The horse does not exist
pub async fn get_horse_with_records(
    horse_id: i64,
    repo: &repo::ImplAppRepo,
) -> Result<models::horse::HorseWithRecords, ApiError> {
    let _span = logfire::span!("get_horse_with_records").entered();

    repo.get_horse_with_records(horse_id)
        .await?
        .ok_or(ApiError::NotFound(consts::HORSE_NOT_FOUND))
}

/// Stores a new horse; the store assigns its id and timestamps.
pub async fn create_horse(
    new_horse: models::horse::NewHorse,
    repo: &repo::ImplAppRepo,
) -> Result<models::horse::Horse, ApiError> {
    let _span = logfire::span!("create_horse").entered();

    let horse = repo.insert_horse(&new_horse).await?;
    metric::incr_horse_action_statds("create");

    Ok(horse)
}

/// Applies a sparse set of changes and refreshes `updated_at`.
///
/// Columns absent from `changes` keep their stored values.
///
/// # Errors
/// * `ApiError::NotFound` - The horse does not exist
pub async fn update_horse(
    horse_id: i64,
    changes: models::horse::HorseChanges,
    repo: &repo::ImplAppRepo,
) -> Result<models::horse::Horse, ApiError> {
    let _span = logfire::span!("update_horse").entered();

    let horse = repo
        .update_horse(horse_id, &changes)
        .await?
        .ok_or(ApiError::NotFound(consts::HORSE_NOT_FOUND))?;
    metric::incr_horse_action_statds("update");

    Ok(horse)
}

/// Deletes a horse together with all of its medical records.
pub async fn delete_horse(horse_id: i64, repo: &repo::ImplAppRepo) -> Result<(), ApiError> {
    let _span = logfire::span!("delete_horse").entered();

    if !repo.delete_horse(horse_id).await? {
        return Err(ApiError::NotFound(consts::HORSE_NOT_FOUND));
    }
    metric::incr_horse_action_statds("delete");

    Ok(())
}
