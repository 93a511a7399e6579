//! # Medical Record API Module
//!
//! Veterinary events attached to a horse. A record always belongs to exactly
//! one existing horse and cannot be moved to another one.

use crate::{consts, metric, models, repo, rest::errors::ApiError};

/// Lists the records of a horse, most recent event first.
///
/// # Errors
/// * `ApiError::NotFound` - The horse does not exist. An existing horse with
///   no history yields an empty list instead.
pub async fn list_horse_medical_records(
    horse_id: i64,
    repo: &repo::ImplAppRepo,
) -> Result<Vec<models::medical_record::MedicalRecord>, ApiError> {
    let _span = logfire::span!("list_horse_medical_records").entered();

    repo.list_horse_medical_records(horse_id)
        .await?
        .ok_or(ApiError::NotFound(consts::HORSE_NOT_FOUND))
}

pub async fn get_medical_record(
    record_id: i64,
    repo: &repo::ImplAppRepo,
) -> Result<models::medical_record::MedicalRecord, ApiError> {
    repo.get_medical_record(record_id)
        .await?
        .ok_or(ApiError::NotFound(consts::MEDICAL_RECORD_NOT_FOUND))
}

/// Attaches a new record to an existing horse.
///
/// # Arguments
/// * `new_record` - Record content, including the owning `horse_id`
/// * `repo` - Repository instance for database operations
///
/// # Errors
/// * `ApiError::NotFound` - The referenced horse does not exist; nothing is stored
pub async fn create_medical_record(
    new_record: models::medical_record::NewMedicalRecord,
    repo: &repo::ImplAppRepo,
) -> Result<models::medical_record::MedicalRecord, ApiError> {
    let _span = logfire::span!("create_medical_record").entered();

    let record = repo
        .insert_medical_record(&new_record)
        .await?
        .ok_or(ApiError::NotFound(consts::HORSE_NOT_FOUND))?;
    metric::incr_medical_record_action_statds("create");

    Ok(record)
}

/// Applies a sparse set of changes to a record. The owner stays the same.
pub async fn update_medical_record(
    record_id: i64,
    changes: models::medical_record::MedicalRecordChanges,
    repo: &repo::ImplAppRepo,
) -> Result<models::medical_record::MedicalRecord, ApiError> {
    let _span = logfire::span!("update_medical_record").entered();

    let record = repo
        .update_medical_record(record_id, &changes)
        .await?
        .ok_or(ApiError::NotFound(consts::MEDICAL_RECORD_NOT_FOUND))?;
    metric::incr_medical_record_action_statds("update");

    Ok(record)
}

pub async fn delete_medical_record(
    record_id: i64,
    repo: &repo::ImplAppRepo,
) -> Result<(), ApiError> {
    let _span = logfire::span!("delete_medical_record").entered();

    if !repo.delete_medical_record(record_id).await? {
        return Err(ApiError::NotFound(consts::MEDICAL_RECORD_NOT_FOUND));
    }
    metric::incr_medical_record_action_statds("delete");

    Ok(())
}
