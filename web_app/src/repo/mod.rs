pub mod sqlite;
pub mod sqlite_queries;

use crate::models;
use async_trait::async_trait;

/// Data access for horses and their medical records.
///
/// Lookups return `Ok(None)` (or `Ok(false)` for deletes) when the targeted
/// row does not exist; translating that into a not-found response is left to
/// the caller. Every write is atomic.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppRepo {
    async fn list_horses(
        &self,
        filter: &models::horse::HorseFilter,
    ) -> anyhow::Result<Vec<models::horse::Horse>>;

    async fn get_horse(&self, horse_id: i64) -> anyhow::Result<Option<models::horse::Horse>>;

    /// Loads the horse and all of its medical records in one transaction.
    async fn get_horse_with_records(
        &self,
        horse_id: i64,
    ) -> anyhow::Result<Option<models::horse::HorseWithRecords>>;

    async fn insert_horse(
        &self,
        new_horse: &models::horse::NewHorse,
    ) -> anyhow::Result<models::horse::Horse>;

    async fn update_horse(
        &self,
        horse_id: i64,
        changes: &models::horse::HorseChanges,
    ) -> anyhow::Result<Option<models::horse::Horse>>;

    async fn delete_horse(&self, horse_id: i64) -> anyhow::Result<bool>;

    /// `None` when the horse itself does not exist.
    async fn list_horse_medical_records(
        &self,
        horse_id: i64,
    ) -> anyhow::Result<Option<Vec<models::medical_record::MedicalRecord>>>;

    async fn get_medical_record(
        &self,
        record_id: i64,
    ) -> anyhow::Result<Option<models::medical_record::MedicalRecord>>;

    /// `None` when the referenced horse does not exist; nothing is inserted.
    async fn insert_medical_record(
        &self,
        new_record: &models::medical_record::NewMedicalRecord,
    ) -> anyhow::Result<Option<models::medical_record::MedicalRecord>>;

    async fn update_medical_record(
        &self,
        record_id: i64,
        changes: &models::medical_record::MedicalRecordChanges,
    ) -> anyhow::Result<Option<models::medical_record::MedicalRecord>>;

    async fn delete_medical_record(&self, record_id: i64) -> anyhow::Result<bool>;
}

pub type ImplAppRepo = Box<dyn AppRepo>;
