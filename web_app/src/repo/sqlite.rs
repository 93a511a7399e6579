use crate::models;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use super::{AppRepo, sqlite_queries};

#[derive(Clone)]
pub struct SqlxSqliteRepo {
    pub db_pool: SqlitePool,
}

impl SqlxSqliteRepo {
    /// Creates the tables and indexes when they are missing.
    pub async fn init_schema(&self) -> anyhow::Result<()> {
        sqlx::raw_sql(sqlite_queries::QUERY_CREATE_TABLES)
            .execute(&self.db_pool)
            .await?;
        Ok(())
    }

    /// Single-connection in-memory database with the schema applied.
    #[cfg(test)]
    pub async fn in_memory() -> anyhow::Result<Self> {
        use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
        use std::str::FromStr;

        let db_pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(
                SqliteConnectOptions::from_str("sqlite::memory:")?.pragma("foreign_keys", "ON"),
            )
            .await?;

        let repo = Self { db_pool };
        repo.init_schema().await?;
        Ok(repo)
    }
}

#[async_trait]
impl AppRepo for SqlxSqliteRepo {
    async fn list_horses(
        &self,
        filter: &models::horse::HorseFilter,
    ) -> anyhow::Result<Vec<models::horse::Horse>> {
        Ok(
            sqlx::query_as::<_, models::horse::Horse>(sqlite_queries::QUERY_LIST_HORSES)
                .bind(filter.health_status)
                .bind(filter.limit)
                .bind(filter.skip)
                .fetch_all(&self.db_pool)
                .await?,
        )
    }

    async fn get_horse(&self, horse_id: i64) -> anyhow::Result<Option<models::horse::Horse>> {
        Ok(
            sqlx::query_as::<_, models::horse::Horse>(sqlite_queries::QUERY_GET_HORSE_BY_ID)
                .bind(horse_id)
                .fetch_optional(&self.db_pool)
                .await?,
        )
    }

    async fn get_horse_with_records(
        &self,
        horse_id: i64,
    ) -> anyhow::Result<Option<models::horse::HorseWithRecords>> {
        let mut transaction = self.db_pool.begin().await?;

        let Some(horse) =
            sqlx::query_as::<_, models::horse::Horse>(sqlite_queries::QUERY_GET_HORSE_BY_ID)
                .bind(horse_id)
                .fetch_optional(&mut *transaction)
                .await?
        else {
            return Ok(None);
        };

        let medical_records = sqlx::query_as::<_, models::medical_record::MedicalRecord>(
            sqlite_queries::QUERY_GET_HORSE_MEDICAL_RECORDS,
        )
        .bind(horse_id)
        .fetch_all(&mut *transaction)
        .await?;

        transaction.commit().await?;

        Ok(Some(models::horse::HorseWithRecords {
            horse,
            medical_records,
        }))
    }

    async fn insert_horse(
        &self,
        new_horse: &models::horse::NewHorse,
    ) -> anyhow::Result<models::horse::Horse> {
        let now = Utc::now();

        Ok(
            sqlx::query_as::<_, models::horse::Horse>(sqlite_queries::QUERY_INSERT_HORSE)
                .bind(&new_horse.name)
                .bind(&new_horse.breed)
                .bind(new_horse.age)
                .bind(&new_horse.sex)
                .bind(&new_horse.color)
                .bind(&new_horse.photo_url)
                .bind(new_horse.health_status)
                .bind(new_horse.arrival_date)
                .bind(&new_horse.notes)
                .bind(now)
                .bind(now)
                .fetch_one(&self.db_pool)
                .await?,
        )
    }

    async fn update_horse(
        &self,
        horse_id: i64,
        changes: &models::horse::HorseChanges,
    ) -> anyhow::Result<Option<models::horse::Horse>> {
        let mut query = QueryBuilder::<Sqlite>::new("UPDATE horses SET ");
        let mut assignments = query.separated(", ");

        assignments.push("updated_at = ");
        assignments.push_bind_unseparated(Utc::now());
        if let Some(name) = &changes.name {
            assignments.push("name = ");
            assignments.push_bind_unseparated(name.clone());
        }
        if let Some(breed) = &changes.breed {
            assignments.push("breed = ");
            assignments.push_bind_unseparated(breed.clone());
        }
        if let Some(age) = changes.age {
            assignments.push("age = ");
            assignments.push_bind_unseparated(age);
        }
        if let Some(sex) = &changes.sex {
            assignments.push("sex = ");
            assignments.push_bind_unseparated(sex.clone());
        }
        if let Some(color) = &changes.color {
            assignments.push("color = ");
            assignments.push_bind_unseparated(color.clone());
        }
        if let Some(photo_url) = &changes.photo_url {
            assignments.push("photo_url = ");
            assignments.push_bind_unseparated(photo_url.clone());
        }
        if let Some(health_status) = changes.health_status {
            assignments.push("health_status = ");
            assignments.push_bind_unseparated(health_status);
        }
        if let Some(arrival_date) = changes.arrival_date {
            assignments.push("arrival_date = ");
            assignments.push_bind_unseparated(arrival_date);
        }
        if let Some(notes) = &changes.notes {
            assignments.push("notes = ");
            assignments.push_bind_unseparated(notes.clone());
        }

        query.push(" WHERE id = ");
        query.push_bind(horse_id);
        query.push(" RETURNING ");
        query.push(sqlite_queries::HORSE_COLUMNS);

        Ok(query
            .build_query_as::<models::horse::Horse>()
            .fetch_optional(&self.db_pool)
            .await?)
    }

    async fn delete_horse(&self, horse_id: i64) -> anyhow::Result<bool> {
        Ok(sqlx::query(sqlite_queries::QUERY_DELETE_HORSE)
            .bind(horse_id)
            .execute(&self.db_pool)
            .await?
            .rows_affected()
            > 0)
    }

    async fn list_horse_medical_records(
        &self,
        horse_id: i64,
    ) -> anyhow::Result<Option<Vec<models::medical_record::MedicalRecord>>> {
        let mut transaction = self.db_pool.begin().await?;

        let horse_exists: bool = sqlx::query_scalar(sqlite_queries::QUERY_HORSE_EXISTS)
            .bind(horse_id)
            .fetch_one(&mut *transaction)
            .await?;
        if !horse_exists {
            return Ok(None);
        }

        let medical_records = sqlx::query_as::<_, models::medical_record::MedicalRecord>(
            sqlite_queries::QUERY_GET_HORSE_MEDICAL_RECORDS,
        )
        .bind(horse_id)
        .fetch_all(&mut *transaction)
        .await?;

        transaction.commit().await?;

        Ok(Some(medical_records))
    }

    async fn get_medical_record(
        &self,
        record_id: i64,
    ) -> anyhow::Result<Option<models::medical_record::MedicalRecord>> {
        Ok(sqlx::query_as::<_, models::medical_record::MedicalRecord>(
            sqlite_queries::QUERY_GET_MEDICAL_RECORD_BY_ID,
        )
        .bind(record_id)
        .fetch_optional(&self.db_pool)
        .await?)
    }

    async fn insert_medical_record(
        &self,
        new_record: &models::medical_record::NewMedicalRecord,
    ) -> anyhow::Result<Option<models::medical_record::MedicalRecord>> {
        Ok(sqlx::query_as::<_, models::medical_record::MedicalRecord>(
            sqlite_queries::QUERY_INSERT_MEDICAL_RECORD,
        )
        .bind(new_record.horse_id)
        .bind(new_record.record_type)
        .bind(&new_record.description)
        .bind(&new_record.vet_name)
        .bind(new_record.date)
        .bind(new_record.next_followup)
        .bind(&new_record.notes)
        .bind(Utc::now())
        .fetch_optional(&self.db_pool)
        .await?)
    }

    async fn update_medical_record(
        &self,
        record_id: i64,
        changes: &models::medical_record::MedicalRecordChanges,
    ) -> anyhow::Result<Option<models::medical_record::MedicalRecord>> {
        if changes.is_empty() {
            return self.get_medical_record(record_id).await;
        }

        let mut query = QueryBuilder::<Sqlite>::new("UPDATE medical_records SET ");
        let mut assignments = query.separated(", ");

        if let Some(record_type) = changes.record_type {
            assignments.push("record_type = ");
            assignments.push_bind_unseparated(record_type);
        }
        if let Some(description) = &changes.description {
            assignments.push("description = ");
            assignments.push_bind_unseparated(description.clone());
        }
        if let Some(vet_name) = &changes.vet_name {
            assignments.push("vet_name = ");
            assignments.push_bind_unseparated(vet_name.clone());
        }
        if let Some(date) = changes.date {
            assignments.push("date = ");
            assignments.push_bind_unseparated(date);
        }
        if let Some(next_followup) = changes.next_followup {
            assignments.push("next_followup = ");
            assignments.push_bind_unseparated(next_followup);
        }
        if let Some(notes) = &changes.notes {
            assignments.push("notes = ");
            assignments.push_bind_unseparated(notes.clone());
        }

        query.push(" WHERE id = ");
        query.push_bind(record_id);
        query.push(" RETURNING ");
        query.push(sqlite_queries::MEDICAL_RECORD_COLUMNS);

        Ok(query
            .build_query_as::<models::medical_record::MedicalRecord>()
            .fetch_optional(&self.db_pool)
            .await?)
    }

    async fn delete_medical_record(&self, record_id: i64) -> anyhow::Result<bool> {
        Ok(sqlx::query(sqlite_queries::QUERY_DELETE_MEDICAL_RECORD)
            .bind(record_id)
            .execute(&self.db_pool)
            .await?
            .rows_affected()
            > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        horse::{HealthStatus, HorseChanges, HorseFilter, NewHorse},
        medical_record::{MedicalRecordChanges, NewMedicalRecord, RecordType},
    };
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn new_horse(name: &str, health_status: HealthStatus) -> NewHorse {
        NewHorse {
            name: name.to_string(),
            breed: "Quarter Horse".to_string(),
            age: 12,
            sex: "mare".to_string(),
            color: "bay".to_string(),
            photo_url: None,
            health_status,
            arrival_date: date(2020, 5, 1),
            notes: Some("arrived from auction".to_string()),
        }
    }

    fn new_record(horse_id: i64, on: NaiveDate) -> NewMedicalRecord {
        NewMedicalRecord {
            horse_id,
            record_type: RecordType::Checkup,
            description: "annual checkup".to_string(),
            vet_name: "Dr. Lane".to_string(),
            date: on,
            next_followup: None,
            notes: None,
        }
    }

    #[ntex::test]
    async fn test_insert_and_get_horse() {
        let repo = SqlxSqliteRepo::in_memory().await.unwrap();

        let first = repo
            .insert_horse(&new_horse("Biscuit", HealthStatus::Healthy))
            .await
            .unwrap();
        let second = repo
            .insert_horse(&new_horse("Pepper", HealthStatus::Critical))
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.created_at, first.updated_at);
        assert_eq!(repo.get_horse(first.id).await.unwrap(), Some(first));
        assert_eq!(repo.get_horse(second.id + 100).await.unwrap(), None);
    }

    #[ntex::test]
    async fn test_list_horses_filters_and_orders_by_name() {
        let repo = SqlxSqliteRepo::in_memory().await.unwrap();
        for (name, status) in [
            ("Zephyr", HealthStatus::Critical),
            ("Biscuit", HealthStatus::Healthy),
            ("Apollo", HealthStatus::Critical),
            ("Maple", HealthStatus::Palliative),
        ] {
            repo.insert_horse(&new_horse(name, status)).await.unwrap();
        }

        let critical = repo
            .list_horses(&HorseFilter {
                health_status: Some(HealthStatus::Critical),
                ..HorseFilter::default()
            })
            .await
            .unwrap();
        let names: Vec<_> = critical.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["Apollo", "Zephyr"]);

        let page = repo
            .list_horses(&HorseFilter {
                skip: 1,
                limit: 2,
                health_status: None,
            })
            .await
            .unwrap();
        let names: Vec<_> = page.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, vec!["Biscuit", "Maple"]);

        let empty = repo
            .list_horses(&HorseFilter {
                skip: 10,
                ..HorseFilter::default()
            })
            .await
            .unwrap();
        assert!(empty.is_empty());
    }

    #[ntex::test]
    async fn test_update_horse_only_touches_provided_fields() {
        let repo = SqlxSqliteRepo::in_memory().await.unwrap();
        let horse = repo
            .insert_horse(&new_horse("Biscuit", HealthStatus::Healthy))
            .await
            .unwrap();

        let updated = repo
            .update_horse(
                horse.id,
                &HorseChanges {
                    health_status: Some(HealthStatus::NeedsAttention),
                    notes: Some(None),
                    ..HorseChanges::default()
                },
            )
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.health_status, HealthStatus::NeedsAttention);
        assert_eq!(updated.notes, None);
        assert_eq!(updated.name, horse.name);
        assert_eq!(updated.age, horse.age);
        assert_eq!(updated.arrival_date, horse.arrival_date);
        assert_eq!(updated.created_at, horse.created_at);
        assert!(updated.updated_at >= horse.updated_at);

        let missing = repo
            .update_horse(horse.id + 1, &HorseChanges::default())
            .await
            .unwrap();
        assert_eq!(missing, None);
    }

    #[ntex::test]
    async fn test_delete_horse_cascades_to_medical_records() {
        let repo = SqlxSqliteRepo::in_memory().await.unwrap();
        let horse = repo
            .insert_horse(&new_horse("Biscuit", HealthStatus::Healthy))
            .await
            .unwrap();
        let mut record_ids = vec![];
        for day in 1..=3 {
            let record = repo
                .insert_medical_record(&new_record(horse.id, date(2022, 1, day)))
                .await
                .unwrap()
                .unwrap();
            record_ids.push(record.id);
        }

        assert!(repo.delete_horse(horse.id).await.unwrap());

        assert_eq!(repo.list_horse_medical_records(horse.id).await.unwrap(), None);
        for record_id in record_ids {
            assert_eq!(repo.get_medical_record(record_id).await.unwrap(), None);
        }
        let orphans: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM medical_records;")
            .fetch_one(&repo.db_pool)
            .await
            .unwrap();
        assert_eq!(orphans, 0);
        assert!(!repo.delete_horse(horse.id).await.unwrap());
    }

    #[ntex::test]
    async fn test_insert_medical_record_for_missing_horse_creates_nothing() {
        let repo = SqlxSqliteRepo::in_memory().await.unwrap();

        let record = repo
            .insert_medical_record(&new_record(42, date(2023, 6, 1)))
            .await
            .unwrap();

        assert_eq!(record, None);
        let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM medical_records;")
            .fetch_one(&repo.db_pool)
            .await
            .unwrap();
        assert_eq!(rows, 0);
    }

    #[ntex::test]
    async fn test_medical_records_are_listed_most_recent_first() {
        let repo = SqlxSqliteRepo::in_memory().await.unwrap();
        let horse = repo
            .insert_horse(&new_horse("Biscuit", HealthStatus::Healthy))
            .await
            .unwrap();
        for on in [date(2021, 1, 1), date(2023, 6, 1), date(2022, 3, 1)] {
            repo.insert_medical_record(&new_record(horse.id, on))
                .await
                .unwrap();
        }

        let dates: Vec<_> = repo
            .list_horse_medical_records(horse.id)
            .await
            .unwrap()
            .unwrap()
            .into_iter()
            .map(|r| r.date)
            .collect();
        assert_eq!(dates, vec![date(2023, 6, 1), date(2022, 3, 1), date(2021, 1, 1)]);

        let with_records = repo.get_horse_with_records(horse.id).await.unwrap().unwrap();
        assert_eq!(with_records.horse, horse);
        let dates: Vec<_> = with_records.medical_records.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![date(2023, 6, 1), date(2022, 3, 1), date(2021, 1, 1)]);

        assert_eq!(repo.get_horse_with_records(horse.id + 1).await.unwrap(), None);
    }

    #[ntex::test]
    async fn test_update_and_delete_medical_record() {
        let repo = SqlxSqliteRepo::in_memory().await.unwrap();
        let horse = repo
            .insert_horse(&new_horse("Biscuit", HealthStatus::Healthy))
            .await
            .unwrap();
        let record = repo
            .insert_medical_record(&NewMedicalRecord {
                next_followup: Some(date(2024, 1, 10)),
                notes: Some("left hoof".to_string()),
                ..new_record(horse.id, date(2023, 12, 1))
            })
            .await
            .unwrap()
            .unwrap();

        let unchanged = repo
            .update_medical_record(record.id, &MedicalRecordChanges::default())
            .await
            .unwrap();
        assert_eq!(unchanged.as_ref(), Some(&record));

        let updated = repo
            .update_medical_record(
                record.id,
                &MedicalRecordChanges {
                    record_type: Some(RecordType::Treatment),
                    next_followup: Some(None),
                    ..MedicalRecordChanges::default()
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.record_type, RecordType::Treatment);
        assert_eq!(updated.next_followup, None);
        assert_eq!(updated.notes, record.notes);
        assert_eq!(updated.description, record.description);
        assert_eq!(updated.horse_id, horse.id);

        assert!(repo.delete_medical_record(record.id).await.unwrap());
        assert!(!repo.delete_medical_record(record.id).await.unwrap());
        assert_eq!(
            repo.update_medical_record(
                record.id,
                &MedicalRecordChanges {
                    vet_name: Some("Dr. Moss".to_string()),
                    ..MedicalRecordChanges::default()
                },
            )
            .await
            .unwrap(),
            None
        );
    }
}
