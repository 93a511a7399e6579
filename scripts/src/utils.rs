use crate::{config, sample};
use chrono::Utc;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqliteJournalMode},
};
use std::{collections::HashMap, str::FromStr};

const QUERY_DELETE_ALL_HORSES: &str = "DELETE FROM horses;";

const QUERY_INSERT_HORSE: &str = r#"
INSERT INTO horses (
    name, breed, age, sex, color, health_status, arrival_date, notes, created_at, updated_at
) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9)
RETURNING id;
"#;

const QUERY_INSERT_MEDICAL_RECORD: &str = r#"
INSERT INTO medical_records (
    horse_id, record_type, description, vet_name, date, next_followup, notes, created_at
) VALUES ($1, $2, $3, $4, $5, $6, $7, $8);
"#;

/// Renders `migrations/<file_name>` and executes every statement in it.
pub async fn run_migrations(db_pool: &SqlitePool, file_name: &str) -> anyhow::Result<()> {
    let mut tera = tera::Tera::new("../migrations/**/*.sql")?;
    // CHECK constraints hold quoted literals that must reach SQLite untouched
    tera.autoescape_on(vec![]);

    let migration_query = tera.render(file_name, &tera::Context::new())?;

    sqlx::raw_sql(&migration_query).execute(db_pool).await?;
    Ok(())
}

pub async fn setup_sqlite_db_pool(app_config: &config::AppConfig) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&app_config.db_host)?
        .create_if_missing(true)
        .pragma("foreign_keys", "ON");

    if let Some(db_pass) = &app_config.db_pass_encrypt {
        return Ok(SqlitePool::connect_with(
            options
                .pragma("key", db_pass.clone())
                .pragma("cipher_page_size", "1024")
                .pragma("kdf_iter", "64000")
                .pragma("cipher_hmac_algorithm", "HMAC_SHA1")
                .pragma("cipher_kdf_algorithm", "PBKDF2_HMAC_SHA1")
                .journal_mode(SqliteJournalMode::Delete),
        )
        .await?);
    }

    Ok(SqlitePool::connect_with(options).await?)
}

/// Inserts the sample horses and their medical records in one transaction.
/// Returns how many horses and records were written.
pub async fn seed(db_pool: &SqlitePool, reset: bool) -> anyhow::Result<(usize, usize)> {
    let mut transaction = db_pool.begin().await?;
    let now = Utc::now();

    if reset {
        sqlx::query(QUERY_DELETE_ALL_HORSES)
            .execute(&mut *transaction)
            .await?;
    }

    let mut horse_ids = HashMap::with_capacity(sample::HORSES.len());
    for horse in sample::HORSES {
        let horse_id: i64 = sqlx::query_scalar(QUERY_INSERT_HORSE)
            .bind(horse.name)
            .bind(horse.breed)
            .bind(horse.age)
            .bind(horse.sex)
            .bind(horse.color)
            .bind(horse.health_status)
            .bind(horse.arrival_date)
            .bind(horse.notes)
            .bind(now)
            .fetch_one(&mut *transaction)
            .await?;
        horse_ids.insert(horse.name, horse_id);
    }

    for record in sample::MEDICAL_RECORDS {
        let horse_id = horse_ids
            .get(record.horse)
            .ok_or_else(|| {
                anyhow::anyhow!("sample record points to unknown horse {}", record.horse)
            })?;

        sqlx::query(QUERY_INSERT_MEDICAL_RECORD)
            .bind(*horse_id)
            .bind(record.record_type)
            .bind(record.description)
            .bind(record.vet_name)
            .bind(record.date)
            .bind(record.next_followup)
            .bind(record.notes)
            .bind(now)
            .execute(&mut *transaction)
            .await?;
    }

    transaction.commit().await?;

    Ok((sample::HORSES.len(), sample::MEDICAL_RECORDS.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn migrated_pool() -> SqlitePool {
        let db_pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(
                SqliteConnectOptions::from_str("sqlite::memory:")
                    .unwrap()
                    .pragma("foreign_keys", "ON"),
            )
            .await
            .unwrap();

        run_migrations(&db_pool, "0001_create_tables.sql")
            .await
            .unwrap();
        db_pool
    }

    async fn count(db_pool: &SqlitePool, table: &str) -> i64 {
        sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(db_pool)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_seed_inserts_samples() {
        let db_pool = migrated_pool().await;

        let (horses, records) = seed(&db_pool, false).await.unwrap();

        assert_eq!(horses, 5);
        assert_eq!(records, 8);
        assert_eq!(count(&db_pool, "horses").await, 5);
        assert_eq!(count(&db_pool, "medical_records").await, 8);
    }

    #[tokio::test]
    async fn test_seed_reset_replaces_previous_data() {
        let db_pool = migrated_pool().await;

        seed(&db_pool, false).await.unwrap();
        seed(&db_pool, true).await.unwrap();

        assert_eq!(count(&db_pool, "horses").await, 5);
        assert_eq!(count(&db_pool, "medical_records").await, 8);
    }

    #[tokio::test]
    async fn test_migration_keeps_check_constraints() {
        let db_pool = migrated_pool().await;

        let result = sqlx::query(QUERY_INSERT_HORSE)
            .bind("Biscuit")
            .bind("Quarter Horse")
            .bind(12)
            .bind("Mare")
            .bind("Bay")
            .bind("grumpy")
            .bind("2020-05-01")
            .bind(None::<&str>)
            .bind(Utc::now())
            .execute(&db_pool)
            .await;

        assert!(result.is_err());
    }
}
