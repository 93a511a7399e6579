//! Helper functions could be used in api/, rest/, ...

use crate::config;
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqliteJournalMode},
};
use std::str::FromStr;

/// Opens the process-wide pool. Foreign keys are always enforced so that
/// deleting a horse cascades to its medical records.
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
