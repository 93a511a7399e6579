use chrono::{DateTime, NaiveDate, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::medical_record::MedicalRecord;

#[derive(
    Debug, Display, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, sqlx::Type,
)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "varchar", rename_all = "snake_case")]
pub enum HealthStatus {
    #[default]
    #[display("healthy")]
    Healthy,
    #[display("needs_attention")]
    NeedsAttention,
    #[display("critical")]
    Critical,
    #[display("palliative")]
    Palliative,
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Horse {
    pub id: i64,
    pub name: String,
    pub breed: String,
    pub age: i32,
    pub sex: String,
    pub color: String,
    pub photo_url: Option<String>,
    pub health_status: HealthStatus,
    pub arrival_date: NaiveDate,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A horse together with its medical history, most recent event first.
#[derive(Debug, Clone, PartialEq)]
pub struct HorseWithRecords {
    pub horse: Horse,
    pub medical_records: Vec<MedicalRecord>,
}

/// Validated values for a horse that does not exist yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewHorse {
    pub name: String,
    pub breed: String,
    pub age: i32,
    pub sex: String,
    pub color: String,
    pub photo_url: Option<String>,
    pub health_status: HealthStatus,
    pub arrival_date: NaiveDate,
    pub notes: Option<String>,
}

/// Sparse set of assignments for an existing horse.
///
/// `None` means the column is left untouched. Nullable columns use a nested
/// option so that `Some(None)` clears the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HorseChanges {
    pub name: Option<String>,
    pub breed: Option<String>,
    pub age: Option<i32>,
    pub sex: Option<String>,
    pub color: Option<String>,
    pub photo_url: Option<Option<String>>,
    pub health_status: Option<HealthStatus>,
    pub arrival_date: Option<NaiveDate>,
    pub notes: Option<Option<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HorseFilter {
    pub skip: u32,
    pub limit: u32,
    pub health_status: Option<HealthStatus>,
}

impl Default for HorseFilter {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: crate::consts::DEFAULT_HORSE_LIST_LIMIT,
            health_status: None,
        }
    }
}
