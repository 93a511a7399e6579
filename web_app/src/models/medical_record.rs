use chrono::{DateTime, NaiveDate, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Debug, Display, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, sqlx::Type)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "varchar", rename_all = "snake_case")]
pub enum RecordType {
    #[display("checkup")]
    Checkup,
    #[display("vaccination")]
    Vaccination,
    #[display("treatment")]
    Treatment,
    #[display("surgery")]
    Surgery,
    #[display("other")]
    Other,
}

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct MedicalRecord {
    pub id: i64,
    pub horse_id: i64,
    pub record_type: RecordType,
    pub description: String,
    pub vet_name: String,
    pub date: NaiveDate,
    pub next_followup: Option<NaiveDate>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewMedicalRecord {
    pub horse_id: i64,
    pub record_type: RecordType,
    pub description: String,
    pub vet_name: String,
    pub date: NaiveDate,
    pub next_followup: Option<NaiveDate>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MedicalRecordChanges {
    pub record_type: Option<RecordType>,
    pub description: Option<String>,
    pub vet_name: Option<String>,
    pub date: Option<NaiveDate>,
    pub next_followup: Option<Option<NaiveDate>>,
    pub notes: Option<Option<String>>,
}

impl MedicalRecordChanges {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
