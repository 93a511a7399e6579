use super::{check_max_len, check_optional_max_len, field::Field};
use crate::{consts, models, models::medical_record::RecordType, rest::errors::ApiError};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MedicalRecordCreatePayload {
    pub horse_id: i64,
    pub record_type: RecordType,
    pub description: String,
    pub vet_name: String,
    pub date: NaiveDate,
    pub next_followup: Option<NaiveDate>,
    pub notes: Option<String>,
}

impl TryFrom<MedicalRecordCreatePayload> for models::medical_record::NewMedicalRecord {
    type Error = ApiError;

    fn try_from(val: MedicalRecordCreatePayload) -> Result<Self, Self::Error> {
        check_max_len("vet_name", &val.vet_name, consts::MAX_VET_NAME_LEN)?;

        Ok(models::medical_record::NewMedicalRecord {
            horse_id: val.horse_id,
            record_type: val.record_type,
            description: val.description,
            vet_name: val.vet_name,
            date: val.date,
            next_followup: val.next_followup,
            notes: val.notes,
        })
    }
}

/// Body of `PUT /medical-records/{id}`. A record cannot be moved to another
/// horse, so `horse_id` is not accepted here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MedicalRecordUpdatePayload {
    #[serde(default)]
    pub record_type: Field<RecordType>,
    #[serde(default)]
    pub description: Field<String>,
    #[serde(default)]
    pub vet_name: Field<String>,
    #[serde(default)]
    pub date: Field<NaiveDate>,
    #[serde(default)]
    pub next_followup: Field<NaiveDate>,
    #[serde(default)]
    pub notes: Field<String>,
}

impl TryFrom<MedicalRecordUpdatePayload> for models::medical_record::MedicalRecordChanges {
    type Error = ApiError;

    fn try_from(val: MedicalRecordUpdatePayload) -> Result<Self, Self::Error> {
        let changes = models::medical_record::MedicalRecordChanges {
            record_type: val
                .record_type
                .required("record_type")
                .map_err(ApiError::InvalidPayload)?,
            description: val
                .description
                .required("description")
                .map_err(ApiError::InvalidPayload)?,
            vet_name: val
                .vet_name
                .required("vet_name")
                .map_err(ApiError::InvalidPayload)?,
            date: val.date.required("date").map_err(ApiError::InvalidPayload)?,
            next_followup: val.next_followup.nullable(),
            notes: val.notes.nullable(),
        };

        check_optional_max_len("vet_name", changes.vet_name.as_ref(), consts::MAX_VET_NAME_LEN)?;

        Ok(changes)
    }
}

/// Read shape of a record. The owning horse is referenced by id only.
#[derive(Debug, Clone, Serialize)]
pub struct MedicalRecordRead {
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

impl From<models::medical_record::MedicalRecord> for MedicalRecordRead {
    fn from(val: models::medical_record::MedicalRecord) -> Self {
        MedicalRecordRead {
            id: val.id,
            horse_id: val.horse_id,
            record_type: val.record_type,
            description: val.description,
            vet_name: val.vet_name,
            date: val.date,
            next_followup: val.next_followup,
            notes: val.notes,
            created_at: val.created_at,
        }
    }
}
