use super::{
    check_max_len, check_optional_max_len, field::Field, medical_record::MedicalRecordRead,
};
use crate::{
    consts, models,
    models::horse::HealthStatus,
    rest::errors::ApiError,
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HorseCreatePayload {
    pub name: String,
    pub breed: String,
    pub age: i32,
    pub sex: String,
    pub color: String,
    pub photo_url: Option<String>,
    #[serde(default)]
    pub health_status: HealthStatus,
    pub arrival_date: NaiveDate,
    pub notes: Option<String>,
}

impl TryFrom<HorseCreatePayload> for models::horse::NewHorse {
    type Error = ApiError;

    fn try_from(val: HorseCreatePayload) -> Result<Self, Self::Error> {
        check_max_len("name", &val.name, consts::MAX_NAME_LEN)?;
        check_max_len("breed", &val.breed, consts::MAX_BREED_LEN)?;
        check_max_len("sex", &val.sex, consts::MAX_SEX_LEN)?;
        check_max_len("color", &val.color, consts::MAX_COLOR_LEN)?;
        check_optional_max_len("photo_url", val.photo_url.as_ref(), consts::MAX_PHOTO_URL_LEN)?;

        Ok(models::horse::NewHorse {
            name: val.name,
            breed: val.breed,
            age: val.age,
            sex: val.sex,
            color: val.color,
            photo_url: val.photo_url,
            health_status: val.health_status,
            arrival_date: val.arrival_date,
            notes: val.notes,
        })
    }
}

/// Body of `PUT /horses/{id}`: only the keys present are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HorseUpdatePayload {
    #[serde(default)]
    pub name: Field<String>,
    #[serde(default)]
    pub breed: Field<String>,
    #[serde(default)]
    pub age: Field<i32>,
    #[serde(default)]
    pub sex: Field<String>,
    #[serde(default)]
    pub color: Field<String>,
    #[serde(default)]
    pub photo_url: Field<String>,
    #[serde(default)]
    pub health_status: Field<HealthStatus>,
    #[serde(default)]
    pub arrival_date: Field<NaiveDate>,
    #[serde(default)]
    pub notes: Field<String>,
}

impl TryFrom<HorseUpdatePayload> for models::horse::HorseChanges {
    type Error = ApiError;

    fn try_from(val: HorseUpdatePayload) -> Result<Self, Self::Error> {
        let changes = models::horse::HorseChanges {
            name: val.name.required("name").map_err(ApiError::InvalidPayload)?,
            breed: val.breed.required("breed").map_err(ApiError::InvalidPayload)?,
            age: val.age.required("age").map_err(ApiError::InvalidPayload)?,
            sex: val.sex.required("sex").map_err(ApiError::InvalidPayload)?,
            color: val.color.required("color").map_err(ApiError::InvalidPayload)?,
            photo_url: val.photo_url.nullable(),
            health_status: val
                .health_status
                .required("health_status")
                .map_err(ApiError::InvalidPayload)?,
            arrival_date: val
                .arrival_date
                .required("arrival_date")
                .map_err(ApiError::InvalidPayload)?,
            notes: val.notes.nullable(),
        };

        check_optional_max_len("name", changes.name.as_ref(), consts::MAX_NAME_LEN)?;
        check_optional_max_len("breed", changes.breed.as_ref(), consts::MAX_BREED_LEN)?;
        check_optional_max_len("sex", changes.sex.as_ref(), consts::MAX_SEX_LEN)?;
        check_optional_max_len("color", changes.color.as_ref(), consts::MAX_COLOR_LEN)?;
        check_optional_max_len(
            "photo_url",
            changes.photo_url.as_ref().and_then(Option::as_ref),
            consts::MAX_PHOTO_URL_LEN,
        )?;

        Ok(changes)
    }
}

/// Query string of `GET /horses`. Values are kept as text so that a bad
/// number is reported like any other invalid payload.
#[derive(Debug, Default, Deserialize)]
pub struct HorseListQuery {
    pub skip: Option<String>,
    pub limit: Option<String>,
    pub health_status: Option<String>,
}

fn parse_count(field: &str, value: Option<String>, default: u32) -> Result<u32, ApiError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(default),
        Some(raw) => raw.parse().map_err(|_| {
            ApiError::InvalidPayload(format!("{field} must be a non-negative integer, got {raw:?}"))
        }),
    }
}

impl TryFrom<HorseListQuery> for models::horse::HorseFilter {
    type Error = ApiError;

    fn try_from(val: HorseListQuery) -> Result<Self, Self::Error> {
        let health_status = val
            .health_status
            .filter(|status| !status.is_empty())
            .map(|status| super::parse_payload::<HealthStatus>(serde_json::Value::String(status)))
            .transpose()?;

        Ok(models::horse::HorseFilter {
            skip: parse_count("skip", val.skip, 0)?,
            limit: parse_count("limit", val.limit, consts::DEFAULT_HORSE_LIST_LIMIT)?,
            health_status,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HorseRead {
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

impl From<models::horse::Horse> for HorseRead {
    fn from(val: models::horse::Horse) -> Self {
        HorseRead {
            id: val.id,
            name: val.name,
            breed: val.breed,
            age: val.age,
            sex: val.sex,
            color: val.color,
            photo_url: val.photo_url,
            health_status: val.health_status,
            arrival_date: val.arrival_date,
            notes: val.notes,
            created_at: val.created_at,
            updated_at: val.updated_at,
        }
    }
}

/// Detail shape: the horse plus its medical history, most recent first.
#[derive(Debug, Clone, Serialize)]
pub struct HorseWithRecordsRead {
    #[serde(flatten)]
    pub horse: HorseRead,
    pub medical_records: Vec<MedicalRecordRead>,
}

impl From<models::horse::HorseWithRecords> for HorseWithRecordsRead {
    fn from(val: models::horse::HorseWithRecords) -> Self {
        HorseWithRecordsRead {
            horse: val.horse.into(),
            medical_records: val.medical_records.into_iter().map(Into::into).collect(),
        }
    }
}
