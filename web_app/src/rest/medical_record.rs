use ntex::{util::Bytes, web};

use crate::{
    api,
    rest::{
        AppState,
        schemas::{self, medical_record},
    },
};

/// Medical history of one horse, most recent event first
#[web::get("/medical-records/horse/{horse_id}")]
async fn list_horse_medical_records(
    params: web::types::Path<(i64,)>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let horse_id = params.0;

    let records: Vec<medical_record::MedicalRecordRead> =
        api::medical_record::list_horse_medical_records(horse_id, &app_state.repo)
            .await?
            .into_iter()
            .map(Into::into)
            .collect();

    Ok(web::HttpResponse::Ok().json(&records))
}

#[web::get("/medical-records/{record_id}")]
async fn get_medical_record(
    params: web::types::Path<(i64,)>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let record = api::medical_record::get_medical_record(params.0, &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&medical_record::MedicalRecordRead::from(record)))
}

/// Adds a record to the horse referenced by `horse_id` in the body
#[web::post("/medical-records")]
async fn create_medical_record(
    body: Bytes,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let payload: medical_record::MedicalRecordCreatePayload =
        schemas::parse_body(&body)?;

    let record =
        api::medical_record::create_medical_record(payload.try_into()?, &app_state.repo).await?;

    Ok(web::HttpResponse::Created().json(&medical_record::MedicalRecordRead::from(record)))
}

#[web::put("/medical-records/{record_id}")]
async fn update_medical_record(
    params: web::types::Path<(i64,)>,
    body: Bytes,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let record_id = params.0;
    let payload: medical_record::MedicalRecordUpdatePayload =
        schemas::parse_body(&body)?;

    let record =
        api::medical_record::update_medical_record(record_id, payload.try_into()?, &app_state.repo)
            .await?;

    Ok(web::HttpResponse::Ok().json(&medical_record::MedicalRecordRead::from(record)))
}

#[web::delete("/medical-records/{record_id}")]
async fn delete_medical_record(
    params: web::types::Path<(i64,)>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    api::medical_record::delete_medical_record(params.0, &app_state.repo).await?;

    Ok(web::HttpResponse::NoContent().finish())
}
