use ntex::{util::Bytes, web};

use crate::{
    api, models,
    rest::{
        AppState,
        schemas::{self, horse},
    },
};

/// Lists horses, paginated and optionally filtered by health status
#[web::get("/horses")]
async fn list_horses(
    query: web::types::Query<horse::HorseListQuery>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let filter: models::horse::HorseFilter = query.into_inner().try_into()?;

    let horses: Vec<horse::HorseRead> = api::horse::list_horses(&filter, &app_state.repo)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(web::HttpResponse::Ok().json(&horses))
}

/// Horse detail including its medical history
#[web::get("/horses/{horse_id}")]
async fn get_horse(
    params: web::types::Path<(i64,)>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let horse_id = params.0;
    let horse = api::horse::get_horse_with_records(horse_id, &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&horse::HorseWithRecordsRead::from(horse)))
}

#[web::post("/horses")]
async fn create_horse(
    body: Bytes,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let payload: horse::HorseCreatePayload = schemas::parse_body(&body)?;

    let horse = api::horse::create_horse(payload.try_into()?, &app_state.repo).await?;

    Ok(web::HttpResponse::Created().json(&horse::HorseRead::from(horse)))
}

/// Partial update: keys left out of the body keep their stored values
#[web::put("/horses/{horse_id}")]
async fn update_horse(
    params: web::types::Path<(i64,)>,
    body: Bytes,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    let horse_id = params.0;
    let payload: horse::HorseUpdatePayload = schemas::parse_body(&body)?;

    let horse = api::horse::update_horse(horse_id, payload.try_into()?, &app_state.repo).await?;

    Ok(web::HttpResponse::Ok().json(&horse::HorseRead::from(horse)))
}

#[web::delete("/horses/{horse_id}")]
async fn delete_horse(
    params: web::types::Path<(i64,)>,
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    api::horse::delete_horse(params.0, &app_state.repo).await?;

    Ok(web::HttpResponse::NoContent().finish())
}
