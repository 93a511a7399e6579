//! Route configuration of the JSON API.
//!
//! Every handler is mounted inside a single [`consts::API_PREFIX`] scope.

use super::{horse, medical_record, server};
use crate::consts;
use ntex::web;

/// Configures the `/api` scope.
///
/// # Routes
/// - `GET /api/horses` - List horses (`skip`, `limit`, `health_status`)
/// - `GET /api/horses/{horse_id}` - Horse with its medical records
/// - `POST /api/horses` - Create horse
/// - `PUT /api/horses/{horse_id}` - Partial update
/// - `DELETE /api/horses/{horse_id}` - Delete horse and its records
/// - `GET /api/medical-records/horse/{horse_id}` - Records of a horse
/// - `GET /api/medical-records/{record_id}` - Single record
/// - `POST /api/medical-records` - Create record
/// - `PUT /api/medical-records/{record_id}` - Partial update
/// - `DELETE /api/medical-records/{record_id}` - Delete record
/// - `GET /api/health` - Liveness probe
pub fn api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(consts::API_PREFIX)
            .service((
                horse::list_horses,
                horse::get_horse,
                horse::create_horse,
                horse::update_horse,
                horse::delete_horse,
            ))
            .service((
                medical_record::list_horse_medical_records,
                medical_record::get_medical_record,
                medical_record::create_medical_record,
                medical_record::update_medical_record,
                medical_record::delete_medical_record,
            ))
            .service((server::health_check,)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{repo::sqlite::SqlxSqliteRepo, rest::AppState};
    use ntex::{
        http,
        web::test::{TestRequest, call_service, init_service, read_body},
    };
    use serde_json::{Value, json};

    macro_rules! test_app {
        () => {{
            let repo = SqlxSqliteRepo::in_memory().await.unwrap();
            init_service(
                web::App::new()
                    .state(web::types::PayloadConfig::new(consts::MAX_PAYLOAD_SIZE))
                    .state(AppState {
                        repo: Box::new(repo),
                    })
                    .configure(api)
                    .default_service(web::route().to(server::serve_not_found)),
            )
            .await
        }};
    }

    fn biscuit() -> Value {
        json!({
            "name": "Biscuit",
            "breed": "Quarter Horse",
            "age": 12,
            "sex": "mare",
            "color": "bay",
            "arrival_date": "2020-05-01"
        })
    }

    #[ntex::test]
    async fn test_horse_lifecycle() {
        let app = test_app!();

        let req = TestRequest::post()
            .uri("/api/horses")
            .set_json(&biscuit())
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), http::StatusCode::CREATED);
        let created: Value = serde_json::from_slice(&read_body(resp).await).unwrap();
        assert_eq!(created["health_status"], "healthy");
        let horse_id = created["id"].as_i64().unwrap();

        let req = TestRequest::put()
            .uri(&format!("/api/horses/{horse_id}"))
            .set_json(&json!({ "health_status": "needs_attention" }))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), http::StatusCode::OK);
        let updated: Value = serde_json::from_slice(&read_body(resp).await).unwrap();
        assert_eq!(updated["health_status"], "needs_attention");
        assert_eq!(updated["age"], 12);
        assert_eq!(updated["name"], "Biscuit");

        let req = TestRequest::delete()
            .uri(&format!("/api/horses/{horse_id}"))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), http::StatusCode::NO_CONTENT);

        let req = TestRequest::get()
            .uri(&format!("/api/horses/{horse_id}"))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), http::StatusCode::NOT_FOUND);
        let body: Value = serde_json::from_slice(&read_body(resp).await).unwrap();
        assert_eq!(body, json!({ "detail": "Horse not found" }));
    }

    #[ntex::test]
    async fn test_horse_detail_embeds_records() {
        let app = test_app!();

        let req = TestRequest::post()
            .uri("/api/horses")
            .set_json(&biscuit())
            .to_request();
        let created: Value =
            serde_json::from_slice(&read_body(call_service(&app, req).await).await).unwrap();
        let horse_id = created["id"].as_i64().unwrap();

        for date in ["2021-01-01", "2023-06-01"] {
            let req = TestRequest::post()
                .uri("/api/medical-records")
                .set_json(&json!({
                    "horse_id": horse_id,
                    "record_type": "checkup",
                    "description": "Routine checkup",
                    "vet_name": "Dr. Lane",
                    "date": date
                }))
                .to_request();
            let resp = call_service(&app, req).await;
            assert_eq!(resp.status(), http::StatusCode::CREATED);
        }

        let req = TestRequest::get()
            .uri(&format!("/api/horses/{horse_id}"))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), http::StatusCode::OK);
        let detail: Value = serde_json::from_slice(&read_body(resp).await).unwrap();
        assert_eq!(detail["name"], "Biscuit");
        assert_eq!(detail["medical_records"][0]["date"], "2023-06-01");
        assert_eq!(detail["medical_records"][1]["date"], "2021-01-01");
    }

    #[ntex::test]
    async fn test_invalid_record_type_is_rejected_before_storage() {
        let app = test_app!();

        let req = TestRequest::post()
            .uri("/api/horses")
            .set_json(&biscuit())
            .to_request();
        let created: Value =
            serde_json::from_slice(&read_body(call_service(&app, req).await).await).unwrap();
        let horse_id = created["id"].as_i64().unwrap();

        let req = TestRequest::post()
            .uri("/api/medical-records")
            .set_json(&json!({
                "horse_id": horse_id,
                "record_type": "grooming",
                "description": "Mane trim",
                "vet_name": "Dr. Lane",
                "date": "2023-06-01"
            }))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), http::StatusCode::UNPROCESSABLE_ENTITY);

        let req = TestRequest::get()
            .uri(&format!("/api/medical-records/horse/{horse_id}"))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), http::StatusCode::OK);
        let records: Value = serde_json::from_slice(&read_body(resp).await).unwrap();
        assert_eq!(records, json!([]));
    }

    #[ntex::test]
    async fn test_record_for_missing_horse() {
        let app = test_app!();

        let req = TestRequest::post()
            .uri("/api/medical-records")
            .set_json(&json!({
                "horse_id": 404,
                "record_type": "surgery",
                "description": "Colic surgery",
                "vet_name": "Dr. Lane",
                "date": "2023-06-01"
            }))
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), http::StatusCode::NOT_FOUND);
        let body: Value = serde_json::from_slice(&read_body(resp).await).unwrap();
        assert_eq!(body["detail"], "Horse not found");

        let req = TestRequest::get()
            .uri("/api/medical-records/horse/404")
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), http::StatusCode::NOT_FOUND);
    }

    #[ntex::test]
    async fn test_list_rejects_unknown_health_status() {
        let app = test_app!();

        let req = TestRequest::get()
            .uri("/api/horses?health_status=grumpy")
            .to_request();
        let resp = call_service(&app, req).await;

        assert_eq!(resp.status(), http::StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[ntex::test]
    async fn test_long_notes_are_stored() {
        let app = test_app!();
        let notes = "n".repeat(40_000);
        let mut payload = biscuit();
        payload["notes"] = json!(notes);

        let req = TestRequest::post()
            .uri("/api/horses")
            .set_json(&payload)
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), http::StatusCode::CREATED);
        let created: Value = serde_json::from_slice(&read_body(resp).await).unwrap();
        let horse_id = created["id"].as_i64().unwrap();

        let req = TestRequest::get()
            .uri(&format!("/api/horses/{horse_id}"))
            .to_request();
        let detail: Value =
            serde_json::from_slice(&read_body(call_service(&app, req).await).await).unwrap();
        assert_eq!(detail["notes"].as_str().map(str::len), Some(40_000));
    }

    #[ntex::test]
    async fn test_malformed_body_is_a_validation_error() {
        let app = test_app!();

        let req = TestRequest::post()
            .uri("/api/horses")
            .set_json(&biscuit())
            .to_request();
        let created: Value =
            serde_json::from_slice(&read_body(call_service(&app, req).await).await).unwrap();
        let horse_id = created["id"].as_i64().unwrap();

        let req = TestRequest::put()
            .uri(&format!("/api/horses/{horse_id}"))
            .header(http::header::CONTENT_TYPE, "application/json")
            .set_payload("{bad")
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), http::StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = serde_json::from_slice(&read_body(resp).await).unwrap();
        assert!(body["detail"].is_string());

        let req = TestRequest::post()
            .uri("/api/medical-records")
            .set_payload("")
            .to_request();
        let resp = call_service(&app, req).await;
        assert_eq!(resp.status(), http::StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[ntex::test]
    async fn test_list_rejects_negative_skip() {
        let app = test_app!();

        for uri in ["/api/horses?skip=-1", "/api/horses?limit=ten"] {
            let resp = call_service(&app, TestRequest::get().uri(uri).to_request()).await;
            assert_eq!(resp.status(), http::StatusCode::UNPROCESSABLE_ENTITY, "{uri}");
            let body: Value = serde_json::from_slice(&read_body(resp).await).unwrap();
            assert!(body["detail"].as_str().is_some_and(|detail| detail.contains("integer")));
        }
    }

    #[ntex::test]
    async fn test_health_and_unknown_route() {
        let app = test_app!();

        let resp = call_service(&app, TestRequest::get().uri("/api/health").to_request()).await;
        assert_eq!(resp.status(), http::StatusCode::OK);
        let body: Value = serde_json::from_slice(&read_body(resp).await).unwrap();
        assert_eq!(body, json!({ "status": "ok" }));

        let resp = call_service(&app, TestRequest::get().uri("/nowhere").to_request()).await;
        assert_eq!(resp.status(), http::StatusCode::NOT_FOUND);
        let body: Value = serde_json::from_slice(&read_body(resp).await).unwrap();
        assert_eq!(body, json!({ "detail": "Not Found" }));
    }
}
