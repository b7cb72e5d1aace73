use super::common::*;
use axum::http::StatusCode;
use serde_json::{json, Value};
use tower::ServiceExt;

use crate::assessment::router::{
    assess_handler, assessment_router, assessment_router_with, ASSESSMENT_PATH,
};
use crate::config::IntakeConfig;

fn post(body: String) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post(ASSESSMENT_PATH)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn assessment_route_returns_report_and_summary() {
    let document = json!({
        "questionnaire": {
            "woundBedTypes": ["granulation"],
            "exudate": "moderate",
            "fever": "yes",
            "crepitus": true
        },
        "context": { "patientId": "p-42", "bodyLocation": "abdomen" }
    });

    let response = assessment_router()
        .oneshot(post(document.to_string()))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert!(payload.get("generated_at").and_then(Value::as_str).is_some());
    assert_eq!(
        payload["report"]["infection_assessment"]["severity"],
        json!("systemic")
    );
    assert_eq!(payload["summary"]["requires_escalation"], json!(true));
    assert_eq!(payload["summary"]["review_tier"], json!("urgent"));
    assert_eq!(
        payload["summary"]["red_flags"]
            .as_array()
            .map(|flags| flags.len()),
        Some(2)
    );
}

#[tokio::test]
async fn empty_document_still_produces_a_report() {
    let response = assess_handler("{}".to_string()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload["report"]["etiology"], json!("mixed"));
    assert_eq!(payload["report"]["perfusion_status"], Value::Null);
    assert_eq!(payload["summary"]["healing_phase_label"], json!("Undetermined"));
}

#[tokio::test]
async fn malformed_document_is_unprocessable() {
    let response = assess_handler("not json".to_string()).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = assess_handler(r#"{"questionnaire": {"exudate": 5}}"#.to_string()).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert!(payload
        .get("error")
        .and_then(Value::as_str)
        .is_some_and(|message| message.contains("invalid assessment document")));
}

#[tokio::test]
async fn documents_over_the_configured_limit_are_rejected() {
    let router = assessment_router_with(&IntakeConfig { max_body_bytes: 64 });
    let small = json!({ "context": { "bodyLocation": "sacrum" } }).to_string();
    assert!(small.len() <= 64);

    let response = router
        .clone()
        .oneshot(post(small))
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::OK);

    let padded = json!({
        "questionnaire": { "woundBedTypes": ["granulation", "slough", "eschar"] },
        "context": { "patientId": "p-oversized", "bodyLocation": "left_heel" }
    })
    .to_string();
    assert!(padded.len() > 64);
    let response = router.oneshot(post(padded)).await.expect("route executes");
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}
