use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::test_utils::{form_request, get, json_request, TestContext};

fn slots_uri(doctor_id: i64) -> String {
    format!("/doctor/{}/slots", doctor_id)
}

#[tokio::test]
async fn test_doctor_without_slots_lists_empty_array() {
    let ctx = TestContext::new();
    let doctor_id = ctx.create_doctor("Gregory", "House", "Diagnostics").await;

    let (status, body) = ctx.send(get(&slots_uri(doctor_id))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_listing_slots_of_unknown_doctor_is_not_found() {
    let ctx = TestContext::new();

    let (status, body) = ctx.send(get(&slots_uri(42))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!([]));
}

#[test_log::test(tokio::test)]
async fn test_created_slot_is_listed() {
    let ctx = TestContext::new();
    let doctor_id = ctx.create_doctor("Gregory", "House", "Diagnostics").await;

    let (status, created) = ctx
        .send(json_request(
            "POST",
            &slots_uri(doctor_id),
            json!({ "day": "2024-03-15", "from_hour": "09:00", "duration": 30 }),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    let slot_id = created["id"].as_i64().unwrap();
    assert_eq!(created, json!({ "id": slot_id }));

    let (status, slots) = ctx.send(get(&slots_uri(doctor_id))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        slots,
        json!([{ "id": slot_id, "day": "2024-03-15", "from_hour": "09:00", "duration": 30 }])
    );
}

#[tokio::test]
async fn test_overlapping_slots_are_accepted() {
    let ctx = TestContext::new();
    let doctor_id = ctx.create_doctor("Gregory", "House", "Diagnostics").await;
    let slot = json!({ "day": "2024-03-15", "from_hour": "09:00", "duration": 30 });

    let (first_status, first) = ctx
        .send(json_request("POST", &slots_uri(doctor_id), slot.clone()))
        .await;
    let (second_status, second) = ctx
        .send(json_request("POST", &slots_uri(doctor_id), slot))
        .await;

    assert_eq!(first_status, StatusCode::OK);
    assert_eq!(second_status, StatusCode::OK);
    assert_ne!(first["id"], second["id"]);

    let (_, slots) = ctx.send(get(&slots_uri(doctor_id))).await;
    assert_eq!(slots.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_slots_are_listed_per_doctor_in_creation_order() {
    let ctx = TestContext::new();
    let house = ctx.create_doctor("Gregory", "House", "Diagnostics").await;
    let wilson = ctx.create_doctor("James", "Wilson", "Oncology").await;

    for (doctor_id, day) in [(house, "2024-03-20"), (wilson, "2024-03-16"), (house, "2024-03-10")] {
        let (status, _) = ctx
            .send(json_request(
                "POST",
                &slots_uri(doctor_id),
                json!({ "day": day, "from_hour": "10:00", "duration": 60 }),
            ))
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, slots) = ctx.send(get(&slots_uri(house))).await;
    let days: Vec<&str> = slots
        .as_array()
        .unwrap()
        .iter()
        .map(|slot| slot["day"].as_str().unwrap())
        .collect();

    assert_eq!(days, vec!["2024-03-20", "2024-03-10"]);
}

#[tokio::test]
async fn test_creating_slot_for_unknown_doctor_persists_nothing() {
    let ctx = TestContext::new();

    let (status, body) = ctx
        .send(json_request(
            "POST",
            &slots_uri(7),
            json!({ "day": "2024-03-15", "from_hour": "09:00", "duration": 30 }),
        ))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!([]));
    assert_eq!(ctx.store.slot_count().await, 0);
}

#[tokio::test]
async fn test_unknown_doctor_wins_over_malformed_day() {
    let ctx = TestContext::new();

    let (status, _) = ctx
        .send(json_request("POST", &slots_uri(7), json!({ "day": "not-a-date" })))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_day_is_a_server_fault() {
    let ctx = TestContext::new();
    let doctor_id = ctx.create_doctor("Gregory", "House", "Diagnostics").await;

    let (status, body) = ctx
        .send(json_request(
            "POST",
            &slots_uri(doctor_id),
            json!({ "day": "not-a-date", "from_hour": "09:00", "duration": 30 }),
        ))
        .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_ne!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::Value::Null);
    assert_eq!(ctx.store.slot_count().await, 0);
}

#[tokio::test]
async fn test_non_numeric_duration_is_coerced_to_zero() {
    let ctx = TestContext::new();
    let doctor_id = ctx.create_doctor("Gregory", "House", "Diagnostics").await;

    let (status, _) = ctx
        .send(form_request(
            "POST",
            &slots_uri(doctor_id),
            "day=2024-03-15&from_hour=late&duration=half-hour",
        ))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, slots) = ctx.send(get(&slots_uri(doctor_id))).await;
    assert_eq!(slots[0]["duration"], json!(0));
    assert_eq!(slots[0]["from_hour"], json!("late"));
}

#[tokio::test]
async fn test_missing_from_hour_is_null() {
    let ctx = TestContext::new();
    let doctor_id = ctx.create_doctor("Gregory", "House", "Diagnostics").await;

    let (status, _) = ctx
        .send(json_request(
            "POST",
            &slots_uri(doctor_id),
            json!({ "day": "2024-03-15", "duration": "45" }),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);

    let (_, slots) = ctx.send(get(&slots_uri(doctor_id))).await;
    assert_eq!(slots[0]["from_hour"], json!(null));
    assert_eq!(slots[0]["duration"], json!(45));
}

#[tokio::test]
async fn test_timestamp_day_keeps_only_the_date() {
    let ctx = TestContext::new();
    let doctor_id = ctx.create_doctor("Gregory", "House", "Diagnostics").await;

    ctx.send(json_request(
        "POST",
        &slots_uri(doctor_id),
        json!({ "day": "2024-03-15T18:45:00Z", "from_hour": "18:45", "duration": 15 }),
    ))
    .await;

    let (_, slots) = ctx.send(get(&slots_uri(doctor_id))).await;
    assert_eq!(slots[0]["day"], json!("2024-03-15"));
}

#[tokio::test]
async fn test_non_numeric_doctor_path_is_rejected_by_router() {
    let ctx = TestContext::new();

    let (status, _) = ctx.send(get("/doctor/abc/slots")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_doctor_with_truncated_json_body_is_not_found() {
    let ctx = TestContext::new();
    let request = Request::builder()
        .method("POST")
        .uri(slots_uri(7))
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"day": "2024-03-15""#))
        .unwrap();

    let (status, body) = ctx.send(request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!([]));
    assert_eq!(ctx.store.slot_count().await, 0);
}

#[tokio::test]
async fn test_unreadable_body_for_known_doctor_books_today() {
    let ctx = TestContext::new();
    let doctor_id = ctx.create_doctor("Gregory", "House", "Diagnostics").await;
    let request = Request::builder()
        .method("POST")
        .uri(slots_uri(doctor_id))
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from("not json at all"))
        .unwrap();

    let (status, _) = ctx.send(request).await;
    assert_eq!(status, StatusCode::OK);

    let (_, slots) = ctx.send(get(&slots_uri(doctor_id))).await;
    assert_eq!(slots[0]["duration"], json!(0));
    assert_eq!(slots[0]["from_hour"], json!(null));
}
