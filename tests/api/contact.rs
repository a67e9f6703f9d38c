use folio::routes::{ContactResponse, DELIVERY_FAILED, INVALID_BODY, NOT_CONFIGURED_NOTICE};
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{any, header, method, path},
};

use crate::helpers::{spawn_app, spawn_unconfigured_app};

fn ada() -> serde_json::Value {
    serde_json::json!({
        "name": "Ada",
        "email": "ada@example.com",
        "message": "Hello",
        "company": ""
    })
}

#[tokio::test]
async fn contact_delivers_a_valid_message() {
    let app = spawn_app().await;

    Mock::given(path("/emails"))
        .and(method("POST"))
        .and(header("Authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post_contact(&ada()).await;

    assert_eq!(200, response.status().as_u16());
    let body: ContactResponse = response.json().await.unwrap();
    assert_eq!(body, ContactResponse::success());
}

#[tokio::test]
async fn contact_replies_to_the_visitor() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .mount(&app.email_server)
        .await;

    app.post_contact(&ada()).await;

    let requests = app.email_requests().await;
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body["reply_to"], "ada@example.com");
    assert_eq!(body["to"], serde_json::json!(["owner@example.com"]));
    assert_eq!(body["subject"], "New message from Ada");
    assert_eq!(body["text"], "Name: Ada\nEmail: ada@example.com\n\nHello");
}

#[tokio::test]
async fn contact_returns_400_when_fields_are_missing_or_blank() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let test_cases = vec![
        (
            serde_json::json!({"name": "", "email": "ada@example.com", "message": "Hello"}),
            "empty name",
        ),
        (
            serde_json::json!({"name": "Ada", "email": "  ", "message": "Hello"}),
            "blank email",
        ),
        (
            serde_json::json!({"name": "Ada", "email": "ada@example.com", "message": "\t"}),
            "blank message",
        ),
        (
            serde_json::json!({"email": "ada@example.com", "message": "Hello"}),
            "missing name",
        ),
        (serde_json::json!({}), "missing everything"),
    ];

    for (body, description) in test_cases {
        let response = app.post_contact(&body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 Bad Request when the payload had {}.",
            description
        );
        let body: ContactResponse = response.json().await.unwrap();
        assert!(!body.ok);
        assert!(body.error.is_some_and(|e| !e.is_empty()));
    }
}

#[tokio::test]
async fn contact_returns_400_for_an_email_without_at_symbol() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let response = app
        .post_contact(&serde_json::json!({
            "name": "Ada",
            "email": "ada.example.com",
            "message": "Hello"
        }))
        .await;

    assert_eq!(400, response.status().as_u16());
    let body: ContactResponse = response.json().await.unwrap();
    assert_eq!(
        body,
        ContactResponse::failure("Please enter a valid email address.")
    );
}

#[tokio::test]
async fn contact_returns_400_for_an_unreadable_body() {
    let app = spawn_app().await;

    for body in ["not json", "[1, 2, 3]", r#"{"name": 42}"#] {
        let response = app.post_contact_raw(body).await;

        assert_eq!(400, response.status().as_u16(), "Payload: {body}");
        let body: ContactResponse = response.json().await.unwrap();
        assert_eq!(body, ContactResponse::failure(INVALID_BODY));
    }
}

#[tokio::test]
async fn contact_silently_discards_honeypot_submissions() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let test_cases = vec![
        serde_json::json!({
            "name": "Bot",
            "email": "x@x.com",
            "message": "spam",
            "company": "filled"
        }),
        serde_json::json!({"name": "", "email": "nope", "company": "filled"}),
        serde_json::json!({
            "name": 42,
            "email": "x@x.com",
            "message": "spam",
            "company": "filled"
        }),
    ];

    for body in test_cases {
        let response = app.post_contact(&body).await;

        assert_eq!(200, response.status().as_u16());
        let body: ContactResponse = response.json().await.unwrap();
        assert_eq!(body, ContactResponse::success());
    }

    assert!(app.email_requests().await.is_empty());
}

#[tokio::test]
async fn contact_succeeds_without_delivery_when_unconfigured() {
    let app = spawn_unconfigured_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let response = app.post_contact(&ada()).await;

    assert_eq!(200, response.status().as_u16());
    let body: ContactResponse = response.json().await.unwrap();
    assert_eq!(body, ContactResponse::received(NOT_CONFIGURED_NOTICE));
}

#[tokio::test]
async fn contact_still_validates_when_unconfigured() {
    let app = spawn_unconfigured_app().await;

    let response = app
        .post_contact(&serde_json::json!({"name": "Ada", "email": "", "message": "Hello"}))
        .await;

    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn contact_returns_500_with_a_generic_error_when_delivery_fails() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(
            ResponseTemplate::new(422).set_body_string("provider secret: invalid from address"),
        )
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app.post_contact(&ada()).await;

    assert_eq!(500, response.status().as_u16());
    let body: ContactResponse = response.json().await.unwrap();
    assert_eq!(body, ContactResponse::failure(DELIVERY_FAILED));
}
