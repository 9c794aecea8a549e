use reqwest::redirect::Policy;

use crate::helpers::{assert_full_page, spawn_app};

fn no_redirect_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(Policy::none())
        .build()
        .expect("failed to build client")
}

fn valid_form() -> Vec<(&'static str, &'static str)> {
    vec![
        ("name", "John Doe"),
        ("email", "john.doe@example.com"),
        ("company", "Tech Corp"),
        ("phone", "+353 1 234 5678"),
        ("service", "Technology Consulting"),
        (
            "message",
            "I'm interested in your consulting services for our project.",
        ),
    ]
}

#[tokio::test]
async fn contact_page_returns_200_with_form() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(app.page_url("/contact"))
        .send()
        .await
        .expect("failed to execute request");

    assert_eq!(response.status(), 200);

    let body = response.text().await.expect("failed to read body");
    assert_full_page(&body);
    assert!(body.contains("name=\"email\""));
    assert!(body.contains("name=\"message\""));
}

#[tokio::test]
async fn valid_submission_redirects_to_success_page() {
    let app = spawn_app().await;

    let response = no_redirect_client()
        .post(app.page_url("/contact"))
        .form(&valid_form())
        .send()
        .await
        .expect("failed to POST form");

    assert_eq!(response.status(), 303);

    let location = response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok());
    assert_eq!(location, Some("/contact/success"));
}

#[tokio::test]
async fn blank_optional_fields_are_accepted() {
    let app = spawn_app().await;

    let response = no_redirect_client()
        .post(app.page_url("/contact"))
        .form(&[
            ("name", "John Doe"),
            ("email", "john.doe@example.com"),
            ("company", ""),
            ("phone", ""),
            ("service", "Technology Strategy"),
            ("message", "Please tell me more about your roadmap offering."),
        ])
        .send()
        .await
        .expect("failed to POST form");

    assert_eq!(response.status(), 303);
}

#[tokio::test]
async fn invalid_submission_rerenders_with_error_and_input() {
    let app = spawn_app().await;

    let response = no_redirect_client()
        .post(app.page_url("/contact"))
        .form(&[
            ("name", "John Doe"),
            ("email", "john.doe@example.com"),
            ("company", ""),
            ("phone", ""),
            ("service", "Technology Consulting"),
            ("message", "Too short"),
        ])
        .send()
        .await
        .expect("failed to POST form");

    assert_eq!(response.status(), 200);

    let body = response.text().await.expect("failed to read body");
    assert_full_page(&body);
    assert!(body.contains("message must be between"));
    // Submitted values are preserved for correction
    assert!(body.contains("value=\"John Doe\""));
}

#[tokio::test]
async fn malformed_email_is_rejected() {
    let app = spawn_app().await;

    let response = no_redirect_client()
        .post(app.page_url("/contact"))
        .form(&[
            ("name", "John Doe"),
            ("email", "not-an-email"),
            ("service", "Technology Consulting"),
            ("message", "A perfectly reasonable message body."),
        ])
        .send()
        .await
        .expect("failed to POST form");

    assert_eq!(response.status(), 200);

    let body = response.text().await.expect("failed to read body");
    assert!(body.contains("email address is not valid"));
}

#[tokio::test]
async fn success_page_returns_200() {
    let app = spawn_app().await;
    let client = reqwest::Client::new();

    let response = client
        .get(app.page_url("/contact/success"))
        .send()
        .await
        .expect("failed to execute request");

    assert_eq!(response.status(), 200);

    let body = response.text().await.expect("failed to read body");
    assert_full_page(&body);
    assert!(body.contains("Thank you for your message"));
}
