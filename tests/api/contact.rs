use wiremock::ResponseTemplate;

use crate::helpers::{spawn_app, when_sending_an_email};

const VALID_BODY: &str =
    "name=Ola&email=ola%40test.no&phone=12345678&description=Need%20a%20deck";

const SUCCESS_VISIBLE: &str = r#"<div id="form-success" class="form-message visible">"#;
const SUCCESS_HIDDEN: &str = r#"<div id="form-success" class="form-message">"#;
const ERROR_VISIBLE: &str = r#"<div id="form-error" class="form-message visible">"#;
const ERROR_HIDDEN: &str = r#"<div id="form-error" class="form-message">"#;
const ENABLED_BUTTON: &str = r#"<button type="submit">Send forespørsel</button>"#;

#[tokio::test]
async fn contact_form_is_served_empty() {
    // arrange
    let app = spawn_app().await;

    // act
    let html_page = app.get_contact_html().await;

    // assert
    assert!(html_page.contains(r#"<form id="contact-form" action="/contact" method="post">"#));
    assert!(html_page.contains(SUCCESS_HIDDEN));
    assert!(html_page.contains(ERROR_HIDDEN));
    assert!(html_page.contains(r#"name="name" value="""#));
    assert!(html_page.contains(ENABLED_BUTTON));
}

#[tokio::test]
async fn a_valid_submission_is_emailed_and_the_form_is_cleared() {
    // arrange
    let app = spawn_app().await;
    when_sending_an_email()
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // act
    let (status, html_page) = app.post_contact_html(VALID_BODY.to_string()).await;

    // assert
    assert_eq!(status, 200);
    assert!(html_page.contains(SUCCESS_VISIBLE));
    assert!(html_page.contains(ERROR_HIDDEN));
    assert!(html_page.contains(r#"name="name" value="""#));
    assert!(html_page.contains(r#"name="phone" value="""#));
    assert!(!html_page.contains("Need a deck"));
    assert!(html_page.contains(ENABLED_BUTTON));
    assert!(html_page.contains("scrollIntoView"));
}

#[tokio::test]
async fn the_email_carries_the_submitted_details() {
    // arrange
    let app = spawn_app().await;
    when_sending_an_email()
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;
    let body = format!(
        "{}&address=Storgata%201&project-type=tilbygg&site-visit=on",
        VALID_BODY
    );

    // act
    app.post_contact(body).await;

    // assert
    let email_request = &app.email_server.received_requests().await.unwrap()[0];
    let body: serde_json::Value = serde_json::from_slice(&email_request.body).unwrap();
    assert_eq!(body["to"], "post@natvikcarpentry.no");
    assert_eq!(body["reply_to"], "ola@test.no");
    assert_eq!(body["subject"], "Ny forespørsel fra Ola");
    let text = body["text"].as_str().unwrap();
    assert!(text.contains("Adresse: Storgata 1"));
    assert!(text.contains("Type prosjekt: Tilbygg"));
    assert!(text.contains("Befaring ønsket: Ja"));
    assert!(text.contains("Beskrivelse: Need a deck"));
}

#[tokio::test]
async fn a_mail_service_failure_shows_the_error_banner_and_keeps_the_input() {
    // arrange
    let app = spawn_app().await;
    when_sending_an_email()
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // act
    let (status, html_page) = app.post_contact_html(VALID_BODY.to_string()).await;

    // assert
    assert_eq!(status, 500);
    assert!(html_page.contains(ERROR_VISIBLE));
    assert!(html_page.contains(SUCCESS_HIDDEN));
    assert!(html_page.contains(r#"name="name" value="Ola""#));
    assert!(html_page.contains(r#"name="email" value="ola@test.no""#));
    assert!(html_page.contains(r#"name="phone" value="12345678""#));
    assert!(html_page.contains(">Need a deck</textarea>"));
    assert!(html_page.contains(ENABLED_BUTTON));
    // the cause is logged, never shown
    assert!(!html_page.contains("500"));
}

#[tokio::test]
async fn a_slow_mail_service_is_reported_as_a_failure() {
    // arrange
    let app = spawn_app().await;
    when_sending_an_email()
        .respond_with(ResponseTemplate::new(200).set_delay(std::time::Duration::from_secs(5)))
        .expect(1)
        .mount(&app.email_server)
        .await;

    // act
    let (status, html_page) = app.post_contact_html(VALID_BODY.to_string()).await;

    // assert
    assert_eq!(status, 500);
    assert!(html_page.contains(ERROR_VISIBLE));
}

#[tokio::test]
async fn missing_required_fields_are_rejected_without_sending_an_email() {
    // arrange
    let app = spawn_app().await;
    when_sending_an_email()
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;
    let test_cases = vec![
        ("email=ola%40test.no&phone=1&description=deck", "missing name"),
        ("name=Ola&phone=1&description=deck", "missing email"),
        ("name=Ola&email=ola%40test.no&description=deck", "missing phone"),
        ("name=Ola&email=ola%40test.no&phone=1", "missing description"),
        ("name=&email=ola%40test.no&phone=1&description=deck", "empty name"),
        ("", "empty form"),
    ];

    for (invalid_body, error_message) in test_cases {
        // act
        let (status, html_page) = app.post_contact_html(invalid_body.to_string()).await;

        // assert
        assert_eq!(
            400, status,
            "The API did not fail with 400 when the payload was {}",
            error_message
        );
        assert!(
            html_page.contains("Vennligst fyll ut alle obligatoriske felter."),
            "No alert shown when the payload was {}",
            error_message
        );
        assert!(html_page.contains(SUCCESS_HIDDEN));
        assert!(html_page.contains(ERROR_HIDDEN));
    }
}

#[tokio::test]
async fn an_invalid_email_is_rejected_without_sending_an_email() {
    // arrange
    let app = spawn_app().await;
    when_sending_an_email()
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;
    let test_cases = vec![
        ("ola", "no at sign"),
        ("ola%40test", "no dot in the domain"),
        ("ola%20nordmann%40test.no", "whitespace"),
        ("ola%40nordmann%40test.no", "two at signs"),
    ];

    for (email, error_message) in test_cases {
        // act
        let body = format!(
            "name=Ola&email={}&phone=12345678&description=Need%20a%20deck",
            email
        );
        let (status, html_page) = app.post_contact_html(body).await;

        // assert
        assert_eq!(
            400, status,
            "The API did not fail with 400 when the email had {}",
            error_message
        );
        assert!(html_page.contains("Vennligst oppgi en gyldig e-postadresse."));
        assert!(html_page.contains(r#"name="name" value="Ola""#));
    }
}
