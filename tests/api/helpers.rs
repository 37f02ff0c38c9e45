use once_cell::sync::Lazy;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockBuilder, MockServer};

use contact_form::configuration::{get_configuration, TransportKind};
use contact_form::startup::Application;
use contact_form::telemetry::{get_tracing_subscriber, init_subscriber};

// ensure that the tracing stack is only initialized once
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber =
            get_tracing_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber).expect("Failed to initialise tracing.");
    } else {
        let subscriber =
            get_tracing_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber).expect("Failed to initialise tracing.");
    }
});

// A struct holding data needed to access a test version of our application
pub struct TestApp {
    pub address: String,
    pub email_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn post_contact(&self, body: String) -> reqwest::Response {
        self.api_client
            .post(&format!("{}/contact", &self.address))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_contact_html(&self, body: String) -> (u16, String) {
        let response = self.post_contact(body).await;
        let status = response.status().as_u16();
        (status, response.text().await.unwrap())
    }

    pub async fn get_contact_html(&self) -> String {
        self.api_client
            .get(&format!("{}/contact", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
            .text()
            .await
            .unwrap()
    }
}

// Spawns the app on a random port, delivering through a mock mail service.
pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let email_server = MockServer::start().await;

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        c.application.port = 0;
        c.email_client.base_url = email_server.uri();
        c.email_client.timeout_milliseconds = 200;
        c.transport.kind = TransportKind::Email;
        c
    };

    let application = Application::build(configuration).expect("Failed to build application.");
    let port = application.port();
    let address = format!("http://127.0.0.1:{}", port);
    let _ = tokio::spawn(application.run_until_stopped());

    TestApp {
        address,
        email_server,
        api_client: reqwest::Client::new(),
    }
}

/// Returns the mock builder used for mocking the mail service
pub fn when_sending_an_email() -> MockBuilder {
    Mock::given(path("/emails")).and(method("POST"))
}
