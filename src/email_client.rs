use anyhow::Context;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};

use crate::domain::ContactEmail;

/// Client for a Resend-style transactional mail API.
#[derive(Debug)]
pub struct EmailClient {
    sender: ContactEmail,
    http_client: Client,
    endpoint: Url,
    authorization_token: Secret<String>,
}

impl EmailClient {
    pub fn new(
        base_url: String,
        sender: ContactEmail,
        authorization_token: Secret<String>,
        timeout: std::time::Duration,
    ) -> Result<Self, anyhow::Error> {
        let base_url = Url::parse(&base_url)
            .with_context(|| format!("Invalid mail service base url: {}", base_url))?;
        let endpoint = base_url
            .join("/emails")
            .context("Failed to join /emails with the mail service base url")?;

        // the timeout applies to every request sent through this client
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build the mail service http client")?;

        Ok(Self {
            sender,
            http_client,
            endpoint,
            authorization_token,
        })
    }

    #[tracing::instrument(
        name = "Sending an email",
        skip_all,
        fields(recipient = %recipient)
    )]
    pub async fn send_email(
        &self,
        recipient: &ContactEmail,
        subject: &str,
        html_content: &str,
        text_content: &str,
        reply_to: Option<&ContactEmail>,
    ) -> Result<(), reqwest::Error> {
        let request_body = SendEmailRequest {
            from: self.sender.as_ref(),
            to: recipient.as_ref(),
            subject,
            html: html_content,
            text: text_content,
            reply_to: reply_to.map(|email| email.as_ref()),
        };

        self.http_client
            .post(self.endpoint.clone())
            .bearer_auth(self.authorization_token.expose_secret())
            .json(&request_body)
            .send()
            .await?
            // `send` only fails on transport problems; status codes are checked here
            .error_for_status()?;

        Ok(())
    }
}

#[derive(serde::Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html: &'a str,
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
}
