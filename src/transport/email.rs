use chrono::Utc;
use maud::html;

use crate::domain::{ContactEmail, ContactSubmission};
use crate::email_client::EmailClient;
use crate::page::PROJECT_TYPES;
use crate::transport::{SubmissionTransport, TransportError};

/// Forwards contact submissions to the business inbox through the mail API.
///
/// The visitor's address goes into `reply_to`, so answering the email reaches
/// the visitor directly.
pub struct EmailTransport {
    email_client: EmailClient,
    recipient: ContactEmail,
}

impl EmailTransport {
    pub fn new(email_client: EmailClient, recipient: ContactEmail) -> Self {
        Self {
            email_client,
            recipient,
        }
    }
}

#[async_trait::async_trait]
impl SubmissionTransport for EmailTransport {
    #[tracing::instrument(name = "Forwarding a contact submission by email", skip_all)]
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), TransportError> {
        let received_at = Utc::now().format("%Y-%m-%d %H:%M UTC").to_string();
        let rows = summary_rows(submission, &received_at);
        let subject = format!("Ny forespørsel fra {}", submission.name);
        let text_content = rows
            .iter()
            .map(|(label, value)| format!("{}: {}", label, value))
            .collect::<Vec<_>>()
            .join("\n");
        let html_content = html! {
            h2 { "Ny forespørsel via kontaktskjemaet" }
            table {
                @for (label, value) in &rows {
                    tr {
                        th { (label) }
                        td { (value) }
                    }
                }
            }
        }
        .into_string();

        self.email_client
            .send_email(
                &self.recipient,
                &subject,
                &html_content,
                &text_content,
                Some(&submission.email),
            )
            .await?;
        Ok(())
    }
}

fn summary_rows(submission: &ContactSubmission, received_at: &str) -> Vec<(&'static str, String)> {
    let project_type = submission
        .project_type
        .as_deref()
        .map(|value| {
            PROJECT_TYPES
                .iter()
                .find(|(known, _)| *known == value)
                .map(|(_, label)| label.to_string())
                .unwrap_or_else(|| value.to_string())
        })
        .unwrap_or_else(|| "-".to_string());
    vec![
        ("Navn", submission.name.clone()),
        ("E-post", submission.email.to_string()),
        ("Telefon", submission.phone.clone()),
        (
            "Adresse",
            submission.address.clone().unwrap_or_else(|| "-".to_string()),
        ),
        ("Type prosjekt", project_type),
        (
            "Befaring ønsket",
            if submission.site_visit_requested {
                "Ja"
            } else {
                "Nei"
            }
            .to_string(),
        ),
        ("Beskrivelse", submission.description.clone()),
        ("Mottatt", received_at.to_string()),
    ]
}
