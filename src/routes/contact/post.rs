use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};

use crate::controller::{FormSubmissionController, SubmissionOutcome};
use crate::domain::ContactFormData;
use crate::page::ContactPage;
use crate::transport::SubmissionTransport;

/// Runs one submission of the posted form and renders the resulting page.
///
/// The page is always rendered; the status code tells automated clients
/// which outcome it shows.
#[tracing::instrument(
    name = "Handling a contact form submission",
    skip(form, transport),
    fields(
        customer_email = %form.email,
        customer_name = %form.name
    )
)]
pub async fn submit_contact(
    form: web::Form<ContactFormData>,
    transport: web::Data<dyn SubmissionTransport>,
) -> HttpResponse {
    let controller =
        FormSubmissionController::new(transport.into_inner(), ContactPage::with_fields(form.0));
    let status = match controller.submit().await {
        SubmissionOutcome::Delivered => StatusCode::OK,
        SubmissionOutcome::Rejected(_) => StatusCode::BAD_REQUEST,
        SubmissionOutcome::Failed => StatusCode::INTERNAL_SERVER_ERROR,
        // a fresh controller is never busy
        SubmissionOutcome::Ignored => StatusCode::CONFLICT,
    };
    HttpResponse::build(status)
        .content_type(ContentType::html())
        .body(controller.into_page().render())
}
