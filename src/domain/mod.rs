mod contact_email;
mod contact_form_data;
mod contact_submission;

pub use contact_email::ContactEmail;
pub use contact_form_data::ContactFormData;
pub use contact_submission::ContactSubmission;

/// Reasons a contact form is rejected before anything is dispatched.
///
/// The `Display` text is the alert shown to the visitor.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Vennligst fyll ut alle obligatoriske felter.")]
    MissingRequiredFields(Vec<&'static str>),
    #[error("Vennligst oppgi en gyldig e-postadresse.")]
    InvalidEmail,
}
