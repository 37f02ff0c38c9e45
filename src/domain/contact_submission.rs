use crate::domain::{ContactEmail, ContactFormData, ValidationError};

/// A validated contact request, ready to be handed to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: ContactEmail,
    pub phone: String,
    pub address: Option<String>,
    pub project_type: Option<String>,
    pub description: String,
    pub site_visit_requested: bool,
}

impl TryFrom<&ContactFormData> for ContactSubmission {
    type Error = ValidationError;

    fn try_from(form: &ContactFormData) -> Result<Self, Self::Error> {
        let missing: Vec<&'static str> = [
            ("name", &form.name),
            ("email", &form.email),
            ("phone", &form.phone),
            ("description", &form.description),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(field, _)| field)
        .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingRequiredFields(missing));
        }

        let email = ContactEmail::parse(form.email.clone())?;
        Ok(ContactSubmission {
            name: form.name.clone(),
            email,
            phone: form.phone.clone(),
            address: optional(&form.address),
            project_type: optional(&form.project_type),
            description: form.description.clone(),
            site_visit_requested: form.site_visit,
        })
    }
}

fn optional(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
