use maud::{html, PreEscaped, DOCTYPE};

use crate::domain::ContactFormData;

pub const SUBMIT_LABEL: &str = "Send forespørsel";
pub const BUSY_LABEL: &str = "Sender...";

/// Values offered by the project type selection control.
pub const PROJECT_TYPES: &[(&str, &str)] = &[
    ("", "Velg type prosjekt"),
    ("nybygg", "Nybygg"),
    ("tilbygg", "Tilbygg"),
    ("renovering", "Renovering"),
    ("terrasse", "Terrasse"),
    ("kjokken", "Kjøkken"),
    ("bad", "Bad"),
    ("annet", "Annet"),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Banner {
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    pub label: String,
    pub disabled: bool,
}

impl Default for SubmitButton {
    fn default() -> Self {
        Self {
            label: SUBMIT_LABEL.to_string(),
            disabled: false,
        }
    }
}

/// An element the page should bring into view once rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollTarget {
    SuccessBanner,
}

impl ScrollTarget {
    pub fn element_id(&self) -> &'static str {
        match self {
            ScrollTarget::SuccessBanner => "form-success",
        }
    }
}

/// Presentation state of the contact form: field values, the two outcome
/// banners, the submit control and any pending alert.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPage {
    pub fields: ContactFormData,
    pub success_banner: Banner,
    pub error_banner: Banner,
    pub submit_button: SubmitButton,
    pub alert: Option<String>,
    pub scroll_target: Option<ScrollTarget>,
}

impl ContactPage {
    pub fn with_fields(fields: ContactFormData) -> Self {
        Self {
            fields,
            ..Default::default()
        }
    }

    /// Clears every field and unchecks the site visit checkbox.
    pub fn reset(&mut self) {
        self.fields = ContactFormData::default();
    }

    pub fn render(&self) -> String {
        let fields = &self.fields;
        let known_project_type = PROJECT_TYPES
            .iter()
            .any(|(value, _)| *value == fields.project_type);
        html! {
            (DOCTYPE)
            html lang="no" {
                head {
                    meta http-equiv="content-type" content="text/html; charset=utf-8";
                    title { "Kontakt oss" }
                }
                body {
                    @if let Some(alert) = &self.alert {
                        p class="form-alert" role="alert" { (alert) }
                    }
                    div id="form-success" class=(banner_class(self.success_banner)) {
                        p { "Takk for din henvendelse! Vi tar kontakt så snart som mulig." }
                    }
                    div id="form-error" class=(banner_class(self.error_banner)) {
                        p { "Noe gikk galt. Vennligst prøv igjen, eller ring oss direkte." }
                    }
                    form id="contact-form" action="/contact" method="post" {
                        label {
                            "Navn *"
                            input type="text" id="name" name="name" value=(fields.name);
                        }
                        label {
                            "E-post *"
                            input type="email" id="email" name="email" value=(fields.email);
                        }
                        label {
                            "Telefon *"
                            input type="tel" id="phone" name="phone" value=(fields.phone);
                        }
                        label {
                            "Adresse"
                            input type="text" id="address" name="address" value=(fields.address);
                        }
                        label {
                            "Type prosjekt"
                            select id="project-type" name="project-type" {
                                @for (value, label) in PROJECT_TYPES {
                                    option value=(value) selected[*value == fields.project_type] { (label) }
                                }
                                @if !known_project_type {
                                    option value=(fields.project_type) selected { (fields.project_type) }
                                }
                            }
                        }
                        label {
                            "Beskrivelse *"
                            textarea id="description" name="description" rows="6" { (fields.description) }
                        }
                        label {
                            input type="checkbox" id="site-visit" name="site-visit" checked[fields.site_visit];
                            "Jeg ønsker befaring"
                        }
                        button type="submit" disabled[self.submit_button.disabled] {
                            (self.submit_button.label)
                        }
                    }
                    @if let Some(target) = self.scroll_target {
                        script {
                            (PreEscaped(format!(
                                "document.getElementById('{}').scrollIntoView({{ behavior: 'smooth', block: 'center' }});",
                                target.element_id()
                            )))
                        }
                    }
                }
            }
        }
        .into_string()
    }
}

fn banner_class(banner: Banner) -> &'static str {
    if banner.visible {
        "form-message visible"
    } else {
        "form-message"
    }
}
