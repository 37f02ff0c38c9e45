use serde::{Deserialize, Deserializer};

/// The raw values of the contact form, exactly as the visitor entered them.
///
/// Every field defaults to empty so that a partially filled form reaches
/// validation instead of failing to deserialize.
#[derive(serde::Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, rename = "project-type")]
    pub project_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, rename = "site-visit", deserialize_with = "checkbox")]
    pub site_visit: bool,
}

/// Browsers only send a checkbox when it is checked.
fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.is_some())
}
