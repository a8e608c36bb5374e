use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{Display, Formatter};

use crate::relay_config::DefaultCredentials;

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Copy, Hash, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
    Head,
    Patch,
}

#[derive(Serialize, Deserialize, PartialEq, Debug, Clone, Default)]
#[serde(default)]
pub struct RelayRequest {
    pub url: String,
    #[serde(rename = "requestType")]
    pub request_type: Option<String>,
    #[serde(rename = "requestBody")]
    pub request_body: Option<Value>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub account_id: Option<String>,
    pub ccount_id: Option<String>,
}

#[derive(PartialEq, Debug, Clone)]
pub struct ResolvedCredentials {
    pub account_id: String,
    pub client_id: String,
    pub client_secret: String,
}

impl RelayRequest {
    pub fn credentials(&self, defaults: &DefaultCredentials) -> ResolvedCredentials {
        let client_id = pick(&self.client_id, &defaults.client_id);
        let client_secret = pick(&self.client_secret, &defaults.client_secret);

        // Account selection keys off the legacy `ccount_id` field, so a
        // caller-supplied `account_id` on its own is never picked up.
        // TODO: confirm with the API owners whether this should read `account_id`
        // before renaming the gate field.
        let account_id = if has_value(&self.ccount_id) {
            self.account_id.clone().unwrap_or_default()
        } else {
            defaults.account_id.clone()
        };

        ResolvedCredentials {
            account_id,
            client_id,
            client_secret,
        }
    }

    pub fn resolved_method(&self) -> HttpMethod {
        match &self.request_type {
            Some(name) if !name.is_empty() => {
                HttpMethod::try_from(name.as_str()).unwrap_or_default()
            }
            _ => HttpMethod::default(),
        }
    }

    pub fn payload_bytes(&self) -> Option<Vec<u8>> {
        let body = self.request_body.as_ref()?;

        match body {
            Value::String(text) if !text.is_empty() => Some(text.clone().into_bytes()),
            Value::Object(_) | Value::Array(_) => serde_json::to_vec(body).ok(),
            _ => None,
        }
    }
}

fn pick(field: &Option<String>, default: &str) -> String {
    match field {
        Some(value) if !value.is_empty() => value.clone(),
        _ => String::from(default),
    }
}

fn has_value(field: &Option<String>) -> bool {
    matches!(field, Some(value) if !value.is_empty())
}

impl TryFrom<&str> for HttpMethod {
    type Error = ();

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "get" => Ok(HttpMethod::Get),
            "post" => Ok(HttpMethod::Post),
            "patch" => Ok(HttpMethod::Patch),
            "put" => Ok(HttpMethod::Put),
            "head" => Ok(HttpMethod::Head),
            "delete" => Ok(HttpMethod::Delete),
            _ => Err(()),
        }
    }
}

impl Display for HttpMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpMethod::Get => f.write_str("get"),
            HttpMethod::Post => f.write_str("post"),
            HttpMethod::Put => f.write_str("put"),
            HttpMethod::Delete => f.write_str("delete"),
            HttpMethod::Head => f.write_str("head"),
            HttpMethod::Patch => f.write_str("patch"),
        }
    }
}
