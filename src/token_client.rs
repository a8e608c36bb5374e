use log::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::Deserialize;

pub struct TokenClient {
    endpoint: String,
}

#[derive(Deserialize, Debug, Default)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
}

impl TokenClient {
    pub fn new(endpoint: &str) -> TokenClient {
        TokenClient {
            endpoint: String::from(endpoint),
        }
    }

    pub async fn fetch_access_token(
        &self,
        http_client: &Client,
        client_id: &str,
        client_secret: &str,
    ) -> Result<String, reqwest::Error> {
        let response = http_client
            .post(&self.endpoint)
            .query(&[("grant_type", "client_credentials")])
            .basic_auth(client_id, Some(client_secret))
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .send()
            .await?;

        let raw = response.bytes().await?;

        debug!("Token endpoint replied with {} bytes", raw.len());

        // A reply that is not JSON counts the same as one without a token.
        let decoded: TokenResponse = serde_json::from_slice(&raw).unwrap_or_default();

        Ok(decoded.access_token.unwrap_or_default())
    }
}
