use actix_cors::Cors;
use actix_web::middleware::DefaultHeaders;
use actix_web::{web, HttpResponse, ResponseError};
use bytes::Bytes;
use futures_core::Stream;
use futures_util::StreamExt;
use log::{debug, error};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;

use crate::error_log::ErrorLog;
use crate::relay_config::DefaultCredentials;
use crate::relay_request::{HttpMethod, RelayRequest};
use crate::token_client::TokenClient;

const FORWARD_ERROR_PREFIX: &str = "Error: there was a problem with your API call";
const LOG_OPEN_SENTINEL: &str = "-1";
const EMPTY_RESPONSE_BODY: &str = "{null}";

pub struct RelayState {
    pub http_client: Client,
    pub token_client: TokenClient,
    pub defaults: DefaultCredentials,
    pub error_log: ErrorLog,
}

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("{0}")]
    TokenFetch(#[source] reqwest::Error),
    #[error("{0}")]
    Forward(#[source] reqwest::Error),
}

pub fn configure(service_config: &mut web::ServiceConfig) {
    service_config.route("/", web::post().to(relay_handler));
}

pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .send_wildcard()
}

pub fn security_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add(("Access-Control-Allow-Origin", "*"))
        .add(("Content-Type", "application/json"))
        .add(("X-Content-Type-Options", "nosniff"))
        .add(("X-XSS-Protection", ""))
}

pub async fn relay_handler(data: web::Data<RelayState>, mut payload: web::Payload) -> HttpResponse {
    let (size, _) = payload.size_hint();
    let mut body_buffer: Vec<u8> = Vec::with_capacity(size);

    while let Some(chunk) = payload.next().await {
        match chunk {
            Ok(bytes) => body_buffer.extend_from_slice(&bytes),
            Err(err) => return err.error_response(),
        }
    }

    // A body that does not decode is relayed as an empty request, so it
    // surfaces through the forward error path rather than being rejected.
    let request: RelayRequest = serde_json::from_slice(&body_buffer).unwrap_or_default();

    match run_relay(&data, &request).await {
        Ok(upstream_body) => {
            let body = match serde_json::from_slice::<Value>(&upstream_body) {
                Ok(Value::Null) | Err(_) => Bytes::from_static(EMPTY_RESPONSE_BODY.as_bytes()),
                Ok(_) => upstream_body,
            };

            HttpResponse::Ok().content_type("application/json").body(body)
        }
        Err(RelayError::TokenFetch(err)) => HttpResponse::Ok()
            .content_type("application/json")
            .body(err.to_string()),
        Err(RelayError::Forward(err)) => {
            error!("Forward request failed {}", err);

            match data.error_log.append(&err.to_string()) {
                Ok(()) => HttpResponse::Ok()
                    .content_type("application/json")
                    .body(format!("{}{}", FORWARD_ERROR_PREFIX, err)),
                Err(log_err) => {
                    error!("Unable to open error log {}", log_err);

                    HttpResponse::Ok()
                        .content_type("application/json")
                        .body(LOG_OPEN_SENTINEL)
                }
            }
        }
    }
}

pub async fn run_relay(state: &RelayState, request: &RelayRequest) -> Result<Bytes, RelayError> {
    let credentials = request.credentials(&state.defaults);
    let access_token = state
        .token_client
        .fetch_access_token(
            &state.http_client,
            &credentials.client_id,
            &credentials.client_secret,
        )
        .await
        .map_err(RelayError::TokenFetch)?;

    let method = request.resolved_method();

    debug!(
        "Relaying {} '{}' for account '{}'",
        method, &request.url, &credentials.account_id
    );

    let url = request.url.as_str();
    let mut builder = match method {
        HttpMethod::Get => state.http_client.get(url),
        HttpMethod::Post => state.http_client.post(url),
        HttpMethod::Put => state.http_client.put(url),
        HttpMethod::Delete => state.http_client.delete(url),
        HttpMethod::Head => state.http_client.head(url),
        HttpMethod::Patch => state.http_client.patch(url),
    };

    builder = builder
        .header(AUTHORIZATION, format!("Bearer {}", access_token))
        .header(CONTENT_TYPE, "application/json");

    if let Some(payload) = request.payload_bytes() {
        builder = builder.body(payload);
    }

    let response = builder.send().await.map_err(RelayError::Forward)?;

    response.bytes().await.map_err(RelayError::Forward)
}
