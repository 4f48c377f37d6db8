use crate::api::error::TransportError;
use log::{debug, warn};
use reqwest::Client;
use serde_json::Value;
use std::future::Future;

/// Fetches a JSON document from a url.
///
/// Implementations own retries, timeouts and connection handling; the client
/// calls [`Transport::fetch_json`] once per resource and treats any error as
/// terminal for the current call.
pub trait Transport {
    fn fetch_json(&self, url: &str) -> impl Future<Output = Result<Value, TransportError>> + Send;
}

/// [`Transport`] backed by a [`reqwest::Client`].
///
/// The WeatherFlow API reports errors such as an unknown station or a bad
/// token inside the JSON body, so a parseable body is returned whatever the
/// HTTP status.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn fetch_json(&self, url: &str) -> Result<Value, TransportError> {
        debug!("Requesting {}", redact_token(url));
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| TransportError::NetworkRequest(redact_token(url), e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::NetworkRequest(redact_token(url), e))?;

        match serde_json::from_slice::<Value>(&body) {
            Ok(value) => Ok(value),
            Err(_) if !status.is_success() => {
                warn!("HTTP error for {}: {}", redact_token(url), status);
                Err(TransportError::HttpStatus {
                    url: redact_token(url),
                    status,
                })
            }
            Err(e) => Err(TransportError::JsonParse {
                url: redact_token(url),
                source: e,
            }),
        }
    }
}

/// Strips the api token from a url so it never ends up in logs or errors.
pub(crate) fn redact_token(url: &str) -> String {
    match url.find("token=") {
        Some(start) => {
            let value_start = start + "token=".len();
            let value_end = url[value_start..]
                .find('&')
                .map_or(url.len(), |offset| value_start + offset);
            format!("{}***{}", &url[..value_start], &url[value_end..])
        }
        None => url.to_string(),
    }
}
