//! HTTP client for posts API requests.
//!
//! This module provides a low-level HTTP client wrapper for making requests
//! to the posts backend, handling authentication and error responses.

use super::error::ApiError;
use reqwest::{Method, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};

/// Makes requests to the posts backend and conforms response data to models.
///
pub struct Client {
    access_token: Option<String>,
    base_url: String,
    http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given base URL and optional access token.
    ///
    pub fn new(base_url: &str, access_token: Option<&str>) -> Result<Self, ApiError> {
        Ok(Client {
            access_token: access_token.map(str::to_owned),
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client: reqwest::Client::builder().build()?,
        })
    }

    /// Return the deserialized body of a GET request to the path.
    ///
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.request(Method::GET, path).send().await?;
        let bytes = check(response).await?.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Send the body as JSON with a POST request to the path.
    ///
    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<Response, ApiError> {
        let response = self.request(Method::POST, path).json(body).send().await?;
        check(response).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        log::debug!("{} {}", method, url);
        let request = self.http_client.request(method, &url);
        match &self.access_token {
            Some(token) => request.header("Authorization", format!("Bearer {}", token)),
            None => request,
        }
    }
}

/// Pass successful responses through and turn the rest into status errors,
/// preferring a JSON `message` field over the raw body.
///
async fn check(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let text = response
        .text()
        .await
        .unwrap_or_else(|_| String::from("Unable to read response"));
    log::error!("API request failed with status {}: {}", status, text);
    Err(ApiError::Status {
        status: status.as_u16(),
        message: error_message(&text),
    })
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| {
            json.get("message")
                .and_then(|m| m.as_str())
                .map(str::to_owned)
        })
        .unwrap_or_else(|| body.trim().to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_json_message() {
        assert_eq!(
            error_message(r#"{"message":"Title already taken","code":42}"#),
            "Title already taken"
        );
    }

    #[test]
    fn error_message_falls_back_to_body() {
        assert_eq!(error_message(" Bad Gateway \n"), "Bad Gateway");
        assert_eq!(error_message(r#"{"error":"nope"}"#), r#"{"error":"nope"}"#);
    }

    #[test]
    fn new_trims_trailing_slash() {
        let client = Client::new("http://localhost:3000/api/", None).unwrap();
        assert_eq!(client.base_url, "http://localhost:3000/api");
    }
}
