//! HTTP client for exercise backend requests.
//!
//! This module provides a low-level HTTP client wrapper that joins the
//! configured base URL with endpoint paths and attaches query parameters.

use super::BackendError;
use reqwest::{Method, Response};

/// Makes requests to the backend and hands back the raw response.
///
pub struct Client {
    pub(crate) base_url: String,
    pub(crate) http_client: reqwest::Client,
}

impl Client {
    /// Returns a new instance for the given base URL.
    ///
    /// # Panics
    /// Panics if the HTTP client cannot be created, which only happens on an
    /// invalid builder configuration.
    pub fn new(base_url: &str) -> Self {
        Client {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client: reqwest::Client::builder()
                .build()
                .expect("Failed to create HTTP client - this should never happen"),
        }
    }

    /// Make GET request for the path with the given query parameters.
    ///
    pub async fn get(
        &self,
        path: &str,
        params: Option<Vec<(&str, &str)>>,
    ) -> Result<Response, BackendError> {
        self.call(Method::GET, path, params).await
    }

    /// Make request and return the response regardless of its status.
    ///
    async fn call(
        &self,
        method: Method,
        path: &str,
        params: Option<Vec<(&str, &str)>>,
    ) -> Result<Response, BackendError> {
        let request_url = format!("{}/{}", &self.base_url, path.trim_start_matches('/'));
        let mut request = self.http_client.request(method, &request_url);
        if let Some(params) = params {
            request = request.query(&params);
        }
        Ok(request.send().await?)
    }
}
