use reqwest::{header::HeaderMap, Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    api::types::{ApiError, ErrorBody},
    config,
    utils::cookies,
};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        if let Some(base) = &self.base_url {
            base.clone()
        } else {
            config::await_api_base_url().await
        }
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) fn get_auth_headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        let token = cookies::access_token()
            .ok_or_else(|| ApiError::unauthorized("You are not signed in."))?;
        headers.insert(
            reqwest::header::AUTHORIZATION,
            format!("Bearer {}", token)
                .parse()
                .map_err(|_| ApiError::unauthorized("Invalid token format"))?,
        );
        Ok(headers)
    }

    /// Sends a request carrying the bearer token and the session cookies.
    pub(crate) async fn send_authorized(
        &self,
        build: impl FnOnce(&Client) -> RequestBuilder,
    ) -> Result<Response, ApiError> {
        let headers = self.get_auth_headers()?;
        let response = self.dispatch(build(&self.client).headers(headers)).await?;
        Self::handle_unauthorized_status(response.status());
        Ok(response)
    }

    pub(crate) async fn send_anonymous(
        &self,
        build: impl FnOnce(&Client) -> RequestBuilder,
    ) -> Result<Response, ApiError> {
        self.dispatch(build(&self.client)).await
    }

    #[cfg(not(all(test, not(target_arch = "wasm32"))))]
    async fn dispatch(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        #[cfg(target_arch = "wasm32")]
        let builder = builder.fetch_credentials_include();
        builder
            .send()
            .await
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))
    }

    #[cfg(all(test, not(target_arch = "wasm32")))]
    async fn dispatch(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        let request = builder
            .build()
            .map_err(|e| ApiError::request_failed(format!("Request failed: {}", e)))?;
        mock_dispatch(request)
    }

    pub(crate) fn handle_unauthorized_status(status: StatusCode) {
        if status == StatusCode::UNAUTHORIZED {
            log::warn!("API rejected the session token; signing out");
            cookies::clear_session();
            Self::redirect_to_login_if_needed();
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn redirect_to_login_if_needed() {
        if let Some(window) = web_sys::window() {
            let location = window.location();
            if let Ok(pathname) = location.pathname() {
                if pathname == "/login" {
                    return;
                }
            }
            let _ = location.set_href("/login");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn redirect_to_login_if_needed() {}

    pub(crate) async fn map_json_response<T>(response: Response) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ApiError::unknown(format!("Failed to parse response: {}", e)))
        } else {
            Err(Self::map_error_response(response).await)
        }
    }

    pub(crate) async fn map_empty_response(response: Response) -> Result<(), ApiError> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(Self::map_error_response(response).await)
        }
    }

    async fn map_error_response(response: Response) -> ApiError {
        let status = response.status().as_u16();
        match response.json::<ErrorBody>().await {
            Ok(body) => body.into_api_error(status),
            Err(e) => ApiError::unknown(format!("Failed to parse error: {}", e)),
        }
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
pub(crate) use mock_registry::{register_mock, MockResponse, TestResponder};
#[cfg(all(test, not(target_arch = "wasm32")))]
use mock_registry::mock_dispatch;
