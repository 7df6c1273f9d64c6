use super::{
    client::ApiClient,
    types::{ApiError, LoginRequest, LoginResponse, UserResponse},
};
use crate::utils::cookies;

impl ApiClient {
    /// Signs in and persists the session cookies on success.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_anonymous(|client| client.post(format!("{}/login", base_url)).json(&request))
            .await?;
        let login: LoginResponse = Self::map_json_response(response).await?;
        cookies::store_session(&login.token, login.user.role);
        log::info!("signed in as {} ({})", login.user.username, login.user.role.as_str());
        Ok(login)
    }

    /// Revokes the token server-side; local cookies are cleared either way.
    pub async fn logout(&self) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let result = match self
            .send_authorized(|client| client.post(format!("{}/logout", base_url)))
            .await
        {
            Ok(response) => Self::map_empty_response(response).await,
            Err(err) => Err(err),
        };
        cookies::clear_session();
        result
    }

    pub async fn get_me(&self) -> Result<UserResponse, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_authorized(|client| client.get(format!("{}/user", base_url)))
            .await?;
        Self::map_json_response(response).await
    }
}
