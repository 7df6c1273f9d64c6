use serde::{de::DeserializeOwned, Serialize};

use super::{
    client::ApiClient,
    types::{
        ApiError, EmployeePayload, EmployeeResponse, HeadPosition, HeadPositionPayload,
        PositionPayload, PositionResponse, UserPayload, UserResponse,
    },
};

impl ApiClient {
    async fn fetch_collection<T>(&self, path: &str) -> Result<Vec<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_authorized(|client| client.get(format!("{}/{}", base_url, path)))
            .await?;
        Self::map_json_response(response).await
    }

    async fn post_json<P, T>(&self, path: &str, payload: &P) -> Result<T, ApiError>
    where
        P: Serialize,
        T: DeserializeOwned,
    {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_authorized(|client| client.post(format!("{}/{}", base_url, path)).json(payload))
            .await?;
        Self::map_json_response(response).await
    }

    async fn put_json<P, T>(&self, path: &str, id: i64, payload: &P) -> Result<T, ApiError>
    where
        P: Serialize,
        T: DeserializeOwned,
    {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_authorized(|client| {
                client
                    .put(format!("{}/{}/{}", base_url, path, id))
                    .json(payload)
            })
            .await?;
        Self::map_json_response(response).await
    }

    /// `DELETE` on these resources is a soft delete on the API side.
    async fn soft_delete(&self, path: &str, id: i64) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_authorized(|client| client.delete(format!("{}/{}/{}", base_url, path, id)))
            .await?;
        Self::map_empty_response(response).await
    }

    pub async fn list_employees(&self) -> Result<Vec<EmployeeResponse>, ApiError> {
        self.fetch_collection("employees").await
    }

    pub async fn create_employee(
        &self,
        payload: &EmployeePayload,
    ) -> Result<EmployeeResponse, ApiError> {
        self.post_json("employees", payload).await
    }

    pub async fn update_employee(
        &self,
        id: i64,
        payload: &EmployeePayload,
    ) -> Result<EmployeeResponse, ApiError> {
        self.put_json("employees", id, payload).await
    }

    pub async fn delete_employee(&self, id: i64) -> Result<(), ApiError> {
        self.soft_delete("employees", id).await
    }

    pub async fn list_positions(&self) -> Result<Vec<PositionResponse>, ApiError> {
        self.fetch_collection("positions").await
    }

    pub async fn create_position(
        &self,
        payload: &PositionPayload,
    ) -> Result<PositionResponse, ApiError> {
        self.post_json("positions", payload).await
    }

    pub async fn update_position(
        &self,
        id: i64,
        payload: &PositionPayload,
    ) -> Result<PositionResponse, ApiError> {
        self.put_json("positions", id, payload).await
    }

    pub async fn delete_position(&self, id: i64) -> Result<(), ApiError> {
        self.soft_delete("positions", id).await
    }

    pub async fn list_head_positions(&self) -> Result<Vec<HeadPosition>, ApiError> {
        self.fetch_collection("head-positions").await
    }

    pub async fn create_head_position(
        &self,
        payload: &HeadPositionPayload,
    ) -> Result<HeadPosition, ApiError> {
        self.post_json("head-positions", payload).await
    }

    pub async fn update_head_position(
        &self,
        id: i64,
        payload: &HeadPositionPayload,
    ) -> Result<HeadPosition, ApiError> {
        self.put_json("head-positions", id, payload).await
    }

    pub async fn delete_head_position(&self, id: i64) -> Result<(), ApiError> {
        self.soft_delete("head-positions", id).await
    }

    pub async fn list_users(&self) -> Result<Vec<UserResponse>, ApiError> {
        self.fetch_collection("users").await
    }

    pub async fn create_user(&self, payload: &UserPayload) -> Result<UserResponse, ApiError> {
        self.post_json("users", payload).await
    }

    pub async fn update_user(
        &self,
        id: i64,
        payload: &UserPayload,
    ) -> Result<UserResponse, ApiError> {
        self.put_json("users", id, payload).await
    }

    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        self.soft_delete("users", id).await
    }
}
