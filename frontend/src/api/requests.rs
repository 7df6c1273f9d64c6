use super::{
    client::ApiClient,
    records::{OfficialBusiness, PassSlip, RequestKind, StatusUpdate, TravelOrder},
    types::{ApiError, HistoryLogEntry},
};

impl ApiClient {
    pub async fn list_travel_orders(&self) -> Result<Vec<TravelOrder>, ApiError> {
        self.list_kind(RequestKind::TravelOrder).await
    }

    pub async fn list_official_business(&self) -> Result<Vec<OfficialBusiness>, ApiError> {
        self.list_kind(RequestKind::OfficialBusiness).await
    }

    pub async fn list_pass_slips(&self) -> Result<Vec<PassSlip>, ApiError> {
        self.list_kind(RequestKind::PassSlip).await
    }

    async fn list_kind<T>(&self, kind: RequestKind) -> Result<Vec<T>, ApiError>
    where
        T: serde::de::DeserializeOwned,
    {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_authorized(|client| client.get(format!("{}/{}", base_url, kind.api_path())))
            .await?;
        Self::map_json_response(response).await
    }

    pub async fn update_request_status(
        &self,
        kind: RequestKind,
        id: i64,
        payload: &StatusUpdate,
    ) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_authorized(|client| {
                client
                    .put(format!("{}/{}/{}/status", base_url, kind.api_path(), id))
                    .json(payload)
            })
            .await?;
        Self::map_empty_response(response).await
    }

    pub async fn list_history_logs(&self) -> Result<Vec<HistoryLogEntry>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_authorized(|client| client.get(format!("{}/history-logs", base_url)))
            .await?;
        Self::map_json_response(response).await
    }
}
