use futures::future::join4;
use std::rc::Rc;

use crate::api::{ApiClient, ApiError, HeadPosition, HistoryLogEntry, Role, StatusUpdate};

use super::{dispatch::build_status_update, types::RequestAggregate, types::RequestAction};

#[derive(Clone)]
pub struct RequestsRepository {
    client: Rc<ApiClient>,
}

impl RequestsRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    /// Fetches all three request kinds and the head positions concurrently.
    ///
    /// Every call runs to completion. If any of them failed the whole
    /// aggregate fails with the first error; each failure is logged.
    pub async fn load_aggregate(&self) -> Result<RequestAggregate, ApiError> {
        let (travel_orders, official_business, pass_slips, head_positions) = join4(
            self.client.list_travel_orders(),
            self.client.list_official_business(),
            self.client.list_pass_slips(),
            self.client.list_head_positions(),
        )
        .await;

        let first_error = {
            let failures: Vec<(&str, &ApiError)> = [
                ("travel orders", travel_orders.as_ref().err()),
                ("official business", official_business.as_ref().err()),
                ("pass slips", pass_slips.as_ref().err()),
                ("head positions", head_positions.as_ref().err()),
            ]
            .into_iter()
            .filter_map(|(label, err)| err.map(|err| (label, err)))
            .collect();
            for (label, err) in &failures {
                log::error!("failed to load {}: {} ({})", label, err.error, err.code);
            }
            failures.first().map(|(_, err)| (*err).clone())
        };
        if let Some(err) = first_error {
            return Err(err);
        }

        Ok(RequestAggregate::assemble(
            travel_orders?,
            official_business?,
            pass_slips?,
            head_positions?,
        ))
    }

    pub async fn load_history(&self) -> Result<Vec<HistoryLogEntry>, ApiError> {
        let mut entries = self.client.list_history_logs().await?;
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(entries)
    }

    /// Validates locally, then sends one status update. Returns the payload sent.
    pub async fn submit_action(
        &self,
        action: &RequestAction,
        role: Role,
        head_positions: &[HeadPosition],
    ) -> Result<StatusUpdate, ApiError> {
        let update = build_status_update(action, role, head_positions)?;
        let id = action
            .target
            .id
            .ok_or_else(|| ApiError::missing_identifier("Request identifier is missing."))?;
        self.client
            .update_request_status(action.target.kind, id, &update)
            .await?;
        log::info!(
            "{} {} set to {}",
            action.target.kind.abbreviation(),
            id,
            update.status.as_str()
        );
        Ok(update)
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::records::fixtures::{
        official_business_json, pass_slip_json, travel_order_json,
    };
    use crate::api::test_support::mock::*;
    use crate::api::{RequestKind, RequestStatus};
    use crate::pages::requests::dispatch::fixtures::full_roster;
    use crate::pages::requests::types::{ActionTarget, Decision};
    use crate::utils::cookies;
    use serde_json::json;

    fn repo(server: &MockServer) -> RequestsRepository {
        cookies::store_session("test-token", Role::Admin);
        RequestsRepository::new(ApiClient::new_with_base_url(server.url("/api")))
    }

    fn mock_collections(server: &MockServer, pass_slip_status: u16) {
        server.mock(|when, then| {
            when.method(GET).path("/api/travel-orders");
            then.status(200).json_body(json!([
                travel_order_json(1, "pending"),
                travel_order_json(2, "approved")
            ]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/official-business");
            then.status(200)
                .json_body(json!([official_business_json(3, "pendingAdmin")]));
        });
        server.mock(move |when, then| {
            when.method(GET).path("/api/pass-slips");
            if pass_slip_status == 200 {
                then.status(200).json_body(json!([pass_slip_json(4, "declined")]));
            } else {
                then.status(pass_slip_status)
                    .json_body(json!({ "message": "Pass slips unavailable" }));
            }
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/head-positions");
            then.status(200).json_body(json!([
                { "id": 1, "name": "Dir. Reyes", "title": "Regional Director", "kind": "regional_director" },
                { "id": 2, "name": "Engr. Tan", "title": "Chief, TSD", "kind": "chief" }
            ]));
        });
    }

    fn action(kind: RequestKind, id: i64, status: RequestStatus, decision: Decision) -> RequestAction {
        RequestAction {
            target: ActionTarget {
                id: Some(id),
                kind,
                status: Some(status),
            },
            decision,
        }
    }

    #[tokio::test]
    async fn aggregate_concatenates_kinds_in_order() {
        let server = MockServer::start_async().await;
        mock_collections(&server, 200);

        let aggregate = repo(&server).load_aggregate().await.unwrap();
        let keys: Vec<String> = aggregate.records.iter().map(|r| r.key()).collect();
        assert_eq!(keys, vec!["TO-1", "TO-2", "OB-3", "PS-4"]);
        assert_eq!(aggregate.head_positions.len(), 2);
        assert_eq!(
            aggregate.requester_counts.travel_orders.get("Juan Dela Cruz"),
            Some(&2)
        );
    }

    #[tokio::test]
    async fn aggregate_fails_whole_when_pass_slips_fail() {
        let server = MockServer::start_async().await;
        mock_collections(&server, 500);

        let err = repo(&server).load_aggregate().await.unwrap_err();
        assert_eq!(err.error, "Pass slips unavailable");
        // Siblings still ran to completion.
        assert_eq!(server.hits_for(GET, "/api/travel-orders").len(), 1);
        assert_eq!(server.hits_for(GET, "/api/official-business").len(), 1);
        assert_eq!(server.hits_for(GET, "/api/head-positions").len(), 1);
    }

    #[tokio::test]
    async fn decline_without_remarks_sends_nothing() {
        let server = MockServer::start_async().await;
        let err = repo(&server)
            .submit_action(
                &action(
                    RequestKind::TravelOrder,
                    1,
                    RequestStatus::Pending,
                    Decision::Decline {
                        remarks: String::new(),
                    },
                ),
                Role::Evaluator,
                &full_roster(),
            )
            .await
            .unwrap_err();
        assert!(err.is_validation());
        assert!(server.hits().is_empty());
    }

    #[tokio::test]
    async fn approve_sends_next_status_for_role() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(PUT).path("/api/official-business/3/status");
            then.status(200).json_body(json!({ "message": "updated" }));
        });
        server.mock(|when, then| {
            when.method(PUT).path("/api/travel-orders/1/status");
            then.status(200).json_body(json!({ "message": "updated" }));
        });
        let repo = repo(&server);

        let update = repo
            .submit_action(
                &action(
                    RequestKind::OfficialBusiness,
                    3,
                    RequestStatus::PendingAdmin,
                    Decision::Approve,
                ),
                Role::Admin,
                &full_roster(),
            )
            .await
            .unwrap();
        assert_eq!(update.status, RequestStatus::Approved);
        let body = server.hits_for(PUT, "/api/official-business/3/status")[0]
            .body
            .clone()
            .unwrap();
        assert_eq!(body["status"], json!("approved"));
        assert_eq!(body["head_position_id"], json!(1));

        repo.submit_action(
            &action(
                RequestKind::TravelOrder,
                1,
                RequestStatus::Pending,
                Decision::Approve,
            ),
            Role::Evaluator,
            &full_roster(),
        )
        .await
        .unwrap();
        let body = server.hits_for(PUT, "/api/travel-orders/1/status")[0]
            .body
            .clone()
            .unwrap();
        assert_eq!(body["status"], json!("pendingAdmin"));
        assert_eq!(body["chief_id"], json!(2));
    }

    #[tokio::test]
    async fn history_is_sorted_newest_first() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/api/history-logs");
            then.status(200).json_body(json!([
                { "id": 1, "user": "eva", "action": "approved", "created_at": "2025-03-01T00:00:00Z" },
                { "id": 2, "user": "adm", "action": "declined", "created_at": "2025-03-02T00:00:00Z" }
            ]));
        });
        let history = repo(&server).load_history().await.unwrap();
        assert_eq!(history[0].id, 2);
    }
}
