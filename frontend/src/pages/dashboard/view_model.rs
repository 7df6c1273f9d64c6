use crate::api::{ApiClient, ApiError, RequestKind, RequestRecord, Role};
use crate::notifications::{use_notifications, PendingCounts};
use crate::pages::dashboard::utils::{approved_on, calendar_weeks, CalendarEntry, MonthCursor};
use crate::pages::requests::{repository::RequestsRepository, types::RequestAggregate};
use crate::state::auth::use_role;
use chrono::NaiveDate;
use leptos::*;

pub const TOP_REQUESTERS: usize = 5;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub role: Signal<Role>,
    pub month: RwSignal<MonthCursor>,
    pub aggregate_resource: Resource<u32, Result<RequestAggregate, ApiError>>,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(RequestsRepository::new(api));
        let role = use_role();
        let notifications = use_notifications();
        let status_version = notifications.status_version();

        let aggregate_resource = create_resource(
            move || status_version.get(),
            move |_| {
                let repo = repository.get_value();
                async move {
                    let result = repo.load_aggregate().await;
                    if let Ok(aggregate) = &result {
                        notifications.replace_counts(PendingCounts::from_records(
                            &aggregate.records,
                            role.get_untracked(),
                        ));
                    }
                    result
                }
            },
        );

        Self {
            role,
            month: create_rw_signal(MonthCursor::current()),
            aggregate_resource,
        }
    }

    fn records(&self) -> Signal<Vec<RequestRecord>> {
        let resource = self.aggregate_resource;
        Signal::derive(move || {
            resource
                .get()
                .and_then(Result::ok)
                .map(|aggregate| aggregate.records)
                .unwrap_or_default()
        })
    }

    pub fn load_error(&self) -> Signal<Option<ApiError>> {
        let resource = self.aggregate_resource;
        Signal::derive(move || resource.get().and_then(Result::err))
    }

    /// Requests waiting on the signed-in role.
    pub fn pending_counts(&self) -> Signal<PendingCounts> {
        let records = self.records();
        let role = self.role;
        Signal::derive(move || records.with(|records| PendingCounts::from_records(records, role.get())))
    }

    pub fn top_requesters(&self, kind: RequestKind) -> Signal<Vec<(String, usize)>> {
        let resource = self.aggregate_resource;
        Signal::derive(move || {
            resource
                .with(|loaded| {
                    loaded.as_ref().and_then(|result| result.as_ref().ok()).map(|aggregate| {
                        aggregate.requester_counts.top(kind, TOP_REQUESTERS)
                    })
                })
                .unwrap_or_default()
        })
    }

    pub fn calendar(&self) -> Signal<Vec<[Option<NaiveDate>; 7]>> {
        let month = self.month;
        Signal::derive(move || calendar_weeks(month.get()))
    }

    pub fn entries_on(&self, day: NaiveDate) -> Signal<Vec<CalendarEntry>> {
        let records = self.records();
        Signal::derive(move || records.with(|records| approved_on(records, day)))
    }

    pub fn previous_month(&self) {
        self.month.update(|cursor| *cursor = cursor.previous());
    }

    pub fn next_month(&self) {
        self.month.update(|cursor| *cursor = cursor.next());
    }
}

impl Default for DashboardViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    match use_context::<DashboardViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DashboardViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::records::fixtures::{official_business_json, pass_slip_json, travel_order_json};
    use crate::test_support::helpers::{admin_user, evaluator_user, provide_auth};
    use crate::test_support::ssr::with_runtime;

    fn aggregate() -> RequestAggregate {
        RequestAggregate::assemble(
            vec![
                serde_json::from_value(travel_order_json(1, "pending")).unwrap(),
                serde_json::from_value(travel_order_json(2, "pendingAdmin")).unwrap(),
                serde_json::from_value(travel_order_json(3, "approved")).unwrap(),
            ],
            vec![serde_json::from_value(official_business_json(4, "pending")).unwrap()],
            vec![serde_json::from_value(pass_slip_json(5, "pendingAdmin")).unwrap()],
            Vec::new(),
        )
    }

    #[test]
    fn pending_counts_follow_the_role() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            provide_auth(evaluator_user());
            let vm = DashboardViewModel::new();
            vm.aggregate_resource.set(Ok(aggregate()));
            let counts = vm.pending_counts().get();
            assert_eq!(counts.travel_orders, 1);
            assert_eq!(counts.official_business, 1);
            assert_eq!(counts.pass_slips, 0);
            leptos_reactive::suppress_resource_load(false);
        });
    }

    #[test]
    fn top_requesters_and_calendar_read_the_aggregate() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            provide_auth(admin_user());
            let vm = DashboardViewModel::new();
            vm.aggregate_resource.set(Ok(aggregate()));
            assert_eq!(
                vm.top_requesters(RequestKind::TravelOrder).get(),
                vec![("Juan Dela Cruz".to_string(), 3)]
            );
            let day = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
            let entries = vm.entries_on(day).get();
            assert_eq!(entries.len(), 1);
            assert_eq!(entries[0].key, "TO-3");

            vm.month.set(MonthCursor { year: 2025, month: 12 });
            vm.next_month();
            assert_eq!(vm.month.get(), MonthCursor { year: 2026, month: 1 });
            leptos_reactive::suppress_resource_load(false);
        });
    }

    #[test]
    fn failed_load_leaves_empty_widgets() {
        with_runtime(|| {
            leptos_reactive::suppress_resource_load(true);
            provide_auth(admin_user());
            let vm = DashboardViewModel::new();
            vm.aggregate_resource
                .set(Err(ApiError::request_failed("offline")));
            assert_eq!(vm.pending_counts().get(), PendingCounts::default());
            assert!(vm.top_requesters(RequestKind::PassSlip).get().is_empty());
            assert!(vm.load_error().get().is_some());
            leptos_reactive::suppress_resource_load(false);
        });
    }
}
