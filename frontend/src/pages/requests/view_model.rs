use crate::api::{ApiClient, ApiError, HeadPosition, HistoryLogEntry, RequestRecord, Role, StatusUpdate};
use crate::components::pagination::{paginate, Paged, PAGE_SIZE};
use crate::export;
use crate::notifications::{use_notifications, PendingCounts};
use crate::pages::requests::{
    dispatch::{build_status_update, Signatories},
    repository::RequestsRepository,
    types::{ActionTarget, Decision, RequestAction, RequestAggregate},
    utils::{is_actionable, visible_for_role, RequestFilterState},
};
use crate::state::{
    auth::use_role,
    toast::{use_toasts, ToastState},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct RequestsViewModel {
    pub role: Signal<Role>,
    pub filter_state: RequestFilterState,
    pub selected: RwSignal<Option<RequestRecord>>,
    pub remarks: RwSignal<String>,
    pub is_submitting: RwSignal<bool>,
    pub dialog_error: RwSignal<Option<ApiError>>,
    pub reload: RwSignal<u32>,
    pub aggregate_resource: Resource<(u32, u32), Result<RequestAggregate, ApiError>>,
    pub history_resource: Resource<(), Result<Vec<HistoryLogEntry>, ApiError>>,
    pub action: Action<RequestAction, Result<StatusUpdate, ApiError>>,
    toasts: ToastState,
}

fn success_message(action: &RequestAction, update: &StatusUpdate) -> String {
    let subject = format!(
        "{} {}",
        action.target.kind.label(),
        action.target.id.unwrap_or_default()
    );
    match action.decision {
        Decision::Approve => format!("{} marked {}.", subject, update.status.label().to_lowercase()),
        Decision::Decline { .. } => format!("{} declined.", subject),
    }
}

impl RequestsViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(RequestsRepository::new(api));
        let role = use_role();
        let toasts = use_toasts();
        let notifications = use_notifications();

        let filter_state = RequestFilterState::default();
        let selected = create_rw_signal(None::<RequestRecord>);
        let remarks = create_rw_signal(String::new());
        let is_submitting = create_rw_signal(false);
        let dialog_error = create_rw_signal(None::<ApiError>);
        let reload = create_rw_signal(0u32);
        let status_version = notifications.status_version();

        let aggregate_resource = create_resource(
            move || (reload.get(), status_version.get()),
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

        let history_resource = create_resource(
            || (),
            move |_| {
                let repo = repository.get_value();
                async move { repo.load_history().await }
            },
        );

        let action = create_action(move |request: &RequestAction| {
            let repo = repository.get_value();
            let request = request.clone();
            let role = role.get_untracked();
            let heads = untrack(|| head_positions_of(aggregate_resource.get()));
            async move {
                let result = repo.submit_action(&request, role, &heads).await;
                match &result {
                    Ok(update) => {
                        toasts.success(success_message(&request, update));
                        selected.set(None);
                        remarks.set(String::new());
                        reload.update(|value| *value = value.wrapping_add(1));
                        match repo.load_history().await {
                            Ok(entries) => history_resource.set(Ok(entries)),
                            Err(err) => {
                                log::warn!("history refresh failed: {}", err);
                                toasts.info("The history log could not be refreshed.");
                            }
                        }
                    }
                    Err(err) => dialog_error.set(Some(err.clone())),
                }
                is_submitting.set(false);
                result
            }
        });

        Self {
            role,
            filter_state,
            selected,
            remarks,
            is_submitting,
            dialog_error,
            reload,
            aggregate_resource,
            history_resource,
            action,
            toasts,
        }
    }

    /// The aggregate error, if the last load failed.
    pub fn load_error(&self) -> Signal<Option<ApiError>> {
        let resource = self.aggregate_resource;
        Signal::derive(move || resource.get().and_then(Result::err))
    }

    pub fn is_loading(&self) -> Signal<bool> {
        let resource = self.aggregate_resource;
        Signal::derive(move || resource.loading().get())
    }

    /// Records the role may see. A failed aggregate shows nothing.
    pub fn visible_records(&self) -> Signal<Vec<RequestRecord>> {
        let resource = self.aggregate_resource;
        let role = self.role;
        Signal::derive(move || {
            resource
                .get()
                .and_then(Result::ok)
                .map(|aggregate| visible_for_role(&aggregate.records, role.get()))
                .unwrap_or_default()
        })
    }

    pub fn filtered_records(&self) -> Signal<Vec<RequestRecord>> {
        let visible = self.visible_records();
        let filter_state = self.filter_state;
        Signal::derive(move || {
            let filter = filter_state.snapshot();
            visible.with(|records| filter.apply(records))
        })
    }

    pub fn paged_records(&self) -> Signal<Paged<RequestRecord>> {
        let filtered = self.filtered_records();
        let page = self.filter_state.page_signal();
        Signal::derive(move || filtered.with(|records| paginate(records, page.get(), PAGE_SIZE)))
    }

    pub fn head_positions(&self) -> Signal<Vec<HeadPosition>> {
        let resource = self.aggregate_resource;
        Signal::derive(move || head_positions_of(resource.get()))
    }

    pub fn can_act_on_selected(&self) -> Signal<bool> {
        let selected = self.selected;
        let role = self.role;
        Signal::derive(move || {
            selected.with(|record| {
                record
                    .as_ref()
                    .is_some_and(|record| is_actionable(record, role.get()))
            })
        })
    }

    pub fn open(&self, record: RequestRecord) {
        self.remarks.set(String::new());
        self.is_submitting.set(false);
        self.selected.set(Some(record));
    }

    pub fn close(&self) {
        self.selected.set(None);
        self.remarks.set(String::new());
        self.is_submitting.set(false);
    }

    /// Validates and dispatches the decision for the open record.
    /// Returns `false` when nothing was sent.
    pub fn submit(&self, decision: Decision) -> bool {
        if self.is_submitting.get_untracked() {
            return false;
        }
        let Some(record) = self.selected.get_untracked() else {
            self.dialog_error
                .set(Some(ApiError::missing_identifier("No request is selected.")));
            return false;
        };
        let still_listed = untrack(|| {
            self.aggregate_resource.with(|loaded| match loaded {
                Some(Ok(aggregate)) => aggregate.find(record.kind(), record.id()).is_some(),
                _ => true,
            })
        });
        if !still_listed {
            self.dialog_error.set(Some(ApiError::missing_identifier(
                "This request is no longer listed. Refresh and try again.",
            )));
            return false;
        }
        let request = RequestAction {
            target: ActionTarget::of(&record),
            decision,
        };
        let heads = untrack(|| head_positions_of(self.aggregate_resource.get()));
        if let Err(err) = build_status_update(&request, self.role.get_untracked(), &heads) {
            self.dialog_error.set(Some(err));
            return false;
        }
        self.is_submitting.set(true);
        self.action.dispatch(request);
        true
    }

    pub fn approve(&self) -> bool {
        self.submit(Decision::Approve)
    }

    pub fn decline(&self) -> bool {
        let remarks = self.remarks.get_untracked();
        self.submit(Decision::Decline { remarks })
    }

    /// Downloads the printable form, signed by the record's approving head.
    pub fn export(&self, record: &RequestRecord) {
        let toasts = self.toasts;
        let heads = untrack(|| head_positions_of(self.aggregate_resource.get()));
        let signatories = Signatories::resolve(&heads);
        match export::export_record(record, signatories.signer_for(record, &heads)) {
            Ok(name) => {
                toasts.success(format!("Downloaded {}.", name));
            }
            Err(err) => {
                log::error!("export of {} failed: {}", record.key(), err);
                toasts.error(ApiError::from(err).error);
            }
        }
    }

    pub fn refresh(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }
}

fn head_positions_of(loaded: Option<Result<RequestAggregate, ApiError>>) -> Vec<HeadPosition> {
    loaded
        .and_then(Result::ok)
        .map(|aggregate| aggregate.head_positions)
        .unwrap_or_default()
}

impl Default for RequestsViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_requests_view_model() -> RequestsViewModel {
    match use_context::<RequestsViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = RequestsViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
