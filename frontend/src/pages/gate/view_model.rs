use crate::api::{ApiClient, ApiError, PassSlip};
use crate::notifications::use_notifications;
use crate::pages::gate::utils::passes_for_day;
use crate::pages::requests::{repository::RequestsRepository, types::RequestAggregate};
use crate::utils::time::today_in_app_tz;
use chrono::NaiveDate;
use leptos::*;

#[derive(Clone, Copy)]
pub struct GateViewModel {
    pub day: RwSignal<NaiveDate>,
    pub reload: RwSignal<u32>,
    pub aggregate_resource: Resource<(u32, u32), Result<RequestAggregate, ApiError>>,
}

impl GateViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(RequestsRepository::new(api));
        let status_version = use_notifications().status_version();
        let reload = create_rw_signal(0u32);

        let aggregate_resource = create_resource(
            move || (reload.get(), status_version.get()),
            move |_| {
                let repo = repository.get_value();
                async move { repo.load_aggregate().await }
            },
        );

        Self {
            day: create_rw_signal(today_in_app_tz()),
            reload,
            aggregate_resource,
        }
    }

    pub fn passes(&self) -> Signal<Vec<PassSlip>> {
        let resource = self.aggregate_resource;
        let day = self.day;
        Signal::derive(move || {
            resource
                .get()
                .and_then(Result::ok)
                .map(|aggregate| passes_for_day(&aggregate.records, day.get()))
                .unwrap_or_default()
        })
    }

    pub fn load_error(&self) -> Signal<Option<ApiError>> {
        let resource = self.aggregate_resource;
        Signal::derive(move || resource.get().and_then(Result::err))
    }

    pub fn refresh(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }
}

impl Default for GateViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_gate_view_model() -> GateViewModel {
    match use_context::<GateViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = GateViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
