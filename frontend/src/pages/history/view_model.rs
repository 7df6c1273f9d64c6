use crate::api::{ApiClient, ApiError, HistoryLogEntry};
use crate::components::pagination::{paginate, Paged, PAGE_SIZE};
use crate::pages::history::utils::filter_entries;
use crate::pages::requests::repository::RequestsRepository;
use leptos::*;

#[derive(Clone, Copy)]
pub struct HistoryViewModel {
    pub query: RwSignal<String>,
    pub page: RwSignal<usize>,
    pub reload: RwSignal<u32>,
    pub history_resource: Resource<u32, Result<Vec<HistoryLogEntry>, ApiError>>,
}

impl HistoryViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(RequestsRepository::new(api));
        let reload = create_rw_signal(0u32);
        let history_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repository.get_value();
                async move { repo.load_history().await }
            },
        );
        Self {
            query: create_rw_signal(String::new()),
            page: create_rw_signal(1),
            reload,
            history_resource,
        }
    }

    pub fn set_query(&self, query: String) {
        self.query.set(query);
        self.page.set(1);
    }

    pub fn paged(&self) -> Signal<Paged<HistoryLogEntry>> {
        let resource = self.history_resource;
        let query = self.query;
        let page = self.page;
        Signal::derive(move || {
            let entries = resource
                .get()
                .and_then(Result::ok)
                .unwrap_or_default();
            let filtered = query.with(|query| filter_entries(&entries, query));
            paginate(&filtered, page.get(), PAGE_SIZE)
        })
    }

    pub fn load_error(&self) -> Signal<Option<ApiError>> {
        let resource = self.history_resource;
        Signal::derive(move || resource.get().and_then(Result::err))
    }

    pub fn refresh(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }
}

impl Default for HistoryViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_history_view_model() -> HistoryViewModel {
    match use_context::<HistoryViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = HistoryViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
