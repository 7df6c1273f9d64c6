use crate::api::RequestRecord;
use crate::components::{error::ErrorDialog, layout::ErrorMessage, pagination::Pager};
use crate::pages::requests::{
    components::{
        detail_modal::RequestDetailModal, filter::RequestsFilter, history::RecentHistory,
        list::RequestsList,
    },
    layout::RequestsLayout,
    view_model::use_requests_view_model,
};
use leptos::*;

#[component]
pub fn RequestsPage() -> impl IntoView {
    let vm = use_requests_view_model();
    let paged = vm.paged_records();
    let load_error = vm.load_error();
    let history = vm.history_resource;
    let history_entries = Signal::derive(move || {
        history
            .get()
            .and_then(|result| result.ok())
            .unwrap_or_default()
    });

    let on_select = Callback::new(move |record: RequestRecord| vm.open(record));
    let on_export = Callback::new(move |record: RequestRecord| vm.export(&record));

    view! {
        <RequestsLayout>
            {move || {
                load_error.get().map(|err| {
                    view! {
                        <ErrorMessage message=format!("Requests could not be loaded: {}", err.error) />
                    }
                })
            }}
            <RequestsFilter filter_state=vm.filter_state />
            <div class="grid grid-cols-1 gap-6 xl:grid-cols-4">
                <div class="space-y-4 xl:col-span-3">
                    <RequestsList
                        records=Signal::derive(move || paged.with(|page| page.items.clone()))
                        loading=vm.is_loading()
                        on_select=on_select
                        on_export=on_export
                    />
                    <Pager
                        bounds=Signal::derive(move || paged.with(|page| page.bounds()))
                        total_pages=Signal::derive(move || paged.with(|page| page.total_pages))
                        current=Signal::derive(move || paged.with(|page| page.page))
                        page=vm.filter_state.page_signal()
                    />
                </div>
                <RecentHistory entries=history_entries />
            </div>
            <RequestDetailModal vm=vm />
            <ErrorDialog error=vm.dialog_error />
        </RequestsLayout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::records::fixtures::{pass_slip_json, travel_order_json};
    use crate::api::ApiError;
    use crate::pages::requests::types::RequestAggregate;
    use crate::pages::requests::view_model::RequestsViewModel;
    use crate::test_support::helpers::{admin_user, provide_auth};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn shows_admin_rows_and_history() {
        let html = render_to_string(|| {
            provide_auth(admin_user());
            let vm = RequestsViewModel::new();
            provide_context(vm);
            vm.aggregate_resource.set(Ok(RequestAggregate::assemble(
                vec![serde_json::from_value(travel_order_json(1, "pendingAdmin")).unwrap()],
                Vec::new(),
                vec![serde_json::from_value(pass_slip_json(2, "pending")).unwrap()],
                Vec::new(),
            )));
            vm.history_resource.set(Ok(Vec::new()));
            view! { <RequestsPage /> }
        });
        assert!(html.contains("TO-1"));
        assert!(!html.contains("PS-2"));
        assert!(html.contains("No activity yet."));
    }

    #[test]
    fn failed_load_shows_banner_and_no_rows() {
        let html = render_to_string(|| {
            provide_auth(admin_user());
            let vm = RequestsViewModel::new();
            provide_context(vm);
            vm.aggregate_resource
                .set(Err(ApiError::request_failed("Pass slips unavailable")));
            view! { <RequestsPage /> }
        });
        assert!(html.contains("Requests could not be loaded: Pass slips unavailable"));
        assert!(html.contains("No requests"));
    }
}
