use crate::api::RequestKind;
use crate::components::layout::ErrorMessage;
use crate::pages::dashboard::{
    components::{ApprovedCalendar, PendingSummary, RequesterChart},
    layout::DashboardFrame,
    view_model::use_dashboard_view_model,
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let load_error = vm.load_error();

    view! {
        <DashboardFrame>
            {move || {
                load_error.get().map(|err| {
                    view! { <ErrorMessage message=format!("Dashboard data could not be loaded: {}", err.error) /> }
                })
            }}
            <PendingSummary counts=vm.pending_counts() />
            <div class="grid grid-cols-1 gap-6 lg:grid-cols-3">
                {RequestKind::ALL
                    .into_iter()
                    .map(|kind| view! { <RequesterChart kind=kind entries=vm.top_requesters(kind) /> })
                    .collect_view()}
            </div>
            <ApprovedCalendar vm=vm />
        </DashboardFrame>
    }
}
