use crate::api::{RequestKind, RequestStatus};
use crate::pages::requests::utils::RequestFilterState;
use leptos::*;

const STATUS_OPTIONS: [RequestStatus; 4] = [
    RequestStatus::Pending,
    RequestStatus::PendingAdmin,
    RequestStatus::Approved,
    RequestStatus::Declined,
];

fn tab_class(active: bool) -> &'static str {
    if active {
        "px-3 py-1.5 rounded-md text-sm font-medium bg-action-primary-bg text-action-primary-text"
    } else {
        "px-3 py-1.5 rounded-md text-sm font-medium text-fg-muted hover:text-fg hover:bg-surface-muted"
    }
}

#[component]
fn KindTab(filter_state: RequestFilterState, kind: Option<RequestKind>) -> impl IntoView {
    let kind_signal = filter_state.kind_signal();
    let label = kind.map(|kind| kind.abbreviation()).unwrap_or("All");
    view! {
        <button
            type="button"
            role="tab"
            aria-selected=move || (kind_signal.get() == kind).to_string()
            class=move || tab_class(kind_signal.get() == kind)
            on:click=move |_| filter_state.set_kind(kind)
        >
            {label}
        </button>
    }
}

#[component]
pub fn RequestsFilter(filter_state: RequestFilterState) -> impl IntoView {
    let status_signal = filter_state.status_signal();
    let search_signal = filter_state.search_signal();
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-4 flex flex-col gap-3 lg:flex-row lg:items-center lg:justify-between">
            <div role="tablist" class="flex flex-wrap gap-1">
                <KindTab filter_state=filter_state kind=None />
                {RequestKind::ALL
                    .into_iter()
                    .map(|kind| view! { <KindTab filter_state=filter_state kind=Some(kind) /> })
                    .collect_view()}
            </div>
            <div class="flex flex-col gap-2 sm:flex-row sm:items-center">
                <input
                    type="search"
                    class="border border-border rounded px-2 py-1 text-sm bg-surface text-fg"
                    placeholder="Search requester, destination or number"
                    prop:value=move || search_signal.get()
                    on:input=move |ev| filter_state.set_search(event_target_value(&ev))
                />
                <select
                    class="border border-border rounded px-2 py-1 text-sm bg-surface text-fg"
                    aria-label="Status"
                    prop:value=move || status_signal.get().map(|status| status.as_str()).unwrap_or("")
                    on:change=move |ev| {
                        filter_state.set_status(RequestStatus::parse(&event_target_value(&ev)))
                    }
                >
                    <option value="">{"All statuses"}</option>
                    {STATUS_OPTIONS
                        .into_iter()
                        .map(|status| view! { <option value=status.as_str()>{status.label()}</option> })
                        .collect_view()}
                </select>
                <button
                    type="button"
                    class="text-sm text-fg-muted underline"
                    on:click=move |_| {
                        filter_state.set_kind(None);
                        filter_state.set_status(None);
                        filter_state.set_search(String::new());
                    }
                >
                    {"Clear"}
                </button>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_tab_per_kind_and_marks_active() {
        let html = render_to_string(|| {
            let filter_state = RequestFilterState::default();
            filter_state.set_kind(Some(RequestKind::OfficialBusiness));
            view! { <RequestsFilter filter_state=filter_state /> }
        });
        for label in ["All", "TO", "OB", "PS"] {
            assert!(html.contains(&format!(">{}<", label)), "missing tab {}", label);
        }
        assert!(html.contains("aria-selected=\"true\""));
        assert!(html.contains("For Admin Approval"));
    }
}
