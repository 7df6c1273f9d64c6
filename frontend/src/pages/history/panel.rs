use crate::components::{
    empty_state::EmptyState,
    layout::{ErrorMessage, Layout},
    pagination::Pager,
};
use crate::pages::history::view_model::use_history_view_model;
use crate::utils::time::format_timestamp;
use leptos::*;

const HEADER_CELL: &str =
    "px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider";
const CELL: &str = "px-4 py-3 text-sm text-fg";

#[component]
pub fn HistoryPage() -> impl IntoView {
    let vm = use_history_view_model();
    let paged = vm.paged();
    let load_error = vm.load_error();
    let query = vm.query;

    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-fg">{"History"}</h1>
                    <p class="mt-1 text-sm text-fg-muted">{"Every recorded action, newest first."}</p>
                </div>
                {move || {
                    load_error.get().map(|err| {
                        view! { <ErrorMessage message=format!("History could not be loaded: {}", err.error) /> }
                    })
                }}
                <input
                    type="search"
                    class="w-full sm:w-80 border border-border rounded px-2 py-1 text-sm bg-surface text-fg"
                    placeholder="Filter by user, action or details"
                    prop:value=move || query.get()
                    on:input=move |ev| vm.set_query(event_target_value(&ev))
                />
                <Show
                    when=move || paged.with(|page| page.total > 0)
                    fallback=|| view! { <EmptyState title="No history entries" /> }
                >
                    <div class="bg-surface-elevated shadow rounded-lg overflow-x-auto">
                        <table class="min-w-full divide-y divide-border">
                            <thead class="bg-surface-muted">
                                <tr>
                                    <th class=HEADER_CELL>{"When"}</th>
                                    <th class=HEADER_CELL>{"User"}</th>
                                    <th class=HEADER_CELL>{"Action"}</th>
                                    <th class=HEADER_CELL>{"Details"}</th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-border">
                                <For
                                    each=move || paged.get().items
                                    key=|entry| entry.id
                                    children=|entry| {
                                        view! {
                                            <tr>
                                                <td class=CELL>{format_timestamp(entry.created_at)}</td>
                                                <td class=CELL>{entry.user.clone().unwrap_or_else(|| "System".into())}</td>
                                                <td class=CELL>{entry.action.clone()}</td>
                                                <td class=CELL>{entry.description.clone().unwrap_or_default()}</td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </Show>
                <Pager
                    bounds=Signal::derive(move || paged.with(|page| page.bounds()))
                    total_pages=Signal::derive(move || paged.with(|page| page.total_pages))
                    current=Signal::derive(move || paged.with(|page| page.page))
                    page=vm.page
                />
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::HistoryLogEntry;
    use crate::pages::history::view_model::HistoryViewModel;
    use crate::test_support::helpers::{admin_user, provide_auth};
    use crate::test_support::ssr::render_to_string;
    use chrono::{TimeZone, Utc};

    #[test]
    fn renders_entries_with_fallback_actor() {
        let html = render_to_string(|| {
            provide_auth(admin_user());
            let vm = HistoryViewModel::new();
            provide_context(vm);
            vm.history_resource.set(Ok(vec![HistoryLogEntry {
                id: 7,
                user: None,
                action: "declined".into(),
                description: Some("Pass slip PS-4".into()),
                created_at: Utc.with_ymd_and_hms(2025, 3, 3, 17, 30, 0).unwrap(),
            }]));
            view! { <HistoryPage /> }
        });
        assert!(html.contains("System"));
        assert!(html.contains("Pass slip PS-4"));
        assert!(html.contains("Mar 04, 2025 01:30 AM"));
        assert!(html.contains("Showing 1-1 of 1"));
    }
}
