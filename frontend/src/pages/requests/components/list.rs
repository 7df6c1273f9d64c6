use crate::api::{RequestRecord, RequestStatus};
use crate::components::empty_state::EmptyState;
use crate::components::layout::LoadingSpinner;
use crate::pages::requests::components::status_badge::StatusBadge;
use leptos::*;

const HEADER_CELL: &str =
    "px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider";
const CELL: &str = "px-4 py-3 text-sm text-fg";

#[component]
pub fn RequestsList(
    #[prop(into)] records: Signal<Vec<RequestRecord>>,
    #[prop(into)] loading: Signal<bool>,
    on_select: Callback<RequestRecord>,
    on_export: Callback<RequestRecord>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg overflow-hidden">
            <Show when=move || loading.get()>
                <LoadingSpinner />
            </Show>
            <Show when=move || !loading.get() && records.with(Vec::is_empty)>
                <div class="p-4">
                    <EmptyState
                        title="No requests"
                        description="Nothing here needs your attention with the current filters."
                    />
                </div>
            </Show>
            <Show when=move || !records.with(Vec::is_empty)>
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-border">
                        <thead class="bg-surface-muted">
                            <tr>
                                <th class=HEADER_CELL>{"No."}</th>
                                <th class=HEADER_CELL>{"Requester"}</th>
                                <th class=HEADER_CELL>{"Destination"}</th>
                                <th class=HEADER_CELL>{"Schedule"}</th>
                                <th class=HEADER_CELL>{"Status"}</th>
                                <th class=HEADER_CELL>{"Actions"}</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            <For
                                each=move || records.get()
                                key=|record| record.key()
                                children=move |record: RequestRecord| {
                                    let approved = record.status() == Some(RequestStatus::Approved);
                                    let requesters = record.requester_names().join(", ");
                                    let row = store_value(record.clone());
                                    view! {
                                        <tr
                                            class="hover:bg-surface-muted cursor-pointer"
                                            on:click=move |_| on_select.call(row.get_value())
                                        >
                                            <td class=CELL>{record.key()}</td>
                                            <td class=CELL>{requesters}</td>
                                            <td class=CELL>{record.destination().to_string()}</td>
                                            <td class=CELL>{record.schedule_label()}</td>
                                            <td class=CELL><StatusBadge status=record.status() /></td>
                                            <td class=CELL>
                                                <div class="flex gap-3">
                                                    <button
                                                        type="button"
                                                        class="text-action-primary-bg hover:underline"
                                                        on:click=move |ev| {
                                                            ev.stop_propagation();
                                                            on_select.call(row.get_value());
                                                        }
                                                    >
                                                        {"View"}
                                                    </button>
                                                    <Show when=move || approved>
                                                        <button
                                                            type="button"
                                                            class="text-action-primary-bg hover:underline"
                                                            on:click=move |ev| {
                                                                ev.stop_propagation();
                                                                on_export.call(row.get_value());
                                                            }
                                                        >
                                                            {"Export PDF"}
                                                        </button>
                                                    </Show>
                                                </div>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::records::fixtures::{pass_slip, travel_order};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn export_is_offered_only_on_approved_rows() {
        let html = render_to_string(|| {
            let records = vec![travel_order(1, "pending")];
            view! {
                <RequestsList
                    records=Signal::derive(move || records.clone())
                    loading=Signal::derive(|| false)
                    on_select=Callback::new(|_| {})
                    on_export=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("TO-1"));
        assert!(html.contains("Lapasan"));
        assert!(!html.contains("Export PDF"));

        let html = render_to_string(|| {
            view! {
                <RequestsList
                    records=Signal::derive(|| vec![pass_slip(4, "approved")])
                    loading=Signal::derive(|| false)
                    on_select=Callback::new(|_| {})
                    on_export=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("PS-4"));
        assert!(html.contains("Export PDF"));
    }

    #[test]
    fn empty_list_shows_empty_state() {
        let html = render_to_string(|| {
            view! {
                <RequestsList
                    records=Signal::derive(Vec::new)
                    loading=Signal::derive(|| false)
                    on_select=Callback::new(|_| {})
                    on_export=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("No requests"));
    }
}
