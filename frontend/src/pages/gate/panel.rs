use crate::api::PassSlip;
use crate::components::{
    empty_state::EmptyState,
    layout::{ErrorMessage, Layout},
};
use crate::pages::gate::view_model::use_gate_view_model;
use crate::utils::time::{format_clock_time, format_date};
use leptos::*;

const HEADER_CELL: &str =
    "px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider";
const CELL: &str = "px-4 py-3 text-sm text-fg";

fn clock(raw: Option<&str>) -> String {
    raw.map(format_clock_time).unwrap_or_else(|| "-".into())
}

#[component]
fn PassRow(slip: PassSlip) -> impl IntoView {
    let names = slip
        .employees
        .iter()
        .map(|employee| employee.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    view! {
        <tr>
            <td class=CELL>{format!("PS-{}", slip.id)}</td>
            <td class=CELL>{names}</td>
            <td class=CELL>{slip.destination.clone()}</td>
            <td class=CELL>{slip.reason.clone()}</td>
            <td class=CELL>{clock(slip.time_out.as_deref())}</td>
            <td class=CELL>{clock(slip.time_in.as_deref())}</td>
        </tr>
    }
}

#[component]
pub fn GatePage() -> impl IntoView {
    let vm = use_gate_view_model();
    let passes = vm.passes();
    let load_error = vm.load_error();
    let day = vm.day;

    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex items-start justify-between gap-4">
                    <div>
                        <h1 class="text-2xl font-bold text-fg">{"Gate"}</h1>
                        <p class="mt-1 text-sm text-fg-muted">
                            {move || format!("Approved pass slips for {}", format_date(day.get()))}
                        </p>
                    </div>
                    <button
                        type="button"
                        class="px-3 py-1.5 rounded border border-border text-sm text-fg"
                        on:click=move |_| vm.refresh()
                    >
                        {"Refresh"}
                    </button>
                </div>
                {move || {
                    load_error.get().map(|err| {
                        view! { <ErrorMessage message=format!("Pass slips could not be loaded: {}", err.error) /> }
                    })
                }}
                <Show
                    when=move || !passes.with(Vec::is_empty)
                    fallback=|| view! { <EmptyState title="No approved pass slips today" /> }
                >
                    <div class="bg-surface-elevated shadow rounded-lg overflow-x-auto">
                        <table class="min-w-full divide-y divide-border">
                            <thead class="bg-surface-muted">
                                <tr>
                                    <th class=HEADER_CELL>{"No."}</th>
                                    <th class=HEADER_CELL>{"Employee"}</th>
                                    <th class=HEADER_CELL>{"Destination"}</th>
                                    <th class=HEADER_CELL>{"Reason"}</th>
                                    <th class=HEADER_CELL>{"Time out"}</th>
                                    <th class=HEADER_CELL>{"Time in"}</th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-border">
                                <For
                                    each=move || passes.get()
                                    key=|slip| slip.id
                                    children=|slip| view! { <PassRow slip=slip /> }
                                />
                            </tbody>
                        </table>
                    </div>
                </Show>
            </div>
        </Layout>
    }
}
