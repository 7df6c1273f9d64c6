use crate::api::RequestKind;
use crate::notifications::PendingCounts;
use leptos::*;

#[component]
pub fn PendingSummary(#[prop(into)] counts: Signal<PendingCounts>) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <div>
                <h3 class="text-base font-semibold text-fg">{"Waiting on you"}</h3>
                <p class="text-sm text-fg-muted">{"Pending requests your role can act on"}</p>
            </div>
            <div class="grid grid-cols-1 gap-4 sm:grid-cols-3">
                {RequestKind::ALL
                    .into_iter()
                    .map(|kind| {
                        view! {
                            <Metric
                                label=kind.label().to_string()
                                value=Signal::derive(move || counts.get().get(kind).to_string())
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn Metric(label: String, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="p-4 rounded-lg border border-border bg-surface">
            <p class="text-xs font-bold text-fg-muted uppercase tracking-widest">{label}</p>
            <p class="mt-2 text-3xl font-extrabold text-fg">{move || value.get()}</p>
        </div>
    }
}
