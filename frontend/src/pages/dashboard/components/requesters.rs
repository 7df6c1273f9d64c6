use crate::api::RequestKind;
use crate::pages::dashboard::utils::bar_width_percent;
use leptos::*;

/// Horizontal bars of requests per requester for one kind.
#[component]
pub fn RequesterChart(
    kind: RequestKind,
    #[prop(into)] entries: Signal<Vec<(String, usize)>>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-4 space-y-3">
            <h3 class="text-sm font-semibold text-fg">{format!("Top requesters: {}", kind.label())}</h3>
            <Show
                when=move || !entries.with(Vec::is_empty)
                fallback=|| view! { <p class="text-sm text-fg-muted">{"No requests yet."}</p> }
            >
                <ul class="space-y-2">
                    {move || {
                        let entries = entries.get();
                        let max = entries.iter().map(|(_, count)| *count).max().unwrap_or(0);
                        entries
                            .into_iter()
                            .map(|(name, count)| {
                                let width = format!("width: {}%", bar_width_percent(count, max));
                                view! {
                                    <li class="text-sm">
                                        <div class="flex justify-between text-fg">
                                            <span>{name}</span>
                                            <span class="text-fg-muted">{count}</span>
                                        </div>
                                        <div class="h-2 rounded bg-surface-muted">
                                            <div class="h-2 rounded bg-action-primary-bg" style=width></div>
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </div>
    }
}
