use crate::pages::dashboard::{utils::kind_chip_class, view_model::DashboardViewModel};
use chrono::Datelike;
use leptos::*;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Month grid of approved travel.
#[component]
pub fn ApprovedCalendar(vm: DashboardViewModel) -> impl IntoView {
    let weeks = vm.calendar();
    let month = vm.month;
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-4 space-y-3">
            <div class="flex items-center justify-between">
                <h3 class="text-sm font-semibold text-fg">{"Approved travel"}</h3>
                <div class="flex items-center gap-2 text-sm">
                    <button
                        type="button"
                        aria-label="Previous month"
                        class="px-2 py-1 rounded border border-border text-fg"
                        on:click=move |_| vm.previous_month()
                    >
                        {"‹"}
                    </button>
                    <span class="font-medium text-fg">{move || month.get().label()}</span>
                    <button
                        type="button"
                        aria-label="Next month"
                        class="px-2 py-1 rounded border border-border text-fg"
                        on:click=move |_| vm.next_month()
                    >
                        {"›"}
                    </button>
                </div>
            </div>
            <div class="grid grid-cols-7 gap-px text-xs">
                {WEEKDAYS
                    .into_iter()
                    .map(|day| view! { <div class="py-1 text-center font-medium text-fg-muted">{day}</div> })
                    .collect_view()}
                {move || {
                    weeks
                        .get()
                        .into_iter()
                        .flatten()
                        .map(|slot| match slot {
                            None => view! { <div class="min-h-16 bg-surface-muted"></div> }.into_view(),
                            Some(day) => {
                                let entries = vm.entries_on(day);
                                view! {
                                    <div class="min-h-16 p-1 bg-surface border border-border space-y-1">
                                        <div class="text-fg-muted">{day.day()}</div>
                                        {move || {
                                            entries
                                                .get()
                                                .into_iter()
                                                .map(|entry| {
                                                    view! {
                                                        <div
                                                            class=format!("truncate rounded px-1 {}", kind_chip_class(entry.kind))
                                                            title=entry.key.clone()
                                                        >
                                                            {entry.label}
                                                        </div>
                                                    }
                                                })
                                                .collect_view()
                                        }}
                                    </div>
                                }
                                .into_view()
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
