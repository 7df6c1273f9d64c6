use crate::api::{RequestRecord, RequestStatus, Role};
use crate::pages::requests::components::status_badge::StatusBadge;
use crate::pages::requests::view_model::RequestsViewModel;
use crate::utils::time::{format_clock_time, format_timestamp};
use leptos::ev::KeyboardEvent;
use leptos::html;
use leptos::*;

/// Label/value rows shown in the detail dialog for each kind.
pub fn detail_rows(record: &RequestRecord) -> Vec<(&'static str, String)> {
    let clock = |raw: &Option<String>| {
        raw.as_deref()
            .map(format_clock_time)
            .unwrap_or_else(|| "-".to_string())
    };
    let mut rows = vec![
        ("Requested by", record.requester_names().join(", ")),
        ("Schedule", record.schedule_label()),
    ];
    match record {
        RequestRecord::TravelOrder(order) => {
            rows.push(("Destination", order.destination.clone()));
            rows.push(("Purpose", order.purpose.clone()));
            rows.push((
                "Fund source",
                order.fund_source.clone().unwrap_or_else(|| "-".into()),
            ));
        }
        RequestRecord::OfficialBusiness(business) => {
            rows.push(("Place", business.place.clone()));
            rows.push(("Purpose", business.purpose.clone()));
            rows.push(("Departure", clock(&business.time_departure)));
            rows.push(("Return", clock(&business.time_return)));
        }
        RequestRecord::PassSlip(slip) => {
            rows.push(("Destination", slip.destination.clone()));
            rows.push(("Reason", slip.reason.clone()));
            rows.push(("Time out", clock(&slip.time_out)));
            rows.push(("Time in", clock(&slip.time_in)));
        }
    }
    if let Some(remarks) = record.review().remarks.as_deref() {
        if !remarks.trim().is_empty() {
            rows.push(("Remarks", remarks.to_string()));
        }
    }
    rows.push(("Filed", format_timestamp(record.created_at())));
    rows
}

#[component]
pub fn RequestDetailModal(vm: RequestsViewModel) -> impl IntoView {
    let selected = vm.selected;
    let close_ref = create_node_ref::<html::Button>();

    let on_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            vm.close();
        }
    };

    #[cfg(not(target_arch = "wasm32"))]
    let _ = &close_ref;
    #[cfg(target_arch = "wasm32")]
    create_effect(move |_| {
        if selected.with(Option::is_some) {
            if let Some(button) = close_ref.get() {
                let _ = button.focus();
            }
        }
    });

    let can_act = vm.can_act_on_selected();
    let is_submitting = vm.is_submitting;
    let remarks = vm.remarks;
    let role = vm.role;

    view! {
        <Show when=move || selected.with(Option::is_some)>
            {move || {
                selected
                    .get()
                    .map(|record| {
                        let title = format!("{} {}", record.kind().label(), record.key());
                        let approved = record.status() == Some(RequestStatus::Approved);
                        let export_record = store_value(record.clone());
                        view! {
                            <div class="fixed inset-0 z-50 flex items-end sm:items-center justify-center">
                                <div class="fixed inset-0 bg-overlay-backdrop" on:click=move |_| vm.close()></div>
                                <div
                                    class="relative bg-surface-elevated rounded-lg shadow-xl w-full max-w-lg mx-4 p-6 space-y-4"
                                    role="dialog"
                                    aria-modal="true"
                                    tabindex="-1"
                                    on:keydown=on_keydown
                                >
                                    <div class="flex items-start justify-between gap-4">
                                        <div>
                                            <p class="text-lg font-semibold text-fg">{title}</p>
                                            <StatusBadge status=record.status() />
                                        </div>
                                        <button
                                            node_ref=close_ref
                                            aria-label="Close"
                                            class="text-fg-muted hover:text-fg"
                                            on:click=move |_| vm.close()
                                        >
                                            {"✕"}
                                        </button>
                                    </div>
                                    <dl class="grid grid-cols-3 gap-x-4 gap-y-2 text-sm">
                                        {detail_rows(&record)
                                            .into_iter()
                                            .map(|(label, value)| {
                                                view! {
                                                    <dt class="font-medium text-fg-muted">{label}</dt>
                                                    <dd class="col-span-2 text-fg">{value}</dd>
                                                }
                                            })
                                            .collect_view()}
                                    </dl>
                                    <Show when=move || can_act.get()>
                                        <div class="space-y-2">
                                            <label class="block text-sm font-medium text-fg" for="decline-remarks">
                                                {"Remarks (required to decline)"}
                                            </label>
                                            <textarea
                                                id="decline-remarks"
                                                rows="3"
                                                class="w-full border border-border rounded px-2 py-1 text-sm bg-surface text-fg"
                                                prop:value=move || remarks.get()
                                                on:input=move |ev| remarks.set(event_target_value(&ev))
                                            ></textarea>
                                            <div class="flex justify-end gap-2">
                                                <button
                                                    type="button"
                                                    class="px-4 py-2 rounded bg-action-danger-bg text-action-danger-text disabled:opacity-50"
                                                    disabled=move || is_submitting.get()
                                                    on:click=move |_| {
                                                        vm.decline();
                                                    }
                                                >
                                                    {"Decline"}
                                                </button>
                                                <button
                                                    type="button"
                                                    class="px-4 py-2 rounded bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                                                    disabled=move || is_submitting.get()
                                                    on:click=move |_| {
                                                        vm.approve();
                                                    }
                                                >
                                                    {move || approve_label(role.get(), is_submitting.get())}
                                                </button>
                                            </div>
                                        </div>
                                    </Show>
                                    <Show when=move || approved>
                                        <div class="flex justify-end">
                                            <button
                                                type="button"
                                                class="px-4 py-2 rounded bg-surface-muted text-fg hover:bg-surface"
                                                on:click=move |_| vm.export(&export_record.get_value())
                                            >
                                                {"Export PDF"}
                                            </button>
                                        </div>
                                    </Show>
                                </div>
                            </div>
                        }
                    })
            }}
        </Show>
    }
}

fn approve_label(role: Role, submitting: bool) -> &'static str {
    match (role, submitting) {
        (_, true) => "Submitting...",
        (Role::Evaluator, false) => "Forward to Admin",
        _ => "Approve",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::records::fixtures::{official_business, pass_slip, travel_order};

    fn labels(record: &RequestRecord) -> Vec<&'static str> {
        detail_rows(record).into_iter().map(|(label, _)| label).collect()
    }

    #[test]
    fn rows_follow_the_record_kind() {
        assert!(labels(&travel_order(1, "pending")).contains(&"Fund source"));
        assert!(labels(&official_business(2, "pending")).contains(&"Departure"));
        let slip = detail_rows(&pass_slip(3, "approved"));
        assert!(slip.contains(&("Reason", "Payroll deposit".to_string())));
        assert!(slip.iter().any(|(label, _)| *label == "Time in"));
    }

    #[test]
    fn approve_label_names_the_next_step() {
        assert_eq!(approve_label(Role::Evaluator, false), "Forward to Admin");
        assert_eq!(approve_label(Role::Admin, false), "Approve");
        assert_eq!(approve_label(Role::Admin, true), "Submitting...");
    }
}
