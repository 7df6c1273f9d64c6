use crate::api::ApiError;
use leptos::*;
use serde_json::Value;

/// Flattens validation details into display lines. The API sends either a
/// plain list or a field map of lists.
pub fn validation_messages(details: Option<&Value>) -> Vec<String> {
    let Some(errors) = details.and_then(|details| details.get("errors")) else {
        return Vec::new();
    };
    let mut messages = Vec::new();
    match errors {
        Value::Array(items) => collect_strings(items, &mut messages),
        Value::Object(fields) => {
            for value in fields.values() {
                match value {
                    Value::Array(items) => collect_strings(items, &mut messages),
                    Value::String(message) => messages.push(message.clone()),
                    _ => {}
                }
            }
        }
        Value::String(message) => messages.push(message.clone()),
        _ => {}
    }
    messages
}

fn collect_strings(items: &[Value], out: &mut Vec<String>) {
    out.extend(items.iter().filter_map(|item| item.as_str().map(str::to_string)));
}

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some) fallback=|| ()>
            <div role="alert" class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || error.get().map(|e| {
                    let messages = validation_messages(e.details.as_ref());
                    if !messages.is_empty() {
                        return view! {
                            <ul class="list-disc list-inside text-sm">
                                {messages.into_iter().map(|message| view! { <li>{message}</li> }).collect_view()}
                            </ul>
                        }.into_view();
                    }
                    if e.code != "UNKNOWN" && !e.code.is_empty() {
                        view! { <div class="text-xs opacity-75">{"Code: "}{e.code}</div> }.into_view()
                    } else {
                        ().into_view()
                    }
                }).unwrap_or_else(|| ().into_view())}
            </div>
        </Show>
    }
}

/// Modal for failures that need acknowledgement, such as a rejected status
/// change. Closing it clears the error.
#[component]
pub fn ErrorDialog(error: RwSignal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.with(Option::is_some)>
            <div class="fixed inset-0 z-[75] flex items-center justify-center p-4">
                <div class="absolute inset-0 bg-overlay-backdrop"></div>
                <div role="alertdialog" aria-modal="true" class="relative w-full max-w-md rounded-lg bg-surface-elevated border border-border shadow-xl p-6 space-y-4">
                    <h2 class="text-lg font-semibold text-status-error-text">"Something went wrong"</h2>
                    <InlineErrorMessage error=error.into() />
                    <div class="flex justify-end">
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text hover:bg-action-primary-bg-hover"
                            on:click=move |_| error.set(None)
                        >
                            "OK"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
