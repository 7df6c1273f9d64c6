use leptos::ev::KeyboardEvent;
use leptos::*;

/// A record about to be soft deleted. Nothing is removed server-side; the
/// row gets a `deleted_at` stamp and drops out of pickers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoftDeleteTarget {
    pub verb: &'static str,
    pub noun: String,
    pub name: String,
    consequence: &'static str,
}

impl SoftDeleteTarget {
    /// Directory rows: employees, positions and head positions.
    pub fn archive(noun: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            verb: "Archive",
            noun: noun.into(),
            name: name.into(),
            consequence: "will be archived and hidden from new requests.",
        }
    }

    /// Sign-in accounts.
    pub fn deactivate(noun: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            verb: "Deactivate",
            noun: noun.into(),
            name: name.into(),
            consequence: "will no longer be able to sign in.",
        }
    }

    pub fn title(&self) -> String {
        format!("{} {}", self.verb, self.noun)
    }

    pub fn message(&self) -> String {
        format!("{} {}", self.name, self.consequence)
    }
}

const RETENTION_NOTE: &str = "Past requests keep showing this record.";

#[component]
pub fn SoftDeleteDialog(
    #[prop(into)] target: Signal<Option<SoftDeleteTarget>>,
    #[prop(into)] busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let title = Signal::derive(move || target.with(|t| t.as_ref().map(SoftDeleteTarget::title)));
    let message = Signal::derive(move || target.with(|t| t.as_ref().map(SoftDeleteTarget::message)));
    let confirm_label = Signal::derive(move || {
        if busy.get() {
            "Please wait...".to_string()
        } else {
            target.with(|t| t.as_ref().map(|t| t.verb.to_string())).unwrap_or_default()
        }
    });

    view! {
        <Show when=move || target.with(Option::is_some)>
            <div class="fixed inset-0 z-[70] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_cancel.call(())
                ></button>
                <div
                    class="relative z-[71] w-full max-w-md rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4"
                    role="alertdialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_cancel.call(());
                        }
                    }
                >
                    <h2 class="text-lg font-semibold text-fg">{move || title.get()}</h2>
                    <p class="text-sm text-fg">{move || message.get()}</p>
                    <p class="text-xs text-fg-muted">{RETENTION_NOTE}</p>
                    <div class="flex justify-end gap-2">
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg hover:bg-surface-elevated"
                            on:click=move |_| on_cancel.call(())
                        >
                            {"Cancel"}
                        </button>
                        <button
                            type="button"
                            class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-action-danger-bg text-action-danger-text hover:bg-action-danger-bg-hover disabled:opacity-50"
                            disabled=move || busy.get()
                            on:click=move |_| on_confirm.call(())
                        >
                            {move || confirm_label.get()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
