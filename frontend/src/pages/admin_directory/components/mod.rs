pub mod employees;
pub mod head_positions;
pub mod positions;
pub mod tabs;

use leptos::*;

pub(crate) const INPUT: &str =
    "mt-1 w-full border border-border rounded px-2 py-1 text-sm bg-surface text-fg";
pub(crate) const LABEL: &str = "block text-sm font-medium text-fg";
pub(crate) const HEADER_CELL: &str =
    "px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider";
pub(crate) const CELL: &str = "px-4 py-3 whitespace-nowrap text-sm text-fg";

/// Edit/Archive buttons. Archived rows get a label instead.
#[component]
pub fn RowActions(
    archived: bool,
    on_edit: Callback<()>,
    on_archive: Callback<()>,
) -> impl IntoView {
    if archived {
        return view! { <span class="text-xs text-fg-muted">{"Archived"}</span> }.into_view();
    }
    view! {
        <div class="flex justify-end gap-3">
            <button type="button" class="text-fg hover:underline" on:click=move |_| on_edit.call(())>
                {"Edit"}
            </button>
            <button
                type="button"
                class="text-status-error-text hover:underline"
                on:click=move |_| on_archive.call(())
            >
                {"Archive"}
            </button>
        </div>
    }
    .into_view()
}

/// Cancel (while editing) and submit buttons shared by the directory forms.
#[component]
pub fn FormActions(
    #[prop(into)] editing: Signal<bool>,
    #[prop(into)] saving: Signal<bool>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="flex justify-end gap-2">
            <Show when=move || editing.get()>
                <button
                    type="button"
                    class="px-4 py-2 rounded bg-surface-muted text-fg"
                    on:click=move |_| on_cancel.call(())
                >
                    {"Cancel"}
                </button>
            </Show>
            <button
                type="submit"
                class="px-4 py-2 rounded bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                disabled=move || saving.get()
            >
                {move || match (saving.get(), editing.get()) {
                    (true, _) => "Saving...",
                    (false, true) => "Save changes",
                    (false, false) => "Add",
                }}
            </button>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn archived_rows_have_no_buttons() {
        let html = render_to_string(|| {
            view! { <RowActions archived=true on_edit=Callback::new(|_| {}) on_archive=Callback::new(|_| {}) /> }
        });
        assert!(html.contains("Archived"));
        assert!(!html.contains(">Edit<"));
    }

    #[test]
    fn form_actions_label_follows_mode() {
        let html = render_to_string(|| {
            view! { <FormActions editing=Signal::derive(|| true) saving=Signal::derive(|| false) on_cancel=Callback::new(|_| {}) /> }
        });
        assert!(html.contains("Save changes"));
        assert!(html.contains("Cancel"));
        let html = render_to_string(|| {
            view! { <FormActions editing=Signal::derive(|| false) saving=Signal::derive(|| true) on_cancel=Callback::new(|_| {}) /> }
        });
        assert!(html.contains("Saving..."));
        assert!(!html.contains("Cancel"));
    }
}
