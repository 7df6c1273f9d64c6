use crate::pages::admin_directory::{types::DirectoryTab, view_model::AdminDirectoryViewModel};
use leptos::*;

#[component]
pub fn DirectoryTabs(vm: AdminDirectoryViewModel) -> impl IntoView {
    let active = vm.tab;
    view! {
        <div class="flex gap-2 border-b border-border" role="tablist">
            {DirectoryTab::ALL
                .into_iter()
                .map(|tab| {
                    let selected = move || active.get() == tab;
                    view! {
                        <button
                            type="button"
                            role="tab"
                            aria-selected=move || selected().to_string()
                            class=move || {
                                if selected() {
                                    "px-4 py-2 text-sm font-medium text-fg border-b-2 border-action-primary-bg"
                                } else {
                                    "px-4 py-2 text-sm text-fg-muted hover:text-fg"
                                }
                            }
                            on:click=move |_| vm.select_tab(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
