use crate::api::PositionResponse;
use crate::components::empty_state::EmptyState;
use crate::pages::admin_directory::{
    components::{FormActions, RowActions, CELL, HEADER_CELL, INPUT, LABEL},
    types::DirectoryEntry,
    view_model::AdminDirectoryViewModel,
};
use leptos::ev::SubmitEvent;
use leptos::*;

#[component]
pub fn PositionsSection(vm: AdminDirectoryViewModel) -> impl IntoView {
    let form = vm.position_form;
    let positions = vm.positions();

    view! {
        <div class="grid grid-cols-1 gap-6 lg:grid-cols-3">
            <form
                class="bg-surface-elevated shadow rounded-lg p-6 space-y-4"
                on:submit=move |ev: SubmitEvent| {
                    ev.prevent_default();
                    vm.submit();
                }
            >
                <div>
                    <label class=LABEL for="position-name">{"Position name"}</label>
                    <input
                        id="position-name"
                        class=INPUT
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>
                <FormActions
                    editing=Signal::derive(move || form.with(|f| f.editing.is_some()))
                    saving=vm.is_saving()
                    on_cancel=Callback::new(move |_| vm.reset_form())
                />
            </form>
            <div class="lg:col-span-2 bg-surface-elevated shadow rounded-lg overflow-x-auto">
                <Show
                    when=move || positions.with(|list| !list.is_empty())
                    fallback=|| view! { <EmptyState title="No positions yet" /> }
                >
                    <table class="min-w-full divide-y divide-border">
                        <thead>
                            <tr>
                                <th class=HEADER_CELL>{"Name"}</th>
                                <th class=HEADER_CELL></th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            <For
                                each=move || positions.get()
                                key=|position| (position.id, position.deleted_at.is_some())
                                children=move |position: PositionResponse| {
                                    let entry = store_value(DirectoryEntry::Position(position.clone()));
                                    view! {
                                        <tr>
                                            <td class=CELL>{position.name.clone()}</td>
                                            <td class=CELL>
                                                <RowActions
                                                    archived=position.deleted_at.is_some()
                                                    on_edit=Callback::new(move |_| vm.edit(&entry.get_value()))
                                                    on_archive=Callback::new(move |_| vm.request_delete(entry.get_value()))
                                                />
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn lists_positions() {
        let html = render_to_string(|| {
            let vm = AdminDirectoryViewModel::new();
            vm.positions_resource.set(Ok(vec![PositionResponse {
                id: 4,
                name: "Accountant".into(),
                deleted_at: None,
            }]));
            view! { <PositionsSection vm=vm /> }
        });
        assert!(html.contains("Accountant"));
        assert!(html.contains("Archive"));
    }
}
