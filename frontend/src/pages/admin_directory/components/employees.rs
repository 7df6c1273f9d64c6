use crate::api::EmployeeResponse;
use crate::components::empty_state::EmptyState;
use crate::pages::admin_directory::{
    components::{FormActions, RowActions, CELL, HEADER_CELL, INPUT, LABEL},
    types::DirectoryEntry,
    utils::position_name,
    view_model::AdminDirectoryViewModel,
};
use leptos::ev::SubmitEvent;
use leptos::*;

#[component]
pub fn EmployeesSection(vm: AdminDirectoryViewModel) -> impl IntoView {
    let form = vm.employee_form;
    let employees = vm.employees();
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
                    <label class=LABEL for="employee-first">{"First name"}</label>
                    <input
                        id="employee-first"
                        class=INPUT
                        prop:value=move || form.with(|f| f.first_name.clone())
                        on:input=move |ev| form.update(|f| f.first_name = event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class=LABEL for="employee-middle">{"Middle name"}</label>
                    <input
                        id="employee-middle"
                        class=INPUT
                        prop:value=move || form.with(|f| f.middle_name.clone())
                        on:input=move |ev| form.update(|f| f.middle_name = event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class=LABEL for="employee-last">{"Last name"}</label>
                    <input
                        id="employee-last"
                        class=INPUT
                        prop:value=move || form.with(|f| f.last_name.clone())
                        on:input=move |ev| form.update(|f| f.last_name = event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class=LABEL for="employee-position">{"Position"}</label>
                    <select
                        id="employee-position"
                        class=INPUT
                        on:change=move |ev| {
                            let id = event_target_value(&ev).parse::<i64>().ok();
                            form.update(|f| f.position_id = id);
                        }
                    >
                        <option value="" selected=move || form.with(|f| f.position_id.is_none())>
                            {"No position"}
                        </option>
                        {move || {
                            positions
                                .get()
                                .into_iter()
                                .filter(|position| position.deleted_at.is_none())
                                .map(|position| {
                                    let id = position.id;
                                    view! {
                                        <option
                                            value=id.to_string()
                                            selected=move || form.with(|f| f.position_id == Some(id))
                                        >
                                            {position.name}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </div>
                <FormActions
                    editing=Signal::derive(move || form.with(|f| f.editing.is_some()))
                    saving=vm.is_saving()
                    on_cancel=Callback::new(move |_| vm.reset_form())
                />
            </form>
            <div class="lg:col-span-2 bg-surface-elevated shadow rounded-lg overflow-x-auto">
                <Show
                    when=move || employees.with(|list| !list.is_empty())
                    fallback=|| view! { <EmptyState title="No employees yet" /> }
                >
                    <table class="min-w-full divide-y divide-border">
                        <thead>
                            <tr>
                                <th class=HEADER_CELL>{"Name"}</th>
                                <th class=HEADER_CELL>{"Position"}</th>
                                <th class=HEADER_CELL></th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            <For
                                each=move || employees.get()
                                key=|employee| (employee.id, employee.deleted_at.is_some())
                                children=move |employee: EmployeeResponse| {
                                    let position = employee.position.clone().unwrap_or_else(|| {
                                        positions.with_untracked(|list| position_name(list, employee.position_id))
                                    });
                                    let entry = store_value(DirectoryEntry::Employee(employee.clone()));
                                    view! {
                                        <tr>
                                            <td class=CELL>{employee.full_name()}</td>
                                            <td class=CELL>{position}</td>
                                            <td class=CELL>
                                                <RowActions
                                                    archived=employee.deleted_at.is_some()
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
