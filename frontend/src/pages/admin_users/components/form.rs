use crate::api::Role;
use crate::pages::admin_users::{utils::ROLE_OPTIONS, view_model::AdminUsersViewModel};
use leptos::ev::SubmitEvent;
use leptos::*;

const INPUT: &str = "mt-1 w-full border border-border rounded px-2 py-1 text-sm bg-surface text-fg";
const LABEL: &str = "block text-sm font-medium text-fg";

#[component]
pub fn UserForm(vm: AdminUsersViewModel) -> impl IntoView {
    let form = vm.form;
    let editing = vm.editing;
    let form_error = vm.form_error;
    let saving = vm.is_saving();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h2 class="text-lg font-medium text-fg">
                {move || if editing.get().is_some() { "Edit user" } else { "Add user" }}
            </h2>
            {move || {
                form_error
                    .get()
                    .map(|err| view! { <p class="text-sm text-status-error-text">{err.error}</p> })
            }}
            <form class="grid grid-cols-1 md:grid-cols-2 gap-4" on:submit=on_submit>
                <div>
                    <label class=LABEL for="user-username">{"Username"}</label>
                    <input
                        id="user-username"
                        class=INPUT
                        prop:value=move || form.with(|f| f.username.clone())
                        on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class=LABEL for="user-name">{"Name"}</label>
                    <input
                        id="user-name"
                        class=INPUT
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class=LABEL for="user-password">{"Password"}</label>
                    <input
                        id="user-password"
                        type="password"
                        class=INPUT
                        placeholder=move || {
                            if editing.get().is_some() { "Leave blank to keep the current password" } else { "" }
                        }
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class=LABEL for="user-role">{"Role"}</label>
                    <select
                        id="user-role"
                        class=INPUT
                        on:change=move |ev| form.update(|f| f.role = Role::parse(&event_target_value(&ev)))
                    >
                        {ROLE_OPTIONS
                            .into_iter()
                            .map(|role| {
                                view! {
                                    <option
                                        value=role.as_str()
                                        selected=move || form.with(|f| f.role == role)
                                    >
                                        {role.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <div class="md:col-span-2 flex justify-end gap-2">
                    <Show when=move || editing.get().is_some()>
                        <button
                            type="button"
                            class="px-4 py-2 rounded bg-surface-muted text-fg"
                            on:click=move |_| vm.reset_form()
                        >
                            {"Cancel"}
                        </button>
                    </Show>
                    <button
                        type="submit"
                        class="px-4 py-2 rounded bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                        disabled=move || saving.get()
                    >
                        {move || match (saving.get(), editing.get().is_some()) {
                            (true, _) => "Saving...",
                            (false, true) => "Save changes",
                            (false, false) => "Create user",
                        }}
                    </button>
                </div>
            </form>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiError;
    use crate::test_support::helpers::evaluator_user;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn edit_mode_shows_cancel_and_error() {
        let html = render_to_string(|| {
            let vm = AdminUsersViewModel::new();
            vm.start_edit(&evaluator_user());
            vm.form_error.set(Some(ApiError::validation("Username and name are required.")));
            view! { <UserForm vm=vm /> }
        });
        assert!(html.contains("Edit user"));
        assert!(html.contains("Cancel"));
        assert!(html.contains("Save changes"));
        assert!(html.contains("Username and name are required."));
        assert!(html.contains("Evaluator"));
    }
}
