use crate::api::UserResponse;
use crate::components::empty_state::EmptyState;
use crate::utils::time::format_timestamp;
use leptos::*;

const HEADER_CELL: &str =
    "px-4 py-3 text-left text-xs font-medium text-fg-muted uppercase tracking-wider";
const CELL: &str = "px-4 py-3 whitespace-nowrap text-sm text-fg";

#[component]
pub fn UserList(
    #[prop(into)] users: Signal<Vec<UserResponse>>,
    on_edit: Callback<UserResponse>,
    on_delete: Callback<UserResponse>,
) -> impl IntoView {
    view! {
        <div class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h2 class="text-lg font-medium text-fg">{"Accounts"}</h2>
            <Show
                when=move || users.with(|users| !users.is_empty())
                fallback=|| view! { <EmptyState title="No users yet" /> }
            >
                <div class="overflow-x-auto">
                    <table class="min-w-full divide-y divide-border">
                        <thead>
                            <tr>
                                <th class=HEADER_CELL>{"Username"}</th>
                                <th class=HEADER_CELL>{"Name"}</th>
                                <th class=HEADER_CELL>{"Role"}</th>
                                <th class=HEADER_CELL>{"Status"}</th>
                                <th class=HEADER_CELL></th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            <For
                                each=move || users.get()
                                key=|user| (user.id, user.deleted_at.is_some())
                                children=move |user: UserResponse| {
                                    let active = user.deleted_at.is_none();
                                    let status = user
                                        .deleted_at
                                        .map(|at| format!("Deactivated {}", format_timestamp(at)))
                                        .unwrap_or_else(|| "Active".to_string());
                                    let row_class = if active { "" } else { "opacity-60" };
                                    let row = store_value(user.clone());
                                    view! {
                                        <tr class=row_class>
                                            <td class=CELL>{user.username.clone()}</td>
                                            <td class=CELL>{user.name.clone()}</td>
                                            <td class=CELL>{user.role.label()}</td>
                                            <td class=CELL>{status}</td>
                                            <td class="px-4 py-3 text-right text-sm space-x-3">
                                                <Show when=move || active>
                                                    <button
                                                        type="button"
                                                        class="text-fg hover:underline"
                                                        on:click=move |_| on_edit.call(row.get_value())
                                                    >
                                                        {"Edit"}
                                                    </button>
                                                    <button
                                                        type="button"
                                                        class="text-status-error-text hover:underline"
                                                        on:click=move |_| on_delete.call(row.get_value())
                                                    >
                                                        {"Deactivate"}
                                                    </button>
                                                </Show>
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, guard_user};
    use crate::test_support::ssr::render_to_string;
    use chrono::{TimeZone, Utc};

    #[test]
    fn deactivated_users_have_no_actions() {
        let html = render_to_string(|| {
            let mut retired = guard_user();
            retired.deleted_at = Utc.with_ymd_and_hms(2025, 1, 2, 0, 0, 0).single();
            let users = vec![admin_user(), retired];
            view! {
                <UserList
                    users=Signal::derive(move || users.clone())
                    on_edit=Callback::new(|_| {})
                    on_delete=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Maria Reyes"));
        assert!(html.contains("Deactivated Jan 02, 2025"));
        assert_eq!(html.matches(">Deactivate<").count(), 1);
        assert_eq!(html.matches(">Edit<").count(), 1);
    }

    #[test]
    fn empty_list_shows_placeholder() {
        let html = render_to_string(|| {
            view! {
                <UserList users=Signal::derive(Vec::new) on_edit=Callback::new(|_| {}) on_delete=Callback::new(|_| {}) />
            }
        });
        assert!(html.contains("No users yet"));
    }
}
