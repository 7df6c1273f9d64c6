use crate::api::UserResponse;
use crate::components::{
    layout::ErrorMessage,
    soft_delete_dialog::{SoftDeleteDialog, SoftDeleteTarget},
};
use crate::pages::admin_users::{
    components::{form::UserForm, list::UserList},
    layout::AdminUsersFrame,
    view_model::use_admin_users_view_model,
};
use leptos::*;

#[component]
pub fn AdminUsersPage() -> impl IntoView {
    let vm = use_admin_users_view_model();
    let load_error = vm.load_error();
    let pending_delete = vm.pending_delete;
    let deleting = vm.delete_action.pending();

    let on_edit = Callback::new(move |user: UserResponse| vm.start_edit(&user));
    let on_delete = Callback::new(move |user: UserResponse| vm.request_delete(user));

    view! {
        <AdminUsersFrame>
            {move || {
                load_error.get().map(|err| {
                    view! { <ErrorMessage message=format!("Users could not be loaded: {}", err.error) /> }
                })
            }}
            <UserForm vm=vm />
            <UserList users=vm.users() on_edit=on_edit on_delete=on_delete />
            <SoftDeleteDialog
                target=Signal::derive(move || {
                    pending_delete.with(|user| {
                        user.as_ref()
                            .map(|user| SoftDeleteTarget::deactivate("user", user.username.clone()))
                    })
                })
                busy=deleting
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.cancel_delete())
            />
        </AdminUsersFrame>
    }
}
