use crate::pages::login::{components::form::LoginForm, view_model::use_login_view_model};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();

    let on_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });

    view! {
        <LoginForm
            username=vm.username
            password=vm.password
            error=vm.error.into()
            pending=pending.into()
            on_submit=on_submit
        />
    }
}
