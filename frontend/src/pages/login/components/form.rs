use crate::{api::ApiError, components::error::InlineErrorMessage};
use leptos::{ev::SubmitEvent, *};

#[component]
pub fn LoginForm(
    username: RwSignal<String>,
    password: RwSignal<String>,
    error: Signal<Option<ApiError>>,
    pending: Signal<bool>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface-muted py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md w-full space-y-8">
                <div>
                    <h2 class="mt-6 text-center text-3xl font-extrabold text-fg">
                        {"Travel Request Admin"}
                    </h2>
                    <p class="mt-2 text-center text-sm text-fg-muted">
                        {"Sign in to review travel orders, official business and pass slips"}
                    </p>
                </div>
                <form class="mt-8 space-y-6" on:submit=move |ev| on_submit.call(ev)>
                    <div class="rounded-md shadow-sm -space-y-px">
                        <div>
                            <label for="username" class="sr-only">{"Username"}</label>
                            <input
                                id="username"
                                name="username"
                                type="text"
                                autocomplete="username"
                                class="appearance-none rounded-none relative block w-full px-3 py-2 border border-form-control-border bg-form-control-bg text-form-control-text rounded-t-md sm:text-sm"
                                placeholder="Username"
                                prop:value=move || username.get()
                                on:input=move |ev| username.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label for="password" class="sr-only">{"Password"}</label>
                            <input
                                id="password"
                                name="password"
                                type="password"
                                autocomplete="current-password"
                                class="appearance-none rounded-none relative block w-full px-3 py-2 border border-form-control-border bg-form-control-bg text-form-control-text rounded-b-md sm:text-sm"
                                placeholder="Password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                        </div>
                    </div>

                    <InlineErrorMessage error=error />

                    <div>
                        <button
                            type="submit"
                            disabled=move || pending.get()
                            class="group relative w-full flex justify-center py-2 px-4 border border-transparent text-sm font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover disabled:opacity-50"
                        >
                            {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
