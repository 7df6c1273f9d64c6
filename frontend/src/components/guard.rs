use crate::{
    api::Role,
    components::layout::LoadingSpinner,
    router::{self, paths},
    state::auth::{use_auth, AuthState},
};
use leptos::*;

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.with(|state| state.is_authenticated));
    let is_loading = create_memo(move |_| auth.with(|state| state.loading));
    create_effect(move |_| {
        let state = auth.get();
        if state.loading || state.is_authenticated {
            return;
        }
        router::redirect_to(paths::LOGIN);
    });
    view! {
        <Show
            when=move || should_render_children(is_authenticated.get(), is_loading.get())
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_children(is_authenticated: bool, is_loading: bool) -> bool {
    is_authenticated && !is_loading
}

/// Renders children only for the listed roles. Other signed-in users are
/// sent to their own landing page.
#[component]
pub fn RequireRole(roles: Vec<Role>, children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let roles = store_value(roles);
    let is_loading = create_memo(move |_| auth.with(|state| state.loading));
    let allowed = create_memo(move |_| {
        auth.with(|state| roles.with_value(|roles| role_allowed(state, roles)))
    });
    create_effect(move |_| {
        let state = auth.get();
        if state.loading {
            return;
        }
        if !state.is_authenticated {
            router::redirect_to(paths::LOGIN);
        } else if !roles.with_value(|roles| role_allowed(&state, roles)) {
            router::redirect_to(router::landing_path_for(state.current_role()));
        }
    });
    view! {
        <Show
            when=move || allowed.get() && !is_loading.get()
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn role_allowed(state: &AuthState, roles: &[Role]) -> bool {
    state.is_authenticated && roles.contains(&state.current_role())
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::{RequireAuth, RequireRole};
    use crate::api::Role;
    use crate::state::auth::AuthState;
    use crate::test_support::helpers::{admin_user, guard_user, provide_auth};
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    fn provide_auth_state(is_authenticated: bool, loading: bool) {
        let (auth, set_auth) = create_signal(AuthState {
            is_authenticated,
            loading,
            ..AuthState::default()
        });
        provide_context((auth, set_auth));
    }

    #[test]
    fn require_auth_renders_children_when_authenticated() {
        let html = render_to_string(move || {
            provide_auth_state(true, false);
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("protected-content"));
    }

    #[test]
    fn require_auth_hides_children_when_unauthenticated() {
        let html = render_to_string(move || {
            provide_auth_state(false, false);
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn require_auth_shows_loading_spinner_while_loading() {
        let html = render_to_string(move || {
            provide_auth_state(true, true);
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("animate-spin"));
    }

    #[test]
    fn require_role_renders_for_listed_role() {
        let html = render_to_string(move || {
            provide_auth(admin_user());
            view! {
                <RequireRole roles=vec![Role::Admin]>
                    {|| view! { <div>"admin-protected"</div> }}
                </RequireRole>
            }
        });
        assert!(html.contains("admin-protected"));
    }

    #[test]
    fn require_role_hides_children_for_other_roles() {
        let html = render_to_string(move || {
            provide_auth(guard_user());
            view! {
                <RequireRole roles=vec![Role::Admin, Role::Evaluator]>
                    {|| view! { <div>"review-protected"</div> }}
                </RequireRole>
            }
        });
        assert!(!html.contains("review-protected"));
    }
}
