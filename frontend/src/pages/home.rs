use crate::router::{landing_path_for, paths, redirect_to};
use crate::state::auth::{use_auth, AuthState};
use leptos::*;

/// Where the call-to-action on the landing page points.
fn home_target(state: &AuthState) -> (&'static str, &'static str) {
    if state.is_authenticated {
        (landing_path_for(state.current_role()), "Continue")
    } else {
        (paths::LOGIN, "Sign in")
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let (auth, _) = use_auth();
    let target = Signal::derive(move || auth.with(home_target));

    create_effect(move |_| {
        let state = auth.get();
        if state.is_authenticated && !state.loading {
            redirect_to(landing_path_for(state.current_role()));
        }
    });

    view! {
        <div class="min-h-screen bg-surface">
            <div class="max-w-7xl mx-auto py-12 px-4 sm:px-6 lg:px-8">
                <div class="text-center">
                    <h1 class="text-4xl font-extrabold text-fg sm:text-5xl lg:text-6xl">
                        "Travel Requests"
                    </h1>
                    <p class="mt-3 max-w-md mx-auto text-base text-fg-muted sm:text-lg lg:mt-5 lg:text-xl lg:max-w-3xl">
                        "Travel orders, official business and pass slips, reviewed in one place."
                    </p>
                    <div class="mt-5 max-w-md mx-auto sm:flex sm:justify-center lg:mt-8">
                        <div class="rounded-md shadow">
                            <a
                                href=move || target.get().0
                                class="w-full flex items-center justify-center px-8 py-3 border border-transparent text-base font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover lg:py-4 lg:text-lg lg:px-10"
                            >
                                {move || target.get().1}
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::guard_user;

    #[test]
    fn signed_in_users_continue_to_their_landing_page() {
        assert_eq!(home_target(&AuthState::default()), (paths::LOGIN, "Sign in"));
        assert_eq!(
            home_target(&AuthState::signed_in(guard_user())),
            (paths::GATE, "Continue")
        );
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{admin_user, provide_auth};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn admin_gets_a_dashboard_link() {
        let html = render_to_string(|| {
            provide_auth(admin_user());
            view! { <HomePage /> }
        });
        assert!(html.contains("href=\"/dashboard\""));
        assert!(html.contains("Continue"));
    }
}
