use crate::{
    api::Role,
    components::toast::ToastStack,
    notifications::use_notifications,
    router::{self, paths},
    state::auth::{self, use_auth, use_role},
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

const LINK_CLASS: &str = "text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover";

/// Header links for a role, in display order.
pub fn nav_links(role: Role) -> Vec<NavLink> {
    let mut links = Vec::new();
    if role.can_review() {
        links.push(NavLink {
            href: paths::DASHBOARD,
            label: "Dashboard",
        });
        links.push(NavLink {
            href: paths::REQUESTS,
            label: "Requests",
        });
        links.push(NavLink {
            href: paths::HISTORY,
            label: "History",
        });
    }
    if matches!(role, Role::Guard | Role::Admin) {
        links.push(NavLink {
            href: paths::GATE,
            label: "Gate",
        });
    }
    if role == Role::Admin {
        links.push(NavLink {
            href: paths::ADMIN_DIRECTORY,
            label: "Directory",
        });
        links.push(NavLink {
            href: paths::ADMIN_USERS,
            label: "Users",
        });
    }
    links
}

#[component]
pub fn Header() -> impl IntoView {
    let (auth, _set_auth) = use_auth();
    let role = use_role();
    let (menu_open, set_menu_open) = create_signal(false);
    let logout_action = auth::use_logout_action();
    let logout_pending = logout_action.pending();
    create_effect(move |_| {
        if logout_action.value().get().is_some() {
            router::redirect_to(paths::LOGIN);
        }
    });
    let on_logout = move |_| {
        if logout_pending.get_untracked() {
            return;
        }
        set_menu_open.set(false);
        logout_action.dispatch(());
    };
    let display_name = move || auth.with(|state| state.display_name());
    let links = move || {
        nav_links(role.get())
            .into_iter()
            .map(|link| {
                view! {
                    <a
                        href=link.href
                        class=LINK_CLASS
                        on:click=move |_| set_menu_open.set(false)
                    >
                        {link.label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center gap-3">
                        <h1 class="text-xl font-semibold text-fg">"Travel Request Admin"</h1>
                        <span class="hidden sm:inline text-xs text-fg-muted">
                            {move || role.get().label()}
                        </span>
                    </div>
                    <div class="flex items-center gap-2">
                        <nav class="hidden lg:flex space-x-2">{links}</nav>
                        <Show when=move || role.get().can_review()>
                            <NotificationBell/>
                        </Show>
                        <span class="hidden md:inline text-sm text-fg-muted">{display_name}</span>
                        <button
                            on:click=on_logout
                            class=format!("{} disabled:opacity-50", LINK_CLASS)
                            disabled=move || logout_pending.get()
                        >
                            "Sign out"
                        </button>
                        <button
                            type="button"
                            class="lg:hidden inline-flex items-center justify-center p-2 rounded-md text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                            aria-expanded=move || menu_open.get()
                            aria-controls="mobile-nav"
                        >
                            <span class="sr-only">
                                {move || if menu_open.get() { "Close menu" } else { "Open menu" }}
                            </span>
                            <svg class="h-6 w-6" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M4 6h16M4 12h16M4 18h16"/>
                            </svg>
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div id="mobile-nav" class="lg:hidden border-t border-border">
                        <nav class="px-4 py-3 flex flex-col space-y-1">{links}</nav>
                    </div>
                </Show>
            </div>
        </header>
    }
}

/// Pending-request bell. The badge caps at "9+".
#[component]
pub fn NotificationBell() -> impl IntoView {
    let notifications = use_notifications();
    let badge = notifications.badge();
    let items = notifications.items();
    let (open, set_open) = create_signal(false);

    view! {
        <div class="relative">
            <button
                type="button"
                class="relative p-2 rounded-full text-fg-muted hover:text-fg hover:bg-action-ghost-bg-hover"
                aria-label="Notifications"
                on:click=move |_| set_open.update(|value| *value = !*value)
            >
                <svg class="h-6 w-6" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 17h5l-1.4-1.4A2 2 0 0118 14.2V11a6 6 0 10-12 0v3.2c0 .5-.2 1-.6 1.4L4 17h5m6 0v1a3 3 0 11-6 0v-1m6 0H9"/>
                </svg>
                {move || badge.get().map(|label| view! {
                    <span class="absolute -top-1 -right-1 rounded-full bg-action-danger-bg text-action-danger-text text-xs px-1.5">
                        {label}
                    </span>
                })}
            </button>
            <Show when=move || open.get()>
                <div class="absolute right-0 mt-2 w-72 rounded-md bg-surface-elevated border border-border shadow-lg z-50">
                    <Show
                        when=move || !items.with(Vec::is_empty)
                        fallback=|| view! { <p class="px-4 py-3 text-sm text-fg-muted">"No pending requests."</p> }
                    >
                        <ul class="divide-y divide-border">
                            {move || items.get().into_iter().map(|item| view! {
                                <li class="px-4 py-3">
                                    <a href=paths::REQUESTS class="block">
                                        <p class="text-sm font-semibold text-fg">{item.title}</p>
                                        <p class="text-xs text-fg-muted">{item.message}</p>
                                    </a>
                                </li>
                            }).collect_view()}
                        </ul>
                    </Show>
                </div>
            </Show>
        </div>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
            <ToastStack/>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div role="alert" class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::notifications::{provide_notifications, PendingCounts};
    use crate::test_support::helpers::{admin_user, guard_user, provide_auth};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn header_renders_admin_links_and_badge() {
        let html = render_to_string(move || {
            provide_auth(admin_user());
            let notifications = provide_notifications();
            notifications.replace_counts(PendingCounts {
                official_business: 2,
                travel_orders: 1,
                pass_slips: 0,
            });
            view! { <Header /> }
        });
        assert!(html.contains("Directory"));
        assert!(html.contains("Users"));
        assert!(html.contains("Notifications"));
        assert!(html.contains(">3<"));
    }

    #[test]
    fn guard_header_has_no_bell() {
        let html = render_to_string(move || {
            provide_auth(guard_user());
            view! { <Header /> }
        });
        assert!(html.contains("Gate"));
        assert!(!html.contains("Notifications"));
        assert!(!html.contains("Directory"));
    }

    #[test]
    fn layout_renders_children() {
        let html = render_to_string(move || {
            provide_auth(admin_user());
            view! { <Layout><div>"child"</div></Layout> }
        });
        assert!(html.contains("child"));
        assert!(html.contains("aria-live"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner />
                    <ErrorMessage message="error" />
                </div>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("error"));
    }
}
