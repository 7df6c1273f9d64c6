use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::{ApiClient, Role},
    components::guard::{RequireAuth, RequireRole},
    notifications::{provide_notifications, NotificationListener},
    pages::{
        admin_directory::AdminDirectoryPage, admin_users::AdminUsersPage,
        dashboard::DashboardPage, gate::GatePage, history::HistoryPage, home::HomePage,
        login::LoginPage, requests::RequestsPage,
    },
    state::{
        auth::{use_role, AuthProvider},
        toast::provide_toasts,
    },
};

pub mod paths {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const DASHBOARD: &str = "/dashboard";
    pub const REQUESTS: &str = "/requests";
    pub const HISTORY: &str = "/history";
    pub const GATE: &str = "/gate";
    pub const ADMIN_DIRECTORY: &str = "/admin/directory";
    pub const ADMIN_USERS: &str = "/admin/users";
}

pub const ROUTE_PATHS: &[&str] = &[
    paths::HOME,
    paths::LOGIN,
    paths::DASHBOARD,
    paths::REQUESTS,
    paths::HISTORY,
    paths::GATE,
    paths::ADMIN_DIRECTORY,
    paths::ADMIN_USERS,
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    paths::DASHBOARD,
    paths::REQUESTS,
    paths::HISTORY,
    paths::GATE,
    paths::ADMIN_DIRECTORY,
    paths::ADMIN_USERS,
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &[paths::HOME, paths::LOGIN];

/// Where a freshly signed-in user lands.
pub fn landing_path_for(role: Role) -> &'static str {
    match role {
        Role::Admin | Role::Evaluator => paths::DASHBOARD,
        Role::Guard => paths::GATE,
        Role::Unknown => paths::LOGIN,
    }
}

/// Full-page navigation. Used outside the router's reach (auth effects, 401s).
#[cfg(target_arch = "wasm32")]
pub fn redirect_to(path: &str) {
    if let Some(window) = web_sys::window() {
        let location = window.location();
        if location.pathname().ok().as_deref() == Some(path) {
            return;
        }
        if let Err(err) = location.set_href(path) {
            log::warn!("navigation to {} failed: {:?}", path, err);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn redirect_to(path: &str) {
    log::debug!("redirect to {} skipped outside the browser", path);
}

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    provide_toasts();
    provide_notifications();
    provide_meta_context();
    view! {
        <Title text="Travel Requests"/>
        <AuthProvider>
            <PushSubscription/>
            <Router>
                <Routes>
                    <Route path=paths::HOME view=HomePage/>
                    <Route path=paths::LOGIN view=LoginPage/>
                    <Route path=paths::DASHBOARD view=ProtectedDashboard/>
                    <Route path=paths::REQUESTS view=ProtectedRequests/>
                    <Route path=paths::HISTORY view=ProtectedHistory/>
                    <Route path=paths::GATE view=ProtectedGate/>
                    <Route path=paths::ADMIN_DIRECTORY view=ProtectedAdminDirectory/>
                    <Route path=paths::ADMIN_USERS view=ProtectedAdminUsers/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

/// Holds the push socket open while a reviewer is signed in.
#[component]
fn PushSubscription() -> impl IntoView {
    let role = use_role();
    view! {
        <Show when=move || role.get().can_review()>
            <NotificationListener/>
        </Show>
    }
}

fn reviewers() -> Vec<Role> {
    vec![Role::Admin, Role::Evaluator]
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><RequireRole roles=reviewers()><DashboardPage/></RequireRole></RequireAuth> }
}

#[component]
fn ProtectedRequests() -> impl IntoView {
    view! { <RequireAuth><RequireRole roles=reviewers()><RequestsPage/></RequireRole></RequireAuth> }
}

#[component]
fn ProtectedHistory() -> impl IntoView {
    view! { <RequireAuth><RequireRole roles=reviewers()><HistoryPage/></RequireRole></RequireAuth> }
}

#[component]
fn ProtectedGate() -> impl IntoView {
    view! {
        <RequireAuth>
            <RequireRole roles=vec![Role::Guard, Role::Admin]><GatePage/></RequireRole>
        </RequireAuth>
    }
}

#[component]
fn ProtectedAdminDirectory() -> impl IntoView {
    view! {
        <RequireAuth>
            <RequireRole roles=vec![Role::Admin]><AdminDirectoryPage/></RequireRole>
        </RequireAuth>
    }
}

#[component]
fn ProtectedAdminUsers() -> impl IntoView {
    view! {
        <RequireAuth>
            <RequireRole roles=vec![Role::Admin]><AdminUsersPage/></RequireRole>
        </RequireAuth>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn protected_and_public_routes_partition_all() {
        let all: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        let protected: HashSet<&str> = PROTECTED_ROUTE_PATHS.iter().copied().collect();
        let public: HashSet<&str> = PUBLIC_ROUTE_PATHS.iter().copied().collect();
        assert!(protected.is_disjoint(&public));
        assert_eq!(&protected | &public, all);
    }

    #[test]
    fn no_duplicate_routes() {
        let unique: HashSet<&str> = ROUTE_PATHS.iter().copied().collect();
        assert_eq!(unique.len(), ROUTE_PATHS.len());
    }

    #[test]
    fn landing_path_depends_on_role() {
        assert_eq!(landing_path_for(Role::Admin), "/dashboard");
        assert_eq!(landing_path_for(Role::Evaluator), "/dashboard");
        assert_eq!(landing_path_for(Role::Guard), "/gate");
        assert_eq!(landing_path_for(Role::Unknown), "/login");
        for role in [Role::Admin, Role::Evaluator, Role::Guard, Role::Unknown] {
            assert!(ROUTE_PATHS.contains(&landing_path_for(role)));
        }
    }
}
