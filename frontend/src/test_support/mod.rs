#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{Role, UserResponse};
    use crate::state::auth::AuthState;
    use leptos::*;

    fn user(id: i64, username: &str, name: &str, role: Role) -> UserResponse {
        UserResponse {
            id,
            username: username.into(),
            name: name.into(),
            role,
            deleted_at: None,
        }
    }

    pub fn admin_user() -> UserResponse {
        user(1, "admin", "Maria Reyes", Role::Admin)
    }

    pub fn evaluator_user() -> UserResponse {
        user(2, "eva", "Eva Lopez", Role::Evaluator)
    }

    pub fn guard_user() -> UserResponse {
        user(3, "guard", "Gil Santos", Role::Guard)
    }

    pub fn provide_auth(user: UserResponse) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState::signed_in(user));
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
