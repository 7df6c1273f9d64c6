use super::utils::validate_credentials;
use crate::api::{ApiError, LoginRequest};
use crate::router::{landing_path_for, redirect_to};
use crate::state::auth::{self, use_auth};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub username: RwSignal<String>,
    pub password: RwSignal<String>,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<(), ApiError>>,
}

impl LoginViewModel {
    /// Validates the form and dispatches the login. Returns `false` when nothing was sent.
    pub fn submit(&self) -> bool {
        if self.login_action.pending().get_untracked() {
            return false;
        }
        match validate_credentials(&self.username.get_untracked(), &self.password.get_untracked())
        {
            Ok(request) => {
                self.error.set(None);
                self.login_action.dispatch(request);
                true
            }
            Err(err) => {
                self.error.set(Some(err));
                false
            }
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let username = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<ApiError>);
    let login_action = auth::use_login_action();
    let (auth, _) = use_auth();

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    password.set(String::new());
                    let role = auth.get_untracked().current_role();
                    redirect_to(landing_path_for(role));
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    LoginViewModel {
        username,
        password,
        error,
        login_action,
    }
}
