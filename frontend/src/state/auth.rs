use crate::{
    api::{ApiClient, ApiError, LoginRequest, Role, UserResponse},
    pages::login::repository::LoginRepository,
    utils::cookies,
};
use leptos::*;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserResponse>,
    /// Role from the `USER_ROLE` cookie until `/user` confirms it.
    pub role: Option<Role>,
    pub is_authenticated: bool,
    pub loading: bool,
}

impl AuthState {
    /// Seeds the session from cookies. A stored token means "signed in, pending confirmation".
    pub fn from_cookies() -> Self {
        let has_token = cookies::access_token().is_some();
        Self {
            user: None,
            role: if has_token { cookies::user_role() } else { None },
            is_authenticated: has_token,
            loading: has_token,
        }
    }

    pub fn signed_in(user: UserResponse) -> Self {
        Self {
            role: Some(user.role),
            user: Some(user),
            is_authenticated: true,
            loading: false,
        }
    }

    pub fn current_role(&self) -> Role {
        self.user
            .as_ref()
            .map(|user| user.role)
            .or(self.role)
            .unwrap_or(Role::Unknown)
    }

    pub fn display_name(&self) -> String {
        self.user
            .as_ref()
            .map(|user| user.name.clone())
            .unwrap_or_default()
    }

    fn sign_out(&mut self) {
        self.user = None;
        self.role = None;
        self.is_authenticated = false;
        self.loading = false;
    }
}

fn create_auth_context() -> AuthContext {
    let initial = AuthState::from_cookies();
    let should_confirm = initial.is_authenticated;
    let (auth_state, set_auth_state) = create_signal(initial);

    if should_confirm {
        let api_client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        spawn_local(async move {
            match api_client.get_me().await {
                Ok(user) => set_auth_state.set(AuthState::signed_in(user)),
                Err(err) => {
                    log::warn!("session check failed: {}", err);
                    set_auth_state.update(AuthState::sign_out);
                }
            }
        });
    }

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

pub fn use_role() -> Signal<Role> {
    let (auth, _) = use_auth();
    Signal::derive(move || auth.with(AuthState::current_role))
}

pub async fn login_request(
    request: LoginRequest,
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    set_auth_state.update(|state| state.loading = true);

    match repo.login(request).await {
        Ok(response) => {
            set_auth_state.set(AuthState::signed_in(response.user));
            Ok(())
        }
        Err(error) => {
            set_auth_state.update(|state| state.loading = false);
            Err(error)
        }
    }
}

pub async fn logout(
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let result = repo.logout().await;
    set_auth_state.update(AuthState::sign_out);
    result
}

pub fn use_login_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = LoginRepository::new_with_client(std::rc::Rc::new(api));

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}

pub fn use_logout_action() -> Action<(), Result<(), ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = LoginRepository::new_with_client(std::rc::Rc::new(api));

    create_action(move |_: &()| {
        let repo = repo.clone();
        async move { logout(&repo, set_auth).await }
    })
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::test_support::mock::prelude::*;

    #[tokio::test]
    async fn login_and_logout_update_auth_state() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/login");
            then.status(200).json_body(serde_json::json!({
                "token": "tok-1",
                "user": { "id": 1, "username": "eva", "name": "Eva Lopez", "role": "evaluator" }
            }));
        });
        server.mock(|when, then| {
            when.method(POST).path("/api/logout");
            then.status(200).json_body(serde_json::json!({}));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let api = ApiClient::new_with_base_url(server.url("/api"));
        let repo = LoginRepository::new_with_client(std::rc::Rc::new(api));

        login_request(
            LoginRequest {
                username: "eva".into(),
                password: "secret".into(),
            },
            &repo,
            set_state,
        )
        .await
        .unwrap();

        let snapshot = state.get();
        assert!(snapshot.is_authenticated);
        assert_eq!(snapshot.current_role(), Role::Evaluator);
        assert_eq!(snapshot.display_name(), "Eva Lopez");

        logout(&repo, set_state).await.unwrap();
        let snapshot = state.get();
        assert!(!snapshot.is_authenticated);
        assert!(snapshot.user.is_none());
        assert!(cookies::access_token().is_none());
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_login_keeps_state_signed_out() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(POST).path("/api/login");
            then.status(422)
                .json_body(serde_json::json!({ "message": "Invalid credentials" }));
        });

        let runtime = create_runtime();
        let (state, set_state) = create_signal(AuthState::default());
        let api = ApiClient::new_with_base_url(server.url("/api"));
        let repo = LoginRepository::new_with_client(std::rc::Rc::new(api));

        let err = login_request(
            LoginRequest {
                username: "eva".into(),
                password: "bad".into(),
            },
            &repo,
            set_state,
        )
        .await
        .unwrap_err();
        assert_eq!(err.error, "Invalid credentials");
        assert!(!state.get().is_authenticated);
        assert!(!state.get().loading);
        runtime.dispose();
    }
}
