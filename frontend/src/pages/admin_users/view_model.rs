use crate::api::{ApiClient, ApiError, UserPayload, UserResponse};
use crate::pages::admin_users::{repository::AdminUsersRepository, utils::UserFormState};
use crate::state::toast::{use_toasts, ToastState};
use leptos::*;

#[derive(Clone, Copy)]
pub struct AdminUsersViewModel {
    pub form: RwSignal<UserFormState>,
    pub editing: RwSignal<Option<i64>>,
    pub form_error: RwSignal<Option<ApiError>>,
    pub pending_delete: RwSignal<Option<UserResponse>>,
    pub reload: RwSignal<u32>,
    pub users_resource: Resource<u32, Result<Vec<UserResponse>, ApiError>>,
    pub save_action: Action<(Option<i64>, UserPayload), Result<UserResponse, ApiError>>,
    pub delete_action: Action<i64, Result<(), ApiError>>,
    toasts: ToastState,
}

impl AdminUsersViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(AdminUsersRepository::new(api));
        let toasts = use_toasts();

        let form = create_rw_signal(UserFormState::default());
        let editing = create_rw_signal(None::<i64>);
        let form_error = create_rw_signal(None::<ApiError>);
        let pending_delete = create_rw_signal(None::<UserResponse>);
        let reload = create_rw_signal(0u32);
        let bump = move || reload.update(|value| *value = value.wrapping_add(1));

        let users_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repository.get_value();
                async move { repo.fetch_users().await }
            },
        );

        let save_action = create_action(move |(id, payload): &(Option<i64>, UserPayload)| {
            let repo = repository.get_value();
            let id = *id;
            let payload = payload.clone();
            async move {
                let result = repo.save_user(id, &payload).await;
                match &result {
                    Ok(user) => {
                        let verb = if id.is_some() { "Updated" } else { "Created" };
                        toasts.success(format!("{} {}.", verb, user.username));
                        form.set(UserFormState::default());
                        editing.set(None);
                        bump();
                    }
                    Err(err) => form_error.set(Some(err.clone())),
                }
                result
            }
        });

        let delete_action = create_action(move |id: &i64| {
            let repo = repository.get_value();
            let id = *id;
            async move {
                let result = repo.delete_user(id).await;
                match &result {
                    Ok(()) => {
                        toasts.success("User deactivated.");
                        bump();
                    }
                    Err(err) => {
                        toasts.error(format!("Could not deactivate user: {}", err));
                    }
                }
                pending_delete.set(None);
                result
            }
        });

        Self {
            form,
            editing,
            form_error,
            pending_delete,
            reload,
            users_resource,
            save_action,
            delete_action,
            toasts,
        }
    }

    pub fn users(&self) -> Signal<Vec<UserResponse>> {
        let resource = self.users_resource;
        Signal::derive(move || resource.get().and_then(Result::ok).unwrap_or_default())
    }

    pub fn load_error(&self) -> Signal<Option<ApiError>> {
        let resource = self.users_resource;
        Signal::derive(move || resource.get().and_then(Result::err))
    }

    pub fn is_saving(&self) -> Signal<bool> {
        self.save_action.pending().into()
    }

    pub fn start_edit(&self, user: &UserResponse) {
        self.form.set(UserFormState::from_user(user));
        self.editing.set(Some(user.id));
        self.form_error.set(None);
    }

    pub fn reset_form(&self) {
        self.form.set(UserFormState::default());
        self.editing.set(None);
        self.form_error.set(None);
    }

    /// Validates locally and dispatches the save. Returns whether a request went out.
    pub fn submit(&self) -> bool {
        if self.save_action.pending().get_untracked() {
            return false;
        }
        let editing = self.editing.get_untracked();
        match self.form.with_untracked(|form| form.to_payload(editing.is_none())) {
            Ok(payload) => {
                self.form_error.set(None);
                self.save_action.dispatch((editing, payload));
                true
            }
            Err(err) => {
                self.form_error.set(Some(err));
                false
            }
        }
    }

    pub fn request_delete(&self, user: UserResponse) {
        self.pending_delete.set(Some(user));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    pub fn confirm_delete(&self) {
        match self.pending_delete.get_untracked() {
            Some(user) => self.delete_action.dispatch(user.id),
            None => {
                self.toasts
                    .error(ApiError::missing_identifier("No user selected.").error);
            }
        }
    }
}

impl Default for AdminUsersViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_admin_users_view_model() -> AdminUsersViewModel {
    match use_context::<AdminUsersViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = AdminUsersViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
