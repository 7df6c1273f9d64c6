use crate::api::{ApiClient, ApiError, EmployeeResponse, HeadPosition, PositionResponse};
use crate::pages::admin_directory::{
    repository::DirectoryRepository,
    types::{DirectoryEntry, DirectorySave, DirectoryTab},
    utils::{EmployeeFormState, HeadPositionFormState, PositionFormState},
};
use crate::state::toast::{use_toasts, ToastState};
use leptos::*;

type Listing<T> = Resource<u32, Result<Vec<T>, ApiError>>;

#[derive(Clone, Copy)]
pub struct AdminDirectoryViewModel {
    pub tab: RwSignal<DirectoryTab>,
    pub employee_form: RwSignal<EmployeeFormState>,
    pub position_form: RwSignal<PositionFormState>,
    pub head_form: RwSignal<HeadPositionFormState>,
    pub form_error: RwSignal<Option<ApiError>>,
    pub pending_delete: RwSignal<Option<DirectoryEntry>>,
    pub reload: RwSignal<u32>,
    pub employees_resource: Listing<EmployeeResponse>,
    pub positions_resource: Listing<PositionResponse>,
    pub head_positions_resource: Listing<HeadPosition>,
    pub save_action: Action<DirectorySave, Result<(), ApiError>>,
    pub delete_action: Action<DirectoryEntry, Result<(), ApiError>>,
    toasts: ToastState,
}

impl AdminDirectoryViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(DirectoryRepository::new(api));
        let toasts = use_toasts();

        let tab = create_rw_signal(DirectoryTab::default());
        let employee_form = create_rw_signal(EmployeeFormState::default());
        let position_form = create_rw_signal(PositionFormState::default());
        let head_form = create_rw_signal(HeadPositionFormState::default());
        let form_error = create_rw_signal(None::<ApiError>);
        let pending_delete = create_rw_signal(None::<DirectoryEntry>);
        let reload = create_rw_signal(0u32);
        let bump = move || reload.update(|value| *value = value.wrapping_add(1));

        let employees_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repository.get_value();
                async move { repo.fetch_employees().await }
            },
        );
        let positions_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repository.get_value();
                async move { repo.fetch_positions().await }
            },
        );
        let head_positions_resource = create_resource(
            move || reload.get(),
            move |_| {
                let repo = repository.get_value();
                async move { repo.fetch_head_positions().await }
            },
        );

        let save_action = create_action(move |save: &DirectorySave| {
            let repo = repository.get_value();
            let save = save.clone();
            async move {
                let result = repo.save(&save).await;
                match &result {
                    Ok(()) => {
                        let verb = if save.is_update() { "Updated" } else { "Added" };
                        toasts.success(format!("{} {}.", verb, save.tab().noun()));
                        match save.tab() {
                            DirectoryTab::Employees => employee_form.set(Default::default()),
                            DirectoryTab::Positions => position_form.set(Default::default()),
                            DirectoryTab::HeadPositions => head_form.set(Default::default()),
                        }
                        bump();
                    }
                    Err(err) => form_error.set(Some(err.clone())),
                }
                result
            }
        });

        let delete_action = create_action(move |entry: &DirectoryEntry| {
            let repo = repository.get_value();
            let entry = entry.clone();
            async move {
                let result = repo.delete(&entry).await;
                match &result {
                    Ok(()) => {
                        toasts.success(format!("Archived {}.", entry.display_name()));
                        bump();
                    }
                    Err(err) => {
                        toasts.error(format!("Could not archive {}: {}", entry.tab().noun(), err));
                    }
                }
                pending_delete.set(None);
                result
            }
        });

        Self {
            tab,
            employee_form,
            position_form,
            head_form,
            form_error,
            pending_delete,
            reload,
            employees_resource,
            positions_resource,
            head_positions_resource,
            save_action,
            delete_action,
            toasts,
        }
    }

    pub fn employees(&self) -> Signal<Vec<EmployeeResponse>> {
        let resource = self.employees_resource;
        Signal::derive(move || resource.get().and_then(Result::ok).unwrap_or_default())
    }

    pub fn positions(&self) -> Signal<Vec<PositionResponse>> {
        let resource = self.positions_resource;
        Signal::derive(move || resource.get().and_then(Result::ok).unwrap_or_default())
    }

    pub fn head_positions(&self) -> Signal<Vec<HeadPosition>> {
        let resource = self.head_positions_resource;
        Signal::derive(move || resource.get().and_then(Result::ok).unwrap_or_default())
    }

    /// First failure among the three listings.
    pub fn load_error(&self) -> Signal<Option<ApiError>> {
        let employees = self.employees_resource;
        let positions = self.positions_resource;
        let heads = self.head_positions_resource;
        Signal::derive(move || {
            employees
                .get()
                .and_then(Result::err)
                .or_else(|| positions.get().and_then(Result::err))
                .or_else(|| heads.get().and_then(Result::err))
        })
    }

    pub fn is_saving(&self) -> Signal<bool> {
        self.save_action.pending().into()
    }

    pub fn select_tab(&self, tab: DirectoryTab) {
        self.tab.set(tab);
        self.form_error.set(None);
    }

    pub fn edit(&self, entry: &DirectoryEntry) {
        match entry {
            DirectoryEntry::Employee(employee) => {
                self.employee_form.set(EmployeeFormState::from_employee(employee))
            }
            DirectoryEntry::Position(position) => {
                self.position_form.set(PositionFormState::from_position(position))
            }
            DirectoryEntry::HeadPosition(head) => {
                self.head_form.set(HeadPositionFormState::from_head(head))
            }
        }
        self.form_error.set(None);
    }

    pub fn reset_form(&self) {
        match self.tab.get_untracked() {
            DirectoryTab::Employees => self.employee_form.set(Default::default()),
            DirectoryTab::Positions => self.position_form.set(Default::default()),
            DirectoryTab::HeadPositions => self.head_form.set(Default::default()),
        }
        self.form_error.set(None);
    }

    /// Validates the form of the active tab and dispatches it. Returns whether a request went out.
    pub fn submit(&self) -> bool {
        if self.save_action.pending().get_untracked() {
            return false;
        }
        let save = match self.tab.get_untracked() {
            DirectoryTab::Employees => self.employee_form.with_untracked(EmployeeFormState::to_save),
            DirectoryTab::Positions => self.position_form.with_untracked(PositionFormState::to_save),
            DirectoryTab::HeadPositions => self.head_form.with_untracked(HeadPositionFormState::to_save),
        };
        match save {
            Ok(save) => {
                self.form_error.set(None);
                self.save_action.dispatch(save);
                true
            }
            Err(err) => {
                self.form_error.set(Some(err));
                false
            }
        }
    }

    /// Result of reading an uploaded signature file.
    pub fn set_signature(&self, upload: Result<String, ApiError>) {
        match upload {
            Ok(data_url) => {
                self.head_form.update(|form| {
                    form.signature = Some(data_url);
                    form.has_signature = true;
                });
                self.form_error.set(None);
            }
            Err(err) => self.form_error.set(Some(err)),
        }
    }

    pub fn request_delete(&self, entry: DirectoryEntry) {
        self.pending_delete.set(Some(entry));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    pub fn confirm_delete(&self) {
        match self.pending_delete.get_untracked() {
            Some(entry) => self.delete_action.dispatch(entry),
            None => {
                self.toasts.error("Nothing selected to archive.");
            }
        }
    }
}

impl Default for AdminDirectoryViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_admin_directory_view_model() -> AdminDirectoryViewModel {
    match use_context::<AdminDirectoryViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = AdminDirectoryViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
