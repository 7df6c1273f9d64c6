use crate::components::{
    layout::{ErrorMessage, Layout},
    soft_delete_dialog::{SoftDeleteDialog, SoftDeleteTarget},
};
use crate::pages::admin_directory::{
    components::{
        employees::EmployeesSection, head_positions::HeadPositionsSection,
        positions::PositionsSection, tabs::DirectoryTabs,
    },
    types::DirectoryTab,
    view_model::use_admin_directory_view_model,
};
use leptos::*;

#[component]
pub fn AdminDirectoryPage() -> impl IntoView {
    let vm = use_admin_directory_view_model();
    let load_error = vm.load_error();
    let form_error = vm.form_error;
    let pending_delete = vm.pending_delete;
    let deleting = vm.delete_action.pending();
    let tab = vm.tab;

    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-fg">{"Directory"}</h1>
                    <p class="mt-1 text-sm text-fg-muted">
                        {"Employees, positions and the heads whose signatures appear on approved requests."}
                    </p>
                </div>
                {move || {
                    load_error.get().map(|err| {
                        view! { <ErrorMessage message=format!("Directory could not be loaded: {}", err.error) /> }
                    })
                }}
                <DirectoryTabs vm=vm />
                {move || {
                    form_error
                        .get()
                        .map(|err| view! { <p class="text-sm text-status-error-text">{err.error}</p> })
                }}
                {move || match tab.get() {
                    DirectoryTab::Employees => view! { <EmployeesSection vm=vm /> }.into_view(),
                    DirectoryTab::Positions => view! { <PositionsSection vm=vm /> }.into_view(),
                    DirectoryTab::HeadPositions => view! { <HeadPositionsSection vm=vm /> }.into_view(),
                }}
                <SoftDeleteDialog
                    target=Signal::derive(move || {
                        pending_delete.with(|entry| {
                            entry
                                .as_ref()
                                .map(|entry| SoftDeleteTarget::archive(entry.tab().noun(), entry.display_name()))
                        })
                    })
                    busy=deleting
                    on_confirm=Callback::new(move |_| vm.confirm_delete())
                    on_cancel=Callback::new(move |_| vm.cancel_delete())
                />
            </div>
        </Layout>
    }
}
