use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn AdminUsersFrame(children: Children) -> impl IntoView {
    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-fg">{"User accounts"}</h1>
                    <p class="mt-1 text-sm text-fg-muted">
                        {"Create sign-ins for admins, evaluators and guards, or deactivate them."}
                    </p>
                </div>
                {children()}
            </div>
        </Layout>
    }
}
