use crate::components::layout::Layout;
use leptos::*;

#[component]
pub fn RequestsLayout(children: Children) -> impl IntoView {
    view! {
        <Layout>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-fg">{"Requests"}</h1>
                    <p class="mt-1 text-sm text-fg-muted">
                        {"Review travel orders, official business and pass slips waiting on your role."}
                    </p>
                </div>
                {children()}
            </div>
        </Layout>
    }
}
