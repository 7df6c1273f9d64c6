use crate::api::{HeadPosition, HeadPositionKind};
use crate::components::empty_state::EmptyState;
use crate::pages::admin_directory::{
    components::{FormActions, RowActions, CELL, HEADER_CELL, INPUT, LABEL},
    types::DirectoryEntry,
    utils::active_chiefs,
    view_model::AdminDirectoryViewModel,
};
use leptos::ev::{Event, SubmitEvent};
use leptos::*;

const KINDS: [HeadPositionKind; 3] = [
    HeadPositionKind::Chief,
    HeadPositionKind::Oic,
    HeadPositionKind::RegionalDirector,
];

#[component]
pub fn HeadPositionsSection(vm: AdminDirectoryViewModel) -> impl IntoView {
    let form = vm.head_form;
    let heads = vm.head_positions();
    let is_oic = move || form.with(|f| f.kind == HeadPositionKind::Oic);

    let on_signature = move |ev: Event| {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;
            let file = ev
                .target()
                .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
                .and_then(|input| input.files())
                .and_then(|files| files.get(0));
            if let Some(file) = file {
                spawn_local(async move {
                    vm.set_signature(crate::utils::file::read_signature_file(file).await);
                });
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = ev;
    };

    view! {
        <div class="grid grid-cols-1 gap-6 lg:grid-cols-3">
            <form
                class="bg-surface-elevated shadow rounded-lg p-6 space-y-4"
                on:submit=move |ev: SubmitEvent| {
                    ev.prevent_default();
                    vm.submit();
                }
            >
                <div>
                    <label class=LABEL for="head-name">{"Name"}</label>
                    <input
                        id="head-name"
                        class=INPUT
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class=LABEL for="head-title">{"Title"}</label>
                    <input
                        id="head-title"
                        class=INPUT
                        prop:value=move || form.with(|f| f.title.clone())
                        on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                    />
                </div>
                <div>
                    <label class=LABEL for="head-kind">{"Signs as"}</label>
                    <select
                        id="head-kind"
                        class=INPUT
                        on:change=move |ev| {
                            if let Some(kind) = HeadPositionKind::parse(&event_target_value(&ev)) {
                                form.update(|f| f.kind = kind);
                            }
                        }
                    >
                        {KINDS
                            .into_iter()
                            .map(|kind| {
                                view! {
                                    <option value=kind.as_str() selected=move || form.with(|f| f.kind == kind)>
                                        {kind.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <Show when=is_oic>
                    <div>
                        <label class=LABEL for="head-chief">{"Signs for chief"}</label>
                        <select
                            id="head-chief"
                            class=INPUT
                            on:change=move |ev| {
                                let id = event_target_value(&ev).parse::<i64>().ok();
                                form.update(|f| f.chief_id = id);
                            }
                        >
                            <option value="" selected=move || form.with(|f| f.chief_id.is_none())>
                                {"Choose a chief"}
                            </option>
                            {move || {
                                heads.with(|heads| {
                                    active_chiefs(heads)
                                        .into_iter()
                                        .map(|chief| {
                                            let id = chief.id;
                                            view! {
                                                <option
                                                    value=id.to_string()
                                                    selected=move || form.with(|f| f.chief_id == Some(id))
                                                >
                                                    {chief.name.clone()}
                                                </option>
                                            }
                                        })
                                        .collect_view()
                                })
                            }}
                        </select>
                    </div>
                </Show>
                <div>
                    <label class=LABEL for="head-signature">{"Signature (PNG or JPEG, up to 2 MB)"}</label>
                    <input
                        id="head-signature"
                        type="file"
                        accept="image/png,image/jpeg"
                        class=INPUT
                        on:change=on_signature
                    />
                    <p class="mt-1 text-xs text-fg-muted">
                        {move || signature_hint(form.with(|f| (f.signature.is_some(), f.has_signature)))}
                    </p>
                </div>
                <FormActions
                    editing=Signal::derive(move || form.with(|f| f.editing.is_some()))
                    saving=vm.is_saving()
                    on_cancel=Callback::new(move |_| vm.reset_form())
                />
            </form>
            <div class="lg:col-span-2 bg-surface-elevated shadow rounded-lg overflow-x-auto">
                <Show
                    when=move || heads.with(|list| !list.is_empty())
                    fallback=|| view! { <EmptyState title="No head positions yet" /> }
                >
                    <table class="min-w-full divide-y divide-border">
                        <thead>
                            <tr>
                                <th class=HEADER_CELL>{"Name"}</th>
                                <th class=HEADER_CELL>{"Title"}</th>
                                <th class=HEADER_CELL>{"Signs as"}</th>
                                <th class=HEADER_CELL>{"Signature"}</th>
                                <th class=HEADER_CELL></th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            <For
                                each=move || heads.get()
                                key=|head| (head.id, head.deleted_at.is_some())
                                children=move |head: HeadPosition| {
                                    let entry = store_value(DirectoryEntry::HeadPosition(head.clone()));
                                    view! {
                                        <tr>
                                            <td class=CELL>{head.name.clone()}</td>
                                            <td class=CELL>{head.title.clone()}</td>
                                            <td class=CELL>{head.kind.label()}</td>
                                            <td class=CELL>
                                                {if head.signature.is_some() { "On file" } else { "Missing" }}
                                            </td>
                                            <td class=CELL>
                                                <RowActions
                                                    archived=head.deleted_at.is_some()
                                                    on_edit=Callback::new(move |_| vm.edit(&entry.get_value()))
                                                    on_archive=Callback::new(move |_| vm.request_delete(entry.get_value()))
                                                />
                                            </td>
                                        </tr>
                                    }
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </div>
        </div>
    }
}

fn signature_hint((uploaded, on_file): (bool, bool)) -> &'static str {
    match (uploaded, on_file) {
        (true, _) => "New signature ready to save.",
        (false, true) => "A signature is on file. Choose a file to replace it.",
        (false, false) => "No signature on file.",
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    fn head(id: i64, name: &str, kind: HeadPositionKind) -> HeadPosition {
        HeadPosition {
            id,
            name: name.into(),
            title: "Chief, Admin Division".into(),
            kind,
            chief_id: None,
            signature: None,
            deleted_at: None,
        }
    }

    #[test]
    fn oic_form_offers_chiefs() {
        let html = render_to_string(|| {
            let vm = AdminDirectoryViewModel::new();
            vm.head_positions_resource.set(Ok(vec![
                head(1, "Carlos Mendoza", HeadPositionKind::Chief),
                head(2, "Lito Ramos", HeadPositionKind::RegionalDirector),
            ]));
            vm.head_form.update(|form| form.kind = HeadPositionKind::Oic);
            view! { <HeadPositionsSection vm=vm /> }
        });
        assert!(html.contains("Signs for chief"));
        assert!(html.contains("Carlos Mendoza"));
        assert!(html.contains("Regional Director"));
        assert!(html.contains("Missing"));
    }
}
