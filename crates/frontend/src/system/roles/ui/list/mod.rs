use crate::shared::components::{DeleteConfirm, DeleteTarget, ErrorBanner, PageHeader, PaginationControls};
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::system::auth::context::{reload_actor, use_auth};
use crate::system::roles::api;
use crate::system::roles::ui::details::RoleDetails;
use contracts::system::auth::permissions::BYPASS_ROLES;
use contracts::system::roles::{RoleDetail, RoleDto};
use leptos::prelude::*;

#[component]
pub fn RolesListPage() -> impl IntoView {
    let list = ListState::<RoleDetail>::new(api::fetch_page);
    let editing = RwSignal::new(None::<RoleDto>);
    let deleting = RwSignal::new(None::<DeleteTarget>);
    let (_, set_auth_state) = use_auth();

    // the current actor may hold the edited role
    let on_saved = Callback::new(move |_| {
        editing.set(None);
        list.reload();
        reload_actor(set_auth_state);
    });
    let on_cancel = Callback::new(move |_| editing.set(None));
    let on_deleted = Callback::new(move |_| {
        list.reload();
        reload_actor(set_auth_state);
    });

    view! {
        <div class="page">
            <PageHeader title="Role & Izin" subtitle="Hak akses per role".to_string()>
                <SearchInput
                    value=list.filter
                    on_input=Callback::new(move |v| list.filter.set(v))
                    on_change=Callback::new(move |v| list.set_search(v))
                    placeholder="Cari role..."
                />
                <button class="button button--primary" on:click=move |_| editing.set(Some(RoleDto::default()))>
                    {icon("plus")}
                    "Tambah Role"
                </button>
                <button class="button button--secondary" on:click=move |_| list.reload()>
                    {icon("refresh")}
                    "Muat ulang"
                </button>
            </PageHeader>

            <ErrorBanner message=list.error />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Role"</th>
                            <th class="table__header-cell table__header-cell--number">"Jumlah Izin"</th>
                            <th class="table__header-cell">"Izin"</th>
                            <th class="table__header-cell table__header-cell--actions">"Aksi"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let filter = list.filter.get();
                            list.visible().into_iter().map(|row| {
                                let dto = RoleDto::from(&row);
                                let target = DeleteTarget::new(row.id, row.name.clone());
                                let protected = BYPASS_ROLES.contains(&row.name.as_str());
                                let count = row.permissions.len();
                                let summary = summarize(&row.permission_names());
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{highlight_matches(&row.name, &filter)}</td>
                                        <td class="table__cell table__cell--number">{count}</td>
                                        <td class="table__cell table__cell--muted">{summary}</td>
                                        <td class="table__cell table__cell--actions">
                                            <button class="button button--icon" title="Edit"
                                                on:click=move |_| editing.set(Some(dto.clone()))>
                                                {icon("edit")}
                                            </button>
                                            {(!protected).then(|| view! {
                                                <button class="button button--icon button--danger" title="Hapus"
                                                    on:click=move |_| deleting.set(Some(target.clone()))>
                                                    {icon("delete")}
                                                </button>
                                            })}
                                        </td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                    </tbody>
                </table>
                <Show when=move || !list.loading.get() && list.visible().is_empty()>
                    <div class="table__empty">"Tidak ada role"</div>
                </Show>
            </div>

            <PaginationControls
                meta=list.meta
                on_page_change=Callback::new(move |p| list.set_page(p))
                on_page_size_change=Callback::new(move |s| list.set_per_page(s))
            />

            {move || editing.get().map(|initial| view! {
                <RoleDetails initial=initial on_saved=on_saved on_cancel=on_cancel />
            })}

            <DeleteConfirm target=deleting entity="role" resource=api::RESOURCE on_done=on_deleted />
        </div>
    }
}

const SUMMARY_LIMIT: usize = 4;

/// First few permission names, then "+N lainnya".
fn summarize(names: &[String]) -> String {
    if names.is_empty() {
        return "-".to_string();
    }
    let shown = names.iter().take(SUMMARY_LIMIT).cloned().collect::<Vec<_>>().join(", ");
    match names.len().saturating_sub(SUMMARY_LIMIT) {
        0 => shown,
        rest => format!("{} +{} lainnya", shown, rest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summarize() {
        assert_eq!(summarize(&[]), "-");
        let names: Vec<String> = ["view-product", "edit-product"].iter().map(|s| s.to_string()).collect();
        assert_eq!(summarize(&names), "view-product, edit-product");
        let many: Vec<String> = (1..=6).map(|i| format!("p{}", i)).collect();
        assert_eq!(summarize(&many), "p1, p2, p3, p4 +2 lainnya");
    }
}
