use crate::domain::a001_category::api;
use crate::domain::a001_category::ui::details::CategoryDetails;
use crate::shared::components::{DeleteConfirm, DeleteTarget, ErrorBanner, PageHeader, PaginationControls};
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::system::auth::guard::Can;
use contracts::domain::a001_category::{Category, CategoryDto};
use leptos::prelude::*;

#[component]
pub fn CategoryList() -> impl IntoView {
    let list = ListState::<Category>::new(api::fetch_page);
    let editing = RwSignal::new(None::<CategoryDto>);
    let deleting = RwSignal::new(None::<DeleteTarget>);

    let on_saved = Callback::new(move |_| {
        editing.set(None);
        list.reload();
    });
    let on_cancel = Callback::new(move |_| editing.set(None));
    let on_deleted = Callback::new(move |_| list.reload());

    view! {
        <div class="page">
            <PageHeader title="Kategori" subtitle="Pengelompokan produk".to_string()>
                <SearchInput
                    value=list.filter
                    on_input=Callback::new(move |v| list.filter.set(v))
                    on_change=Callback::new(move |v| list.set_search(v))
                    placeholder="Cari kategori..."
                />
                <button class="button button--primary" on:click=move |_| editing.set(Some(CategoryDto::default()))>
                    {icon("plus")}
                    "Tambah Kategori"
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
                            <th class="table__header-cell">"Nama"</th>
                            <th class="table__header-cell">"Deskripsi"</th>
                            <th class="table__header-cell table__header-cell--number">"Jumlah Produk"</th>
                            <th class="table__header-cell table__header-cell--actions">"Aksi"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let filter = list.filter.get();
                            list.visible().into_iter().map(|row| {
                                let dto = CategoryDto::from(&row);
                                let target = DeleteTarget::new(row.id, row.name.clone());
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{highlight_matches(&row.name, &filter)}</td>
                                        <td class="table__cell">
                                            {highlight_matches(row.description.as_deref().unwrap_or("-"), &filter)}
                                        </td>
                                        <td class="table__cell table__cell--number">
                                            {row.products_count.map(|n| n.to_string()).unwrap_or_else(|| "-".to_string())}
                                        </td>
                                        <td class="table__cell table__cell--actions">
                                            <button class="button button--icon" title="Edit"
                                                on:click=move |_| editing.set(Some(dto.clone()))>
                                                {icon("edit")}
                                            </button>
                                            <Can permission="delete-category">
                                                <button class="button button--icon button--danger" title="Hapus"
                                                    on:click={
                                                        let target = target.clone();
                                                        move |_| deleting.set(Some(target.clone()))
                                                    }>
                                                    {icon("delete")}
                                                </button>
                                            </Can>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                    </tbody>
                </table>
                <Show when=move || !list.loading.get() && list.visible().is_empty()>
                    <div class="table__empty">"Tidak ada kategori"</div>
                </Show>
            </div>

            <PaginationControls
                meta=list.meta
                on_page_change=Callback::new(move |p| list.set_page(p))
                on_page_size_change=Callback::new(move |s| list.set_per_page(s))
            />

            {move || editing.get().map(|initial| view! {
                <CategoryDetails initial=initial on_saved=on_saved on_cancel=on_cancel />
            })}

            <DeleteConfirm target=deleting entity="kategori" resource=api::RESOURCE on_done=on_deleted />
        </div>
    }
}
