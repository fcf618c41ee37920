use crate::domain::a003_product::api;
use crate::domain::a003_product::ui::details::ProductDetails;
use crate::shared::components::table::format_number_with_decimals;
use crate::shared::components::{
    DeleteConfirm, DeleteTarget, ErrorBanner, PageHeader, PaginationControls, TableCellMoney,
};
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use crate::system::auth::guard::Can;
use contracts::domain::a003_product::{Product, ProductForm};
use leptos::prelude::*;

fn stock_label(p: &Product) -> String {
    match (p.stock, p.unit.as_deref()) {
        (Some(stock), Some(unit)) => format!("{} {}", stock, unit),
        (Some(stock), None) => stock.to_string(),
        (None, _) => "-".to_string(),
    }
}

#[component]
pub fn ProductList() -> impl IntoView {
    let list = ListState::<Product>::new(api::fetch_page);
    let editing = RwSignal::new(None::<ProductForm>);
    let deleting = RwSignal::new(None::<DeleteTarget>);

    let on_saved = Callback::new(move |_| {
        editing.set(None);
        list.reload();
    });
    let on_cancel = Callback::new(move |_| editing.set(None));
    let on_deleted = Callback::new(move |_| list.reload());

    view! {
        <div class="page">
            <PageHeader title="Produk" subtitle="Daftar obat dan barang".to_string()>
                <SearchInput
                    value=list.filter
                    on_input=Callback::new(move |v| list.filter.set(v))
                    on_change=Callback::new(move |v| list.set_search(v))
                    placeholder="Cari produk atau kategori..."
                />
                <button class="button button--primary" on:click=move |_| editing.set(Some(ProductForm::new()))>
                    {icon("plus")}
                    "Tambah Produk"
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
                            <th class="table__header-cell">"Kategori"</th>
                            <th class="table__header-cell table__header-cell--number">"Harga Beli"</th>
                            <th class="table__header-cell table__header-cell--number">"Margin"</th>
                            <th class="table__header-cell table__header-cell--number">"Harga Jual"</th>
                            <th class="table__header-cell table__header-cell--number">"Stok"</th>
                            <th class="table__header-cell table__header-cell--actions">"Aksi"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let filter = list.filter.get();
                            list.visible().into_iter().map(|row| {
                                let form = ProductForm::from_product(&row);
                                let target = DeleteTarget::new(row.id, row.name.clone());
                                let stock = stock_label(&row);
                                let purchase_price = row.purchase_price;
                                let sale_price = row.sale_price;
                                let margin = format!("{}%", format_number_with_decimals(row.margin_percent, 0));
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{highlight_matches(&row.name, &filter)}</td>
                                        <td class="table__cell">{highlight_matches(row.category_name(), &filter)}</td>
                                        <TableCellMoney value=Signal::derive(move || Some(purchase_price)) />
                                        <td class="table__cell table__cell--number">{margin}</td>
                                        <TableCellMoney value=Signal::derive(move || Some(sale_price)) bold=true />
                                        <td class="table__cell table__cell--number">{stock}</td>
                                        <td class="table__cell table__cell--actions">
                                            <button class="button button--icon" title="Edit"
                                                on:click=move |_| editing.set(Some(form.clone()))>
                                                {icon("edit")}
                                            </button>
                                            <Can permission="delete-product">
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
                    <div class="table__empty">"Tidak ada produk"</div>
                </Show>
            </div>

            <PaginationControls
                meta=list.meta
                on_page_change=Callback::new(move |p| list.set_page(p))
                on_page_size_change=Callback::new(move |s| list.set_per_page(s))
            />

            {move || editing.get().map(|initial| view! {
                <ProductDetails initial=initial on_saved=on_saved on_cancel=on_cancel />
            })}

            <DeleteConfirm target=deleting entity="produk" resource=api::RESOURCE on_done=on_deleted />
        </div>
    }
}
