//! Sale detail dialog (read-only)

use crate::domain::a005_sale::api;
use crate::shared::components::table::format_rupiah;
use crate::shared::components::ErrorBanner;
use crate::shared::date_utils::format_datetime;
use crate::shared::modal::Modal;
use contracts::domain::a005_sale::Sale;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn SaleDetails(
    /// Row from the list; shown until the full record arrives
    sale: Sale,
    on_close: Callback<()>,
) -> impl IntoView {
    let id = sale.id;
    let title = format!("Penjualan {}", sale.invoice_number);
    let current = RwSignal::new(sale);
    let error = RwSignal::new(None::<String>);

    spawn_local(async move {
        match api::fetch_by_id(id).await {
            Ok(full) => current.set(full),
            Err(e) => error.set(Some(format!("Gagal memuat detail: {}", e))),
        }
    });

    view! {
        <Modal title=title on_close=on_close>
            <ErrorBanner message=error />
            {move || {
                let sale = current.get();
                let mismatch = !sale.items.is_empty() && (sale.items_total() - sale.total).abs() >= 0.5;
                view! {
                    <dl class="details-summary">
                        <dt>"Tanggal"</dt><dd>{format_datetime(&sale.created_at)}</dd>
                        <dt>"Kasir"</dt><dd>{sale.cashier_name().to_string()}</dd>
                    </dl>
                    <table class="table__data">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Produk"</th>
                                <th class="table__header-cell table__header-cell--number">"Qty"</th>
                                <th class="table__header-cell table__header-cell--number">"Harga"</th>
                                <th class="table__header-cell table__header-cell--number">"Subtotal"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {sale.items.iter().map(|item| view! {
                                <tr class="table__row">
                                    <td class="table__cell">{item.product_name.clone()}</td>
                                    <td class="table__cell table__cell--number">{item.quantity}</td>
                                    <td class="table__cell table__cell--number">{format_rupiah(item.price)}</td>
                                    <td class="table__cell table__cell--number">{format_rupiah(item.subtotal)}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                    <dl class="details-summary details-summary--totals">
                        <dt>"Total"</dt><dd>{format_rupiah(sale.total)}</dd>
                        <dt>"Dibayar"</dt><dd>{format_rupiah(sale.paid)}</dd>
                        <dt>"Kembalian"</dt><dd>{format_rupiah(sale.change)}</dd>
                    </dl>
                    {mismatch.then(|| view! {
                        <div class="warning-box">"Jumlah subtotal item tidak sama dengan total penjualan."</div>
                    })}
                }
            }}
        </Modal>
    }
}
