//! Table cell for Rupiah amounts
//!
//! ```rust,ignore
//! <TableCellMoney value=Signal::derive(move || Some(sale.total)) />
//! <TableCellMoney value=total bold=true />
//! ```

use super::number_format::format_rupiah;
use leptos::prelude::*;
use thaw::*;

/// Right-aligned Rupiah amount; `None` renders as a dash
#[component]
pub fn TableCellMoney(
    #[prop(into)] value: Signal<Option<f64>>,
    #[prop(optional, default = false)] bold: bool,
) -> impl IntoView {
    let formatted_text = move || match value.get() {
        Some(v) => format_rupiah(v),
        None => "—".to_string(),
    };

    let cell_style = move || if bold { "font-weight: 600" } else { "" };

    view! {
        <TableCell class="table__cell table__cell--money text-right">
            <span style=cell_style>
                {formatted_text}
            </span>
        </TableCell>
    }
}
