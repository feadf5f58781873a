use crate::shared::format::{format_currency, shipping_label};
use crate::shared::theme::use_checkout_theme;
use contracts::checkout::CartItem;
use leptos::prelude::*;

/// Сводка заказа: строки корзины и итоги.
/// Все числа приходят от вызывающего и отображаются как есть;
/// итог здесь не пересчитывается.
#[component]
pub fn OrderSummary(
    items: Vec<CartItem>,
    subtotal: f64,
    shipping: f64,
    total: f64,
) -> impl IntoView {
    let theme = use_checkout_theme();

    view! {
        <div style=theme.section>
            <h3 style=theme.section_title>"Order summary"</h3>
            {items
                .into_iter()
                .map(|item| {
                    let line_total = item.line_total();
                    view! {
                        <div style=theme.row>
                            <span style=theme.value>{item.product_name.clone()}</span>
                            <span style=theme.muted>{format!("x{}", item.quantity)}</span>
                            <span style=theme.value>{format_currency(line_total)}</span>
                        </div>
                    }
                })
                .collect_view()}
            <div style=theme.row>
                <span style=theme.label>"Subtotal"</span>
                <span style=theme.value>{format_currency(subtotal)}</span>
            </div>
            <div style=theme.row>
                <span style=theme.label>"Shipping"</span>
                <span style=theme.value>{shipping_label(shipping)}</span>
            </div>
            <div style=theme.row>
                <span style=theme.label>"Total"</span>
                <strong style=theme.value>{format_currency(total)}</strong>
            </div>
        </div>
    }
}
