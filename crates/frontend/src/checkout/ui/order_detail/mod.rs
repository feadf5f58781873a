//! Страница заказа: посадочная после оформления

use crate::checkout::api;
use crate::shared::format::{format_currency, format_long_date};
use crate::shared::theme::use_checkout_theme;
use contracts::checkout::{Order, OrderId};
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn OrderDetailPage(order_id: OrderId) -> impl IntoView {
    let theme = use_checkout_theme();

    let (order, set_order) = signal(None::<Order>);
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(true);

    spawn_local(async move {
        match api::fetch_order(&order_id).await {
            Ok(data) => {
                set_order.set(Some(data));
                set_loading.set(false);
            }
            Err(e) => {
                set_error.set(Some(e));
                set_loading.set(false);
            }
        }
    });

    view! {
        <div style=theme.page>
            <h2 style=theme.page_title>"Your order"</h2>
            {move || {
                if loading.get() {
                    view! {
                        <Flex gap=FlexGap::Small style="align-items: center; justify-content: center; padding: var(--spacing-4xl);">
                            <Spinner />
                            <span>"Loading..."</span>
                        </Flex>
                    }
                    .into_any()
                } else if let Some(err) = error.get() {
                    view! {
                        <div style=theme.error>
                            <strong>"Error: "</strong>
                            {err}
                        </div>
                    }
                    .into_any()
                } else if let Some(order) = order.get() {
                    view! {
                        <div style=theme.section>
                            <h3 style=theme.section_title>
                                {format!("Order {}", order.order_number)}
                            </h3>
                            <div style=theme.row>
                                <span style=theme.label>"Placed on"</span>
                                <span style=theme.value>
                                    {format_long_date(&order.created_at)}
                                </span>
                            </div>
                            <div style=theme.row>
                                <span style=theme.label>"Items"</span>
                                <span style=theme.value>{order.item_count}</span>
                            </div>
                            <div style=theme.row>
                                <span style=theme.label>"Total"</span>
                                <strong style=theme.value>{format_currency(order.total)}</strong>
                            </div>
                        </div>
                    }
                    .into_any()
                } else {
                    view! { <div style=theme.muted>"No data"</div> }.into_any()
                }
            }}
        </div>
    }
}
