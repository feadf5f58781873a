use crate::checkout::page::CheckoutPage;
use crate::checkout::ui::order_detail::OrderDetailPage;
use contracts::checkout::OrderId;
use leptos::prelude::*;
use serde::Deserialize;
// Маршрутизация по query-строке, без Router-компонентов

/// Параметры query-строки, которые понимает приложение
#[derive(Debug, Default, Deserialize)]
struct UrlQuery {
    #[serde(default)]
    order: Option<String>,
}

fn current_query() -> UrlQuery {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    // ?order=<id> показывает страницу заказа, всё остальное — оформление
    let order_id = current_query()
        .order
        .as_deref()
        .and_then(|raw| OrderId::from_string(raw).ok());

    match order_id {
        Some(id) => view! { <OrderDetailPage order_id=id /> }.into_any(),
        None => view! { <CheckoutPage /> }.into_any(),
    }
}
