//! Модальное окно подтверждения заказа с автопереходом

use crate::checkout::countdown::{CountdownTick, RedirectCountdown};
use crate::shared::format::{format_currency, format_long_date};
use crate::shared::modal_frame::ModalFrame;
use crate::shared::navigation;
use crate::shared::theme::use_checkout_theme;
use contracts::checkout::Order;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

/// Сколько секунд подтверждение висит на экране до автоперехода к заказу
const REDIRECT_SECONDS: u8 = 3;

/// Подтверждение созданного заказа. Через три секунды уводит на страницу
/// заказа само; клик по кнопке уводит сразу. Переход в любом случае
/// выполняется не более одного раза — право на него забирает либо таймер,
/// либо клик, см. [`RedirectCountdown`].
#[component]
pub fn OrderConfirmationModal(order: Order, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let theme = use_checkout_theme();

    let seconds_left = RwSignal::new(REDIRECT_SECONDS);
    let countdown = StoredValue::new(RedirectCountdown::new(REDIRECT_SECONDS));
    let cancelled = StoredValue::new(false);

    let order_id = order.id;

    // Незакрытый таймер тикал бы по уже разобранному дереву
    on_cleanup(move || cancelled.set_value(true));

    spawn_local(async move {
        loop {
            TimeoutFuture::new(1_000).await;
            // После размонтирования StoredValue уже недоступен — это
            // равносильно отмене
            if cancelled.try_get_value().unwrap_or(true) {
                break;
            }
            match countdown.try_update_value(|c| c.tick()) {
                Some(CountdownTick::Continue(left)) => seconds_left.set(left),
                Some(CountdownTick::Expired { should_navigate }) => {
                    cancelled.set_value(true);
                    if should_navigate {
                        navigation::go_to_order(&order_id);
                        on_close.run(());
                    }
                    break;
                }
                None => break,
            }
        }
    });

    let view_order_now = move |_| {
        // Клик гасит таймер и забирает единственное право на переход
        let first = countdown
            .try_update_value(|c| c.take_manual_navigation())
            .unwrap_or(false);
        if first {
            cancelled.set_value(true);
            navigation::go_to_order(&order_id);
            on_close.run(());
        }
    };

    view! {
        <ModalFrame on_close=on_close close_on_overlay=false>
            <h2 style=theme.section_title>"Order confirmed"</h2>
            <p>
                "Order " <strong>{order.order_number.clone()}</strong>
                " has been placed."
            </p>
            <div style=theme.row>
                <span style=theme.label>"Items"</span>
                <span style=theme.value>{order.item_count}</span>
            </div>
            <div style=theme.row>
                <span style=theme.label>"Total"</span>
                <span style=theme.value>{format_currency(order.total)}</span>
            </div>
            <div style=theme.row>
                <span style=theme.label>"Placed on"</span>
                <span style=theme.value>{format_long_date(&order.created_at)}</span>
            </div>
            <p style=theme.muted>
                {move || format!("Taking you to your order in {}...", seconds_left.get())}
            </p>
            <Button appearance=ButtonAppearance::Primary on_click=view_order_now>
                "View order now"
            </Button>
        </ModalFrame>
    }
}
