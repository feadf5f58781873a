//! Третий шаг: проверка заказа перед оформлением

pub mod client_info;
pub mod order_notes;
pub mod order_summary;
pub mod payment_method_info;
pub mod shipping_address;

use crate::shared::format::format_currency;
use crate::shared::theme::use_checkout_theme;
use client_info::ClientInfo;
use contracts::checkout::{Address, AddressId, CartItem, ClientProfile, PaymentData, PaymentMethod};
use leptos::prelude::*;
use order_notes::OrderNotes;
use order_summary::OrderSummary;
use payment_method_info::PaymentMethodInfo;
use shipping_address::ShippingAddress;
use thaw::*;

/// Проверка заказа: пять секций в фиксированном порядке и навигация.
/// Собственного состояния нет — только композиция и проброс callbacks.
#[component]
pub fn Step3Review(
    client: ClientProfile,
    items: Vec<CartItem>,
    subtotal: f64,
    shipping: f64,
    total: f64,
    addresses: Vec<Address>,
    selected_address_id: Option<AddressId>,
    method: Option<PaymentMethod>,
    payment_data: Option<PaymentData>,
    #[prop(into)] notes: Signal<String>,
    #[prop(into)] on_notes_change: Callback<String>,
    #[prop(into)] on_back: Callback<()>,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    let theme = use_checkout_theme();

    let submit_label = move || {
        if loading.get() {
            "Processing...".to_string()
        } else {
            format!("Place order ({})", format_currency(total))
        }
    };

    view! {
        <div>
            <ClientInfo client=client />
            <OrderSummary items=items subtotal=subtotal shipping=shipping total=total />
            <ShippingAddress addresses=addresses selected_id=selected_address_id />
            <PaymentMethodInfo method=method data=payment_data />
            <OrderNotes value=notes on_change=on_notes_change />

            <div style=theme.actions>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_back.run(())
                >
                    "Back"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || loading.get())
                    on_click=move |_| on_submit.run(())
                >
                    {submit_label}
                </Button>
            </div>
        </div>
    }
}
