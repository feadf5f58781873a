use crate::shared::theme::use_checkout_theme;
use contracts::checkout::{find_selected, Address, AddressId};
use leptos::prelude::*;

/// Выбранный адрес доставки. Поиск по id, первое совпадение;
/// без совпадения (или без выбора) — предложение выбрать адрес.
#[component]
pub fn ShippingAddress(
    addresses: Vec<Address>,
    selected_id: Option<AddressId>,
) -> impl IntoView {
    let theme = use_checkout_theme();

    let body = match find_selected(&addresses, selected_id.as_ref()) {
        Some(address) => view! {
            <div>
                <div style=theme.value>{address.street.clone()}</div>
                <div style=theme.muted>
                    {format!("{}, {} {}", address.city, address.state, address.postal_code)}
                </div>
                <div style=theme.muted>{address.country.clone()}</div>
                {address
                    .is_primary
                    .then(|| view! { <span style=theme.badge>"Primary"</span> })}
            </div>
        }
        .into_any(),
        None => view! { <div style=theme.warning>"Please select an address"</div> }.into_any(),
    };

    view! {
        <div style=theme.section>
            <h3 style=theme.section_title>"Shipping address"</h3>
            {body}
        </div>
    }
}
