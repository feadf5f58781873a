//! Первый шаг: выбор адреса доставки

use crate::shared::theme::use_checkout_theme;
use contracts::checkout::{Address, AddressId};
use leptos::prelude::*;
use thaw::*;

/// Список адресов с выбором по клику. Дальше пускаем только с выбранным
/// адресом.
#[component]
pub fn AddressStep(
    #[prop(into)] addresses: Signal<Vec<Address>>,
    #[prop(into)] selected_id: Signal<Option<AddressId>>,
    #[prop(into)] on_select: Callback<AddressId>,
    #[prop(into)] on_continue: Callback<()>,
) -> impl IntoView {
    let theme = use_checkout_theme();

    view! {
        <div style=theme.section>
            <h3 style=theme.section_title>"Shipping address"</h3>
            {move || {
                let selected = selected_id.get();
                let items = addresses.get();
                if items.is_empty() {
                    return view! {
                        <div style=theme.muted>"No saved addresses"</div>
                    }
                    .into_any();
                }
                items
                    .into_iter()
                    .map(|address| {
                        let id = address.id;
                        let style = if selected == Some(id) {
                            theme.selectable_card_active
                        } else {
                            theme.selectable_card
                        };
                        view! {
                            <div style=style on:click=move |_| on_select.run(id)>
                                <div style=theme.value>{address.street.clone()}</div>
                                <div style=theme.muted>
                                    {format!(
                                        "{}, {} {}",
                                        address.city,
                                        address.state,
                                        address.postal_code,
                                    )}
                                </div>
                                <div style=theme.muted>{address.country.clone()}</div>
                                {address
                                    .is_primary
                                    .then(|| view! { <span style=theme.badge>"Primary"</span> })}
                            </div>
                        }
                    })
                    .collect_view()
                    .into_any()
            }}
            <div style=theme.actions>
                <span></span>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || selected_id.get().is_none())
                    on_click=move |_| on_continue.run(())
                >
                    "Continue to payment"
                </Button>
            </div>
        </div>
    }
}
