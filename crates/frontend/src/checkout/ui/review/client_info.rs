use crate::shared::theme::use_checkout_theme;
use contracts::checkout::ClientProfile;
use leptos::prelude::*;

const NOT_AVAILABLE: &str = "Not available";

/// Контактная информация покупателя.
/// Имя, телефон и email деградируют до заглушки независимо друг от друга.
#[component]
pub fn ClientInfo(client: ClientProfile) -> impl IntoView {
    let theme = use_checkout_theme();

    let full_name = client.full_name().unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let phone = client.phone().unwrap_or_else(|| NOT_AVAILABLE.to_string());
    let email = client.email().unwrap_or_else(|| NOT_AVAILABLE.to_string());

    view! {
        <div style=theme.section>
            <h3 style=theme.section_title>"Client information"</h3>
            <div style=theme.row>
                <span style=theme.label>"Name"</span>
                <span style=theme.value>{full_name}</span>
            </div>
            <div style=theme.row>
                <span style=theme.label>"Phone"</span>
                <span style=theme.value>{phone}</span>
            </div>
            <div style=theme.row>
                <span style=theme.label>"Email"</span>
                <span style=theme.value>{email}</span>
            </div>
        </div>
    }
}
