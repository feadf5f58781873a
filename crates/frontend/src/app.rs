use crate::routes::routes::AppRoutes;
use crate::shared::theme::CheckoutTheme;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Тема задаётся один раз на корне; листовые компоненты читают её из
    // контекста вместо протаскивания style-объектов через параметры
    provide_context(CheckoutTheme::default());

    view! {
        <AppRoutes />
    }
}
