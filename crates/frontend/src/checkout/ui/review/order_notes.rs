use crate::shared::theme::use_checkout_theme;
use leptos::prelude::*;

/// Примечания к заказу: управляемый textarea.
/// Каждое событие ввода отдаёт полный текущий текст наверх,
/// без буферизации и валидации.
#[component]
pub fn OrderNotes(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    let theme = use_checkout_theme();

    view! {
        <div style=theme.section>
            <h3 style=theme.section_title>"Order notes"</h3>
            <div style=theme.form_group>
                <textarea
                    style=theme.input
                    rows=3
                    placeholder="Delivery instructions, gift message..."
                    prop:value=move || value.get()
                    on:input=move |ev| on_change.run(event_target_value(&ev))
                ></textarea>
            </div>
        </div>
    }
}
