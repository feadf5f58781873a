//! Тема оформления checkout-а.
//!
//! Один объект со стилевыми фрагментами предоставляется на корне приложения
//! через контекст; листовые компоненты читают его через `use_checkout_theme`
//! вместо получения style-объектов параметрами.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutTheme {
    pub page: &'static str,
    pub page_title: &'static str,
    pub section: &'static str,
    pub section_title: &'static str,
    pub row: &'static str,
    pub label: &'static str,
    pub value: &'static str,
    pub muted: &'static str,
    pub form_group: &'static str,
    pub input: &'static str,
    pub selectable_card: &'static str,
    pub selectable_card_active: &'static str,
    pub badge: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
    pub actions: &'static str,
}

impl Default for CheckoutTheme {
    fn default() -> Self {
        Self {
            page: "max-width: 720px; margin: 0 auto; padding: var(--spacing-lg);",
            page_title: "margin: 0 0 var(--spacing-lg) 0; font-size: 1.4rem;",
            section: "background: var(--color-surface); border: 1px solid var(--color-border); border-radius: var(--radius-sm); padding: var(--spacing-lg); margin-bottom: var(--spacing-lg);",
            section_title: "margin: 0 0 var(--spacing-md) 0; font-size: 1.05rem;",
            row: "display: flex; justify-content: space-between; gap: var(--spacing-md); padding: var(--spacing-xs) 0;",
            label: "color: var(--color-text-secondary);",
            value: "color: var(--color-text);",
            muted: "color: var(--color-text-secondary); font-size: 0.9rem;",
            form_group: "display: flex; flex-direction: column; gap: var(--spacing-xs); margin-bottom: var(--spacing-md);",
            input: "padding: var(--spacing-sm); border: 1px solid var(--color-border); border-radius: var(--radius-sm); font: inherit; width: 100%; box-sizing: border-box;",
            selectable_card: "border: 1px solid var(--color-border); border-radius: var(--radius-sm); padding: var(--spacing-md); margin-bottom: var(--spacing-sm); cursor: pointer;",
            selectable_card_active: "border: 2px solid var(--color-primary); border-radius: var(--radius-sm); padding: var(--spacing-md); margin-bottom: var(--spacing-sm); cursor: pointer; background: var(--color-primary-50);",
            badge: "display: inline-block; padding: 2px 8px; border-radius: 999px; background: var(--color-primary-50); color: var(--color-primary); font-size: 0.75rem; margin-top: var(--spacing-xs);",
            warning: "padding: var(--spacing-md); background: var(--color-warning-50); border: 1px solid var(--color-warning-100); border-radius: var(--radius-sm); color: var(--color-warning);",
            error: "padding: var(--spacing-md); background: var(--color-error-50); border: 1px solid var(--color-error-100); border-radius: var(--radius-sm); color: var(--color-error); margin-bottom: var(--spacing-lg);",
            actions: "display: flex; justify-content: space-between; gap: var(--spacing-md); margin-top: var(--spacing-lg);",
        }
    }
}

/// Прочитать тему из контекста
pub fn use_checkout_theme() -> CheckoutTheme {
    use_context::<CheckoutTheme>().expect("CheckoutTheme not provided in context")
}
