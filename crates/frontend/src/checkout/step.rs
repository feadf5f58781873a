//! Шаг оформления заказа и его синхронизация с query-строкой

use std::collections::HashMap;
use web_sys::window;

/// Шаги оформления, в порядке прохождения
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckoutStep {
    #[default]
    Address,
    Payment,
    Review,
}

impl CheckoutStep {
    /// Код шага для query-строки
    pub fn code(&self) -> &'static str {
        match self {
            CheckoutStep::Address => "address",
            CheckoutStep::Payment => "payment",
            CheckoutStep::Review => "review",
        }
    }

    /// Заголовок шага
    pub fn title(&self) -> &'static str {
        match self {
            CheckoutStep::Address => "Shipping address",
            CheckoutStep::Payment => "Payment method",
            CheckoutStep::Review => "Review order",
        }
    }

    /// Порядковый номер шага (с единицы)
    pub fn number(&self) -> u8 {
        match self {
            CheckoutStep::Address => 1,
            CheckoutStep::Payment => 2,
            CheckoutStep::Review => 3,
        }
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "address" => Some(CheckoutStep::Address),
            "payment" => Some(CheckoutStep::Payment),
            "review" => Some(CheckoutStep::Review),
            _ => None,
        }
    }
}

/// Прочитать шаг из query-строки (?step=...)
pub fn step_from_url() -> Option<CheckoutStep> {
    let search = window().and_then(|w| w.location().search().ok())?;
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).ok()?;
    params
        .get("step")
        .and_then(|code| CheckoutStep::from_code(code))
}

/// Отразить шаг в query-строке, не добавляя записей в историю переходов
pub fn sync_step_to_url(step: CheckoutStep) {
    let query = serde_qs::to_string(&HashMap::from([(
        "step".to_string(),
        step.code().to_string(),
    )]))
    .unwrap_or_default();
    let new_url = format!("?{}", query);

    let current = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    if current == new_url {
        return;
    }

    if let Some(w) = window() {
        if let Ok(history) = w.history() {
            let _ = history.replace_state_with_url(
                &wasm_bindgen::JsValue::NULL,
                "",
                Some(&new_url),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for step in [
            CheckoutStep::Address,
            CheckoutStep::Payment,
            CheckoutStep::Review,
        ] {
            assert_eq!(CheckoutStep::from_code(step.code()), Some(step));
        }
        assert_eq!(CheckoutStep::from_code("confirm"), None);
    }

    #[test]
    fn test_step_order() {
        assert!(CheckoutStep::Address.number() < CheckoutStep::Payment.number());
        assert!(CheckoutStep::Payment.number() < CheckoutStep::Review.number());
    }
}
