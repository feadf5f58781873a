//! Переход к странице заказа.
//!
//! Адресация через query-строку, как и весь остальной роутинг приложения.

use contracts::checkout::OrderId;
use web_sys::window;

/// URL страницы заказа
pub fn order_detail_url(order_id: &OrderId) -> String {
    format!("?order={}", order_id.as_string())
}

/// Перейти к странице заказа. Полная навигация, а не replace_state:
/// состояние оформления после создания заказа больше не нужно.
pub fn go_to_order(order_id: &OrderId) {
    if let Some(w) = window() {
        let _ = w.location().set_href(&order_detail_url(order_id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_detail_url() {
        let id = OrderId::new_v4();
        assert_eq!(order_detail_url(&id), format!("?order={}", id.as_string()));
    }
}
