use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Строка корзины, отображаемая в сводке заказа
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub id: Uuid,
    pub product_name: String,
    /// Количество неотрицательно по построению типа
    pub quantity: u32,
    pub unit_price: f64,
}

impl CartItem {
    /// Сумма по строке: количество × цена за единицу
    pub fn line_total(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

/// Сумма всех строк корзины
pub fn cart_subtotal(items: &[CartItem]) -> f64 {
    items.iter().map(CartItem::line_total).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, quantity: u32, unit_price: f64) -> CartItem {
        CartItem {
            id: Uuid::new_v4(),
            product_name: name.to_string(),
            quantity,
            unit_price,
        }
    }

    #[test]
    fn test_line_total() {
        assert_eq!(item("Mug", 3, 12.5).line_total(), 37.5);
        assert_eq!(item("Sticker", 1, 0.99).line_total(), 0.99);
    }

    #[test]
    fn test_line_total_zero_quantity() {
        assert_eq!(item("Mug", 0, 12.5).line_total(), 0.0);
    }

    #[test]
    fn test_cart_subtotal() {
        let items = vec![item("Mug", 2, 10.0), item("Poster", 1, 5.5)];
        assert_eq!(cart_subtotal(&items), 25.5);
        assert_eq!(cart_subtotal(&[]), 0.0);
    }
}
