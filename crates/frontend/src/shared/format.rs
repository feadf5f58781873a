//! Утилиты форматирования для checkout-а

use chrono::{DateTime, Utc};

/// Форматирует денежное значение: два знака после запятой, разделитель
/// тысяч и префикс валюты
///
/// # Примеры
///
/// ```
/// use frontend::shared::format::format_currency;
/// assert_eq!(format_currency(1234.5), "$1,234.50");
/// ```
pub fn format_currency(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let parts: Vec<&str> = formatted.split('.').collect();
    let integer_part = parts[0];
    let decimal_part = parts.get(1).copied().unwrap_or("00");

    // Вставляем запятые каждые 3 цифры с конца целой части
    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }
    let grouped: String = result.chars().rev().collect();

    if value < 0.0 {
        format!("-${}.{}", grouped, decimal_part)
    } else {
        format!("${}.{}", grouped, decimal_part)
    }
}

/// Строка стоимости доставки: при нуле — "Free", а не "$0.00"
pub fn shipping_label(cost: f64) -> String {
    if cost == 0.0 {
        "Free".to_string()
    } else {
        format_currency(cost)
    }
}

/// Длинный формат даты
///
/// # Примеры
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use frontend::shared::format::format_long_date;
/// let date = Utc.with_ymd_and_hms(2024, 3, 5, 14, 2, 26).unwrap();
/// assert_eq!(format_long_date(&date), "March 5, 2024");
/// ```
pub fn format_long_date(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Маскирует номер карты, оставляя последние 4 символа.
/// Значения короче 4 символов дают пустую строку, а не панику.
pub fn mask_card_number(card_number: &str) -> String {
    let chars: Vec<char> = card_number.chars().collect();
    if chars.len() < 4 {
        return String::new();
    }
    let last4: String = chars[chars.len() - 4..].iter().collect();
    format!("**** **** **** {}", last4)
}

/// Сокращает адрес криптокошелька: первые 8 + "..." + последние 8 символов.
/// Адреса короче 16 символов показываются как есть.
pub fn abbreviate_wallet_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() < 16 {
        return address.to_string();
    }
    let head: String = chars[..8].iter().collect();
    let tail: String = chars[chars.len() - 8..].iter().collect();
    format!("{}...{}", head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(1234.56), "$1,234.56");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(5.0), "$5.00");
        assert_eq!(format_currency(-1234.56), "-$1,234.56");
    }

    #[test]
    fn test_shipping_label() {
        assert_eq!(shipping_label(0.0), "Free");
        assert_eq!(shipping_label(4.99), "$4.99");
    }

    #[test]
    fn test_format_long_date() {
        let date = Utc.with_ymd_and_hms(2024, 12, 31, 10, 0, 0).unwrap();
        assert_eq!(format_long_date(&date), "December 31, 2024");
    }

    #[test]
    fn test_mask_card_number() {
        assert_eq!(mask_card_number("4111111111111111"), "**** **** **** 1111");
        // Усечённый ввод маскируется без паники
        assert_eq!(mask_card_number("111"), "");
        assert_eq!(mask_card_number(""), "");
        assert_eq!(mask_card_number("1234"), "**** **** **** 1234");
    }

    #[test]
    fn test_abbreviate_wallet_address() {
        assert_eq!(
            abbreviate_wallet_address("1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa"),
            "1A1zP1eP...v7DivfNa"
        );
        // Короткий адрес показывается без сокращения
        assert_eq!(abbreviate_wallet_address("1A1zP1eP"), "1A1zP1eP");
        assert_eq!(abbreviate_wallet_address("0123456789abcdef").len(), 16 + 3);
    }
}
