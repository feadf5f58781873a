use serde::{Deserialize, Serialize};

/// Виды способов оплаты
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentKind {
    CreditCard,
    DebitCard,
    BankTransfer,
    DigitalWallet,
    Cash,
    Crypto,
}

impl PaymentKind {
    /// Получить код способа оплаты
    pub fn code(&self) -> &'static str {
        match self {
            PaymentKind::CreditCard => "credit-card",
            PaymentKind::DebitCard => "debit-card",
            PaymentKind::BankTransfer => "bank-transfer",
            PaymentKind::DigitalWallet => "digital-wallet",
            PaymentKind::Cash => "cash",
            PaymentKind::Crypto => "crypto",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentKind::CreditCard => "Credit card",
            PaymentKind::DebitCard => "Debit card",
            PaymentKind::BankTransfer => "Bank transfer",
            PaymentKind::DigitalWallet => "Digital wallet",
            PaymentKind::Cash => "Cash on delivery",
            PaymentKind::Crypto => "Cryptocurrency",
        }
    }

    /// Получить все виды способов оплаты
    pub fn all() -> Vec<PaymentKind> {
        vec![
            PaymentKind::CreditCard,
            PaymentKind::DebitCard,
            PaymentKind::BankTransfer,
            PaymentKind::DigitalWallet,
            PaymentKind::Cash,
            PaymentKind::Crypto,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "credit-card" => Some(PaymentKind::CreditCard),
            "debit-card" => Some(PaymentKind::DebitCard),
            "bank-transfer" => Some(PaymentKind::BankTransfer),
            "digital-wallet" => Some(PaymentKind::DigitalWallet),
            "cash" => Some(PaymentKind::Cash),
            "crypto" => Some(PaymentKind::Crypto),
            _ => None,
        }
    }

    /// Карточный ли это способ (кредитная или дебетовая карта)
    pub fn is_card(&self) -> bool {
        matches!(self, PaymentKind::CreditCard | PaymentKind::DebitCard)
    }
}

impl ToString for PaymentKind {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for kind in PaymentKind::all() {
            assert_eq!(PaymentKind::from_code(kind.code()), Some(kind));
        }
    }

    #[test]
    fn test_from_code_unknown() {
        assert_eq!(PaymentKind::from_code("store-credit"), None);
        assert_eq!(PaymentKind::from_code(""), None);
    }

    #[test]
    fn test_is_card() {
        assert!(PaymentKind::CreditCard.is_card());
        assert!(PaymentKind::DebitCard.is_card());
        assert!(!PaymentKind::BankTransfer.is_card());
        assert!(!PaymentKind::Cash.is_card());
    }
}
