use crate::enums::PaymentKind;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaymentMethodId(pub Uuid);

impl PaymentMethodId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(PaymentMethodId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// PaymentMethod
// ============================================================================
/// Способ оплаты, доступный покупателю на втором шаге
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: PaymentMethodId,
    pub display_name: String,
    pub kind: PaymentKind,

    #[serde(rename = "isSaved", default)]
    pub is_saved: bool,
    #[serde(rename = "isVerified", default)]
    pub is_verified: bool,
}

// ============================================================================
// PaymentData
// ============================================================================
/// Данные, вводимые для выбранного способа оплаты.
/// Вариант жёстко соответствует виду оплаты, поэтому "неизвестный тип"
/// непредставим; единственный остаточный случай во время выполнения —
/// рассинхронизация варианта с выбранным способом, см. `matches_kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PaymentData {
    Card {
        card_number: String,
        expiry: String,
        cvv: String,
        holder_name: String,
    },
    BankTransfer {
        transaction_no: String,
    },
    DigitalWallet {
        email: String,
    },
    Cash,
    Crypto {
        wallet_address: String,
    },
}

impl PaymentData {
    /// Пустая заготовка данных для выбранного вида оплаты
    pub fn empty_for(kind: PaymentKind) -> Self {
        match kind {
            PaymentKind::CreditCard | PaymentKind::DebitCard => PaymentData::Card {
                card_number: String::new(),
                expiry: String::new(),
                cvv: String::new(),
                holder_name: String::new(),
            },
            PaymentKind::BankTransfer => PaymentData::BankTransfer {
                transaction_no: String::new(),
            },
            PaymentKind::DigitalWallet => PaymentData::DigitalWallet {
                email: String::new(),
            },
            PaymentKind::Cash => PaymentData::Cash,
            PaymentKind::Crypto => PaymentData::Crypto {
                wallet_address: String::new(),
            },
        }
    }

    /// Согласуются ли данные с видом способа оплаты.
    /// Карточные данные подходят и кредитной, и дебетовой карте.
    pub fn matches_kind(&self, kind: PaymentKind) -> bool {
        match self {
            PaymentData::Card { .. } => kind.is_card(),
            PaymentData::BankTransfer { .. } => kind == PaymentKind::BankTransfer,
            PaymentData::DigitalWallet { .. } => kind == PaymentKind::DigitalWallet,
            PaymentData::Cash => kind == PaymentKind::Cash,
            PaymentData::Crypto { .. } => kind == PaymentKind::Crypto,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_for_matches_every_kind() {
        for kind in PaymentKind::all() {
            assert!(PaymentData::empty_for(kind).matches_kind(kind));
        }
    }

    #[test]
    fn test_card_data_matches_both_card_kinds() {
        let data = PaymentData::empty_for(PaymentKind::CreditCard);
        assert!(data.matches_kind(PaymentKind::CreditCard));
        assert!(data.matches_kind(PaymentKind::DebitCard));
        assert!(!data.matches_kind(PaymentKind::Crypto));
    }

    #[test]
    fn test_mismatch() {
        let data = PaymentData::DigitalWallet {
            email: "jane@example.com".to_string(),
        };
        assert!(!data.matches_kind(PaymentKind::BankTransfer));
        assert!(!data.matches_kind(PaymentKind::Cash));
    }

    #[test]
    fn test_serde_tag_shape() {
        let json = serde_json::to_value(&PaymentData::Cash).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "cash" }));

        let json = serde_json::to_value(&PaymentData::BankTransfer {
            transaction_no: "TX-42".to_string(),
        })
        .unwrap();
        assert_eq!(json["type"], "bank_transfer");
        assert_eq!(json["transaction_no"], "TX-42");
    }
}
