use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddressId(pub Uuid);

impl AddressId {
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
            .map(AddressId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Address
// ============================================================================
/// Адрес доставки, выбирается на первом шаге оформления
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub id: AddressId,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,

    #[serde(rename = "isPrimary", default)]
    pub is_primary: bool,
}

/// Линейный поиск адреса по выбранному id, первое совпадение.
/// Без выбранного id всегда None.
pub fn find_selected<'a>(
    addresses: &'a [Address],
    selected: Option<&AddressId>,
) -> Option<&'a Address> {
    let selected = selected?;
    addresses.iter().find(|a| a.id == *selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address(id: AddressId, street: &str) -> Address {
        Address {
            id,
            street: street.to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            postal_code: "62704".to_string(),
            country: "USA".to_string(),
            is_primary: false,
        }
    }

    #[test]
    fn test_find_selected_first_match() {
        let id = AddressId::new_v4();
        // Дедупликация не предполагается: при дубликатах побеждает первый
        let addresses = vec![
            address(AddressId::new_v4(), "1 Elm St"),
            address(id, "2 Oak St"),
            address(id, "3 Pine St"),
        ];
        let found = find_selected(&addresses, Some(&id)).unwrap();
        assert_eq!(found.street, "2 Oak St");
    }

    #[test]
    fn test_find_selected_no_match() {
        let addresses = vec![address(AddressId::new_v4(), "1 Elm St")];
        assert!(find_selected(&addresses, Some(&AddressId::new_v4())).is_none());
    }

    #[test]
    fn test_find_selected_unset() {
        let addresses = vec![address(AddressId::new_v4(), "1 Elm St")];
        assert!(find_selected(&addresses, None).is_none());
        assert!(find_selected(&[], None).is_none());
    }
}
