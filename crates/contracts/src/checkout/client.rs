use serde::{Deserialize, Serialize};

/// Данные покупателя для блока контактной информации.
/// Профиль может прийти без вложенного user — каждое поле
/// деградирует независимо.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientProfile {
    #[serde(default)]
    pub user: Option<ClientUser>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClientUser {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl ClientProfile {
    /// Полное имя из имени и фамилии; None, если нет ни того ни другого
    pub fn full_name(&self) -> Option<String> {
        let user = self.user.as_ref()?;
        let parts: Vec<&str> = [user.first_name.as_deref(), user.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    pub fn phone(&self) -> Option<String> {
        self.user.as_ref()?.phone.clone()
    }

    pub fn email(&self) -> Option<String> {
        self.user.as_ref()?.email.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(user: Option<ClientUser>) -> ClientProfile {
        ClientProfile { user }
    }

    #[test]
    fn test_full_name_both_parts() {
        let p = profile(Some(ClientUser {
            first_name: Some("Jane".to_string()),
            last_name: Some("Doe".to_string()),
            ..Default::default()
        }));
        assert_eq!(p.full_name().as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn test_full_name_single_part() {
        let p = profile(Some(ClientUser {
            first_name: Some("Jane".to_string()),
            ..Default::default()
        }));
        assert_eq!(p.full_name().as_deref(), Some("Jane"));
    }

    #[test]
    fn test_fields_default_independently() {
        let p = profile(Some(ClientUser {
            email: Some("jane@example.com".to_string()),
            ..Default::default()
        }));
        assert_eq!(p.full_name(), None);
        assert_eq!(p.phone(), None);
        assert_eq!(p.email().as_deref(), Some("jane@example.com"));
    }

    #[test]
    fn test_missing_user() {
        let p = profile(None);
        assert_eq!(p.full_name(), None);
        assert_eq!(p.phone(), None);
        assert_eq!(p.email(), None);
    }
}
