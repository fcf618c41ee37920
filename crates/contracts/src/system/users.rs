use crate::shared::filter::Searchable;
use crate::shared::serde_utils;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleRef {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default, deserialize_with = "serde_utils::lenient_vec")]
    pub roles: Vec<RoleRef>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    pub fn role_names(&self) -> String {
        if self.roles.is_empty() {
            return "-".to_string();
        }
        self.roles
            .iter()
            .map(|r| r.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str()]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserDto {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    /// Role names.
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserDto {
    pub name: String,
    pub email: String,
    /// Left out of the body when the password is not being changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_confirmation: Option<String>,
    pub roles: Vec<String>,
}

/// Draft of the user form. The password is optional when editing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserForm {
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    pub roles: Vec<String>,
}

impl UserForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: Some(user.id),
            name: user.name.clone(),
            email: user.email.clone(),
            roles: user.roles.iter().map(|r| r.name.clone()).collect(),
            ..Self::default()
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn toggle_role(&mut self, role: &str, assigned: bool) {
        let present = self.roles.iter().any(|r| r == role);
        if assigned && !present {
            self.roles.push(role.to_string());
        } else if !assigned && present {
            self.roles.retain(|r| r != role);
        }
    }

    /// First client-side problem, if any. The server validates the rest.
    pub fn problem(&self) -> Option<&'static str> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() {
            return Some("Nama dan email wajib diisi");
        }
        if !self.is_edit_mode() && self.password.is_empty() {
            return Some("Kata sandi wajib diisi untuk pengguna baru");
        }
        if self.password != self.password_confirmation {
            return Some("Konfirmasi kata sandi tidak sama");
        }
        None
    }

    pub fn to_create(&self) -> CreateUserDto {
        CreateUserDto {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            password_confirmation: self.password_confirmation.clone(),
            roles: self.roles.clone(),
        }
    }

    /// Blank password means "unchanged" and is left out of the body.
    pub fn to_update(&self) -> UpdateUserDto {
        let changing = !self.password.is_empty();
        UpdateUserDto {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: changing.then(|| self.password.clone()),
            password_confirmation: changing.then(|| self.password_confirmation.clone()),
            roles: self.roles.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_omits_blank_password() {
        let dto = UpdateUserDto {
            name: "Rina".into(),
            email: "rina@apotek.test".into(),
            password: None,
            password_confirmation: None,
            roles: vec!["kasir".into()],
        };
        let body = serde_json::to_value(&dto).unwrap();
        assert!(body.get("password").is_none());
        assert_eq!(body["roles"], json!(["kasir"]));
    }

    #[test]
    fn test_role_names() {
        let user: User = serde_json::from_value(json!({
            "id": 1, "name": "Rina", "email": "rina@apotek.test",
            "roles": [{ "id": 1, "name": "kasir" }, { "id": 2, "name": "gudang" }]
        }))
        .unwrap();
        assert_eq!(user.role_names(), "kasir, gudang");
    }

    #[test]
    fn test_user_form_rules() {
        let mut form = UserForm {
            name: "Budi".into(),
            email: "budi@apotek.test".into(),
            ..UserForm::default()
        };
        assert!(form.problem().is_some());
        form.password = "rahasia123".into();
        assert_eq!(form.problem(), Some("Konfirmasi kata sandi tidak sama"));
        form.password_confirmation = "rahasia123".into();
        assert_eq!(form.problem(), None);

        form.toggle_role("kasir", true);
        form.toggle_role("kasir", true);
        form.toggle_role("gudang", true);
        form.toggle_role("gudang", false);
        assert_eq!(form.to_create().roles, vec!["kasir"]);
    }

    #[test]
    fn test_editing_keeps_password_optional() {
        let user: User = serde_json::from_value(json!({
            "id": 5, "name": "Rina", "email": "rina@apotek.test", "roles": [{ "id": 1, "name": "kasir" }]
        }))
        .unwrap();
        let form = UserForm::from_user(&user);
        assert_eq!(form.problem(), None);
        let dto = form.to_update();
        assert_eq!(dto.password, None);
        assert_eq!(dto.roles, vec!["kasir"]);
    }
}
