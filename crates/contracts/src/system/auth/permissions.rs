//! Permission checks against the current actor.
//!
//! The server sends permissions in one of two shapes: a flat
//! `permissions_list`, or only nested `roles[].permissions`. The shape is
//! resolved once when the actor is built. Every check fails closed: no actor,
//! no roles or no permission data all answer `false`.
//!
//! These checks only decide what the UI renders. The server re-checks every
//! mutating request.

use super::{AuthPayload, AuthUser};
use serde_json::Value;

/// Roles that pass every access check.
pub const BYPASS_ROLES: [&str; 2] = ["super-admin", "admin"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RolePermissions {
    pub role: String,
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionSource {
    /// `permissions_list` was present; it is authoritative even when roles
    /// carry nested permissions too.
    Flat(Vec<String>),
    /// Fallback: permissions collected per role.
    Nested(Vec<RolePermissions>),
}

impl PermissionSource {
    pub fn resolve(user: &AuthUser) -> Self {
        match &user.permissions_list {
            Some(names) => PermissionSource::Flat(names.clone()),
            None => PermissionSource::Nested(
                user.roles
                    .iter()
                    .map(|role| RolePermissions {
                        role: role.name.clone(),
                        permissions: role
                            .permissions
                            .iter()
                            .flatten()
                            .map(|p| p.name.clone())
                            .collect(),
                    })
                    .collect(),
            ),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        match self {
            PermissionSource::Flat(names) => names.iter().any(|n| n == name),
            PermissionSource::Nested(roles) => roles
                .iter()
                .any(|r| r.permissions.iter().any(|n| n == name)),
        }
    }
}

/// The authenticated user, normalized for permission checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    roles: Vec<String>,
    permissions: PermissionSource,
}

impl Actor {
    pub fn from_user(user: &AuthUser) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            roles: user.roles.iter().map(|r| r.name.clone()).collect(),
            permissions: PermissionSource::resolve(user),
        }
    }

    pub fn from_payload(payload: &AuthPayload) -> Option<Self> {
        payload.user.as_ref().map(Self::from_user)
    }

    /// Builds the actor from an untyped `/me` body. Anything malformed
    /// gives `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let payload: AuthPayload = serde_json::from_value(value.clone()).ok()?;
        Self::from_payload(&payload)
    }

    pub fn roles(&self) -> &[String] {
        &self.roles
    }

    pub fn permissions(&self) -> &PermissionSource {
        &self.permissions
    }

    pub fn has_role(&self, name: &str) -> bool {
        !name.is_empty() && self.roles.iter().any(|r| r == name)
    }

    pub fn has_permission(&self, name: &str) -> bool {
        !name.is_empty() && self.permissions.contains(name)
    }

    pub fn is_admin(&self) -> bool {
        BYPASS_ROLES.iter().any(|role| self.has_role(role))
    }

    /// Admin roles pass; everyone else needs the permission itself.
    pub fn has_access(&self, name: &str) -> bool {
        self.is_admin() || self.has_permission(name)
    }
}

pub fn has_role(actor: Option<&Actor>, name: &str) -> bool {
    actor.is_some_and(|a| a.has_role(name))
}

pub fn has_permission(actor: Option<&Actor>, name: &str) -> bool {
    actor.is_some_and(|a| a.has_permission(name))
}

pub fn has_access(actor: Option<&Actor>, name: &str) -> bool {
    actor.is_some_and(|a| a.has_access(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn actor(value: Value) -> Option<Actor> {
        Actor::from_value(&value)
    }

    #[test]
    fn test_super_admin_bypasses_permissions() {
        let a = actor(json!({
            "user": { "id": 1, "name": "Owner", "roles": [{ "id": 1, "name": "super-admin" }], "permissions_list": [] }
        }));
        assert!(has_access(a.as_ref(), "delete-sale"));
        assert!(has_access(a.as_ref(), "anything-at-all"));
        assert!(!has_permission(a.as_ref(), "delete-sale"));
    }

    #[test]
    fn test_admin_bypasses_too() {
        let a = actor(json!({ "user": { "id": 2, "name": "Admin", "roles": [{ "id": 2, "name": "admin" }] } }));
        assert!(has_access(a.as_ref(), "manage-users"));
    }

    #[test]
    fn test_no_roles_no_list_fails_closed() {
        let a = actor(json!({ "user": { "id": 3, "name": "Kasir" } }));
        assert!(a.is_some());
        assert!(!has_permission(a.as_ref(), "delete-sale"));
        assert!(!has_access(a.as_ref(), "delete-sale"));
        assert!(!has_role(a.as_ref(), "kasir"));
    }

    #[test]
    fn test_missing_actor_fails_closed() {
        assert!(!has_role(None, "admin"));
        assert!(!has_permission(None, "view-product"));
        assert!(!has_access(None, "view-product"));
        assert!(actor(json!({})).is_none());
        assert!(actor(json!({ "user": "nope" })).is_none());
        assert!(actor(json!(null)).is_none());
    }

    #[test]
    fn test_non_array_roles_fail_closed() {
        let a = actor(json!({ "user": { "id": 4, "name": "X", "roles": "admin" } }));
        assert!(!has_role(a.as_ref(), "admin"));
        assert!(!has_access(a.as_ref(), "delete-sale"));
    }

    #[test]
    fn test_flat_list_fast_path() {
        let a = actor(json!({
            "user": { "id": 5, "name": "Apoteker", "roles": [{ "id": 3, "name": "apoteker" }],
                      "permissions_list": ["view-product", "edit-product"] }
        }))
        .unwrap();
        assert!(matches!(a.permissions(), PermissionSource::Flat(_)));
        assert!(a.has_permission("edit-product"));
        assert!(!a.has_permission("delete-product"));
        assert!(a.has_role("apoteker"));
        assert!(!a.has_role("Apoteker"));
    }

    #[test]
    fn test_nested_roles_slow_path() {
        let a = actor(json!({
            "user": { "id": 6, "name": "Gudang", "roles": [
                { "id": 4, "name": "gudang", "permissions": [{ "id": 1, "name": "view-purchase" }, { "id": 2, "name": "import-purchase" }] },
                { "id": 5, "name": "kasir" },
                { "id": 6, "name": "viewer", "permissions": "broken" }
            ] }
        }))
        .unwrap();
        assert!(matches!(a.permissions(), PermissionSource::Nested(_)));
        assert!(a.has_access("import-purchase"));
        assert!(!a.has_access("delete-sale"));
        assert_eq!(a.roles().len(), 3);
    }

    #[test]
    fn test_flat_list_wins_when_both_present() {
        let a = actor(json!({
            "user": { "id": 7, "name": "Y",
                      "roles": [{ "id": 4, "name": "gudang", "permissions": [{ "id": 1, "name": "delete-sale" }] }],
                      "permissions_list": ["view-sale"] }
        }))
        .unwrap();
        assert!(a.has_permission("view-sale"));
        assert!(!a.has_permission("delete-sale"));
    }

    #[test]
    fn test_empty_name_never_matches() {
        let a = actor(json!({ "user": { "id": 8, "name": "Z", "permissions_list": [""] } })).unwrap();
        assert!(!a.has_permission(""));
    }
}
