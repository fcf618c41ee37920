use crate::shared::filter::Searchable;
use crate::shared::serde_utils;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionItem {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub guard_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDetail {
    pub id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "serde_utils::lenient_vec")]
    pub permissions: Vec<PermissionItem>,
}

impl RoleDetail {
    pub fn permission_names(&self) -> Vec<String> {
        self.permissions.iter().map(|p| p.name.clone()).collect()
    }
}

impl Searchable for RoleDetail {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDto {
    #[serde(skip_serializing)]
    pub id: Option<i64>,
    pub name: String,
    /// Permission names.
    pub permissions: Vec<String>,
}

impl From<&RoleDetail> for RoleDto {
    fn from(r: &RoleDetail) -> Self {
        Self {
            id: Some(r.id),
            name: r.name.clone(),
            permissions: r.permission_names(),
        }
    }
}

impl RoleDto {
    pub fn toggle(&mut self, permission: &str, granted: bool) {
        let present = self.permissions.iter().any(|p| p == permission);
        if granted && !present {
            self.permissions.push(permission.to_string());
        } else if !granted && present {
            self.permissions.retain(|p| p != permission);
        }
    }
}

/// Groups `verb-subject` permission names by subject for the checkbox grid
/// (`delete-product` goes under `product`). Names without a dash go under
/// `lainnya`.
pub fn group_permissions(items: &[PermissionItem]) -> BTreeMap<String, Vec<&PermissionItem>> {
    let mut groups: BTreeMap<String, Vec<&PermissionItem>> = BTreeMap::new();
    for item in items {
        let subject = item
            .name
            .split_once('-')
            .map(|(_, subject)| subject.to_string())
            .unwrap_or_else(|| "lainnya".to_string());
        groups.entry(subject).or_default().push(item);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perm(id: i64, name: &str) -> PermissionItem {
        PermissionItem {
            id,
            name: name.to_string(),
            guard_name: Some("web".to_string()),
        }
    }

    #[test]
    fn test_group_permissions_by_subject() {
        let items = vec![
            perm(1, "view-product"),
            perm(2, "delete-product"),
            perm(3, "delete-sale"),
            perm(4, "dashboard"),
        ];
        let groups = group_permissions(&items);
        assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["lainnya", "product", "sale"]);
        assert_eq!(groups["product"].len(), 2);
        assert_eq!(groups["lainnya"][0].name, "dashboard");
    }

    #[test]
    fn test_toggle_is_idempotent() {
        let mut dto = RoleDto::default();
        dto.toggle("view-sale", true);
        dto.toggle("view-sale", true);
        assert_eq!(dto.permissions, vec!["view-sale"]);
        dto.toggle("view-sale", false);
        assert!(dto.permissions.is_empty());
    }
}
