use super::types::AccessLevel;
use crate::config::InterpreterConfig;
use crate::schema::types::FieldDefinition;

/// Decides whether a caller's roles grant access to a field.
#[derive(Debug, Clone)]
pub struct PermissionManager {
    admin_role: String,
}

impl Default for PermissionManager {
    fn default() -> Self {
        Self::new("admin")
    }
}

impl PermissionManager {
    #[must_use]
    pub fn new(admin_role: impl Into<String>) -> Self {
        Self {
            admin_role: admin_role.into(),
        }
    }

    #[must_use]
    pub fn from_config(config: &InterpreterConfig) -> Self {
        Self::new(config.admin_role.clone())
    }

    #[must_use]
    pub fn admin_role(&self) -> &str {
        &self.admin_role
    }

    /// Checks whether `roles` may read `field`.
    ///
    /// Permission is granted if either:
    /// 1. The field lists no read roles
    /// 2. The caller holds the administrator role
    /// 3. The caller holds one of the listed read roles
    #[must_use]
    pub fn has_read_permission<R: AsRef<str>>(&self, roles: &[R], field: &FieldDefinition) -> bool {
        self.check(roles, field, AccessLevel::Read)
    }

    /// Checks whether `roles` may write `field`. Same rules as
    /// [`has_read_permission`](Self::has_read_permission) over `write_roles`.
    #[must_use]
    pub fn has_write_permission<R: AsRef<str>>(
        &self,
        roles: &[R],
        field: &FieldDefinition,
    ) -> bool {
        self.check(roles, field, AccessLevel::Write)
    }

    /// Dispatches on `access`.
    #[must_use]
    pub fn check<R: AsRef<str>>(
        &self,
        roles: &[R],
        field: &FieldDefinition,
        access: AccessLevel,
    ) -> bool {
        let required = match access {
            AccessLevel::Read => &field.read_roles,
            AccessLevel::Write => &field.write_roles,
        };

        if required.is_empty() {
            crate::log_permissions_info!(
                "No {} roles on '{}', access open",
                access,
                field.key
            );
            return true;
        }

        let held: Vec<&str> = roles.iter().map(|role| role.as_ref()).collect();
        let allowed = held
            .iter()
            .any(|role| *role == self.admin_role || required.iter().any(|r| r.as_str() == *role));
        if allowed {
            crate::log_permissions_info!("Granted {} on '{}'", access, field.key);
        } else {
            crate::log_permissions_warn!(
                "Denied {} on '{}': needs one of {:?}, has {:?}",
                access,
                field.key,
                required,
                held
            );
        }
        allowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::FieldType;

    fn salary() -> FieldDefinition {
        FieldDefinition::new("salary", FieldType::Currency)
            .with_roles(vec!["hr".into()], vec!["payroll".into()])
    }

    #[test]
    fn test_open_field() {
        let manager = PermissionManager::default();
        let field = FieldDefinition::new("name", FieldType::Text);
        let none: [&str; 0] = [];
        assert!(manager.has_read_permission(&none, &field));
        assert!(manager.has_write_permission(&none, &field));
    }

    #[test]
    fn test_listed_roles() {
        let manager = PermissionManager::default();
        let field = salary();
        assert!(manager.has_read_permission(&["hr"], &field));
        assert!(!manager.has_write_permission(&["hr"], &field));
        assert!(manager.has_write_permission(&["viewer", "payroll"], &field));
        assert!(!manager.has_read_permission(&["viewer"], &field));
    }

    #[test]
    fn test_admin_always_passes() {
        let manager = PermissionManager::new("owner");
        let field = salary();
        assert!(manager.has_read_permission(&["owner"], &field));
        assert!(manager.has_write_permission(&["owner"], &field));
        assert!(!manager.has_write_permission(&["admin"], &field));
    }
}
