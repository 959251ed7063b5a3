//! Well-known role name constants.
//!
//! These must match the `chk_users_role` check constraint in the users migration.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_EDITOR: &str = "editor";

/// All roles a user row may carry.
pub const ALL_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_EDITOR];

/// Check whether a role name is one of the known roles.
pub fn is_valid_role(role: &str) -> bool {
    ALL_ROLES.contains(&role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_roles_are_valid() {
        assert!(is_valid_role("admin"));
        assert!(is_valid_role("editor"));
    }

    #[test]
    fn unknown_role_is_rejected() {
        assert!(!is_valid_role("viewer"));
        assert!(!is_valid_role("Admin"));
    }
}
