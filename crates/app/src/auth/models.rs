//! Auth data models.

use serde::{Deserialize, Serialize};

use crate::auth::AuthServiceError;

/// Role claim attached to a user by the identity provider.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Store staff with access to order administration
    Admin,

    /// Any other signed-in user
    #[default]
    #[serde(other)]
    Customer,
}

/// A verified session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Identity provider user id
    pub user_id: String,

    /// Role claim
    pub role: Role,
}

impl Session {
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Gate for administration routes.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::Forbidden`] unless the session has the admin role.
    pub fn require_admin(&self) -> Result<(), AuthServiceError> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(AuthServiceError::Forbidden)
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn unknown_role_claims_are_customers() -> TestResult {
        let role: Role = serde_json::from_str("\"editor\"")?;

        assert_eq!(role, Role::Customer);
        assert_eq!(serde_json::from_str::<Role>("\"admin\"")?, Role::Admin);

        Ok(())
    }

    #[test]
    fn only_admins_pass_the_admin_gate() {
        let admin = Session {
            user_id: "user_admin".to_string(),
            role: Role::Admin,
        };

        let customer = Session {
            user_id: "user_customer".to_string(),
            role: Role::Customer,
        };

        assert!(admin.require_admin().is_ok());
        assert!(matches!(
            customer.require_admin(),
            Err(AuthServiceError::Forbidden)
        ));
    }
}
