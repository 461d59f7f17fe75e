use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::AuthError;

/// Operations a caller can be granted through the `permissions` claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    GetDrinksDetail,
    PostDrinks,
    PatchDrinks,
    DeleteDrinks,
}

impl Permission {
    pub fn as_str(self) -> &'static str {
        match self {
            Permission::GetDrinksDetail => "get:drinks-detail",
            Permission::PostDrinks => "post:drinks",
            Permission::PatchDrinks => "patch:drinks",
            Permission::DeleteDrinks => "delete:drinks",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Verified JWT payload handed to the handlers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,     // subject (identity provider user id)
    pub iss: String,     // issuer
    pub exp: usize,      // expires at (unix timestamp)
    #[serde(default)]
    pub iat: Option<usize>,
    #[serde(default)]
    pub permissions: Option<Vec<String>>,
}

impl Claims {
    /// Asserts `permission` is listed in the `permissions` claim.
    pub fn require(&self, permission: Permission) -> Result<(), AuthError> {
        let granted = self
            .permissions
            .as_deref()
            .ok_or(AuthError::MissingPermissions)?;
        if granted.iter().any(|p| p == permission.as_str()) {
            Ok(())
        } else {
            Err(AuthError::Forbidden(permission.as_str().to_string()))
        }
    }
}
