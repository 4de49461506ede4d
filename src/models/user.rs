use crate::services::token::Claims;
use serde::Deserialize;

/// Request identity derived from a verified session token.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: String,
    pub role: String,
}

impl User {
    pub fn from_claims(claims: &Claims) -> Self {
        User {
            id: claims.role.clone(),
            role: claims.role.clone(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == "admin"
    }
}
