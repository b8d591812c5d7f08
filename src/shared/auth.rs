//! Authentication wire contract
//!
//! Request and response types mirroring the library service's auth API.
//! These are the only shapes the client puts on the wire; the service may
//! attach extra fields to its responses and they are ignored here.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account role, as the service spells it on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Library member ("user" on the wire)
    User,
    /// Library staff ("admin" on the wire)
    Admin,
}

impl Role {
    /// Both roles, in the order the account-type selector shows them
    pub const ALL: [Role; 2] = [Role::User, Role::Admin];

    /// Human-readable label used in the UI
    pub fn label(&self) -> &'static str {
        match self {
            Role::User => "Library Member",
            Role::Admin => "Library Staff",
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

/// Account information as returned by login and `/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Body of `POST /api/auth/login`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/auth/register` - exactly the five fields the
/// service expects, nothing inferred client-side
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
    pub role: Role,
}

/// Successful login response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

/// Error payload the service attaches to non-2xx responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_spelling() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");

        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn test_role_labels() {
        assert_eq!(Role::User.label(), "Library Member");
        assert_eq!(Role::Admin.label(), "Library Staff");
        assert_eq!(Role::default(), Role::User);
    }

    #[test]
    fn test_user_ignores_unknown_fields() {
        let json = r#"{
            "id": "7a0a2e1e-9c8f-4f2e-8b5a-1c2d3e4f5a6b",
            "name": "Jane",
            "email": "jane@x.com",
            "role": "user",
            "created_at": "2024-01-01T00:00:00Z",
            "email_verified": true
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.name, "Jane");
        assert_eq!(user.role, Role::User);
    }

    #[test]
    fn test_register_request_has_exactly_five_fields() {
        let request = RegisterRequest {
            name: "Jane".to_string(),
            email: "jane@x.com".to_string(),
            password: "longpass1".to_string(),
            password_confirmation: "longpass1".to_string(),
            role: Role::User,
        };

        let value = serde_json::to_value(&request).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 5);
        assert_eq!(object["password_confirmation"], "longpass1");
        assert_eq!(object["role"], "user");
    }

    #[test]
    fn test_auth_response_parse() {
        let json = r#"{
            "token": "opaque-token-123",
            "user": {
                "id": "7a0a2e1e-9c8f-4f2e-8b5a-1c2d3e4f5a6b",
                "name": "Jane",
                "email": "jane@x.com",
                "role": "admin"
            }
        }"#;

        let response: AuthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.token, "opaque-token-123");
        assert_eq!(response.user.role, Role::Admin);
    }
}
