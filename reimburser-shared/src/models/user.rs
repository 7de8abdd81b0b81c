use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Role assignments recognized by the client.
///
/// The wire carries the role as a free-form string; anything that does not
/// parse into one of these variants grants no permissions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Employee,
    Manager,
}

impl UserRole {
    /// Return the canonical string representation used on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Manager => "manager",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "employee" => Ok(Self::Employee),
            "manager" => Ok(Self::Manager),
            _ => Err("unknown user role"),
        }
    }
}

/// A user record as exchanged with the backend.
///
/// `user_id` and `role` are server-assigned; the client never generates them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server-assigned identifier; absent until the server has created the
    /// record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i32>,

    /// The user's login name.
    pub username: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Role string as supplied by the server; parse through [`User::role`]
    /// before trusting it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl User {
    /// Parse the wire role into the closed [`UserRole`] set.
    ///
    /// Returns `None` for an absent or unrecognized role; callers must treat
    /// that as "no permissions".
    #[must_use]
    pub fn role(&self) -> Option<UserRole> {
        self.role.as_deref().and_then(|role| role.parse().ok())
    }
}

/// Credentials submitted to `POST /users/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Registration payload submitted to `POST /users`.
///
/// The password travels only on this request shape, never on a rendered
/// [`User`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_roundtrip() {
        for (text, role) in [
            ("employee", UserRole::Employee),
            ("manager", UserRole::Manager),
        ] {
            assert_eq!(role.as_str(), text);
            assert_eq!(role.to_string(), text);
            assert_eq!(UserRole::from_str(text).unwrap(), role);
        }
    }

    #[test]
    fn test_user_role_invalid() {
        assert!(UserRole::from_str("admin").is_err());
        assert!(UserRole::from_str("EMPLOYEE").is_err());
        assert!(UserRole::from_str("").is_err());
    }

    #[test]
    fn test_user_deserialization_camel_case() {
        let json = r#"{"userId":7,"username":"alice","firstName":"A","lastName":"L","role":"employee"}"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.user_id, Some(7));
        assert_eq!(user.username, "alice");
        assert_eq!(user.first_name.as_deref(), Some("A"));
        assert_eq!(user.last_name.as_deref(), Some("L"));
        assert_eq!(user.role(), Some(UserRole::Employee));
    }

    #[test]
    fn test_user_unrecognized_role_grants_nothing() {
        let json = r#"{"username":"bob","role":"superuser"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role(), None);
    }

    #[test]
    fn test_user_absent_role_grants_nothing() {
        let json = r#"{"username":"carol"}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.role(), None);
        assert_eq!(user.user_id, None);
    }

    #[test]
    fn test_user_serialization_skips_absent_fields() {
        let user = User {
            username: "dave".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_string(&user).unwrap();
        assert_eq!(json, r#"{"username":"dave"}"#);
    }

    #[test]
    fn test_login_request_shape() {
        let request = LoginRequest {
            username: "alice".to_string(),
            password: "p1".to_string(),
        };

        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"username":"alice","password":"p1"}"#);
    }

    #[test]
    fn test_register_request_camel_case() {
        let request = RegisterRequest {
            username: "alice".to_string(),
            first_name: "A".to_string(),
            last_name: "L".to_string(),
            password: "p1".to_string(),
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"firstName\":\"A\""));
        assert!(json.contains("\"lastName\":\"L\""));
        assert!(json.contains("\"password\":\"p1\""));
    }
}
