use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::UserError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Admin => write!(f, "admin"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: Option<String>,
    pub password_hash: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

pub struct NewUserProps {
    pub username: String,
    pub email: Option<String>,
    pub password_hash: String,
}

impl User {
    /// New accounts always start with the `user` role.
    pub fn new(props: NewUserProps) -> Result<Self, UserError> {
        let username = props.username.trim().to_string();
        if username.is_empty() {
            return Err(UserError::UsernameEmpty);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            username,
            email: normalize_email(props.email),
            password_hash: props.password_hash,
            role: Role::User,
            created_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        username: String,
        email: Option<String>,
        password_hash: String,
        role: Role,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            email,
            password_hash,
            role,
            created_at,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Blank emails are treated as absent so the uniqueness check ignores them.
pub fn normalize_email(email: Option<String>) -> Option<String> {
    email
        .map(|e| e.trim().to_lowercase())
        .filter(|e| !e.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(username: &str, email: Option<&str>) -> NewUserProps {
        NewUserProps {
            username: username.to_string(),
            email: email.map(|e| e.to_string()),
            password_hash: "$argon2id$hash".to_string(),
        }
    }

    #[test]
    fn should_create_user_with_user_role() {
        let user = User::new(props("alice", Some("alice@example.com"))).unwrap();

        assert_eq!(user.username, "alice");
        assert_eq!(user.role, Role::User);
        assert!(!user.is_admin());
    }

    #[test]
    fn should_reject_when_username_blank() {
        let result = User::new(props("  ", None));

        assert!(matches!(result.unwrap_err(), UserError::UsernameEmpty));
    }

    #[test]
    fn should_drop_blank_email() {
        let user = User::new(props("bob", Some("   "))).unwrap();

        assert!(user.email.is_none());
    }

    #[test]
    fn should_lowercase_email() {
        let user = User::new(props("carol", Some(" Carol@Example.COM "))).unwrap();

        assert_eq!(user.email.as_deref(), Some("carol@example.com"));
    }

    #[test]
    fn should_round_trip_role_names() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!(Role::User.to_string(), "user");
        assert!("root".parse::<Role>().is_err());
    }
}
