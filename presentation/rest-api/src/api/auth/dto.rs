use poem_openapi::Object;

use crate::api::user::dto::RoleDto;

#[derive(Debug, Clone, Object)]
pub struct RegisterRequest {
    /// Unique username
    pub username: String,
    /// Optional unique email
    #[oai(skip_serializing_if_is_none)]
    pub email: Option<String>,
    pub password: String,
}

/// Either `username` or `email` identifies the account.
#[derive(Debug, Clone, Object)]
pub struct LoginRequest {
    #[oai(skip_serializing_if_is_none)]
    pub username: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub email: Option<String>,
    #[oai(default)]
    pub password: String,
}

impl LoginRequest {
    pub fn identifier(&self) -> Option<String> {
        [self.username.as_deref(), self.email.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|value| !value.is_empty())
            .map(str::to_string)
    }
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct LoginResponse {
    /// Signed session token
    pub token: String,
    pub username: String,
    pub role: RoleDto,
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(username: Option<&str>, email: Option<&str>) -> LoginRequest {
        LoginRequest {
            username: username.map(str::to_string),
            email: email.map(str::to_string),
            password: "pw".to_string(),
        }
    }

    #[test]
    fn should_prefer_username_as_identifier() {
        assert_eq!(
            request(Some("alice"), Some("a@x.io")).identifier().as_deref(),
            Some("alice")
        );
    }

    #[test]
    fn should_fall_back_to_email_when_username_blank() {
        assert_eq!(
            request(Some("  "), Some("a@x.io")).identifier().as_deref(),
            Some("a@x.io")
        );
        assert!(request(None, None).identifier().is_none());
    }
}
