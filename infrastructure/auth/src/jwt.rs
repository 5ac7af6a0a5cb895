use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use business::domain::shared::value_objects::UserId;
use business::domain::user::model::{Role, User};
use business::domain::user::services::{TokenClaims, TokenError, TokenService};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    #[serde(rename = "userId")]
    user_id: String,
    role: Role,
    iat: i64,
    exp: i64,
}

/// HS256 session tokens signed with a shared secret.
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl JwtTokenService {
    pub fn new(secret: &str, ttl_seconds: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::seconds(ttl_seconds),
        }
    }

    fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|_| TokenError::Issuance)
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, user: &User) -> Result<String, TokenError> {
        let now = Utc::now();
        self.sign(&Claims {
            user_id: user.id.to_string(),
            role: user.role,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        })
    }

    fn verify(&self, token: &str) -> Result<TokenClaims, TokenError> {
        let validation = Validation::new(Algorithm::HS256);

        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid,
            }
        })?;

        Ok(TokenClaims {
            user_id: UserId::new(data.claims.user_id),
            role: data.claims.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::user::model::NewUserProps;

    fn user() -> User {
        User::new(NewUserProps {
            username: "alice".to_string(),
            email: None,
            password_hash: "hash".to_string(),
        })
        .unwrap()
    }

    #[test]
    fn should_round_trip_identity() {
        let service = JwtTokenService::new("secret", 3600);
        let user = user();

        let token = service.issue(&user).unwrap();
        let claims = service.verify(&token).unwrap();

        assert_eq!(claims.user_id, UserId::new(user.id.to_string()));
        assert_eq!(claims.role, Role::User);
    }

    #[test]
    fn should_reject_token_signed_with_other_secret() {
        let token = JwtTokenService::new("one", 3600).issue(&user()).unwrap();

        let result = JwtTokenService::new("two", 3600).verify(&token);

        assert_eq!(result.unwrap_err(), TokenError::Invalid);
    }

    #[test]
    fn should_report_expired_token() {
        let service = JwtTokenService::new("secret", 3600);
        let past = Utc::now() - Duration::hours(2);
        let token = service
            .sign(&Claims {
                user_id: "u1".to_string(),
                role: Role::Admin,
                iat: past.timestamp(),
                exp: (past + Duration::minutes(5)).timestamp(),
            })
            .unwrap();

        assert_eq!(service.verify(&token).unwrap_err(), TokenError::Expired);
    }

    #[test]
    fn should_reject_garbage() {
        let service = JwtTokenService::new("secret", 3600);

        assert_eq!(service.verify("not-a-jwt").unwrap_err(), TokenError::Invalid);
    }
}
