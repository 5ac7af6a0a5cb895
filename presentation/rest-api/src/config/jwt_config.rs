use anyhow::Context;
use std::env;

const DEFAULT_TTL_SECONDS: i64 = 3600;

/// Session token settings
///
/// Environment variables:
/// - JWT_SECRET: HMAC signing secret (required)
/// - JWT_TTL_SECONDS: token lifetime (default: 3600)
pub struct JwtConfig {
    pub secret: String,
    pub ttl_seconds: i64,
}

impl JwtConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let secret = env::var("JWT_SECRET").context("JWT_SECRET must be set")?;
        if secret.trim().is_empty() {
            anyhow::bail!("JWT_SECRET must not be empty");
        }

        Ok(Self {
            secret,
            ttl_seconds: parse_ttl(env::var("JWT_TTL_SECONDS").ok().as_deref())?,
        })
    }
}

fn parse_ttl(raw: Option<&str>) -> anyhow::Result<i64> {
    match raw {
        None => Ok(DEFAULT_TTL_SECONDS),
        Some(value) => {
            let ttl: i64 = value
                .trim()
                .parse()
                .context("JWT_TTL_SECONDS must be an integer")?;
            if ttl <= 0 {
                anyhow::bail!("JWT_TTL_SECONDS must be positive");
            }
            Ok(ttl)
        }
    }
}
