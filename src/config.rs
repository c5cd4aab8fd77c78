use anyhow::Context;
use serde::Deserialize;

const DEFAULT_TTL_MINUTES: i64 = 60 * 24 * 7;
pub const MAX_TTL_MINUTES: i64 = 60 * 24 * 365;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub db_max_connections: u32,
    pub jwt: JwtConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Required keys missing or blank are an error.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> anyhow::Result<String> {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .with_context(|| format!("environment variable {key} is not set"))
        };

        let database_url = required("DATABASE_URL")?;
        let db_max_connections = lookup("DB_MAX_CONNECTIONS")
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(10);
        let jwt = JwtConfig {
            secret: required("JWT_SECRET")?,
            issuer: lookup("JWT_ISSUER").unwrap_or_else(|| "obrafacil".into()),
            audience: lookup("JWT_AUDIENCE").unwrap_or_else(|| "obrafacil-users".into()),
            ttl_minutes: lookup("JWT_TTL_MINUTES")
                .and_then(|v| v.parse::<i64>().ok())
                .filter(|v| *v > 0)
                .map(|v| v.min(MAX_TTL_MINUTES))
                .unwrap_or(DEFAULT_TTL_MINUTES),
        };
        Ok(Self {
            database_url,
            db_max_connections,
            jwt,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_secret_fails_with_variable_name() {
        let err = AppConfig::from_lookup(lookup_from(&[("DATABASE_URL", "postgres://x")]))
            .unwrap_err();
        assert!(err.to_string().contains("JWT_SECRET"));
    }

    #[test]
    fn blank_secret_is_rejected() {
        let err = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://x"),
            ("JWT_SECRET", "   "),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("JWT_SECRET"));
    }

    #[test]
    fn defaults_are_applied() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://x"),
            ("JWT_SECRET", "s3cret"),
            ("JWT_TTL_MINUTES", "not-a-number"),
        ]))
        .expect("config");
        assert_eq!(cfg.db_max_connections, 10);
        assert_eq!(cfg.jwt.issuer, "obrafacil");
        assert_eq!(cfg.jwt.audience, "obrafacil-users");
        assert_eq!(cfg.jwt.ttl_minutes, DEFAULT_TTL_MINUTES);
    }

    #[test]
    fn huge_ttl_is_capped() {
        let cfg = AppConfig::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://x"),
            ("JWT_SECRET", "s3cret"),
            ("JWT_TTL_MINUTES", "9223372036854775807"),
        ]))
        .expect("config");
        assert_eq!(cfg.jwt.ttl_minutes, MAX_TTL_MINUTES);
    }
}
