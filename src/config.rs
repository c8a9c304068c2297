use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub jwt_private_key_path: PathBuf,
    pub jwt_public_key_path: PathBuf,
    pub access_token_ttl_minutes: i64,
    pub super_admin: SuperAdminConfig,
}

/// Bootstrap credentials for the one-time super-admin account. Supplied by the
/// deployment environment, never by request payloads.
#[derive(Clone)]
pub struct SuperAdminConfig {
    pub username: String,
    pub email: String,
    pub password: String,
}

// Keep the password out of debug output.
impl std::fmt::Debug for SuperAdminConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuperAdminConfig")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);

        let jwt_private_key_path = PathBuf::from(env::var("JWT_PRIVATE_KEY_PATH")?);
        let jwt_public_key_path = PathBuf::from(env::var("JWT_PUBLIC_KEY_PATH")?);
        let access_token_ttl_minutes = env::var("ACCESS_TOKEN_TTL_MINUTES")
            .ok()
            .and_then(|m| m.parse::<i64>().ok())
            .unwrap_or(15);

        let super_admin = SuperAdminConfig {
            username: env::var("SUPER_ADMIN_USERNAME")
                .unwrap_or_else(|_| "superadmin".to_string()),
            email: env::var("SUPER_ADMIN_EMAIL")
                .unwrap_or_else(|_| "superadmin@example.com".to_string()),
            password: env::var("SUPER_ADMIN_PASSWORD")?,
        };

        Ok(Self {
            database_url,
            host,
            port,
            jwt_private_key_path,
            jwt_public_key_path,
            access_token_ttl_minutes,
            super_admin,
        })
    }
}
