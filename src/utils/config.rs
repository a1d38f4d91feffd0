use std::env;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 6969;
const DEFAULT_DATABASE_URL: &str = "mongodb://127.0.0.1:27017/cruddb";

/// Process configuration read from the environment (and `.env`)
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_vars(
            env::var("HOST").ok(),
            env::var("PORT").ok(),
            env::var("DATABASE_URL").ok(),
        )
    }

    fn from_vars(host: Option<String>, port: Option<String>, database_url: Option<String>) -> Self {
        let port = match port {
            Some(raw) => raw.trim().parse::<u16>().unwrap_or_else(|_| {
                log::warn!("⚠️  Invalid PORT '{}', falling back to {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self {
            host: host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            database_url: database_url.unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
