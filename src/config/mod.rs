use anyhow::Result;
use dotenvy::dotenv;
use serde::Deserialize;

fn default_port() -> u16 {
    3000
}

/// Configuration for the application
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Database connection URL
    pub database_url: String,
    /// Port the HTTP server listens on
    #[serde(default = "default_port")]
    pub port: u16,
    /// Comma-separated list of allowed CORS origins
    #[serde(default)]
    pub allowed_origins: Option<String>,
    /// Secret used to verify bearer tokens
    pub auth_secret: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// This function will:
    /// 1. Load variables from .env file if it exists
    /// 2. Deserialize environment variables into Config struct
    pub fn load() -> Result<Self> {
        dotenv().ok();

        let config = envy::from_env::<Config>()?;

        Ok(config)
    }

    /// Get a direct reference to the database URL
    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    /// Allowed CORS origins, falling back to the local dev frontends.
    pub fn allowed_origins(&self) -> Vec<String> {
        match &self.allowed_origins {
            Some(raw) => raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            None => vec![
                "http://localhost:4200".to_string(),
                "http://localhost:4201".to_string(),
            ],
        }
    }
}

/// Initialize environment variables and load configuration
pub fn init() -> Result<Config> {
    dotenv().ok();

    let config = Config::load()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(origins: Option<&str>) -> Config {
        Config {
            database_url: "postgres://localhost/solo_suite".into(),
            port: 3000,
            allowed_origins: origins.map(|s| s.to_string()),
            auth_secret: "secret".into(),
        }
    }

    #[test]
    fn origins_default_to_local_frontends() {
        let origins = sample(None).allowed_origins();
        assert_eq!(origins, vec!["http://localhost:4200", "http://localhost:4201"]);
    }

    #[test]
    fn origins_split_and_trim() {
        let origins = sample(Some("https://app.example.com, https://admin.example.com"))
            .allowed_origins();
        assert_eq!(
            origins,
            vec!["https://app.example.com", "https://admin.example.com"]
        );
    }
}
