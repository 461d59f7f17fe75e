use anyhow::Context;
use jsonwebtoken::Algorithm;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    pub domain: String,
    pub audience: String,
    pub algorithms: Vec<Algorithm>,
    pub jwks_url: String,
    pub jwks_path: Option<String>,
}

impl AuthConfig {
    /// Tokens are issued by `https://{domain}/`, trailing slash included.
    pub fn issuer(&self) -> String {
        format!("https://{}/", self.domain)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub auth: AuthConfig,
    pub reset_on_start: bool,
    pub seed: bool,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
        let max_connections = std::env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(10);

        let domain = std::env::var("AUTH0_DOMAIN").context("AUTH0_DOMAIN is not set")?;
        let algorithms = parse_algorithms(
            &std::env::var("AUTH_ALGORITHMS").unwrap_or_else(|_| "RS256".into()),
        )?;
        let auth = AuthConfig {
            jwks_url: std::env::var("JWKS_URL")
                .unwrap_or_else(|_| format!("https://{}/.well-known/jwks.json", domain)),
            jwks_path: std::env::var("JWKS_PATH").ok(),
            audience: std::env::var("API_AUDIENCE").unwrap_or_else(|_| "coffeeshop".into()),
            algorithms,
            domain,
        };

        Ok(Self {
            database_url,
            max_connections,
            auth,
            reset_on_start: env_flag("DRINKS_RESET_ON_START"),
            seed: env_flag("DRINKS_SEED"),
        })
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

fn parse_algorithms(raw: &str) -> anyhow::Result<Vec<Algorithm>> {
    let algorithms = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<Algorithm>()
                .with_context(|| format!("unsupported signing algorithm {s}"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    anyhow::ensure!(!algorithms.is_empty(), "AUTH_ALGORITHMS must name at least one algorithm");
    Ok(algorithms)
}
