use anyhow::Context;
use jsonwebtoken::jwk::JwkSet;
use tracing::info;

use crate::config::AuthConfig;

/// Loads the identity provider's published key set, from `JWKS_PATH` when
/// set and from `JWKS_URL` otherwise.
pub async fn load_key_set(cfg: &AuthConfig) -> anyhow::Result<JwkSet> {
    let keys = match &cfg.jwks_path {
        Some(path) => {
            let raw = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("read key set {}", path))?;
            parse_key_set(&raw).with_context(|| format!("parse key set {}", path))?
        }
        None => fetch_key_set(&cfg.jwks_url).await?,
    };
    anyhow::ensure!(!keys.keys.is_empty(), "key set contains no keys");
    info!(keys = keys.keys.len(), "signing key set loaded");
    Ok(keys)
}

async fn fetch_key_set(url: &str) -> anyhow::Result<JwkSet> {
    let keys = reqwest::get(url)
        .await
        .with_context(|| format!("fetch key set {}", url))?
        .error_for_status()
        .with_context(|| format!("fetch key set {}", url))?
        .json::<JwkSet>()
        .await
        .context("decode key set")?;
    Ok(keys)
}

pub fn parse_key_set(raw: &str) -> anyhow::Result<JwkSet> {
    Ok(serde_json::from_str(raw)?)
}
