use jsonwebtoken::{decode, decode_header, jwk::JwkSet, Algorithm, DecodingKey, Validation};
use tracing::debug;

use super::{
    claims::{Claims, Permission},
    error::AuthError,
};
use crate::config::AuthConfig;

/// Validates bearer tokens against the identity provider's key set.
pub struct TokenVerifier {
    keys: JwkSet,
    issuer: String,
    audience: String,
    algorithms: Vec<Algorithm>,
}

impl TokenVerifier {
    pub fn new(cfg: &AuthConfig, keys: JwkSet) -> Self {
        Self {
            keys,
            issuer: cfg.issuer(),
            audience: cfg.audience.clone(),
            algorithms: cfg.algorithms.clone(),
        }
    }

    /// Checks signature, expiry, audience and issuer; returns the payload.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let header = decode_header(token).map_err(|_| AuthError::UnparsableToken)?;
        let kid = header.kid.ok_or(AuthError::MissingKeyId)?;
        let jwk = self.keys.find(&kid).ok_or(AuthError::UnknownKey)?;
        let key = DecodingKey::from_jwk(jwk).map_err(|_| AuthError::UnparsableToken)?;

        let mut validation = Validation::new(header.alg);
        validation.algorithms = self.algorithms.clone();
        validation.set_audience(std::slice::from_ref(&self.audience));
        validation.set_issuer(std::slice::from_ref(&self.issuer));
        validation.set_required_spec_claims(&["exp", "aud", "iss"]);

        let data = decode::<Claims>(token, &key, &validation)?;
        debug!(sub = %data.claims.sub, kid = %kid, "jwt verified");
        Ok(data.claims)
    }

    /// Verifies `token` and asserts it grants `permission`.
    pub fn authorize(&self, token: &str, permission: Permission) -> Result<Claims, AuthError> {
        let claims = self.verify(token)?;
        claims.require(permission)?;
        Ok(claims)
    }
}
