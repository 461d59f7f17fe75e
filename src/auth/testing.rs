//! Token minting for tests, signed with the checked-in RS256 test key whose
//! public half is published in `testdata/jwks.json`.

use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::json;
use time::OffsetDateTime;

use super::{jwks::parse_key_set, jwt::TokenVerifier};
use crate::config::AuthConfig;

pub const TEST_DOMAIN: &str = "coffee.test";
pub const TEST_AUDIENCE: &str = "coffeeshop";

pub fn test_auth_config() -> AuthConfig {
    AuthConfig {
        domain: TEST_DOMAIN.into(),
        audience: TEST_AUDIENCE.into(),
        algorithms: vec![Algorithm::RS256],
        jwks_url: format!("https://{}/.well-known/jwks.json", TEST_DOMAIN),
        jwks_path: None,
    }
}

pub fn test_verifier() -> TokenVerifier {
    let keys = parse_key_set(include_str!("testdata/jwks.json")).expect("test key set");
    TokenVerifier::new(&test_auth_config(), keys)
}

pub struct TestToken {
    pub kid: Option<String>,
    pub issuer: String,
    pub audience: String,
    pub expires_in: i64,
    pub permissions: Option<Vec<String>>,
}

impl Default for TestToken {
    fn default() -> Self {
        Self {
            kid: Some("test-key-1".into()),
            issuer: format!("https://{}/", TEST_DOMAIN),
            audience: TEST_AUDIENCE.into(),
            expires_in: 3600,
            permissions: Some(Vec::new()),
        }
    }
}

pub fn mint(permissions: &[&str]) -> String {
    mint_with(TestToken {
        permissions: Some(permissions.iter().map(|p| p.to_string()).collect()),
        ..TestToken::default()
    })
}

pub fn mint_with(token: TestToken) -> String {
    let now = OffsetDateTime::now_utc().unix_timestamp();
    let mut claims = json!({
        "sub": "auth0|barista",
        "iss": token.issuer,
        "aud": [token.audience, format!("https://{}/userinfo", TEST_DOMAIN)],
        "iat": now,
        "exp": now + token.expires_in,
    });
    if let Some(permissions) = token.permissions {
        claims["permissions"] = json!(permissions);
    }

    let mut header = Header::new(Algorithm::RS256);
    header.kid = token.kid;
    let key = EncodingKey::from_rsa_pem(include_bytes!("testdata/private_key.pem"))
        .expect("test signing key");
    encode(&header, &claims, &key).expect("sign test token")
}
