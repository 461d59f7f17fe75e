use axum::http::StatusCode;
use thiserror::Error;

/// Reasons the permission guard refuses a request.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("authorization header is expected")]
    MissingHeader,
    #[error("authorization header must be of the form 'Bearer <token>'")]
    MalformedHeader,
    #[error("unable to parse authentication token")]
    UnparsableToken,
    #[error("token header carries no key id")]
    MissingKeyId,
    #[error("unable to find the appropriate key")]
    UnknownKey,
    #[error("token expired")]
    Expired,
    #[error("incorrect claims, please check the audience and issuer")]
    InvalidClaims,
    #[error("token signature is invalid")]
    InvalidSignature,
    #[error("permissions not included in token")]
    MissingPermissions,
    #[error("permission {0} not granted")]
    Forbidden(String),
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::UnparsableToken | AuthError::MissingPermissions => StatusCode::BAD_REQUEST,
            AuthError::Forbidden(_) => StatusCode::FORBIDDEN,
            _ => StatusCode::UNAUTHORIZED,
        }
    }

    /// Short machine-readable code, logged alongside the rejection.
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::MissingHeader => "authorization_header_missing",
            AuthError::MalformedHeader
            | AuthError::UnparsableToken
            | AuthError::MissingKeyId
            | AuthError::UnknownKey => "invalid_header",
            AuthError::Expired => "token_expired",
            AuthError::InvalidClaims | AuthError::MissingPermissions => "invalid_claims",
            AuthError::InvalidSignature => "invalid_signature",
            AuthError::Forbidden(_) => "unauthorized",
        }
    }
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(e: jsonwebtoken::errors::Error) -> Self {
        use jsonwebtoken::errors::ErrorKind;
        match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::Expired,
            ErrorKind::InvalidAudience
            | ErrorKind::InvalidIssuer
            | ErrorKind::InvalidSubject
            | ErrorKind::ImmatureSignature
            | ErrorKind::MissingRequiredClaim(_) => AuthError::InvalidClaims,
            ErrorKind::InvalidSignature => AuthError::InvalidSignature,
            _ => AuthError::UnparsableToken,
        }
    }
}
