use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use crate::config::jwt::JwtConfig;
use crate::modules::auth::model::{Claims, TokenKind, TokenPair};
use crate::modules::users::model::Role;
use crate::utils::errors::AppError;

pub fn create_token(
    user_id: Uuid,
    email: &str,
    role: Role,
    kind: TokenKind,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let expiry = match kind {
        TokenKind::Access => jwt_config.access_token_expiry,
        TokenKind::Refresh => jwt_config.refresh_token_expiry,
    };

    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        role,
        kind,
        exp: now + expiry as usize,
        iat: now,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::database(anyhow::anyhow!("Failed to create token: {}", e)))
}

/// Issue an access/refresh token pair for a freshly authenticated user.
pub fn issue_token_pair(
    user_id: Uuid,
    email: &str,
    role: Role,
    jwt_config: &JwtConfig,
) -> Result<TokenPair, AppError> {
    Ok(TokenPair {
        access_token: create_token(user_id, email, role, TokenKind::Access, jwt_config)?,
        refresh_token: create_token(user_id, email, role, TokenKind::Refresh, jwt_config)?,
    })
}

/// Verify a token's signature and expiry, and check it is of the expected
/// kind (a refresh token must not pass as an access token, or vice versa).
pub fn verify_token(
    token: &str,
    jwt_config: &JwtConfig,
    expected: TokenKind,
) -> Result<Claims, AppError> {
    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthenticated("Invalid or expired token"))?;

    if claims.kind != expected {
        return Err(AppError::unauthenticated("Wrong token kind"));
    }

    Ok(claims)
}
