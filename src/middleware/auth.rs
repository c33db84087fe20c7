use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use uuid::Uuid;

use crate::modules::auth::model::{Claims, TokenKind};
use crate::modules::users::model::Role;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// Extractor that validates the bearer token and exposes the caller's
/// verified claims. Requests without a valid access token are rejected
/// here, before any handler logic runs.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn user_id(&self) -> Result<Uuid, AppError> {
        Uuid::parse_str(&self.0.sub)
            .map_err(|_| AppError::unauthenticated("Invalid user ID in token"))
    }

    pub fn role(&self) -> Role {
        self.0.role
    }

    pub fn email(&self) -> &str {
        &self.0.email
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| AppError::unauthenticated("Missing authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::unauthenticated("Invalid authorization header format"))?;

        let claims = verify_token(token, &state.jwt_config, TokenKind::Access)?;

        Ok(AuthUser(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims_for(role: Role) -> Claims {
        Claims {
            sub: Uuid::new_v4().to_string(),
            email: "test@example.com".to_string(),
            role,
            kind: TokenKind::Access,
            exp: 9999999999,
            iat: 1234567890,
        }
    }

    #[test]
    fn user_id_parses_the_subject() {
        let claims = claims_for(Role::Student);
        let expected = Uuid::parse_str(&claims.sub).unwrap();
        let auth_user = AuthUser(claims);

        assert_eq!(auth_user.user_id().unwrap(), expected);
    }

    #[test]
    fn user_id_rejects_malformed_subject() {
        let mut claims = claims_for(Role::Student);
        claims.sub = "not-a-uuid".to_string();
        let auth_user = AuthUser(claims);

        assert!(auth_user.user_id().is_err());
    }

    #[test]
    fn role_comes_from_claims() {
        assert_eq!(AuthUser(claims_for(Role::Teacher)).role(), Role::Teacher);
    }
}
