//! Auth Endpoints
//!
//! Login and registration return a token plus the account; `/auth/me`
//! resolves a stored token back into an identity.

use super::Gateway;
use crate::error::ApiResult;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, User};

pub(super) const LOGIN_PATH: &str = "/auth/login";
pub(super) const REGISTER_PATH: &str = "/auth/register";
pub(super) const ME_PATH: &str = "/auth/me";

impl Gateway {
    pub(super) async fn post_login(&self, request: &LoginRequest) -> ApiResult<AuthResponse> {
        self.post_json(LOGIN_PATH, request).await
    }

    pub(super) async fn post_register(&self, request: &RegisterRequest) -> ApiResult<AuthResponse> {
        self.post_json(REGISTER_PATH, request).await
    }

    pub(super) async fn fetch_me(&self) -> ApiResult<User> {
        self.get_json(ME_PATH).await
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{LoginRequest, RegisterRequest};

    #[test]
    fn test_request_bodies() {
        let login = LoginRequest { email: "jane@example.com".into(), password: "secret".into() };
        assert_eq!(
            serde_json::to_value(&login).unwrap(),
            serde_json::json!({"email": "jane@example.com", "password": "secret"})
        );

        let register = RegisterRequest {
            name: "Jane".into(),
            email: "jane@example.com".into(),
            password: "secret".into(),
        };
        assert_eq!(
            serde_json::to_value(&register).unwrap(),
            serde_json::json!({"name": "Jane", "email": "jane@example.com", "password": "secret"})
        );
    }
}
