//! Auth Endpoints
//!
//! Login and registration. Neither takes a bearer token.

use serde::Serialize;

use super::{send_json, HttpApi};
use crate::error::ApiResult;
use crate::models::{Session, UserProfileToken};

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct LoginBody<'a> {
    email: &'a str,
    password: &'a str,
}

/// Registration form fields
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RegisterRequest<'a> {
    pub email: &'a str,
    pub username: &'a str,
    pub password: &'a str,
    pub full_name: &'a str,
}

impl HttpApi {
    pub(super) async fn login_user(&self, email: &str, password: &str) -> ApiResult<Session> {
        log::debug!("logging in {}", email);
        let profile: UserProfileToken = send_json(self.post("SplitUser/login").json(&LoginBody { email, password })).await?;
        Ok(profile.into())
    }

    pub(super) async fn register_user(&self, request: &RegisterRequest<'_>) -> ApiResult<Session> {
        log::debug!("registering {} <{}>", request.username, request.email);
        let profile: UserProfileToken = send_json(self.post("SplitUser/register").json(request)).await?;
        Ok(profile.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_body_uses_backend_casing() {
        let body = serde_json::to_value(RegisterRequest {
            email: "a@b.c",
            username: "ab",
            password: "pw",
            full_name: "A B",
        })
        .unwrap();
        assert_eq!(body["Email"], "a@b.c");
        assert_eq!(body["Username"], "ab");
        assert_eq!(body["FullName"], "A B");

        let login = serde_json::to_value(LoginBody { email: "a@b.c", password: "pw" }).unwrap();
        assert_eq!(login["Password"], "pw");
    }
}
