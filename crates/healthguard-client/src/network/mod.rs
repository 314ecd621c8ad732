mod api;

use api::OnFailure;
use healthguard_protocol::{AuthResponse, Credentials, ProtectedData, SignupRequest};

use crate::error::Result;

pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

pub const SIGNUP_FAILED: &str = "Signup failed";
pub const LOGIN_FAILED: &str = "Login failed";
pub const PROTECTED_FAILED: &str = "Failed to fetch protected data";

/// Stateless wrapper around the three auth endpoints.
///
/// Every call sends exactly one request. There are no retries and no
/// timeouts beyond what the transport imposes.
#[derive(Clone)]
pub struct NetworkClient {
    http: reqwest::Client,
    base_url: String,
}

impl NetworkClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    // Auth

    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse> {
        api::post(
            &self.http,
            &self.url("/signup"),
            request,
            OnFailure::ServerMessage {
                fallback: SIGNUP_FAILED,
            },
        )
        .await
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse> {
        api::post(
            &self.http,
            &self.url("/login"),
            credentials,
            OnFailure::ServerMessage {
                fallback: LOGIN_FAILED,
            },
        )
        .await
    }

    // Protected resources

    /// Fetch the protected resource.
    ///
    /// Unlike signup and login, the error body is never read: every
    /// non-success status yields the same fixed message. The status is still
    /// available through [`crate::error::ApiError::status`].
    pub async fn get_protected_data(&self, token: &str) -> Result<ProtectedData> {
        api::get(
            &self.http,
            &self.url("/protected"),
            Some(token),
            OnFailure::Fixed(PROTECTED_FAILED),
        )
        .await
    }
}

impl Default for NetworkClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = NetworkClient::new("http://localhost:5000/api/");
        assert_eq!(client.base_url(), "http://localhost:5000/api");
        assert_eq!(client.url("/login"), "http://localhost:5000/api/login");
    }

    #[test]
    fn test_default_base_url() {
        let client = NetworkClient::default();
        assert_eq!(client.url("/protected"), "http://localhost:5000/api/protected");
    }
}
