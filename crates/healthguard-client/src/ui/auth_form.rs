//! Login/signup form model
//!
//! Holds field values, the login/signup mode and the message shown under the
//! form. Transitions talk to the network and the session; rendering lives in
//! [`super::login`].

use healthguard_protocol::{Credentials, SignupRequest};
use thiserror::Error;

use crate::network::NetworkClient;
use crate::state::SessionState;

pub const MIN_PASSWORD_LEN: usize = 6;

pub const LOGGED_OUT: &str = "Logged out successfully";
pub const NOT_AUTHENTICATED: &str = "Not authenticated";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

impl AuthMode {
    pub fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Signup => "Sign Up",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Need an account? Sign Up",
            AuthMode::Signup => "Already have an account? Login",
        }
    }

    fn toggled(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }
}

/// Rejected before any request is sent
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Username is required")]
    MissingUsername,

    #[error("Email is required")]
    MissingEmail,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Password is required")]
    MissingPassword,

    #[error("Password must be at least {} characters", MIN_PASSWORD_LEN)]
    PasswordTooShort,

    #[error("Passwords don't match!")]
    PasswordMismatch,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub username: String,
    pub email: String,
    pub password: String,
    /// Signup only; never sent
    pub confirm_password: String,
}

impl FormData {
    /// Check the fields the current mode submits
    pub fn validate(&self, mode: AuthMode) -> Result<(), FormError> {
        if mode == AuthMode::Signup && self.username.trim().is_empty() {
            return Err(FormError::MissingUsername);
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err(FormError::MissingEmail);
        }
        if !email.contains('@') {
            return Err(FormError::InvalidEmail);
        }

        if self.password.is_empty() {
            return Err(FormError::MissingPassword);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(FormError::PasswordTooShort);
        }

        if mode == AuthMode::Signup && self.password != self.confirm_password {
            return Err(FormError::PasswordMismatch);
        }

        Ok(())
    }

    pub fn credentials(&self) -> Credentials {
        Credentials {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }

    pub fn signup_request(&self) -> SignupRequest {
        SignupRequest {
            username: self.username.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

#[derive(Debug, Default)]
pub struct AuthForm {
    pub fields: FormData,
    mode: AuthMode,
    message: Option<String>,
}

impl AuthForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.message = None;
    }

    /// Log in or sign up, depending on the mode.
    ///
    /// On success the token is stored in the session and the server's message
    /// is shown. On failure the error is shown and the session is untouched.
    pub async fn submit(&mut self, network: &NetworkClient, session: &SessionState) {
        if let Err(e) = self.fields.validate(self.mode) {
            self.message = Some(e.to_string());
            return;
        }

        let result = match self.mode {
            AuthMode::Login => network.login(&self.fields.credentials()).await,
            AuthMode::Signup => network.signup(&self.fields.signup_request()).await,
        };

        match result {
            Ok(response) => {
                tracing::info!("{} succeeded", self.mode.title());
                session.set_auth(response.token, response.user).await;
                self.message = response.message;
            }
            Err(e) => {
                self.message = Some(e.to_string());
            }
        }
    }

    /// Log in with configured credentials, bypassing the form fields
    pub async fn auto_login(
        &mut self,
        network: &NetworkClient,
        session: &SessionState,
        credentials: &Credentials,
    ) -> bool {
        tracing::info!("Attempting auto-login");

        match network.login(credentials).await {
            Ok(response) => {
                tracing::info!("Auto-login successful");
                session.set_auth(response.token, response.user).await;
                self.message = response.message;
                true
            }
            Err(e) => {
                tracing::warn!("Auto-login failed: {}", e);
                self.message = Some(format!("Auto-login failed: {}", e));
                false
            }
        }
    }

    pub async fn logout(&mut self, session: &SessionState) {
        session.clear_auth().await;
        tracing::info!("Logged out");
        self.message = Some(LOGGED_OUT.to_string());
    }

    /// Fetch the protected resource with the session token.
    ///
    /// Never changes the session: a 401 is shown like any other failure.
    pub async fn fetch_protected(&mut self, network: &NetworkClient, session: &SessionState) {
        let Some(token) = session.token().await else {
            self.message = Some(NOT_AUTHENTICATED.to_string());
            return;
        };

        match network.get_protected_data(&token).await {
            Ok(data) => {
                self.message = data.message;
            }
            Err(e) => {
                if let Some(status) = e.status() {
                    tracing::debug!("Protected data request returned {}", status);
                }
                self.message = Some(e.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{LocalStorage, MemoryStorage, StorageError, TOKEN_KEY};
    use std::sync::Arc;

    fn filled(username: &str, email: &str, password: &str) -> FormData {
        FormData {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            confirm_password: password.to_string(),
        }
    }

    // Nothing listens here; reaching it would surface as a network error
    fn unreachable_network() -> NetworkClient {
        NetworkClient::new("http://127.0.0.1:9/api")
    }

    #[test]
    fn test_starts_in_login_mode() {
        let form = AuthForm::new();
        assert_eq!(form.mode(), AuthMode::Login);
        assert_eq!(form.message(), None);
    }

    #[test]
    fn test_toggle_mode_flips_and_clears_message() {
        let mut form = AuthForm::new();
        form.message = Some("old".to_string());

        form.toggle_mode();
        assert_eq!(form.mode(), AuthMode::Signup);
        assert_eq!(form.message(), None);
        assert_eq!(form.mode().title(), "Sign Up");

        form.toggle_mode();
        assert_eq!(form.mode(), AuthMode::Login);
    }

    #[test]
    fn test_validation() {
        let valid = filled("a", "a@b.com", "secret");
        assert_eq!(valid.validate(AuthMode::Signup), Ok(()));

        assert_eq!(
            filled("", "a@b.com", "secret").validate(AuthMode::Signup),
            Err(FormError::MissingUsername)
        );
        assert_eq!(filled("", "a@b.com", "secret").validate(AuthMode::Login), Ok(()));
        assert_eq!(
            filled("a", " ", "secret").validate(AuthMode::Login),
            Err(FormError::MissingEmail)
        );
        assert_eq!(
            filled("a", "ab.com", "secret").validate(AuthMode::Login),
            Err(FormError::InvalidEmail)
        );
        assert_eq!(
            filled("a", "a@b.com", "").validate(AuthMode::Login),
            Err(FormError::MissingPassword)
        );
        assert_eq!(
            filled("a", "a@b.com", "short").validate(AuthMode::Login),
            Err(FormError::PasswordTooShort)
        );
    }

    #[test]
    fn test_signup_requires_matching_confirmation() {
        let mut fields = filled("a", "a@b.com", "secret");
        fields.confirm_password = "secrets".to_string();

        assert_eq!(
            fields.validate(AuthMode::Signup),
            Err(FormError::PasswordMismatch)
        );
        assert_eq!(fields.validate(AuthMode::Login), Ok(()));
        assert_eq!(
            FormError::PasswordMismatch.to_string(),
            "Passwords don't match!"
        );

        // Confirmation stays client-side
        let body = serde_json::to_value(fields.signup_request()).unwrap();
        assert_eq!(body.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_payloads_follow_fields() {
        let form = filled("a", "a@b.com", "secret");

        assert_eq!(
            form.credentials(),
            Credentials {
                email: "a@b.com".to_string(),
                password: "secret".to_string(),
            }
        );
        assert_eq!(form.signup_request().username, "a");
    }

    #[test]
    fn test_payloads_send_trimmed_fields() {
        let form = filled("  alice ", " a@b.com\t", " secret ");

        assert_eq!(form.validate(AuthMode::Signup), Ok(()));

        let credentials = form.credentials();
        assert_eq!(credentials.email, "a@b.com");
        assert_eq!(credentials.password, " secret ");

        let request = form.signup_request();
        assert_eq!(request.username, "alice");
        assert_eq!(request.email, "a@b.com");
        assert_eq!(request.password, " secret ");
    }

    #[tokio::test]
    async fn test_invalid_submit_sends_nothing() {
        let storage = Arc::new(MemoryStorage::new());
        let session = SessionState::load(storage.clone());
        let mut form = AuthForm::new();
        form.fields = filled("", "a@b.com", "123");

        form.submit(&unreachable_network(), &session).await;

        assert_eq!(
            form.message(),
            Some("Password must be at least 6 characters")
        );
        assert!(!session.is_authenticated().await);
        assert_eq!(storage.get_item(TOKEN_KEY), None);
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set_item(TOKEN_KEY, "T").unwrap();
        let session = SessionState::load(storage.clone());
        let mut form = AuthForm::new();

        form.logout(&session).await;

        assert_eq!(form.message(), Some(LOGGED_OUT));
        assert!(!session.is_authenticated().await);
        assert_eq!(storage.get_item(TOKEN_KEY), None);
    }

    #[tokio::test]
    async fn test_fetch_protected_without_token() {
        let session = SessionState::load(Arc::new(MemoryStorage::new()));
        let mut form = AuthForm::new();

        form.fetch_protected(&unreachable_network(), &session).await;

        assert_eq!(form.message(), Some(NOT_AUTHENTICATED));
    }

    #[tokio::test]
    async fn test_logout_with_failing_storage_still_logs_out() {
        let session = SessionState::load(Arc::new(BrokenStorage));
        session.set_auth("T".to_string(), None).await;
        let mut form = AuthForm::new();

        form.logout(&session).await;

        assert_eq!(form.message(), Some(LOGGED_OUT));
        assert!(!session.is_authenticated().await);
    }

    struct BrokenStorage;

    impl LocalStorage for BrokenStorage {
        fn get_item(&self, _key: &str) -> Option<String> {
            None
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Io {
                path: "storage.json".into(),
                source: std::io::Error::other("disk full"),
            })
        }

        fn remove_item(&self, key: &str) -> Result<(), StorageError> {
            self.set_item(key, "")
        }
    }
}
