//! The login/logout state machine.
//!
//! `Unauthenticated → token requested → awaiting browser approval →
//! session established`. Every failure mode along the way (network,
//! malformed response, user cancellation) collapses to the same outcome:
//! back to unauthenticated with persisted state cleared. Logout is always
//! locally successful; remote session deletion is best effort.

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{info, warn};

use marquee_model::{Account, RequestToken, SessionCreated, SessionStatus};

use crate::api_client::CatalogClient;
use crate::error::ClientResult;
use crate::session::SessionStorage;

/// The authentication endpoints the flow drives, abstracted so tests can
/// run the state machine without a network.
#[async_trait]
pub trait SessionEndpoints: Send + Sync {
    async fn create_request_token(&self) -> ClientResult<RequestToken>;
    async fn create_session(&self, request_token: &str) -> ClientResult<SessionCreated>;
    async fn delete_session(&self, session_id: &str) -> ClientResult<SessionStatus>;
    async fn fetch_account(&self) -> ClientResult<Account>;
    /// Swap the session identifier attached to subsequent requests.
    async fn apply_session(&self, session_id: Option<String>);
    /// Browser approval URL for a request token.
    fn authorize_url(&self, request_token: &str) -> String;
}

#[async_trait]
impl SessionEndpoints for CatalogClient {
    async fn create_request_token(&self) -> ClientResult<RequestToken> {
        CatalogClient::create_request_token(self).await
    }

    async fn create_session(&self, request_token: &str) -> ClientResult<SessionCreated> {
        CatalogClient::create_session(self, request_token).await
    }

    async fn delete_session(&self, session_id: &str) -> ClientResult<SessionStatus> {
        CatalogClient::delete_session(self, session_id).await
    }

    async fn fetch_account(&self) -> ClientResult<Account> {
        self.account().await
    }

    async fn apply_session(&self, session_id: Option<String>) {
        self.set_session(session_id).await;
    }

    fn authorize_url(&self, request_token: &str) -> String {
        CatalogClient::authorize_url(self, request_token)
    }
}

/// The external browser approval step. The CLI opens or prints the URL and
/// waits for the user to come back; tests inject cancellations.
#[async_trait]
pub trait Authorizer: Send + Sync {
    /// Resolve once the user has approved the token, or fail on
    /// cancellation.
    async fn approve(&self, url: &str) -> Result<()>;
}

/// Drives login, logout, and session restoration.
pub struct AuthFlow {
    endpoints: Arc<dyn SessionEndpoints>,
    authorizer: Arc<dyn Authorizer>,
    storage: SessionStorage,
}

impl std::fmt::Debug for AuthFlow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthFlow").finish_non_exhaustive()
    }
}

impl AuthFlow {
    pub fn new(
        endpoints: Arc<dyn SessionEndpoints>,
        authorizer: Arc<dyn Authorizer>,
        storage: SessionStorage,
    ) -> Self {
        Self {
            endpoints,
            authorizer,
            storage,
        }
    }

    /// Run the full login flow. Returns the authenticated account profile,
    /// or `None` with all session state cleared when any step fails.
    pub async fn login(&self) -> Option<Account> {
        match self.try_login().await {
            Ok(account) => {
                info!("[AuthFlow] session established for {}", account.username);
                Some(account)
            }
            Err(e) => {
                warn!("[AuthFlow] login failed: {e:#}");
                self.abandon().await;
                None
            }
        }
    }

    async fn try_login(&self) -> Result<Account> {
        let token = self
            .endpoints
            .create_request_token()
            .await
            .context("request token")?;

        let url = self.endpoints.authorize_url(&token.request_token);
        self.authorizer
            .approve(&url)
            .await
            .context("browser approval")?;

        let session = self
            .endpoints
            .create_session(&token.request_token)
            .await
            .context("session exchange")?;

        self.storage
            .save(&session.session_id)
            .context("session persistence")?;
        self.endpoints
            .apply_session(Some(session.session_id))
            .await;

        // Profile fetch is part of the flow: a session we cannot use is
        // treated as a failed login.
        self.endpoints.fetch_account().await.context("profile fetch")
    }

    /// Clear local authenticated state, then delete the session remotely.
    /// Remote failure does not restore local state.
    pub async fn logout(&self) {
        self.endpoints.apply_session(None).await;

        if let Some(session_id) = self.storage.load() {
            if let Err(e) = self.endpoints.delete_session(&session_id).await {
                warn!("[AuthFlow] remote session deletion failed: {e}");
            }
        }

        if let Err(e) = self.storage.clear() {
            warn!("[AuthFlow] failed to clear persisted session: {e}");
        }
    }

    /// Rehydrate a persisted session at startup and validate it by
    /// fetching the profile. Clears state when validation fails.
    pub async fn restore(&self) -> Option<Account> {
        let session_id = self.storage.load()?;
        self.endpoints.apply_session(Some(session_id)).await;

        match self.endpoints.fetch_account().await {
            Ok(account) => Some(account),
            Err(e) => {
                warn!("[AuthFlow] persisted session rejected: {e}");
                self.abandon().await;
                None
            }
        }
    }

    async fn abandon(&self) {
        self.endpoints.apply_session(None).await;
        if let Err(e) = self.storage.clear() {
            warn!("[AuthFlow] failed to clear persisted session: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientError;
    use std::sync::Mutex;
    use tokio::sync::RwLock;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum FailAt {
        Nothing,
        Token,
        Exchange,
        Deletion,
        Profile,
    }

    struct MockEndpoints {
        fail_at: FailAt,
        applied: RwLock<Vec<Option<String>>>,
        deleted: RwLock<Vec<String>>,
    }

    impl MockEndpoints {
        fn new(fail_at: FailAt) -> Arc<Self> {
            Arc::new(Self {
                fail_at,
                applied: RwLock::new(Vec::new()),
                deleted: RwLock::new(Vec::new()),
            })
        }

        fn error() -> ClientError {
            ClientError::Status(reqwest::StatusCode::UNAUTHORIZED)
        }
    }

    #[async_trait]
    impl SessionEndpoints for MockEndpoints {
        async fn create_request_token(&self) -> ClientResult<RequestToken> {
            if self.fail_at == FailAt::Token {
                return Err(Self::error());
            }
            Ok(RequestToken {
                success: true,
                request_token: "tok".into(),
                expires_at: String::new(),
            })
        }

        async fn create_session(&self, request_token: &str) -> ClientResult<SessionCreated> {
            assert_eq!(request_token, "tok");
            if self.fail_at == FailAt::Exchange {
                return Err(Self::error());
            }
            Ok(SessionCreated {
                success: true,
                session_id: "sess".into(),
            })
        }

        async fn delete_session(&self, session_id: &str) -> ClientResult<SessionStatus> {
            self.deleted.write().await.push(session_id.to_string());
            if self.fail_at == FailAt::Deletion {
                return Err(Self::error());
            }
            Ok(SessionStatus { success: true })
        }

        async fn fetch_account(&self) -> ClientResult<Account> {
            if self.fail_at == FailAt::Profile {
                return Err(Self::error());
            }
            Ok(serde_json::from_str(r#"{"id": 548, "username": "travisbell"}"#).unwrap())
        }

        async fn apply_session(&self, session_id: Option<String>) {
            self.applied.write().await.push(session_id);
        }

        fn authorize_url(&self, request_token: &str) -> String {
            format!("https://site.example/authenticate/{request_token}")
        }
    }

    struct MockAuthorizer {
        cancel: bool,
        seen_urls: Mutex<Vec<String>>,
    }

    impl MockAuthorizer {
        fn approving() -> Arc<Self> {
            Arc::new(Self {
                cancel: false,
                seen_urls: Mutex::new(Vec::new()),
            })
        }

        fn cancelling() -> Arc<Self> {
            Arc::new(Self {
                cancel: true,
                seen_urls: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl Authorizer for MockAuthorizer {
        async fn approve(&self, url: &str) -> Result<()> {
            self.seen_urls.lock().unwrap().push(url.to_string());
            if self.cancel {
                anyhow::bail!("user dismissed the browser");
            }
            Ok(())
        }
    }

    fn flow_with(
        endpoints: Arc<MockEndpoints>,
        authorizer: Arc<MockAuthorizer>,
        dir: &tempfile::TempDir,
    ) -> AuthFlow {
        AuthFlow::new(
            endpoints,
            authorizer,
            SessionStorage::with_path(dir.path().join("session.json")),
        )
    }

    #[tokio::test]
    async fn successful_login_persists_session_and_returns_account() {
        let dir = tempfile::tempdir().unwrap();
        let endpoints = MockEndpoints::new(FailAt::Nothing);
        let authorizer = MockAuthorizer::approving();
        let flow = flow_with(endpoints.clone(), authorizer.clone(), &dir);

        let account = flow.login().await.expect("login should succeed");
        assert_eq!(account.username, "travisbell");
        assert_eq!(flow.storage.load().as_deref(), Some("sess"));
        assert_eq!(
            endpoints.applied.read().await.as_slice(),
            &[Some("sess".to_string())]
        );
        assert_eq!(
            authorizer.seen_urls.lock().unwrap().as_slice(),
            &["https://site.example/authenticate/tok".to_string()]
        );
    }

    #[tokio::test]
    async fn login_failure_at_token_request_leaves_unauthenticated() {
        let dir = tempfile::tempdir().unwrap();
        let endpoints = MockEndpoints::new(FailAt::Token);
        let flow = flow_with(endpoints.clone(), MockAuthorizer::approving(), &dir);

        assert!(flow.login().await.is_none());
        assert!(flow.storage.load().is_none());
        // Only the abandon reset was applied
        assert_eq!(endpoints.applied.read().await.as_slice(), &[None]);
    }

    #[tokio::test]
    async fn user_cancellation_collapses_to_unauthenticated() {
        let dir = tempfile::tempdir().unwrap();
        let endpoints = MockEndpoints::new(FailAt::Nothing);
        let flow = flow_with(endpoints.clone(), MockAuthorizer::cancelling(), &dir);

        assert!(flow.login().await.is_none());
        assert!(flow.storage.load().is_none());
        assert_eq!(endpoints.applied.read().await.as_slice(), &[None]);
    }

    #[tokio::test]
    async fn login_failure_at_exchange_leaves_unauthenticated() {
        let dir = tempfile::tempdir().unwrap();
        let endpoints = MockEndpoints::new(FailAt::Exchange);
        let flow = flow_with(endpoints.clone(), MockAuthorizer::approving(), &dir);

        assert!(flow.login().await.is_none());
        assert!(flow.storage.load().is_none());
    }

    #[tokio::test]
    async fn login_failure_at_profile_fetch_rolls_back_persisted_session() {
        let dir = tempfile::tempdir().unwrap();
        let endpoints = MockEndpoints::new(FailAt::Profile);
        let flow = flow_with(endpoints.clone(), MockAuthorizer::approving(), &dir);

        assert!(flow.login().await.is_none());
        // The session was persisted mid-flow, then rolled back
        assert!(flow.storage.load().is_none());
        let applied = endpoints.applied.read().await;
        assert_eq!(applied.last(), Some(&None));
    }

    #[tokio::test]
    async fn logout_clears_local_state_even_when_remote_deletion_fails() {
        let dir = tempfile::tempdir().unwrap();
        let endpoints = MockEndpoints::new(FailAt::Deletion);
        let flow = flow_with(endpoints.clone(), MockAuthorizer::approving(), &dir);
        flow.storage.save("sess").unwrap();

        flow.logout().await;

        assert!(flow.storage.load().is_none());
        assert_eq!(endpoints.applied.read().await.as_slice(), &[None]);
        assert_eq!(endpoints.deleted.read().await.as_slice(), &["sess".to_string()]);
    }

    #[tokio::test]
    async fn restore_validates_persisted_session() {
        let dir = tempfile::tempdir().unwrap();
        let endpoints = MockEndpoints::new(FailAt::Nothing);
        let flow = flow_with(endpoints.clone(), MockAuthorizer::approving(), &dir);
        flow.storage.save("sess").unwrap();

        let account = flow.restore().await.expect("restore should succeed");
        assert_eq!(account.id, 548);
        assert_eq!(
            endpoints.applied.read().await.as_slice(),
            &[Some("sess".to_string())]
        );
    }

    #[tokio::test]
    async fn restore_with_rejected_session_clears_state() {
        let dir = tempfile::tempdir().unwrap();
        let endpoints = MockEndpoints::new(FailAt::Profile);
        let flow = flow_with(endpoints.clone(), MockAuthorizer::approving(), &dir);
        flow.storage.save("sess").unwrap();

        assert!(flow.restore().await.is_none());
        assert!(flow.storage.load().is_none());
    }

    #[tokio::test]
    async fn restore_without_persisted_session_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let endpoints = MockEndpoints::new(FailAt::Nothing);
        let flow = flow_with(endpoints.clone(), MockAuthorizer::approving(), &dir);

        assert!(flow.restore().await.is_none());
        assert!(endpoints.applied.read().await.is_empty());
    }
}
