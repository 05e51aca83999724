//! Authentication state backed by a token store

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{error, info, warn};

use crate::error::{ApiError, StoreError};
use crate::models::User;
use crate::traits::{ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, TokenStore};
use crate::use_cases::AuthUseCase;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub error: Option<String>,
    pub user: Option<User>,
}

pub struct AuthViewModel {
    use_case: AuthUseCase,
    store: Arc<dyn TokenStore>,
    state: Mutex<AuthState>,
}

impl AuthViewModel {
    /// Builds the view model, authenticated when both tokens are stored.
    ///
    /// Token expiry is not checked.
    pub async fn new(use_case: AuthUseCase, store: Arc<dyn TokenStore>) -> Self {
        let is_authenticated = match Self::has_tokens(store.as_ref()).await {
            Ok(present) => present,
            Err(e) => {
                warn!("Could not read stored tokens: {}", e);
                false
            }
        };

        Self {
            use_case,
            store,
            state: Mutex::new(AuthState {
                is_authenticated,
                ..AuthState::default()
            }),
        }
    }

    async fn has_tokens(store: &dyn TokenStore) -> Result<bool, StoreError> {
        let access = store.get(ACCESS_TOKEN_KEY).await?;
        let refresh = store.get(REFRESH_TOKEN_KEY).await?;
        Ok(access.is_some() && refresh.is_some())
    }

    pub fn state(&self) -> AuthState {
        self.state.lock().clone()
    }

    pub async fn login(&self, username: &str, password: &str) {
        self.begin();
        let result = self.use_case.login(username, password).await;
        self.finish(result).await;
    }

    pub async fn signup(&self, username: &str, email: &str, password: &str) {
        self.begin();
        let result = self.use_case.signup(username, email, password).await;
        self.finish(result).await;
    }

    pub async fn logout(&self) {
        for key in [ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY] {
            if let Err(e) = self.store.remove(key).await {
                error!("Failed to remove {}: {}", key, e);
            }
        }

        let mut state = self.state.lock();
        state.is_authenticated = false;
        state.user = None;
        info!("Logged out");
    }

    fn begin(&self) {
        let mut state = self.state.lock();
        state.is_loading = true;
        state.error = None;
    }

    async fn finish(&self, result: Result<User, ApiError>) {
        let outcome = match result {
            Ok(user) => self.persist_tokens(&user).await.map(|()| user).map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };

        let mut state = self.state.lock();
        match outcome {
            Ok(user) => {
                info!("Authenticated as {}", user.username);
                state.user = Some(user);
                state.is_authenticated = true;
            }
            Err(message) => {
                error!("Authentication failed: {}", message);
                state.error = Some(message);
            }
        }
        state.is_loading = false;
    }

    /// Store both tokens; empty tokens are skipped.
    ///
    /// When a write fails, tokens already written by this call are removed
    /// again so the store never holds half a session.
    async fn persist_tokens(&self, user: &User) -> Result<(), StoreError> {
        let mut written = Vec::new();
        for (key, value) in [
            (ACCESS_TOKEN_KEY, &user.access_token),
            (REFRESH_TOKEN_KEY, &user.refresh_token),
        ] {
            if value.is_empty() {
                continue;
            }
            if let Err(e) = self.store.set(key, value).await {
                for key in written {
                    if let Err(cleanup) = self.store.remove(key).await {
                        warn!("Failed to roll back {}: {}", key, cleanup);
                    }
                }
                return Err(e);
            }
            written.push(key);
        }
        Ok(())
    }
}
