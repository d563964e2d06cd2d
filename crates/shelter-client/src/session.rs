use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use shelter_core::{AuthResponse, AuthUser};

use crate::error::RefreshError;

const MAX_EXPIRY_SECONDS: i64 = 366 * 24 * 60 * 60;

/// Credentials issued by a successful login or refresh.
#[derive(Clone)]
pub struct RefreshedSession {
    pub access_token: String,
    pub expires_in: u64,
}

impl RefreshedSession {
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        let seconds = i64::try_from(self.expires_in)
            .unwrap_or(MAX_EXPIRY_SECONDS)
            .min(MAX_EXPIRY_SECONDS);
        Utc::now() + ChronoDuration::seconds(seconds)
    }
}

impl From<AuthResponse> for RefreshedSession {
    fn from(value: AuthResponse) -> Self {
        Self {
            access_token: value.access_token,
            expires_in: value.expires_in_seconds,
        }
    }
}

impl std::fmt::Debug for RefreshedSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshedSession")
            .field("access_token", &"<redacted>")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

/// Rotates session credentials. Called at most once per refresh cycle no
/// matter how many requests are waiting on it.
#[async_trait]
pub trait Refresher: Send + Sync {
    async fn refresh(&self) -> Result<RefreshedSession, RefreshError>;
}

/// Local, non-authoritative session state: the bearer token attached to
/// outgoing calls and whatever display data the caller caches next to it.
pub trait SessionStore: Send + Sync {
    fn access_token(&self) -> Option<String>;
    fn store(&self, session: &RefreshedSession);
    /// Forgets every piece of cached session state.
    fn clear(&self);
}

/// Receives control when the session cannot be recovered.
pub trait LoginRedirect: Send + Sync {
    fn redirect_to_login(&self, error: &RefreshError);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRedirect;

impl LoginRedirect for NoopRedirect {
    fn redirect_to_login(&self, _error: &RefreshError) {}
}

#[derive(Default)]
struct MemorySession {
    access_token: Option<String>,
    expires_at: Option<DateTime<Utc>>,
    user: Option<AuthUser>,
}

#[derive(Default)]
pub struct MemorySessionStore {
    inner: RwLock<MemorySession>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn with_access_token(token: impl Into<String>) -> Self {
        Self {
            inner: RwLock::new(MemorySession {
                access_token: Some(token.into()),
                ..MemorySession::default()
            }),
        }
    }

    pub fn set_user(&self, user: AuthUser) {
        self.write(|session| session.user = Some(user));
    }

    #[must_use]
    pub fn user(&self) -> Option<AuthUser> {
        self.read(|session| session.user.clone())
    }

    #[must_use]
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.read(|session| session.expires_at)
    }

    fn read<T>(&self, f: impl FnOnce(&MemorySession) -> T) -> T {
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    fn write(&self, f: impl FnOnce(&mut MemorySession)) {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard);
    }
}

impl SessionStore for MemorySessionStore {
    fn access_token(&self) -> Option<String> {
        self.read(|session| session.access_token.clone())
    }

    fn store(&self, refreshed: &RefreshedSession) {
        let expires_at = refreshed.expires_at();
        self.write(|session| {
            session.access_token = Some(refreshed.access_token.clone());
            session.expires_at = Some(expires_at);
        });
    }

    fn clear(&self) {
        self.write(|session| *session = MemorySession::default());
    }
}
