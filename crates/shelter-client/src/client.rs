use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use shelter_core::{paths, AuthResponse};
use tracing::{debug, info, warn};

use crate::coordinator::RefreshCoordinator;
use crate::error::{ClientError, ExpiredReason, RefreshError};
use crate::request::ApiRequest;
use crate::session::{
    LoginRedirect, MemorySessionStore, NoopRedirect, RefreshedSession, Refresher, SessionStore,
};

/// Refreshes the session by posting to the auth refresh endpoint. The
/// refresh credential travels as a cookie, so `http` must be the same
/// cookie-carrying client the API calls go through.
#[derive(Clone)]
pub struct HttpRefresher {
    http: reqwest::Client,
    url: String,
}

impl HttpRefresher {
    pub fn new(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            url: format!("{}{}", base_url.trim_end_matches('/'), paths::AUTH_REFRESH),
        }
    }
}

#[async_trait]
impl Refresher for HttpRefresher {
    async fn refresh(&self) -> Result<RefreshedSession, RefreshError> {
        let start = Instant::now();
        let response = self
            .http
            .post(&self.url)
            .send()
            .await
            .map_err(|err| RefreshError::transport(&err))?;
        let status = response.status();
        debug!(
            url = %self.url,
            status = %status,
            elapsed_ms = start.elapsed().as_millis(),
            "refresh response"
        );
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|err| RefreshError {
                    status: Some(status),
                    ..RefreshError::transport(&err)
                })?;
            return Err(RefreshError::rejected(status, body));
        }
        let auth: AuthResponse = response
            .json()
            .await
            .map_err(|err| RefreshError::transport(&err))?;
        Ok(auth.into())
    }
}

struct Inner {
    http: reqwest::Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
    refresher: Arc<dyn Refresher>,
    redirect: Arc<dyn LoginRedirect>,
    coordinator: RefreshCoordinator,
}

/// API client that attaches session credentials to every call and
/// recovers from expired credentials with a shared refresh.
///
/// Clones share one session and one refresh coordinator.
#[derive(Clone)]
pub struct AuthenticatedClient {
    inner: Arc<Inner>,
}

pub struct AuthenticatedClientBuilder {
    base_url: String,
    http: Option<reqwest::Client>,
    session: Option<Arc<dyn SessionStore>>,
    refresher: Option<Arc<dyn Refresher>>,
    redirect: Option<Arc<dyn LoginRedirect>>,
}

impl AuthenticatedClientBuilder {
    /// Client used for API calls and, unless a refresher is supplied, for
    /// the refresh call. It should keep cookies.
    #[must_use]
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    #[must_use]
    pub fn session_store(mut self, session: Arc<dyn SessionStore>) -> Self {
        self.session = Some(session);
        self
    }

    #[must_use]
    pub fn refresher(mut self, refresher: Arc<dyn Refresher>) -> Self {
        self.refresher = Some(refresher);
        self
    }

    #[must_use]
    pub fn login_redirect(mut self, redirect: Arc<dyn LoginRedirect>) -> Self {
        self.redirect = Some(redirect);
        self
    }

    pub fn build(self) -> Result<AuthenticatedClient, ClientError> {
        let http = match self.http {
            Some(http) => http,
            None => reqwest::Client::builder().cookie_store(true).build()?,
        };
        let refresher = self
            .refresher
            .unwrap_or_else(|| Arc::new(HttpRefresher::new(http.clone(), &self.base_url)));
        Ok(AuthenticatedClient {
            inner: Arc::new(Inner {
                http,
                base_url: self.base_url.trim_end_matches('/').to_string(),
                session: self
                    .session
                    .unwrap_or_else(|| Arc::new(MemorySessionStore::default())),
                refresher,
                redirect: self.redirect.unwrap_or_else(|| Arc::new(NoopRedirect)),
                coordinator: RefreshCoordinator::default(),
            }),
        })
    }
}

impl AuthenticatedClient {
    pub fn builder(base_url: impl Into<String>) -> AuthenticatedClientBuilder {
        AuthenticatedClientBuilder {
            base_url: base_url.into(),
            http: None,
            session: None,
            refresher: None,
            redirect: None,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    pub fn session(&self) -> &Arc<dyn SessionStore> {
        &self.inner.session
    }

    #[cfg(test)]
    pub(crate) fn coordinator(&self) -> &RefreshCoordinator {
        &self.inner.coordinator
    }

    /// Sends `request` with the current credentials.
    ///
    /// A `401 Unauthorized` answer triggers one session refresh (shared
    /// with any other call failing at the same time) and one replay of the
    /// request. Every other answer, success or not, is returned unchanged.
    pub async fn send(&self, mut request: ApiRequest) -> Result<reqwest::Response, ClientError> {
        loop {
            let epoch = self.inner.coordinator.epoch();
            let response = self.dispatch(&request).await?;
            if response.status() != StatusCode::UNAUTHORIZED {
                return Ok(response);
            }
            if request.retried {
                warn!(
                    method = %request.method,
                    path = %request.path,
                    "request unauthorized after session refresh"
                );
                return Err(ClientError::AuthorizationExpired(
                    ExpiredReason::RetryRejected,
                ));
            }
            request.retried = true;
            info!(
                method = %request.method,
                path = %request.path,
                "request unauthorized; refreshing session"
            );

            let session = &self.inner.session;
            match self
                .inner
                .coordinator
                .refresh(epoch, self.inner.refresher.as_ref(), |refreshed| {
                    session.store(refreshed)
                })
                .await
            {
                Ok(settled) => debug!(?settled, path = %request.path, "retrying request"),
                Err(rejected) => {
                    if rejected.led {
                        self.expire_session(&rejected.reason);
                    }
                    return Err(ClientError::AuthorizationExpired(rejected.reason));
                }
            }
        }
    }

    /// Sends `request` once without refresh handling. Used for calls that
    /// establish a session rather than rely on one.
    pub async fn send_once(&self, request: ApiRequest) -> Result<reqwest::Response, ClientError> {
        self.dispatch(&request).await
    }

    pub async fn send_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ClientError> {
        let response = self.send(request).await?;
        decode_json(response).await
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        self.send_json(ApiRequest::get(path)).await
    }

    /// Sends `request` and discards a successful body.
    pub async fn send_empty(&self, request: ApiRequest) -> Result<(), ClientError> {
        let response = self.send(request).await?;
        pass_through(response).await?;
        Ok(())
    }

    fn expire_session(&self, reason: &ExpiredReason) {
        if let ExpiredReason::RefreshFailed(error) = reason {
            self.inner.session.clear();
            self.inner.redirect.redirect_to_login(error);
        }
    }

    async fn dispatch(&self, request: &ApiRequest) -> Result<reqwest::Response, ClientError> {
        let url = request.url(&self.inner.base_url);
        let mut builder = self.inner.http.request(request.method.clone(), &url);
        if let Some(token) = self.inner.session.access_token() {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }
        debug!(method = %request.method, path = %request.path, "http request");
        let start = Instant::now();
        let response = builder.send().await?;
        debug!(
            method = %request.method,
            path = %request.path,
            status = %response.status(),
            retried = request.retried,
            elapsed_ms = start.elapsed().as_millis(),
            "http response"
        );
        Ok(response)
    }
}

/// Turns a non-success response into [`ClientError::Server`].
pub(crate) async fn pass_through(
    response: reqwest::Response,
) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ClientError::Server { status, body })
}

pub(crate) async fn decode_json<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let response = pass_through(response).await?;
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}
