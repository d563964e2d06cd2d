use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use reqwest::cookie::{CookieStore, Jar};
use reqwest::Url;
use shelter_client::{
    AuthenticatedClient, LoginRedirect, MemorySessionStore, RefreshError, RefreshedSession,
    SessionStore,
};
use shelter_core::{paths, REFRESH_COOKIE, REFRESH_COOKIE_PATH};
use tracing::{debug, warn};

use super::token_store::{
    delete_access_token, delete_refresh_token, load_access_token, load_refresh_token,
    store_access_token, store_refresh_token,
};
use crate::modules::system::http::build_http_client;
use crate::modules::system::CliConfig;

/// Session state of one config context, persisted in the OS keyring.
pub(crate) struct KeyringSessionStore {
    context_name: String,
    access_token: RwLock<Option<String>>,
    expires_at: RwLock<Option<DateTime<Utc>>>,
    cleared: AtomicBool,
}

impl KeyringSessionStore {
    pub(crate) fn load(context_name: &str) -> anyhow::Result<Self> {
        Ok(Self {
            context_name: context_name.to_string(),
            access_token: RwLock::new(load_access_token(context_name)?),
            expires_at: RwLock::new(None),
            cleared: AtomicBool::new(false),
        })
    }

    pub(crate) fn was_cleared(&self) -> bool {
        self.cleared.load(Ordering::SeqCst)
    }

    pub(crate) fn expires_at(&self) -> Option<DateTime<Utc>> {
        *self.expires_at.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStore for KeyringSessionStore {
    fn access_token(&self) -> Option<String> {
        self.access_token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn store(&self, session: &RefreshedSession) {
        *self
            .access_token
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(session.access_token.clone());
        *self
            .expires_at
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(session.expires_at());
        self.cleared.store(false, Ordering::SeqCst);
        if let Err(err) = store_access_token(&self.context_name, &session.access_token) {
            warn!(context = %self.context_name, "failed to persist access token: {err}");
        }
    }

    fn clear(&self) {
        *self
            .access_token
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
        *self
            .expires_at
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
        self.cleared.store(true, Ordering::SeqCst);
        if let Err(err) = forget_session(&self.context_name) {
            warn!(context = %self.context_name, "failed to clear stored session: {err}");
        }
    }
}

/// Sends the user back to `shelter login` once the session is gone.
#[derive(Default)]
pub(crate) struct TerminalRedirect {
    fired: AtomicBool,
}

impl TerminalRedirect {
    pub(crate) fn fired(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }
}

impl LoginRedirect for TerminalRedirect {
    fn redirect_to_login(&self, error: &RefreshError) {
        self.fired.store(true, Ordering::SeqCst);
        debug!(error = %error, "session could not be refreshed");
        eprintln!("session expired; run `shelter login`");
    }
}

/// Removes every stored credential of a context.
pub(crate) fn forget_session(context_name: &str) -> anyhow::Result<()> {
    delete_access_token(context_name)?;
    delete_refresh_token(context_name)?;
    Ok(())
}

/// Client wiring for one CLI invocation: session store, cookie jar seeded
/// with the stored refresh credential, and the login redirect.
pub(crate) struct CliSession {
    client: AuthenticatedClient,
    cookies: Arc<Jar>,
    store: Option<Arc<KeyringSessionStore>>,
    redirect: Arc<TerminalRedirect>,
    context_name: String,
    refresh_url: Url,
}

impl CliSession {
    /// With `token` set the session lives only in memory and nothing is
    /// read from or written to the keyring.
    pub(crate) fn open(
        addr: &str,
        context_name: &str,
        token: Option<String>,
        insecure: bool,
    ) -> anyhow::Result<Self> {
        let refresh_url = refresh_url(addr)?;
        let cookies = Arc::new(Jar::default());
        let redirect = Arc::new(TerminalRedirect::default());

        let (session, store): (Arc<dyn SessionStore>, _) = match token {
            Some(token) => (
                Arc::new(MemorySessionStore::with_access_token(token)) as Arc<dyn SessionStore>,
                None,
            ),
            None => {
                if let Some(refresh_token) = load_refresh_token(context_name)? {
                    seed_refresh_cookie(&cookies, &refresh_url, &refresh_token);
                }
                let store = Arc::new(KeyringSessionStore::load(context_name)?);
                (store.clone() as Arc<dyn SessionStore>, Some(store))
            }
        };

        let http = build_http_client(cookies.clone(), insecure)?;
        let client = AuthenticatedClient::builder(addr)
            .http_client(http)
            .session_store(session)
            .login_redirect(redirect.clone())
            .build()?;

        Ok(Self {
            client,
            cookies,
            store,
            redirect,
            context_name: context_name.to_string(),
            refresh_url,
        })
    }

    pub(crate) fn client(&self) -> AuthenticatedClient {
        self.client.clone()
    }

    /// Writes what the invocation learned back to disk: the rotated refresh
    /// credential and token expiry, or the loss of the session.
    pub(crate) fn finish(&self, config: &mut CliConfig) -> anyhow::Result<()> {
        let Some(store) = self.store.as_ref() else {
            return Ok(());
        };
        if store.was_cleared() || self.redirect.fired() {
            if let Some(context) = config.contexts.get_mut(&self.context_name) {
                context.user = None;
                context.access_expires_at = None;
            }
            return Ok(());
        }
        if let Some(refresh_token) = read_refresh_cookie(&self.cookies, &self.refresh_url) {
            store_refresh_token(&self.context_name, &refresh_token)?;
        }
        if let (Some(expires_at), Some(context)) = (
            store.expires_at(),
            config.contexts.get_mut(&self.context_name),
        ) {
            context.access_expires_at = Some(expires_at.to_rfc3339());
        }
        Ok(())
    }
}

fn refresh_url(addr: &str) -> anyhow::Result<Url> {
    let url = format!("{}{}", addr.trim_end_matches('/'), paths::AUTH_REFRESH);
    Url::parse(&url).map_err(|err| anyhow::anyhow!("invalid server address {addr}: {err}"))
}

pub(crate) fn seed_refresh_cookie(cookies: &Jar, url: &Url, refresh_token: &str) {
    let cookie = format!("{REFRESH_COOKIE}={refresh_token}; Path={REFRESH_COOKIE_PATH}; HttpOnly");
    cookies.add_cookie_str(&cookie, url);
}

pub(crate) fn read_refresh_cookie(cookies: &Jar, url: &Url) -> Option<String> {
    let header = cookies.cookies(url)?;
    let header = header.to_str().ok()?;
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == REFRESH_COOKIE && !value.is_empty()).then(|| value.to_string())
    })
}
