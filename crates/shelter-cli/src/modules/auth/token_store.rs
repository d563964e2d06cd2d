#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::sync::{Mutex, OnceLock};
#[cfg(test)]
use tokio::sync::Mutex as TokioMutex;
use tracing::debug;
#[cfg(not(test))]
use tracing::warn;

const KIND_ACCESS: &str = "access";
const KIND_REFRESH: &str = "refresh";

fn keyring_key(kind: &str, context_name: &str) -> String {
    format!("{kind}::{context_name}")
}

#[cfg(test)]
fn keyring_store() -> &'static Mutex<HashMap<String, String>> {
    static STORE: OnceLock<Mutex<HashMap<String, String>>> = OnceLock::new();
    STORE.get_or_init(|| Mutex::new(HashMap::new()))
}

#[cfg(test)]
static KEYRING_TEST_LOCK: OnceLock<TokioMutex<()>> = OnceLock::new();

#[cfg(test)]
pub(crate) fn lock_keyring_tests_sync() -> tokio::sync::MutexGuard<'static, ()> {
    KEYRING_TEST_LOCK
        .get_or_init(|| TokioMutex::new(()))
        .blocking_lock()
}

#[cfg(test)]
pub(crate) async fn lock_keyring_tests_async() -> tokio::sync::MutexGuard<'static, ()> {
    KEYRING_TEST_LOCK
        .get_or_init(|| TokioMutex::new(()))
        .lock()
        .await
}

#[cfg(not(test))]
fn keyring_entry(kind: &str, context_name: &str) -> anyhow::Result<keyring::Entry> {
    let service = "shelter-cli";
    let key = keyring_key(kind, context_name);
    keyring::Entry::new(service, &key)
        .map_err(|err| anyhow::anyhow!("failed to access keyring: {err}"))
}

#[cfg(not(test))]
fn keyring_set(kind: &str, context_name: &str, value: &str) -> anyhow::Result<()> {
    let entry = keyring_entry(kind, context_name)?;
    entry
        .set_password(value)
        .map_err(|err| anyhow::anyhow!("failed to store {kind} token: {err}"))
}

#[cfg(not(test))]
fn keyring_get(kind: &str, context_name: &str) -> anyhow::Result<Option<String>> {
    let entry = keyring_entry(kind, context_name)?;
    match entry.get_password() {
        Ok(value) => Ok(Some(value)),
        Err(keyring::Error::NoEntry) => Ok(None),
        Err(err) => Err(anyhow::anyhow!(
            "failed to load {kind} token from keychain for context '{}': {err}",
            context_name
        )),
    }
}

#[cfg(not(test))]
fn keyring_delete(kind: &str, context_name: &str) -> anyhow::Result<()> {
    let entry = keyring_entry(kind, context_name)?;
    match entry.delete_password() {
        Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
        Err(err) => {
            warn!(context = %context_name, "failed to delete {kind} token: {err}");
            Ok(())
        }
    }
}

#[cfg(test)]
fn keyring_set(kind: &str, context_name: &str, value: &str) -> anyhow::Result<()> {
    let key = keyring_key(kind, context_name);
    let mut store = keyring_store()
        .lock()
        .map_err(|_| anyhow::anyhow!("failed to lock keyring store"))?;
    store.insert(key, value.to_string());
    Ok(())
}

#[cfg(test)]
fn keyring_get(kind: &str, context_name: &str) -> anyhow::Result<Option<String>> {
    let key = keyring_key(kind, context_name);
    let store = keyring_store()
        .lock()
        .map_err(|_| anyhow::anyhow!("failed to lock keyring store"))?;
    Ok(store.get(&key).cloned())
}

#[cfg(test)]
fn keyring_delete(kind: &str, context_name: &str) -> anyhow::Result<()> {
    let key = keyring_key(kind, context_name);
    let mut store = keyring_store()
        .lock()
        .map_err(|_| anyhow::anyhow!("failed to lock keyring store"))?;
    store.remove(&key);
    Ok(())
}

#[cfg(test)]
pub(crate) fn clear_keyring_mock() {
    if let Ok(mut map) = keyring_store().lock() {
        map.clear();
    }
}

pub(crate) fn store_access_token(context_name: &str, access_token: &str) -> anyhow::Result<()> {
    keyring_set(KIND_ACCESS, context_name, access_token)?;
    debug!(context = %context_name, "stored access token in keyring");
    Ok(())
}

pub(crate) fn load_access_token(context_name: &str) -> anyhow::Result<Option<String>> {
    keyring_get(KIND_ACCESS, context_name)
}

pub(crate) fn delete_access_token(context_name: &str) -> anyhow::Result<()> {
    keyring_delete(KIND_ACCESS, context_name)
}

pub(crate) fn store_refresh_token(context_name: &str, refresh_token: &str) -> anyhow::Result<()> {
    keyring_set(KIND_REFRESH, context_name, refresh_token)?;
    debug!(context = %context_name, "stored refresh token in keyring");
    Ok(())
}

pub(crate) fn load_refresh_token(context_name: &str) -> anyhow::Result<Option<String>> {
    keyring_get(KIND_REFRESH, context_name)
}

pub(crate) fn delete_refresh_token(context_name: &str) -> anyhow::Result<()> {
    keyring_delete(KIND_REFRESH, context_name)
}
