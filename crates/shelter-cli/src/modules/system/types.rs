use serde::{Deserialize, Serialize};
use shelter_client::AuthenticatedClient;
use shelter_core::AuthUser;
use std::collections::HashMap;

#[derive(Serialize, Deserialize, Default)]
pub struct CliConfig {
    #[serde(default)]
    pub current_context: Option<String>,
    #[serde(default)]
    pub contexts: HashMap<String, CliContext>,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct CliContext {
    pub addr: String,
    /// Profile cached by the last login or `whoami`; display only.
    #[serde(default)]
    pub user: Option<AuthUser>,
    #[serde(default)]
    pub access_expires_at: Option<String>,
}

impl CliContext {
    pub fn new(addr: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            user: None,
            access_expires_at: None,
        }
    }
}

pub struct CommandContext<'a> {
    pub client: AuthenticatedClient,
    pub addr: &'a str,
    pub context_name: String,
    pub config: &'a mut CliConfig,
}

impl CommandContext<'_> {
    /// Context entry for the active context, created on first use.
    pub fn context_entry(&mut self) -> &mut CliContext {
        let addr = self.addr.to_string();
        let entry = self
            .config
            .contexts
            .entry(self.context_name.clone())
            .or_insert_with(|| CliContext::new(addr.clone()));
        entry.addr = addr;
        entry
    }
}
