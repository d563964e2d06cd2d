#![allow(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc)]

//! HTTP client for the shelter backend.
//!
//! Every call made through [`AuthenticatedClient::send`] carries the current
//! session credentials. When the backend answers `401 Unauthorized` the
//! client refreshes the session once and replays the call; concurrent
//! failures share a single refresh.

pub mod api;
mod client;
mod coordinator;
pub mod error;
mod request;
mod session;

#[cfg(test)]
mod tests;

pub use client::{AuthenticatedClient, AuthenticatedClientBuilder, HttpRefresher};
pub use error::{ClientError, ExpiredReason, RefreshError};
pub use request::ApiRequest;
pub use session::{
    LoginRedirect, MemorySessionStore, NoopRedirect, RefreshedSession, Refresher, SessionStore,
};
