//! Typed wrappers over the shelter REST endpoints. Everything except the
//! session-establishing auth calls goes through [`AuthenticatedClient::send`].
//!
//! [`AuthenticatedClient::send`]: crate::AuthenticatedClient::send

pub mod adoptions;
pub mod animals;
pub mod applications;
pub mod auth;
pub mod dog_facts;
pub mod medical_records;
pub mod vaccinations;
