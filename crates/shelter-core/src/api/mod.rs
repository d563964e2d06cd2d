pub mod auth;
pub mod page;

pub use auth::*;
pub use page::*;
