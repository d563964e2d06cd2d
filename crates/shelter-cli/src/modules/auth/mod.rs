mod actions;
pub(crate) mod args;
mod session;
mod token_store;

pub(crate) use actions::{handle_login, handle_logout, handle_register, handle_whoami};
pub(crate) use session::{forget_session, CliSession};
#[cfg(test)]
pub(crate) use actions::login_with_password;
#[cfg(test)]
pub(crate) use session::{read_refresh_cookie, seed_refresh_cookie};
#[cfg(test)]
pub(crate) use token_store::{
    clear_keyring_mock, load_access_token, load_refresh_token, lock_keyring_tests_async,
    lock_keyring_tests_sync, store_access_token, store_refresh_token,
};
