use serde::Serialize;

pub(crate) fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) fn print_empty(message: &str) {
    println!("{message}");
}

/// Transport shared by API calls and the session refresh; `cookies` holds
/// the refresh credential.
pub(crate) fn build_http_client(
    cookies: std::sync::Arc<reqwest::cookie::Jar>,
    insecure: bool,
) -> anyhow::Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .cookie_provider(cookies)
        .danger_accept_invalid_certs(insecure)
        .build()?;
    Ok(client)
}
