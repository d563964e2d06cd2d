use shelter_core::{paths, AuthResponse, AuthUser, LoginRequest, RegisterRequest};
use tracing::info;

use crate::client::{decode_json, pass_through};
use crate::error::ClientError;
use crate::request::ApiRequest;
use crate::session::RefreshedSession;
use crate::AuthenticatedClient;

/// Logs in and stores the issued access token in the client's session.
/// The refresh credential arrives as a cookie and stays in the transport's
/// cookie jar.
pub async fn login(
    client: &AuthenticatedClient,
    request: &LoginRequest,
) -> Result<AuthResponse, ClientError> {
    let response = client
        .send_once(ApiRequest::post(paths::AUTH_LOGIN).json(request)?)
        .await?;
    let auth: AuthResponse = decode_json(response).await?;
    client
        .session()
        .store(&RefreshedSession::from(auth.clone()));
    info!(email = %request.email, "logged in");
    Ok(auth)
}

pub async fn register(
    client: &AuthenticatedClient,
    request: &RegisterRequest,
) -> Result<AuthUser, ClientError> {
    let response = client
        .send_once(ApiRequest::post(paths::AUTH_REGISTER).json(request)?)
        .await?;
    decode_json(response).await
}

/// Ends the session on the server and forgets it locally. Local state is
/// cleared even when the server call fails.
pub async fn logout(client: &AuthenticatedClient) -> Result<(), ClientError> {
    let result = match client.send_once(ApiRequest::post(paths::AUTH_LOGOUT)).await {
        Ok(response) => pass_through(response).await.map(|_| ()),
        Err(err) => Err(err),
    };
    client.session().clear();
    result
}

pub async fn me(client: &AuthenticatedClient) -> Result<AuthUser, ClientError> {
    client.get_json(paths::ME).await
}
