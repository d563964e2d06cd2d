use shelter_core::paths;

use crate::error::ClientError;
use crate::request::ApiRequest;
use crate::AuthenticatedClient;

/// Fetches `limit` random dog facts relayed by the backend.
pub async fn list(client: &AuthenticatedClient, limit: u32) -> Result<Vec<String>, ClientError> {
    let request = ApiRequest::get(paths::DOG_FACTS).query("limit", limit);
    client.send_json(request).await
}
