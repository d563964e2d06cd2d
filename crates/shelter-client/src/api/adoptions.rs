use shelter_core::{
    paths, Adoption, PageQuery, PageResponse, SortDirection, DEFAULT_ADOPTION_PAGE_SIZE,
};

use crate::error::ClientError;
use crate::request::ApiRequest;
use crate::AuthenticatedClient;

#[must_use]
pub fn default_query() -> PageQuery {
    PageQuery::new(DEFAULT_ADOPTION_PAGE_SIZE, "adoptionDate", SortDirection::Desc)
}

pub async fn list(
    client: &AuthenticatedClient,
    query: &PageQuery,
) -> Result<PageResponse<Adoption>, ClientError> {
    client
        .send_json(ApiRequest::get(paths::ADOPTIONS).query_pairs(query.to_params()))
        .await
}

pub async fn get(client: &AuthenticatedClient, id: i64) -> Result<Adoption, ClientError> {
    client.get_json(&format!("{}/{id}", paths::ADOPTIONS)).await
}
