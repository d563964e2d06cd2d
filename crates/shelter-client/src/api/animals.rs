use shelter_core::{
    paths, Animal, AnimalFilters, AnimalRequest, PageQuery, PageResponse, SortDirection,
    DEFAULT_ANIMAL_PAGE_SIZE,
};

use crate::error::ClientError;
use crate::request::ApiRequest;
use crate::AuthenticatedClient;

#[must_use]
pub fn default_query() -> PageQuery {
    PageQuery::new(DEFAULT_ANIMAL_PAGE_SIZE, "name", SortDirection::Asc)
}

pub async fn list(
    client: &AuthenticatedClient,
    query: &PageQuery,
    filters: &AnimalFilters,
) -> Result<PageResponse<Animal>, ClientError> {
    let request = ApiRequest::get(paths::ANIMALS)
        .query_pairs(query.to_params())
        .query_pairs(filters.to_params());
    client.send_json(request).await
}

pub async fn get(client: &AuthenticatedClient, id: i64) -> Result<Animal, ClientError> {
    client.get_json(&format!("{}/{id}", paths::ANIMALS)).await
}

pub async fn create(
    client: &AuthenticatedClient,
    animal: &AnimalRequest,
) -> Result<Animal, ClientError> {
    let request = ApiRequest::post(format!("{}/add", paths::ANIMALS)).json(animal)?;
    client.send_json(request).await
}

pub async fn update(
    client: &AuthenticatedClient,
    id: i64,
    animal: &AnimalRequest,
) -> Result<Animal, ClientError> {
    let request = ApiRequest::put(format!("{}/update/{id}", paths::ANIMALS)).json(animal)?;
    client.send_json(request).await
}

pub async fn delete(client: &AuthenticatedClient, id: i64) -> Result<(), ClientError> {
    client
        .send_empty(ApiRequest::delete(format!("{}/delete/{id}", paths::ANIMALS)))
        .await
}
