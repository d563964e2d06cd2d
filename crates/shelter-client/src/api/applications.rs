use shelter_core::{
    paths, AdoptionApplication, AdoptionApplicationRequest, ApplicantApplication, PageQuery,
    PageResponse, SortDirection, Status, DEFAULT_APPLICATION_PAGE_SIZE,
};

use crate::error::ClientError;
use crate::request::ApiRequest;
use crate::AuthenticatedClient;

#[must_use]
pub fn default_query() -> PageQuery {
    PageQuery::new(
        DEFAULT_APPLICATION_PAGE_SIZE,
        "applicationDate",
        SortDirection::Desc,
    )
}

/// Staff listing of every application, optionally narrowed by status and a
/// free-text search.
pub async fn list_all(
    client: &AuthenticatedClient,
    query: &PageQuery,
    status: Option<Status>,
    search: Option<&str>,
) -> Result<PageResponse<AdoptionApplication>, ClientError> {
    let request = ApiRequest::get(format!("{}/all", paths::ADOPTION_APPLICATIONS))
        .query_pairs(query.to_params())
        .query_opt("status", status.as_ref().map(Status::as_str))
        .query_opt("search", search.filter(|search| !search.is_empty()));
    client.send_json(request).await
}

pub async fn get(
    client: &AuthenticatedClient,
    id: i64,
) -> Result<AdoptionApplication, ClientError> {
    client
        .get_json(&format!("{}/{id}", paths::ADOPTION_APPLICATIONS))
        .await
}

pub async fn for_user(
    client: &AuthenticatedClient,
    user_id: i64,
) -> Result<Vec<ApplicantApplication>, ClientError> {
    client
        .get_json(&format!("{}/user/{user_id}", paths::ADOPTION_APPLICATIONS))
        .await
}

pub async fn has_applied(
    client: &AuthenticatedClient,
    user_id: i64,
    animal_id: i64,
) -> Result<bool, ClientError> {
    client
        .get_json(&format!(
            "{}/has-applied/{user_id}/{animal_id}",
            paths::ADOPTION_APPLICATIONS
        ))
        .await
}

pub async fn create(
    client: &AuthenticatedClient,
    application: &AdoptionApplicationRequest,
) -> Result<AdoptionApplication, ClientError> {
    let request =
        ApiRequest::post(format!("{}/add", paths::ADOPTION_APPLICATIONS)).json(application)?;
    client.send_json(request).await
}

pub async fn update(
    client: &AuthenticatedClient,
    id: i64,
    application: &AdoptionApplicationRequest,
) -> Result<AdoptionApplication, ClientError> {
    let request = ApiRequest::put(format!("{}/update/{id}", paths::ADOPTION_APPLICATIONS))
        .json(application)?;
    client.send_json(request).await
}

pub async fn reject(
    client: &AuthenticatedClient,
    id: i64,
    reviewed_by_user_id: i64,
) -> Result<AdoptionApplication, ClientError> {
    let request = ApiRequest::patch(format!("{}/reject/{id}", paths::ADOPTION_APPLICATIONS))
        .query("reviewedByUserId", reviewed_by_user_id);
    client.send_json(request).await
}

pub async fn delete(client: &AuthenticatedClient, id: i64) -> Result<(), ClientError> {
    client
        .send_empty(ApiRequest::delete(format!(
            "{}/delete/{id}",
            paths::ADOPTION_APPLICATIONS
        )))
        .await
}
