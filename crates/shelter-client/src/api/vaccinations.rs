use shelter_core::{
    paths, PageQuery, PageResponse, SortDirection, Status, Vaccination, VaccinationRequest,
    VaccinationType, VaccinationTypeRequest, DEFAULT_VACCINATION_PAGE_SIZE,
};

use crate::error::ClientError;
use crate::request::ApiRequest;
use crate::AuthenticatedClient;

#[must_use]
pub fn default_query() -> PageQuery {
    PageQuery::new(
        DEFAULT_VACCINATION_PAGE_SIZE,
        "dateAdministered",
        SortDirection::Desc,
    )
}

#[must_use]
pub fn default_type_query() -> PageQuery {
    PageQuery::new(
        DEFAULT_VACCINATION_PAGE_SIZE,
        "vaccineName",
        SortDirection::Asc,
    )
}

pub async fn list(
    client: &AuthenticatedClient,
    query: &PageQuery,
    animal_status: Option<Status>,
    search: Option<&str>,
) -> Result<PageResponse<Vaccination>, ClientError> {
    let request = ApiRequest::get(paths::VACCINATIONS)
        .query_pairs(query.to_params())
        .query_opt(
            "animalStatus",
            animal_status.map(|status| status.as_str().to_ascii_lowercase()),
        )
        .query_opt("search", search.filter(|search| !search.is_empty()));
    client.send_json(request).await
}

pub async fn get(client: &AuthenticatedClient, id: i64) -> Result<Vaccination, ClientError> {
    client
        .get_json(&format!("{}/{id}", paths::VACCINATIONS))
        .await
}

pub async fn create(
    client: &AuthenticatedClient,
    vaccination: &VaccinationRequest,
) -> Result<Vaccination, ClientError> {
    let request = ApiRequest::post(format!("{}/add", paths::VACCINATIONS)).json(vaccination)?;
    client.send_json(request).await
}

pub async fn update(
    client: &AuthenticatedClient,
    id: i64,
    vaccination: &VaccinationRequest,
) -> Result<Vaccination, ClientError> {
    let request =
        ApiRequest::put(format!("{}/update/{id}", paths::VACCINATIONS)).json(vaccination)?;
    client.send_json(request).await
}

pub async fn delete(client: &AuthenticatedClient, id: i64) -> Result<(), ClientError> {
    client
        .send_empty(ApiRequest::delete(format!(
            "{}/delete/{id}",
            paths::VACCINATIONS
        )))
        .await
}

pub async fn list_types(
    client: &AuthenticatedClient,
    query: &PageQuery,
    required_for_adoption: Option<bool>,
    search: Option<&str>,
) -> Result<PageResponse<VaccinationType>, ClientError> {
    let request = ApiRequest::get(paths::VACCINATION_TYPES)
        .query_pairs(query.to_params())
        .query_opt("requiredForAdoption", required_for_adoption)
        .query_opt("search", search.filter(|search| !search.is_empty()));
    client.send_json(request).await
}

pub async fn get_type(client: &AuthenticatedClient, id: i64) -> Result<VaccinationType, ClientError> {
    client
        .get_json(&format!("{}/{id}", paths::VACCINATION_TYPES))
        .await
}

pub async fn create_type(
    client: &AuthenticatedClient,
    vaccination_type: &VaccinationTypeRequest,
) -> Result<VaccinationType, ClientError> {
    let request =
        ApiRequest::post(format!("{}/add", paths::VACCINATION_TYPES)).json(vaccination_type)?;
    client.send_json(request).await
}

pub async fn update_type(
    client: &AuthenticatedClient,
    id: i64,
    vaccination_type: &VaccinationTypeRequest,
) -> Result<VaccinationType, ClientError> {
    let request = ApiRequest::put(format!("{}/update/{id}", paths::VACCINATION_TYPES))
        .json(vaccination_type)?;
    client.send_json(request).await
}

pub async fn delete_type(client: &AuthenticatedClient, id: i64) -> Result<(), ClientError> {
    client
        .send_empty(ApiRequest::delete(format!(
            "{}/delete/{id}",
            paths::VACCINATION_TYPES
        )))
        .await
}
