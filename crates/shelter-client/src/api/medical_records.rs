use chrono::NaiveDate;
use shelter_core::{
    paths, MedicalRecord, MedicalRecordRequest, PageQuery, PageResponse, SortDirection, Status,
    DEFAULT_MEDICAL_PAGE_SIZE,
};

use crate::error::ClientError;
use crate::request::ApiRequest;
use crate::AuthenticatedClient;

/// Server-side filters of the medical record listing. Date bounds are
/// inclusive calendar days.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilters {
    pub animal_status: Option<Status>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub search: Option<String>,
}

impl RecordFilters {
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(status) = self.animal_status {
            params.push((
                "animalStatus".to_string(),
                status.as_str().to_ascii_lowercase(),
            ));
        }
        if let Some(start) = self.start_date {
            params.push(("startDate".to_string(), start.format("%Y-%m-%d").to_string()));
        }
        if let Some(end) = self.end_date {
            params.push(("endDate".to_string(), end.format("%Y-%m-%d").to_string()));
        }
        if let Some(search) = self.search.as_deref().filter(|search| !search.is_empty()) {
            params.push(("search".to_string(), search.to_string()));
        }
        params
    }
}

#[must_use]
pub fn default_query() -> PageQuery {
    PageQuery::new(DEFAULT_MEDICAL_PAGE_SIZE, "date", SortDirection::Desc)
}

pub async fn list(
    client: &AuthenticatedClient,
    query: &PageQuery,
    filters: &RecordFilters,
) -> Result<PageResponse<MedicalRecord>, ClientError> {
    let request = ApiRequest::get(paths::MEDICAL_RECORDS)
        .query_pairs(query.to_params())
        .query_pairs(filters.to_params());
    client.send_json(request).await
}

pub async fn get(client: &AuthenticatedClient, id: i64) -> Result<MedicalRecord, ClientError> {
    client
        .get_json(&format!("{}/{id}", paths::MEDICAL_RECORDS))
        .await
}

pub async fn for_animal(
    client: &AuthenticatedClient,
    animal_id: i64,
) -> Result<Vec<MedicalRecord>, ClientError> {
    client
        .get_json(&format!("{}/animal/{animal_id}", paths::MEDICAL_RECORDS))
        .await
}

pub async fn create(
    client: &AuthenticatedClient,
    record: &MedicalRecordRequest,
) -> Result<MedicalRecord, ClientError> {
    let request = ApiRequest::post(format!("{}/add", paths::MEDICAL_RECORDS)).json(record)?;
    client.send_json(request).await
}

pub async fn update(
    client: &AuthenticatedClient,
    id: i64,
    record: &MedicalRecordRequest,
) -> Result<MedicalRecord, ClientError> {
    let request =
        ApiRequest::put(format!("{}/update/{id}", paths::MEDICAL_RECORDS)).json(record)?;
    client.send_json(request).await
}

pub async fn delete(client: &AuthenticatedClient, id: i64) -> Result<(), ClientError> {
    client
        .send_empty(ApiRequest::delete(format!(
            "{}/delete/{id}",
            paths::MEDICAL_RECORDS
        )))
        .await
}
