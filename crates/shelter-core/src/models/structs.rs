use serde::{Deserialize, Serialize};

use super::enums::{Role, Status};

/// Reference to an existing backend entity by id, as the backend expects
/// nested objects in some request bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: i64,
}

impl From<i64> for EntityRef {
    fn from(id: i64) -> Self {
        Self { id }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Species {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breed {
    pub id: i64,
    #[serde(default)]
    pub species: Option<Species>,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animal {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub sex: Option<String>,
    #[serde(default)]
    pub species: Option<Species>,
    #[serde(default)]
    pub breed: Option<Breed>,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub intake_date: Option<String>,
    #[serde(default)]
    pub status: Option<Status>,
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimalRequest {
    pub name: String,
    pub species_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed_id: Option<i64>,
    pub sex: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intake_date: Option<String>,
    pub status: Status,
    pub price: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Server-side filters of the animal listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimalFilters {
    pub status: Option<Status>,
    pub is_active: Option<bool>,
    pub has_required_vaccinations: Option<bool>,
    pub sex: Option<String>,
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
    pub search: Option<String>,
}

impl AnimalFilters {
    /// Query pairs for the filters that are set; blank search and an "all"
    /// sex selection are omitted.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();
        if let Some(status) = self.status {
            params.push(("status".to_string(), status.as_str().to_string()));
        }
        if let Some(is_active) = self.is_active {
            params.push(("isActive".to_string(), is_active.to_string()));
        }
        if let Some(required) = self.has_required_vaccinations {
            params.push(("hasRequiredVaccinations".to_string(), required.to_string()));
        }
        if let Some(sex) = self.sex.as_deref() {
            if !sex.is_empty() && !sex.eq_ignore_ascii_case("all") {
                params.push(("sex".to_string(), sex.to_string()));
            }
        }
        if let Some(min_age) = self.min_age {
            params.push(("minAge".to_string(), min_age.to_string()));
        }
        if let Some(max_age) = self.max_age {
            params.push(("maxAge".to_string(), max_age.to_string()));
        }
        if let Some(search) = self.search.as_deref() {
            if !search.is_empty() {
                params.push(("search".to_string(), search.to_string()));
            }
        }
        params
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    #[serde(alias = "user_id")]
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
}

impl UserSummary {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Application as listed for staff review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdoptionApplication {
    pub id: i64,
    pub user: UserSummary,
    pub animal: Animal,
    #[serde(default)]
    pub application_date: Option<String>,
    pub status: Status,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "reviewedByUserName")]
    pub reviewed_by_user: Option<UserSummary>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

/// Application as returned to the applicant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantApplication {
    pub id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub user_name: Option<String>,
    pub animal: Animal,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub application_date: Option<String>,
    pub status: Status,
    #[serde(default)]
    pub reviewed_by_user_name: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdoptionApplicationRequest {
    pub user: EntityRef,
    pub animal: EntityRef,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adoption {
    pub adoption_id: i64,
    pub animal_name: String,
    #[serde(default)]
    pub species: Option<String>,
    #[serde(default)]
    pub breed: Option<String>,
    pub adopter_name: String,
    #[serde(default)]
    pub adopter_email: Option<String>,
    #[serde(default)]
    pub adopter_phone: Option<String>,
    #[serde(default)]
    pub adoption_date: Option<String>,
    #[serde(default)]
    pub days_since_adoption: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Veterinarian {
    pub id: i64,
    #[serde(default)]
    pub user: Option<UserSummary>,
    #[serde(default)]
    pub license_number: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    pub id: i64,
    pub animal: Animal,
    #[serde(default)]
    pub veterinarian: Option<Veterinarian>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub diagnosis: String,
    #[serde(default)]
    pub treatment: String,
    #[serde(default)]
    pub cost: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecordRequest {
    pub animal_id: i64,
    pub veterinarian_id: i64,
    pub date: String,
    pub diagnosis: String,
    pub treatment: String,
    pub cost: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaccinationType {
    pub id: i64,
    pub vaccine_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration_months: i32,
    #[serde(default)]
    pub required_for_adoption: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaccinationTypeRequest {
    pub vaccine_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub duration_months: i32,
    /// The backend stores this flag as an integer column.
    pub required_for_adoption: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vaccination {
    pub id: i64,
    pub animal: Animal,
    #[serde(default)]
    pub veterinarian: Option<Veterinarian>,
    #[serde(default)]
    pub date_administered: Option<String>,
    pub vaccination_type: VaccinationType,
    #[serde(default)]
    pub next_due_date: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaccinationRequest {
    pub animal: EntityRef,
    pub veterinarian: EntityRef,
    pub date_administered: String,
    pub vaccination_type: EntityRef,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_due_date: Option<String>,
}
