//! Client-side narrowing and ordering of lists that the backend returns
//! unpaged (per-user applications, per-animal medical records) or that a
//! caller wants to re-order after fetching a page.

use std::cmp::Ordering;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::api::PageResponse;
use crate::models::{
    AdoptionApplication, ApplicantApplication, EnumParseError, MedicalRecord, SortDirection,
    Status, Vaccination,
};

/// Parses the date formats the backend emits: RFC 3339 timestamps, naive
/// ISO timestamps and plain `YYYY-MM-DD` dates.
pub fn parse_api_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.naive_utc());
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(parsed);
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

fn parsed_date(value: Option<&str>) -> Option<NaiveDateTime> {
    value.and_then(parse_api_date)
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Active sort column and direction of a list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<F> {
    pub field: F,
    pub direction: SortDirection,
}

impl<F: Copy + PartialEq> SortState<F> {
    pub fn new(field: F, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Selecting the active column flips its direction; selecting another
    /// column makes it active in ascending order.
    pub fn toggle(&mut self, field: F) {
        if self.field == field {
            self.direction = self.direction.flipped();
        } else {
            self.field = field;
            self.direction = SortDirection::Asc;
        }
    }
}

/// Read access to the columns an application list is filtered and sorted on.
pub trait ApplicationRow {
    fn id(&self) -> i64;
    fn animal_name(&self) -> &str;
    fn applicant_name(&self) -> String;
    fn applicant_email(&self) -> Option<&str>;
    fn application_date(&self) -> Option<&str>;
    fn status(&self) -> Status;
}

impl ApplicationRow for AdoptionApplication {
    fn id(&self) -> i64 {
        self.id
    }

    fn animal_name(&self) -> &str {
        &self.animal.name
    }

    fn applicant_name(&self) -> String {
        self.user.full_name()
    }

    fn applicant_email(&self) -> Option<&str> {
        Some(&self.user.email)
    }

    fn application_date(&self) -> Option<&str> {
        self.application_date.as_deref()
    }

    fn status(&self) -> Status {
        self.status
    }
}

impl ApplicationRow for ApplicantApplication {
    fn id(&self) -> i64 {
        self.id
    }

    fn animal_name(&self) -> &str {
        &self.animal.name
    }

    fn applicant_name(&self) -> String {
        self.user_name.clone().unwrap_or_default()
    }

    fn applicant_email(&self) -> Option<&str> {
        None
    }

    fn application_date(&self) -> Option<&str> {
        self.application_date.as_deref()
    }

    fn status(&self) -> Status {
        self.status
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplicationSortField {
    Id,
    AnimalName,
    ApplicantName,
    ApplicationDate,
    Status,
}

impl std::str::FromStr for ApplicationSortField {
    type Err = EnumParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "id" => Ok(Self::Id),
            "animalName" | "animal-name" => Ok(Self::AnimalName),
            "applicantName" | "applicant-name" => Ok(Self::ApplicantName),
            "applicationDate" | "application-date" => Ok(Self::ApplicationDate),
            "status" => Ok(Self::Status),
            _ => Err(EnumParseError::new("application_sort_field", value)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationFilter {
    pub search: String,
    /// `None` keeps every status.
    pub status: Option<Status>,
    pub sort: SortState<ApplicationSortField>,
}

impl Default for ApplicationFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: None,
            sort: SortState::new(ApplicationSortField::ApplicationDate, SortDirection::Desc),
        }
    }
}

impl ApplicationFilter {
    pub fn matches<T: ApplicationRow>(&self, row: &T) -> bool {
        let matches_status = self.status.map_or(true, |status| row.status() == status);
        if !matches_status {
            return false;
        }
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        contains_ci(row.animal_name(), &needle)
            || contains_ci(&row.applicant_name(), &needle)
            || row
                .applicant_email()
                .is_some_and(|email| contains_ci(email, &needle))
    }

    pub fn compare<T: ApplicationRow>(&self, a: &T, b: &T) -> Ordering {
        let ordering = match self.sort.field {
            ApplicationSortField::Id => a.id().cmp(&b.id()),
            ApplicationSortField::AnimalName => compare_text(a.animal_name(), b.animal_name()),
            ApplicationSortField::ApplicantName => {
                compare_text(&a.applicant_name(), &b.applicant_name())
            }
            ApplicationSortField::ApplicationDate => parsed_date(a.application_date())
                .cmp(&parsed_date(b.application_date())),
            ApplicationSortField::Status => a.status().as_str().cmp(b.status().as_str()),
        };
        self.sort.direction.apply(ordering)
    }

    pub fn apply<T: ApplicationRow + Clone>(&self, rows: &[T]) -> Vec<T> {
        let mut filtered: Vec<T> = rows
            .iter()
            .filter(|row| self.matches(*row))
            .cloned()
            .collect();
        filtered.sort_by(|a, b| self.compare(a, b));
        filtered
    }

    /// Resets search and status; the sort column is kept.
    pub fn clear(&mut self) {
        self.search.clear();
        self.status = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MedicalRecordSortField {
    Id,
    AnimalName,
    Date,
    Diagnosis,
    Treatment,
    Cost,
}

impl std::str::FromStr for MedicalRecordSortField {
    type Err = EnumParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "id" => Ok(Self::Id),
            "animalName" | "animal-name" => Ok(Self::AnimalName),
            "date" => Ok(Self::Date),
            "diagnosis" => Ok(Self::Diagnosis),
            "treatment" => Ok(Self::Treatment),
            "cost" => Ok(Self::Cost),
            _ => Err(EnumParseError::new("medical_record_sort_field", value)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicalRecordFilter {
    pub search: String,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub sort: SortState<MedicalRecordSortField>,
}

impl Default for MedicalRecordFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            date_from: None,
            date_to: None,
            sort: SortState::new(MedicalRecordSortField::Date, SortDirection::Desc),
        }
    }
}

impl MedicalRecordFilter {
    pub fn matches(&self, record: &MedicalRecord) -> bool {
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let hit = contains_ci(&record.animal.name, &needle)
                || contains_ci(&record.diagnosis, &needle)
                || contains_ci(&record.treatment, &needle);
            if !hit {
                return false;
            }
        }
        if self.date_from.is_none() && self.date_to.is_none() {
            return true;
        }
        // A record without a readable date cannot satisfy a date bound.
        let Some(date) = parsed_date(record.date.as_deref()).map(|value| value.date()) else {
            return false;
        };
        self.date_from.map_or(true, |from| date >= from)
            && self.date_to.map_or(true, |to| date <= to)
    }

    pub fn compare(&self, a: &MedicalRecord, b: &MedicalRecord) -> Ordering {
        let ordering = match self.sort.field {
            MedicalRecordSortField::Id => a.id.cmp(&b.id),
            MedicalRecordSortField::AnimalName => compare_text(&a.animal.name, &b.animal.name),
            MedicalRecordSortField::Date => {
                parsed_date(a.date.as_deref()).cmp(&parsed_date(b.date.as_deref()))
            }
            MedicalRecordSortField::Diagnosis => compare_text(&a.diagnosis, &b.diagnosis),
            MedicalRecordSortField::Treatment => compare_text(&a.treatment, &b.treatment),
            MedicalRecordSortField::Cost => a.cost.cmp(&b.cost),
        };
        self.sort.direction.apply(ordering)
    }

    pub fn apply(&self, records: &[MedicalRecord]) -> Vec<MedicalRecord> {
        let mut filtered: Vec<MedicalRecord> = records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect();
        filtered.sort_by(|a, b| self.compare(a, b));
        filtered
    }

    pub fn clear(&mut self) {
        self.search.clear();
        self.date_from = None;
        self.date_to = None;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VaccinationSortField {
    Id,
    AnimalName,
    VaccineName,
    DateAdministered,
    NextDueDate,
}

impl std::str::FromStr for VaccinationSortField {
    type Err = EnumParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "id" => Ok(Self::Id),
            "animalName" | "animal-name" => Ok(Self::AnimalName),
            "vaccineName" | "vaccine-name" => Ok(Self::VaccineName),
            "dateAdministered" | "date-administered" => Ok(Self::DateAdministered),
            "nextDueDate" | "next-due-date" => Ok(Self::NextDueDate),
            _ => Err(EnumParseError::new("vaccination_sort_field", value)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaccinationFilter {
    pub search: String,
    /// Keeps only vaccinations whose next dose is due on or before this day.
    pub due_before: Option<NaiveDate>,
    pub sort: SortState<VaccinationSortField>,
}

impl Default for VaccinationFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            due_before: None,
            sort: SortState::new(VaccinationSortField::DateAdministered, SortDirection::Desc),
        }
    }
}

impl VaccinationFilter {
    pub fn matches(&self, vaccination: &Vaccination) -> bool {
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let hit = contains_ci(&vaccination.animal.name, &needle)
                || contains_ci(&vaccination.vaccination_type.vaccine_name, &needle);
            if !hit {
                return false;
            }
        }
        match self.due_before {
            None => true,
            Some(limit) => parsed_date(vaccination.next_due_date.as_deref())
                .is_some_and(|due| due.date() <= limit),
        }
    }

    pub fn compare(&self, a: &Vaccination, b: &Vaccination) -> Ordering {
        let ordering = match self.sort.field {
            VaccinationSortField::Id => a.id.cmp(&b.id),
            VaccinationSortField::AnimalName => compare_text(&a.animal.name, &b.animal.name),
            VaccinationSortField::VaccineName => compare_text(
                &a.vaccination_type.vaccine_name,
                &b.vaccination_type.vaccine_name,
            ),
            VaccinationSortField::DateAdministered => parsed_date(a.date_administered.as_deref())
                .cmp(&parsed_date(b.date_administered.as_deref())),
            VaccinationSortField::NextDueDate => parsed_date(a.next_due_date.as_deref())
                .cmp(&parsed_date(b.next_due_date.as_deref())),
        };
        self.sort.direction.apply(ordering)
    }

    pub fn apply(&self, vaccinations: &[Vaccination]) -> Vec<Vaccination> {
        let mut filtered: Vec<Vaccination> = vaccinations
            .iter()
            .filter(|vaccination| self.matches(vaccination))
            .cloned()
            .collect();
        filtered.sort_by(|a, b| self.compare(a, b));
        filtered
    }
}

/// Cuts one zero-based page out of an already filtered list.
pub fn paginate<T: Clone>(items: &[T], page: u32, size: u32) -> PageResponse<T> {
    let size = size.max(1);
    let total = items.len();
    let total_pages = total.div_ceil(size as usize) as u32;
    let start = (page as usize).saturating_mul(size as usize).min(total);
    let end = start.saturating_add(size as usize).min(total);
    PageResponse {
        content: items[start..end].to_vec(),
        total_elements: total as u64,
        total_pages,
        number: page,
        size,
        first: page == 0,
        last: page.saturating_add(1) >= total_pages,
    }
}
