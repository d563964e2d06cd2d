/// REST routes of the shelter backend, relative to the server address.
pub mod paths {
    pub const AUTH_LOGIN: &str = "/api/auth/login";
    pub const AUTH_REGISTER: &str = "/api/auth/register";
    pub const AUTH_REFRESH: &str = "/api/auth/refresh";
    pub const AUTH_LOGOUT: &str = "/api/auth/logout";
    pub const ME: &str = "/api/me";

    pub const ANIMALS: &str = "/api/animal";
    pub const ADOPTION_APPLICATIONS: &str = "/api/adoption-application";
    pub const ADOPTIONS: &str = "/api/adoption";
    pub const MEDICAL_RECORDS: &str = "/api/medical-record";
    pub const VACCINATIONS: &str = "/api/vaccination";
    pub const VACCINATION_TYPES: &str = "/api/vaccination-type";
    pub const DOG_FACTS: &str = "/api/dog-facts";
}

/// Name of the HttpOnly cookie carrying the refresh credential.
pub const REFRESH_COOKIE: &str = "refresh_token";

/// Cookie path the backend scopes the refresh credential to.
pub const REFRESH_COOKIE_PATH: &str = "/api/auth";

pub const DEFAULT_ANIMAL_PAGE_SIZE: u32 = 8;
pub const DEFAULT_APPLICATION_PAGE_SIZE: u32 = 8;
pub const DEFAULT_ADOPTION_PAGE_SIZE: u32 = 10;
pub const DEFAULT_MEDICAL_PAGE_SIZE: u32 = 10;
pub const DEFAULT_VACCINATION_PAGE_SIZE: u32 = 10;

pub const DEFAULT_DOG_FACT_LIMIT: u32 = 2;
