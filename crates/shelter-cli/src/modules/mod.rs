pub(crate) mod adoptions;
pub(crate) mod animals;
pub(crate) mod applications;
pub(crate) mod auth;
pub(crate) mod dog_facts;
pub(crate) mod medical_records;
pub(crate) mod system;
pub(crate) mod vaccinations;
