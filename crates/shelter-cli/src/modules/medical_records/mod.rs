mod actions;
pub(crate) mod args;

pub(crate) use actions::handle_medical_record;
#[cfg(test)]
pub(crate) use actions::filter_animal_records;
