mod actions;
pub(crate) mod args;

pub(crate) use actions::handle_application;
#[cfg(test)]
pub(crate) use actions::filter_user_applications;
