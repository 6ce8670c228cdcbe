//! Routed screens.

pub(crate) mod find_password;
pub(crate) mod home;
pub(crate) mod join;
pub(crate) mod login;
pub(crate) mod password_change;
pub(crate) mod placeholder;
pub(crate) mod posts;
pub(crate) mod profile;
pub(crate) mod profile_edit;
