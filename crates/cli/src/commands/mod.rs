pub(crate) mod catalog;
pub(crate) mod menu;
pub(crate) mod reports;
pub(crate) mod website;
