//! Yew components.

pub(crate) mod dashboard;
pub(crate) mod details;
pub(crate) mod not_found;
pub(crate) mod pagination;
pub(crate) mod toast;
pub(crate) mod url_form;
pub(crate) mod url_table;
