//! HTTP front end: the form page and its submission handler

pub mod api;
pub mod page;
