//! View layer support: element ids, stylesheet and DOM-free view models.
//! The Leptos components binding them live in `crate::app`.

pub mod dom_ids;
pub mod styles;
pub mod view_model;
