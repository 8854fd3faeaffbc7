//! UI screens for the application.

pub mod profile_form;

pub use profile_form::{FormAction, ProfileFormScreen};
