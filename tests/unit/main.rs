//! Unit test modules.

mod form_input_test;
mod profile_fitter_test;
