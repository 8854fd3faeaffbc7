//! Integration test modules.

mod profile_pipeline_test;
