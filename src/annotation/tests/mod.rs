//! Unit tests for the annotation domain.

mod record_tests;
mod region_tests;
