//! Integration tests for the scribe.

pub mod binary_test;
pub mod dispatcher_test;
pub mod layout_test;
pub mod persistence_test;
pub mod session_test;
