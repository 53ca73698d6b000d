//! Single test binary entry point.
//!
//! All tests are compiled into one binary to keep linking to a single step.
//!
//! Structure:
//! - helpers: Fixture builders shared by the test modules
//! - integration: Multi-component workflow tests
//! - unit: Single-component unit tests
