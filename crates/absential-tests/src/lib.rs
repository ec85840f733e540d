//! Cross-crate behavior suites exercised through the `absential` facade:
//! the defaulted-parameters scenario, the serialization boundary, and the
//! public surface itself.

pub mod boundary;
pub mod profile;

///
/// TESTS
///
