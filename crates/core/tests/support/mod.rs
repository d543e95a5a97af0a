//! Shared test helpers for `folio-core` integration tests.
//!
//! These helpers provide in-memory mocks for every core port so the service
//! tests can focus on behaviour instead of boilerplate.

pub mod repositories;
