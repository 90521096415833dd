//! Integration tests for the harvester
//!
//! These tests use wiremock to serve a small fake archive and exercise
//! the resolvers and the full harvest end-to-end.

mod resolver_tests;
mod support;
