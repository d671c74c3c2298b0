//! Tests for client services
//!
//! The HTTP gateway is exercised against a local wiremock server standing in
//! for the warehouse service.
