//! Common test utilities for the warehouse client
#![allow(dead_code, unused_imports)]

pub mod fixtures;
pub mod helpers;

pub use fixtures::TestFixtures;
pub use helpers::{ClientBuilder, TestHelpers};
