//! Warehouse client library
//!
//! This library drives the three workflows of the data-warehouse client
//! (upload-then-process, insurance eligibility, aggregate statistics) against
//! the remote warehouse service, and renders their state as text.

pub mod client_impl;
pub mod config;
pub mod core;
pub mod error;
pub mod render;
pub mod services;
pub mod shell;
pub mod state;
pub mod traits;
pub mod types;

// Re-export main types
pub use client_impl::WarehouseClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use state::ViewModel;
pub use types::*;

// Re-export trait definitions
pub use traits::*;

// Re-export core state machines
pub use crate::core::{FlightToken, SingleFlight, Transition, ViewEffect, ViewSelector};

// Re-export service implementations
pub use services::RealWarehouseGateway;
