//! Workflow logic, independent of how state is stored or rendered

pub mod eligibility;
pub mod flight;
pub mod statistics;
pub mod upload;
pub mod view;

pub use flight::{FlightToken, SingleFlight};
pub use view::{Transition, ViewEffect, ViewSelector};
