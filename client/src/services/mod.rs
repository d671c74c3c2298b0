//! Client service implementations

pub mod http_gateway;

#[cfg(test)]
pub mod tests;

pub use http_gateway::*;
