//! Test helpers and builder patterns for client tests

use client::{MockWarehouseGateway, RealWarehouseGateway, ClientConfig, WarehouseClient};
use wiremock::MockServer;

pub type TestClient = WarehouseClient<MockWarehouseGateway>;

/// Builder for clients backed by a mocked gateway
///
/// A fresh mock has no expectations, so any call not configured through
/// `with_gateway` fails the test.
pub struct ClientBuilder {
    gateway: MockWarehouseGateway,
}

impl ClientBuilder {
    pub fn new() -> Self {
        Self {
            gateway: MockWarehouseGateway::new(),
        }
    }

    /// Configure the gateway mock with a setup function
    pub fn with_gateway<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockWarehouseGateway),
    {
        setup(&mut self.gateway);
        self
    }

    pub fn build(self) -> TestClient {
        WarehouseClient::new(self.gateway)
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper functions for common test operations
pub struct TestHelpers;

impl TestHelpers {
    /// Client talking HTTP to a wiremock server
    pub fn http_client(server: &MockServer) -> WarehouseClient<RealWarehouseGateway> {
        let config = ClientConfig::new(&server.uri()).unwrap();
        WarehouseClient::new(RealWarehouseGateway::new(config).unwrap())
    }
}
