//! Mock implementations of the ports for testing.
//!
//! This module provides mock implementations using `mockall` for unit
//! testing code that talks to the spider API without a server. Other
//! crates reach it through the `test-utils` feature.

use async_trait::async_trait;
use mockall::mock;
use serde_json::Value;

use crate::ports::{ApiRequest, TransportError, TransportPort};

mock! {
    pub Transport {}

    #[async_trait]
    impl TransportPort for Transport {
        async fn send(&self, request: ApiRequest) -> Result<Value, TransportError>;
    }
}

#[cfg(test)]
#[tokio::test]
async fn mock_transport_returns_configured_body() {
    let mut transport = MockTransport::new();
    transport
        .expect_send()
        .withf(|req| req.path == "/spider/types")
        .times(1)
        .returning(|_| Ok(serde_json::json!({ "status": "ok", "data": [] })));

    let body = transport.send(ApiRequest::get("/spider/types")).await.unwrap();
    assert_eq!(body["status"], "ok");
}
