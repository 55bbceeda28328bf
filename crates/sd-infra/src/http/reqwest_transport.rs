use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use sd_core::config::ApiConfig;
use sd_core::ports::{ApiRequest, Method, TransportError, TransportPort};
use serde_json::Value;

/// [`TransportPort`] over a shared `reqwest::Client`.
///
/// Request paths are joined to the configured base URL. The body of a
/// non-success response is searched for the server's `error` or `message`
/// text so the failure carries something readable; 2xx bodies are returned
/// as-is, including error envelopes, which the use cases reject.
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ReqwestTransport {
    pub fn new(config: &ApiConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TransportError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone().filter(|token| !token.is_empty()),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout(err.to_string())
    } else if err.is_decode() {
        TransportError::Decode(err.to_string())
    } else {
        TransportError::Network(err.to_string())
    }
}

/// Readable message for a failed response: the envelope's `error`, then its
/// `message`, then the raw text, then the status reason.
fn failure_message(status: StatusCode, text: &str) -> String {
    let from_envelope = serde_json::from_str::<Value>(text).ok().and_then(|body| {
        ["error", "message"]
            .iter()
            .find_map(|key| body.get(*key).and_then(Value::as_str).map(str::to_string))
    });

    from_envelope
        .or_else(|| {
            let trimmed = text.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        })
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown status").to_string())
}

/// Refuses paths with empty or dot segments, which URL normalisation would
/// resolve against a different resource than the one named.
fn check_path(path: &str) -> Result<(), TransportError> {
    let unsafe_segment = path.trim_start_matches('/').split('/').find(|segment| {
        let decoded = segment.to_ascii_lowercase().replace("%2e", ".");
        decoded.is_empty() || decoded == "." || decoded == ".."
    });
    match unsafe_segment {
        Some(segment) => Err(TransportError::InvalidRequest(format!(
            "path {path:?} has unsafe segment {segment:?}"
        ))),
        None => Ok(()),
    }
}

#[async_trait]
impl TransportPort for ReqwestTransport {
    async fn send(&self, request: ApiRequest) -> Result<Value, TransportError> {
        check_path(&request.path)?;
        let url = self.url(&request.path);
        debug!("{} {}", request.method, url);

        let mut builder = self.client.request(to_reqwest(request.method), &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = &self.token {
            builder = builder.header(AUTHORIZATION, token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        let text = response.text().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            let message = failure_message(status, &text);
            warn!("{} {} failed with {}: {}", request.method, url, status, message);
            return Err(TransportError::Status {
                status: status.as_u16(),
                message,
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use sd_core::ports::resource_path;
    use serde_json::json;

    fn transport_for(server: &Server, token: Option<&str>) -> ReqwestTransport {
        ReqwestTransport::new(&ApiConfig {
            base_url: format!("{}/api/", server.url()),
            token: token.map(str::to_string),
            timeout_secs: 5,
            page_size: 10,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn get_sends_query_and_token() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/api/spiders")
            .match_header("authorization", "secret")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("pageNum".into(), "1".into()),
                Matcher::UrlEncoded("pageSize".into(), "10".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"status":"ok","message":"success","data":{"list":[],"total":0}}"#)
            .create_async()
            .await;

        let transport = transport_for(&server, Some("secret"));
        let body = transport
            .send(ApiRequest::get("/spiders").with_query(vec![
                ("pageNum".to_string(), "1".to_string()),
                ("pageSize".to_string(), "10".to_string()),
            ]))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(body["data"]["total"], 0);
    }

    #[tokio::test]
    async fn put_sends_json_body() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("PUT", "/api/tasks")
            .match_body(Matcher::Json(json!({
                "spider_id": "s1",
                "node_id": "n1",
                "param": "-a 1"
            })))
            .with_status(200)
            .with_body(r#"{"status":"ok","message":"success"}"#)
            .create_async()
            .await;

        let transport = transport_for(&server, None);
        let request = ApiRequest::put("/tasks")
            .with_json(&json!({ "spider_id": "s1", "node_id": "n1", "param": "-a 1" }))
            .unwrap();
        transport.send(request).await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn error_status_carries_envelope_error_text() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/spiders/missing")
            .with_status(500)
            .with_body(r#"{"status":"error","message":"failure","error":"not found"}"#)
            .create_async()
            .await;

        let transport = transport_for(&server, None);
        let err = transport
            .send(ApiRequest::get("/spiders/missing"))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            TransportError::Status {
                status: 500,
                message: "not found".to_string()
            }
        );
    }

    #[tokio::test]
    async fn error_status_without_body_uses_reason() {
        let mut server = Server::new_async().await;
        server
            .mock("DELETE", "/api/spiders/a")
            .with_status(404)
            .create_async()
            .await;

        let transport = transport_for(&server, None);
        let err = transport
            .send(ApiRequest::delete("/spiders/a"))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            TransportError::Status {
                status: 404,
                message: "Not Found".to_string()
            }
        );
    }

    #[tokio::test]
    async fn invalid_json_is_a_decode_error() {
        let mut server = Server::new_async().await;
        server
            .mock("GET", "/api/spider/types")
            .with_status(200)
            .with_body("<html>")
            .create_async()
            .await;

        let transport = transport_for(&server, None);
        let err = transport
            .send(ApiRequest::get("/spider/types"))
            .await
            .unwrap_err();

        assert!(matches!(err, TransportError::Decode(_)));
    }

    #[tokio::test]
    async fn empty_success_body_is_null() {
        let mut server = Server::new_async().await;
        server
            .mock("POST", "/api/spiders/a/publish")
            .with_status(200)
            .create_async()
            .await;

        let transport = transport_for(&server, None);
        let body = transport
            .send(ApiRequest::post("/spiders/a/publish"))
            .await
            .unwrap();

        assert_eq!(body, Value::Null);
    }

    #[tokio::test]
    async fn unreachable_server_is_a_network_error() {
        let transport = ReqwestTransport::new(&ApiConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            ..ApiConfig::default()
        })
        .unwrap();

        let err = transport.send(ApiRequest::get("/spiders")).await.unwrap_err();
        assert!(matches!(err, TransportError::Network(_)));
    }

    #[tokio::test]
    async fn slashes_in_ids_stay_inside_one_segment() {
        let mut server = Server::new_async().await;
        let other_task = server
            .mock("DELETE", "/api/tasks/t1")
            .expect(0)
            .create_async()
            .await;
        let spider = server
            .mock("DELETE", Matcher::Any)
            .with_status(200)
            .with_body(r#"{"status":"ok","message":"success"}"#)
            .create_async()
            .await;

        let transport = transport_for(&server, None);
        transport
            .send(ApiRequest::delete(resource_path(&["spiders", "x/../../tasks/t1"])))
            .await
            .unwrap();

        other_task.assert_async().await;
        spider.assert_async().await;
    }

    #[tokio::test]
    async fn dot_segments_are_refused_before_sending() {
        let mut server = Server::new_async().await;
        let any = server
            .mock("DELETE", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let transport = transport_for(&server, None);
        for id in ["..", ".", "", "%2E%2e"] {
            let err = transport
                .send(ApiRequest::delete(format!("/spiders/{id}")))
                .await
                .unwrap_err();
            assert!(matches!(err, TransportError::InvalidRequest(_)), "{id:?}: {err:?}");
        }
        let err = transport
            .send(ApiRequest::delete(resource_path(&["spiders", ".."])))
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::InvalidRequest(_)));

        any.assert_async().await;
    }

    #[test]
    fn url_join_tolerates_slashes() {
        let transport = ReqwestTransport::new(&ApiConfig {
            base_url: "http://host/api/".to_string(),
            ..ApiConfig::default()
        })
        .unwrap();

        assert_eq!(transport.url("/spiders"), "http://host/api/spiders");
        assert_eq!(transport.url("spiders"), "http://host/api/spiders");
    }
}
