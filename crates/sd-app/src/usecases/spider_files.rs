//! Reading and writing single files of a spider's source tree.

use std::sync::Arc;

use sd_core::envelope::{check_status, decode_data_or_default};
use sd_core::ports::{resource_path, ApiRequest, TransportPort};
use sd_core::SpiderId;
use serde_json::json;
use tracing::info;

use crate::error::ProjectorResult;

pub struct ReadSpiderFile {
    transport: Arc<dyn TransportPort>,
}

impl ReadSpiderFile {
    pub fn from_ports(transport: Arc<dyn TransportPort>) -> Self {
        Self { transport }
    }

    /// Returns the file's text. An empty file comes back as an empty string.
    #[tracing::instrument(
        name = "usecase.read_spider_file.execute",
        skip(self),
        fields(spider_id = %id)
    )]
    pub async fn execute(&self, id: &SpiderId, path: &str) -> ProjectorResult<String> {
        let request = ApiRequest::get(resource_path(&["spiders", id.as_str(), "file"]))
            .with_query(vec![("path".to_string(), path.to_string())]);
        let body = self.transport.send(request).await?;
        Ok(decode_data_or_default(body)?)
    }
}

pub struct WriteSpiderFile {
    transport: Arc<dyn TransportPort>,
}

impl WriteSpiderFile {
    pub fn from_ports(transport: Arc<dyn TransportPort>) -> Self {
        Self { transport }
    }

    #[tracing::instrument(
        name = "usecase.write_spider_file.execute",
        skip(self, content),
        fields(spider_id = %id, bytes = content.len())
    )]
    pub async fn execute(&self, id: &SpiderId, path: &str, content: &str) -> ProjectorResult<()> {
        let request = ApiRequest::post(resource_path(&["spiders", id.as_str(), "file"]))
            .with_json(&json!({ "path": path, "content": content }))?;
        let body = self.transport.send(request).await?;
        check_status(&body)?;
        info!(path, "Wrote spider file");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::*;
    use sd_core::ports::Method;

    #[tokio::test]
    async fn test_read_returns_text() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| {
                req.method == Method::Get
                    && req.path == "/spiders/s1/file"
                    && req.query == vec![("path".to_string(), "main.py".to_string())]
            })
            .returning(|_| Ok(ok(json!("print('hi')\n"))));

        let text = ReadSpiderFile::from_ports(Arc::new(transport))
            .execute(&SpiderId::from("s1"), "main.py")
            .await
            .unwrap();
        assert_eq!(text, "print('hi')\n");
    }

    #[tokio::test]
    async fn test_write_posts_path_and_content() {
        let mut transport = MockTransport::new();
        transport
            .expect_send()
            .withf(|req| {
                req.method == Method::Post
                    && req.path == "/spiders/s1/file"
                    && req.body == Some(json!({ "path": "main.py", "content": "pass" }))
            })
            .times(1)
            .returning(|_| Ok(ok_empty()));

        WriteSpiderFile::from_ports(Arc::new(transport))
            .execute(&SpiderId::from("s1"), "main.py", "pass")
            .await
            .unwrap();
    }
}
