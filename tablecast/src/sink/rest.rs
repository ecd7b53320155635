use crate::config::endpoint::EndpointConfig;
use crate::error::error::TablecastResult;
use crate::error::publish_failure::PublishFailure;
use crate::record::record::RowRecord;
use crate::sink::envelope::Envelope;
use crate::sink::sink::RecordSink;
use async_trait::async_trait;
use log::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};
use std::time::Duration;

pub const KAFKA_JSON_V2: &str = "application/vnd.kafka.json.v2+json";

pub struct RestProxySink {
    client: Client,
    invoke_url: String,
}

impl RestProxySink {
    pub fn new(config: &EndpointConfig, request_timeout: Duration) -> TablecastResult<Self> {
        let client = Client::builder().timeout(request_timeout).build()?;
        Ok(RestProxySink {
            client,
            invoke_url: config.invoke_url.trim_end_matches('/').to_string(),
        })
    }

    fn topic_url(&self, topic: &str) -> String {
        format!("{}/topics/{}", self.invoke_url, topic)
    }
}

#[async_trait]
impl RecordSink for RestProxySink {
    async fn publish(&self, topic: &str, record: &RowRecord) -> TablecastResult<()> {
        let payload = serde_json::to_string(&Envelope::single(record.clone()))?;
        let url = self.topic_url(topic);
        debug!("POST {}", url);

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, KAFKA_JSON_V2)
            .body(payload)
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::OK {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(PublishFailure::new(topic, status.as_u16(), body).into())
    }
}
