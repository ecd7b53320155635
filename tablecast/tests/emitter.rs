use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::json;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tablecast::config::emitter::EmitterConfig;
use tablecast::config::endpoint::EndpointConfig;
use tablecast::emitter::emitter::Emitter;
use tablecast::error::error::TablecastResult;
use tablecast::error::publish_failure::PublishFailure;
use tablecast::record::record::{FieldValue, RowRecord};
use tablecast::sink::sink::RecordSink;
use tablecast::source::source::RowSource;

struct FixedSource {
    rows: HashMap<String, RowRecord>,
    row_count: u64,
}

#[async_trait]
impl RowSource for FixedSource {
    async fn fetch_row(&self, table: &str, offset: u64) -> TablecastResult<Option<RowRecord>> {
        if offset >= self.row_count {
            return Ok(None);
        }
        Ok(self.rows.get(table).cloned())
    }
}

struct RecordingSink {
    published: Arc<Mutex<Vec<(String, serde_json::Value)>>>,
    failing_topic: Option<String>,
}

#[async_trait]
impl RecordSink for RecordingSink {
    async fn publish(&self, topic: &str, record: &RowRecord) -> TablecastResult<()> {
        if self.failing_topic.as_deref() == Some(topic) {
            return Err(
                PublishFailure::new(topic, 503, "Service Unavailable".to_string()).into(),
            );
        }
        let value = serde_json::to_value(record).expect("record serializes");
        self.published.lock().unwrap().push((topic.to_string(), value));
        Ok(())
    }
}

fn endpoint_config() -> EndpointConfig {
    EndpointConfig {
        invoke_url: "https://proxy.example.com/prod".to_string(),
        pin_topic: "pin-topic".to_string(),
        geo_topic: "geo-topic".to_string(),
        user_topic: "user-topic".to_string(),
    }
}

fn config(iterations: u64, max_offset: u64) -> EmitterConfig {
    EmitterConfig {
        iterations,
        max_offset,
        sleep_max_secs: 0,
        request_timeout_secs: 1,
    }
}

fn pin_row() -> RowRecord {
    let created_at = NaiveDate::from_ymd_opt(2022, 3, 4)
        .unwrap()
        .and_hms_opt(10, 20, 30)
        .unwrap();
    let mut row = RowRecord::new();
    row.push("index", FieldValue::Int(7));
    row.push("title", FieldValue::String("landscape".to_string()));
    row.push("created_at", FieldValue::DateTime(created_at));
    row
}

fn geo_row() -> RowRecord {
    let mut row = RowRecord::new();
    row.push("index", FieldValue::Int(7));
    row.push("latitude", FieldValue::Float(-36.85));
    row.push("longitude", FieldValue::Float(174.76));
    row
}

fn user_row() -> RowRecord {
    let mut row = RowRecord::new();
    row.push("index", FieldValue::Int(7));
    row.push("first_name", FieldValue::String("Ada".to_string()));
    row.push("age", FieldValue::UInt(36));
    row
}

fn all_rows() -> HashMap<String, RowRecord> {
    let mut rows = HashMap::new();
    rows.insert("pinterest_data".to_string(), pin_row());
    rows.insert("geolocation_data".to_string(), geo_row());
    rows.insert("user_data".to_string(), user_row());
    rows
}

#[tokio::test]
async fn test_one_publish_per_topic_when_rows_exist() {
    let published = Arc::new(Mutex::new(Vec::new()));
    let source = FixedSource {
        rows: all_rows(),
        row_count: 1,
    };
    let sink = RecordingSink {
        published: published.clone(),
        failing_topic: None,
    };

    let emitter = Emitter::new(config(1, 1), endpoint_config().bindings(), source, sink);
    emitter.run().await.unwrap();

    let published = published.lock().unwrap();
    assert_eq!(published.len(), 3);
    assert_eq!(published[0].0, "pin-topic");
    assert_eq!(published[1].0, "geo-topic");
    assert_eq!(published[2].0, "user-topic");

    // Timestamps reach the sink already stringified.
    assert_eq!(
        published[0].1,
        json!({"index": 7, "title": "landscape", "created_at": "2022-03-04T10:20:30"})
    );
    assert_eq!(
        published[1].1,
        json!({"index": 7, "latitude": -36.85, "longitude": 174.76})
    );
    assert_eq!(
        published[2].1,
        json!({"index": 7, "first_name": "Ada", "age": 36})
    );
}

#[tokio::test]
async fn test_no_publish_when_offset_is_past_every_table() {
    let published = Arc::new(Mutex::new(Vec::new()));
    let source = FixedSource {
        rows: all_rows(),
        row_count: 0,
    };
    let sink = RecordingSink {
        published: published.clone(),
        failing_topic: None,
    };

    let emitter = Emitter::new(config(5, 1), endpoint_config().bindings(), source, sink);
    emitter.run().await.unwrap();

    assert!(published.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_failing_topic_does_not_affect_the_others() {
    let published = Arc::new(Mutex::new(Vec::new()));
    let source = FixedSource {
        rows: all_rows(),
        row_count: 1,
    };
    let sink = RecordingSink {
        published: published.clone(),
        failing_topic: Some("geo-topic".to_string()),
    };

    let emitter = Emitter::new(config(1, 1), endpoint_config().bindings(), source, sink);
    emitter.run().await.unwrap();

    let published = published.lock().unwrap();
    let topics: Vec<&str> = published.iter().map(|(topic, _)| topic.as_str()).collect();
    assert_eq!(topics, ["pin-topic", "user-topic"]);
}
