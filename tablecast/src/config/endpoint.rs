use crate::error::config::ConfigError;
use crate::error::error::TablecastResult;
use serde::{Deserialize, Serialize};
use std::fs;

pub const PIN_TABLE: &str = "pinterest_data";
pub const GEO_TABLE: &str = "geolocation_data";
pub const USER_TABLE: &str = "user_data";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct EndpointConfig {
    pub invoke_url: String,
    pub pin_topic: String,
    pub geo_topic: String,
    pub user_topic: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopicBinding {
    pub table: String,
    pub topic: String,
}

impl TopicBinding {
    fn new(table: &str, topic: &str) -> Self {
        TopicBinding {
            table: table.to_string(),
            topic: topic.to_string(),
        }
    }
}

impl EndpointConfig {
    pub fn from_yaml_file(path: &str) -> TablecastResult<Self> {
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::new(path, e.to_string()))?;
        let config = serde_yaml::from_str(&raw).map_err(|e| ConfigError::new(path, e.to_string()))?;
        Ok(config)
    }

    // Emission order is fixed: pin, then geo, then user.
    pub fn bindings(&self) -> Vec<TopicBinding> {
        vec![
            TopicBinding::new(PIN_TABLE, &self.pin_topic),
            TopicBinding::new(GEO_TABLE, &self.geo_topic),
            TopicBinding::new(USER_TABLE, &self.user_topic),
        ]
    }
}
