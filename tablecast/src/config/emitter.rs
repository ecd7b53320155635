use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct EmitterConfig {
    pub iterations: u64,
    pub max_offset: u64,
    pub sleep_max_secs: u64,
    pub request_timeout_secs: u64,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        EmitterConfig {
            iterations: 500,
            max_offset: 11000,
            sleep_max_secs: 2,
            request_timeout_secs: 5,
        }
    }
}
