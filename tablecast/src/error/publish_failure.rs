use std::error::Error;
use std::fmt::{self, Display};

#[derive(Debug)]
pub struct PublishFailure {
    pub topic: String,
    pub status: u16,
    pub body: String,
}

impl PublishFailure {
    pub fn new<T>(topic: T, status: u16, body: String) -> Self
    where
        T: Into<String>,
    {
        PublishFailure {
            topic: topic.into(),
            status,
            body,
        }
    }
}

impl Error for PublishFailure {}

impl Display for PublishFailure {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "failed to send data to topic {}: {} - {}",
            self.topic, self.status, self.body
        )
    }
}
