use std::error::Error;
use std::fmt::{self, Display};

#[derive(Debug)]
pub struct ConfigError {
    pub path: String,
    pub reason: String,
}

impl ConfigError {
    pub fn new<P, R>(path: P, reason: R) -> Self
    where
        P: Into<String>,
        R: Into<String>,
    {
        ConfigError {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

impl Error for ConfigError {}

impl Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "invalid configuration '{}': {}", self.path, self.reason)
    }
}
