//! Viewer connection settings.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ViewerError, ViewerResult};

pub const DEFAULT_ADDRESS: &str = "127.0.0.1:12321";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerConfig {
    /// `host:port` of the viewer server
    pub address: String,
    pub connect_timeout_ms: u64,
    /// Read/write timeout per call; 0 blocks forever
    pub io_timeout_ms: u64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS.to_string(),
            connect_timeout_ms: 2_000,
            io_timeout_ms: 5_000,
        }
    }
}

impl ViewerConfig {
    pub fn from_yaml_str(content: &str) -> ViewerResult<Self> {
        let config: ViewerConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_yaml(path: &Path) -> ViewerResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn validate(&self) -> ViewerResult<()> {
        if self.address.trim().is_empty() {
            return Err(ViewerError::Config {
                what: "address is empty".to_string(),
            });
        }
        if self.connect_timeout_ms == 0 {
            return Err(ViewerError::Config {
                what: "connect_timeout_ms must be positive".to_string(),
            });
        }
        Ok(())
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn io_timeout(&self) -> Option<Duration> {
        (self.io_timeout_ms > 0).then(|| Duration::from_millis(self.io_timeout_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg = ViewerConfig::from_yaml_str("address: viewer.local:4000\n").unwrap();
        assert_eq!(cfg.address, "viewer.local:4000");
        assert_eq!(cfg.connect_timeout_ms, 2_000);
        assert_eq!(cfg.io_timeout(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn zero_io_timeout_blocks() {
        let cfg = ViewerConfig {
            io_timeout_ms: 0,
            ..ViewerConfig::default()
        };
        assert_eq!(cfg.io_timeout(), None);
    }

    #[test]
    fn rejects_empty_address_and_zero_connect_timeout() {
        assert!(matches!(
            ViewerConfig::from_yaml_str("address: ''\n"),
            Err(ViewerError::Config { .. })
        ));
        assert!(ViewerConfig::from_yaml_str("connect_timeout_ms: 0\n").is_err());
    }

    #[test]
    fn rejects_unknown_types() {
        assert!(matches!(
            ViewerConfig::from_yaml_str("io_timeout_ms: soon\n"),
            Err(ViewerError::Yaml(_))
        ));
    }
}
