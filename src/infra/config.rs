#![allow(dead_code)]

use std::time::Duration;

use crate::domain::Location;

pub const DEFAULT_BASE_URL: &str = "https://app.wewantwaste.co.uk/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);
pub const DEFAULT_POSTCODE: &str = "NR32";
pub const DEFAULT_AREA: &str = "Lowestoft";

/// Connection settings for the skip pricing API.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
    /// Location the booking flow prices skips for.
    pub default_location: Location,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            default_location: Location::new(DEFAULT_POSTCODE, DEFAULT_AREA),
        }
    }
}

impl ApiConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_lowestoft() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "https://app.wewantwaste.co.uk/api");
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.default_location, Location::new("NR32", "Lowestoft"));
    }

    #[test]
    fn test_builders_override_connection_only() {
        let config = ApiConfig::default()
            .with_base_url("http://localhost:8080")
            .with_timeout(Duration::from_millis(250));
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_millis(250));
        assert_eq!(config.default_location.postcode, "NR32");
    }
}
