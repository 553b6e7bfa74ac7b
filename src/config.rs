// src/config.rs
use reqwest::Url;

use crate::error::ConfigError;

pub const DEFAULT_SERVER: &str = "http://localhost:5000/";

/// Path of the prediction endpoint, relative to the page it is served from.
pub const PREDICT_PATH: &str = "predict";

#[derive(Clone, Debug)]
pub struct WidgetConfig {
    /// `predict`, resolved against the page the widget is served from.
    pub endpoint: Url,
}

impl WidgetConfig {
    /// Reads `.env` (if any) and then the environment.
    ///
    /// | Variable          | Default                  |
    /// |-------------------|--------------------------|
    /// | `MINDCARE_SERVER` | `http://localhost:5000/` |
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let server = std::env::var("MINDCARE_SERVER").unwrap_or_else(|_| DEFAULT_SERVER.into());
        Self::for_server(&server)
    }

    pub fn for_server(server: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidServerUrl {
            value: server.to_string(),
            reason,
        };
        let server = Url::parse(server).map_err(|e| invalid(e.to_string()))?;
        let endpoint = server.join(PREDICT_PATH).map_err(|e| invalid(e.to_string()))?;
        Ok(Self { endpoint })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_resolves_like_a_relative_fetch() {
        let cfg = WidgetConfig::for_server("http://localhost:5000/").unwrap();
        assert_eq!(cfg.endpoint.as_str(), "http://localhost:5000/predict");

        let cfg = WidgetConfig::for_server("http://example.com/app/index.html").unwrap();
        assert_eq!(cfg.endpoint.as_str(), "http://example.com/app/predict");

        // No trailing slash: last segment is a "file" and gets replaced.
        let cfg = WidgetConfig::for_server("http://example.com/app").unwrap();
        assert_eq!(cfg.endpoint.as_str(), "http://example.com/predict");
    }

    #[test]
    fn rejects_garbage_server() {
        let err = WidgetConfig::for_server("not a url").unwrap_err();
        assert!(err.to_string().contains("not a url"));
    }
}
