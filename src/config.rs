use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// YouTube Data API key
    pub yt_api_key: String,

    /// YouTube Data API base URL
    #[serde(default = "default_yt_api_url")]
    pub yt_api_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_yt_api_url() -> String {
    "https://www.googleapis.com/youtube/v3".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables (and `.env`, if present)
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of variables
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

        if config.yt_api_key.trim().is_empty() {
            anyhow::bail!("Failed to load config: YT_API_KEY must not be empty");
        }

        Ok(config)
    }

    /// Socket address the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_applied() {
        let config = Config::from_vars(vars(&[("YT_API_KEY", "abc")])).unwrap();
        assert_eq!(config.yt_api_key, "abc");
        assert_eq!(config.yt_api_url, "https://www.googleapis.com/youtube/v3");
        assert_eq!(config.port, 3000);
        assert_eq!(config.bind_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_vars(vars(&[
            ("YT_API_KEY", "abc"),
            ("PORT", "8080"),
            ("HOST", "127.0.0.1"),
            ("YT_API_URL", "http://localhost:9999"),
        ]))
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.yt_api_url, "http://localhost:9999");
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let err = Config::from_vars(vars(&[("PORT", "8080")])).unwrap_err();
        assert!(err.to_string().contains("yt_api_key"));
    }

    #[test]
    fn test_blank_api_key_is_fatal() {
        assert!(Config::from_vars(vars(&[("YT_API_KEY", "  ")])).is_err());
    }

    #[test]
    fn test_invalid_port_is_fatal() {
        assert!(Config::from_vars(vars(&[("YT_API_KEY", "abc"), ("PORT", "http")])).is_err());
    }
}
