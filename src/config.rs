use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Simulated latency of a single catalog lookup, in milliseconds
    #[serde(default = "default_lookup_delay_ms")]
    pub lookup_delay_ms: u64,

    /// Simulated latency of a recommendation request
    #[serde(default = "default_recommend_delay_ms")]
    pub recommend_delay_ms: u64,

    /// Simulated latency of recording or listing watch events
    #[serde(default = "default_history_delay_ms")]
    pub history_delay_ms: u64,

    /// Simulated latency of deriving interest weights
    #[serde(default = "default_interests_delay_ms")]
    pub interests_delay_ms: u64,

    /// Maximum number of watch events kept in the log
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,

    /// Maximum number of items shown in the watch history view
    #[serde(default = "default_history_view_limit")]
    pub history_view_limit: usize,

    /// Fixed seed for the recommendation shuffle; random when unset
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_lookup_delay_ms() -> u64 {
    800
}

fn default_recommend_delay_ms() -> u64 {
    1000
}

fn default_history_delay_ms() -> u64 {
    300
}

fn default_interests_delay_ms() -> u64 {
    500
}

fn default_history_capacity() -> usize {
    50
}

fn default_history_view_limit() -> usize {
    12
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            lookup_delay_ms: default_lookup_delay_ms(),
            recommend_delay_ms: default_recommend_delay_ms(),
            history_delay_ms: default_history_delay_ms(),
            interests_delay_ms: default_interests_delay_ms(),
            history_capacity: default_history_capacity(),
            history_view_limit: default_history_view_limit(),
            rng_seed: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

        if config.history_capacity == 0 {
            anyhow::bail!("HISTORY_CAPACITY must be at least 1");
        }

        Ok(config)
    }

    /// Configuration with every simulated delay disabled
    pub fn without_latency() -> Self {
        Self {
            lookup_delay_ms: 0,
            recommend_delay_ms: 0,
            history_delay_ms: 0,
            interests_delay_ms: 0,
            ..Self::default()
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_demo_latencies() {
        let config = Config::default();
        assert_eq!(config.lookup_delay_ms, 800);
        assert_eq!(config.recommend_delay_ms, 1000);
        assert_eq!(config.history_delay_ms, 300);
        assert_eq!(config.interests_delay_ms, 500);
        assert_eq!(config.history_capacity, 50);
        assert_eq!(config.history_view_limit, 12);
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_deserialize_from_vars() {
        let vars = vec![
            ("PORT".to_string(), "8080".to_string()),
            ("RNG_SEED".to_string(), "42".to_string()),
            ("HISTORY_CAPACITY".to_string(), "10".to_string()),
        ];
        let config: Config = envy::from_iter(vars).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rng_seed, Some(42));
        assert_eq!(config.history_capacity, 10);
        assert_eq!(config.host, "127.0.0.1");
    }

    #[test]
    fn test_without_latency() {
        let config = Config::without_latency();
        assert_eq!(config.lookup_delay_ms, 0);
        assert_eq!(config.recommend_delay_ms, 0);
        assert_eq!(config.history_capacity, 50);
    }
}
