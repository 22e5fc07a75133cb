use std::env;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Maximum number of symbols accepted in one screener request.
    pub max_batch_size: usize,
    /// Number of entries in each opportunity list of the overview.
    pub opportunity_limit: usize,
    /// Allow cross-origin requests from any origin.
    pub cors_allow_any: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            max_batch_size: 500,
            opportunity_limit: 3,
            cors_allow_any: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    /// Missing or unparseable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            max_batch_size: lookup("MAX_BATCH_SIZE")
                .and_then(|v| v.parse::<usize>().ok())
                .filter(|v| *v > 0)
                .unwrap_or(defaults.max_batch_size),
            opportunity_limit: lookup("OPPORTUNITY_LIMIT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.opportunity_limit),
            cors_allow_any: lookup("CORS_ALLOW_ANY")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(defaults.cors_allow_any),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3001);
        assert_eq!(config.max_batch_size, 500);
        assert_eq!(config.opportunity_limit, 3);
        assert!(config.cors_allow_any);
    }

    #[test]
    fn test_values_from_lookup() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("MAX_BATCH_SIZE", "50"),
            ("OPPORTUNITY_LIMIT", "5"),
            ("CORS_ALLOW_ANY", "false"),
        ]));
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.max_batch_size, 50);
        assert_eq!(config.opportunity_limit, 5);
        assert!(!config.cors_allow_any);
    }

    #[test]
    fn test_unparseable_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "not-a-port"),
            ("MAX_BATCH_SIZE", "0"),
        ]));
        assert_eq!(config.port, 3001);
        assert_eq!(config.max_batch_size, 500);
    }
}
