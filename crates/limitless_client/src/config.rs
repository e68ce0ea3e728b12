use crate::LimitlessError;
use secrecy::SecretString;

/// Base URL used when `LIMITLESS_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "https://api.limitless.ai";

/// Path of the lifelogs listing endpoint, relative to the base URL.
pub const DEFAULT_ENDPOINT: &str = "v1/lifelogs";

#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: SecretString,
    pub base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, LimitlessError> {
        Self::from_env_with(|k| std::env::var(k).ok())
    }

    /// Testable helper that reads configuration values using the provided
    /// function. This avoids mutating global environment in tests and keeps
    /// `from_env()` small and safe.
    pub fn from_env_with<F>(mut get: F) -> Result<Self, LimitlessError>
    where
        F: FnMut(&str) -> Option<String>,
    {
        let api = get("LIMITLESS_API_KEY")
            .ok_or_else(|| LimitlessError::Config("LIMITLESS_API_KEY missing".into()))?;
        // An empty LIMITLESS_API_URL counts as unset.
        let base_url = get("LIMITLESS_API_URL")
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.into());
        Ok(Self {
            api_key: SecretString::new(api.into()),
            base_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_env_missing_api_key() {
        let get = |k: &str| match k {
            "LIMITLESS_API_KEY" => None,
            "LIMITLESS_API_URL" => Some("http://localhost".into()),
            _ => None,
        };
        let res = Config::from_env_with(get);
        assert!(res.is_err());
    }

    #[test]
    fn from_env_reads_values() {
        let get = |k: &str| match k {
            "LIMITLESS_API_KEY" => Some("sekrit".into()),
            "LIMITLESS_API_URL" => Some("http://localhost".into()),
            _ => None,
        };
        let cfg = Config::from_env_with(get).expect("cfg");
        assert_eq!(cfg.base_url, "http://localhost");
    }

    #[test]
    fn from_env_defaults_base_url() {
        let get = |k: &str| match k {
            "LIMITLESS_API_KEY" => Some("sekrit".into()),
            _ => None,
        };
        let cfg = Config::from_env_with(get).expect("cfg");
        assert_eq!(cfg.base_url, DEFAULT_API_URL);
    }

    #[test]
    fn from_env_empty_base_url_falls_back_to_default() {
        let get = |k: &str| match k {
            "LIMITLESS_API_KEY" => Some("sekrit".into()),
            "LIMITLESS_API_URL" => Some(String::new()),
            _ => None,
        };
        let cfg = Config::from_env_with(get).expect("cfg");
        assert_eq!(cfg.base_url, DEFAULT_API_URL);
    }
}
