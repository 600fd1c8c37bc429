use std::net::SocketAddr;

use anyhow::Context;

pub const DEFAULT_LOG_FILTER: &str = "nutritrack=debug,axum=info,tower_http=info";

#[derive(Debug, Clone)]
pub struct LogConfig {
    pub filter: String,
    pub json: bool,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            log: LogConfig {
                filter: DEFAULT_LOG_FILTER.into(),
                json: false,
            },
        }
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, falling back to defaults for anything unset.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let port = match lookup("APP_PORT") {
            Some(v) => v
                .trim()
                .parse::<u16>()
                .with_context(|| format!("APP_PORT must be a port number, got {v:?}"))?,
            None => defaults.port,
        };
        Ok(Self {
            host: lookup("APP_HOST").unwrap_or(defaults.host),
            port,
            log: LogConfig {
                filter: lookup("RUST_LOG").unwrap_or(defaults.log.filter),
                json: lookup("LOG_FORMAT")
                    .map(|v| v == "json")
                    .unwrap_or(defaults.log.json),
            },
        })
    }

    pub fn addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.host, self.port))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let cfg = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.log.filter, DEFAULT_LOG_FILTER);
        assert!(!cfg.log.json);
        assert_eq!(cfg.addr().unwrap().port(), 8080);
    }

    #[test]
    fn reads_overrides() {
        let cfg = AppConfig::from_lookup(lookup(&[
            ("APP_HOST", "127.0.0.1"),
            ("APP_PORT", "3000"),
            ("LOG_FORMAT", "json"),
            ("RUST_LOG", "nutritrack=trace"),
        ]))
        .unwrap();
        assert_eq!(cfg.addr().unwrap().to_string(), "127.0.0.1:3000");
        assert!(cfg.log.json);
        assert_eq!(cfg.log.filter, "nutritrack=trace");
    }

    #[test]
    fn rejects_bad_port() {
        let err = AppConfig::from_lookup(lookup(&[("APP_PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("APP_PORT"));
    }
}
