use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::utils::duration::{self, parse_duration_string};
use crate::utils::secret_str::SecretString;

/// Fallback values applied by the session validator.
pub struct DefaultSessionConfiguration {
    pub name: &'static str,
    pub expiration: &'static str,
    pub inactivity: &'static str,
    pub remember_me_duration: &'static str,
}

pub const DEFAULT_SESSION_CONFIGURATION: DefaultSessionConfiguration =
    DefaultSessionConfiguration {
        name: "sessionguard_session",
        expiration: "1h",
        inactivity: "5m",
        remember_me_duration: "1M",
    };

/// Session section of the configuration file, as loaded. Every field may be
/// empty until the validator has run.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SessionConfiguration {
    pub name: String,
    pub domain: String,
    pub expiration: String,
    pub inactivity: String,
    pub remember_me_duration: String,
    pub secret: SecretString,
    pub redis: Option<RedisConfiguration>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RedisConfiguration {
    pub host: String,
    pub port: i64,
    pub sentinel: String,
}

impl RedisConfiguration {
    pub fn is_socket(&self) -> bool {
        self.host.starts_with('/')
    }
}

/// Where sessions are kept, derived from the `redis` section.
#[derive(Clone, Copy, Debug)]
pub enum CacheBackend<'a> {
    Local,
    Direct(&'a RedisConfiguration),
    Sentinel {
        name: &'a str,
        redis: &'a RedisConfiguration,
    },
}

impl SessionConfiguration {
    pub fn backend(&self) -> CacheBackend<'_> {
        match &self.redis {
            None => CacheBackend::Local,
            Some(redis) if !redis.sentinel.is_empty() => CacheBackend::Sentinel {
                name: &redis.sentinel,
                redis,
            },
            Some(redis) => CacheBackend::Direct(redis),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("session {field}: {source}")]
    Duration {
        field: &'static str,
        #[source]
        source: duration::Error,
    },
}

/// Session timings resolved from a validated configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionConfig {
    pub expiration: Duration,
    pub inactivity: Duration,
    pub remember_me_duration: Duration,
}

impl TryFrom<&SessionConfiguration> for SessionConfig {
    type Error = Error;

    fn try_from(cfg: &SessionConfiguration) -> Result<Self, Self::Error> {
        Ok(SessionConfig {
            expiration: parse_field("expiration", &cfg.expiration)?,
            inactivity: parse_field("inactivity", &cfg.inactivity)?,
            remember_me_duration: parse_field("remember_me_duration", &cfg.remember_me_duration)?,
        })
    }
}

fn parse_field(field: &'static str, value: &str) -> Result<Duration, Error> {
    parse_duration_string(value).map_err(|source| Error::Duration { field, source })
}
