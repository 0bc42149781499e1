use std::fmt;

use thiserror::Error;

use crate::utils::duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DurationField {
    Expiration,
    Inactivity,
    RememberMeDuration,
}

impl fmt::Display for DurationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DurationField::Expiration => "expiration",
            DurationField::Inactivity => "inactivity",
            DurationField::RememberMeDuration => "remember_me_duration",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Provider {
    Redis,
    RedisSentinel,
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Provider::Redis => "redis",
            Provider::RedisSentinel => "redis sentinel",
        })
    }
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Error occurred parsing session {field} string: {source}")]
    DurationParse {
        field: DurationField,
        #[source]
        source: duration::Error,
    },
    #[error("Set domain of the session object")]
    DomainMissing,
    #[error("The domain of the session must be the root domain you're protecting instead of a wildcard domain")]
    DomainWildcard,
    #[error("The session secret must be set when using the {provider} session provider")]
    SecretRequired { provider: Provider },
    #[error("A redis port different than 0 must be provided")]
    PortZero,
    #[error("The port must be between 1 and 65535 for the {provider} session provider")]
    PortRange { provider: Provider },
}

#[derive(Debug, Error)]
pub enum Warning {
    #[error("unknown configuration key: {0}")]
    UnknownKey(String),
}
