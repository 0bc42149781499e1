use crate::model::config::{
    CacheBackend, RedisConfiguration, SessionConfiguration, DEFAULT_SESSION_CONFIGURATION,
};
use crate::model::validation::{DurationField, Provider, ValidationError};
use crate::utils::duration::parse_duration_string;
use crate::utils::secret_str::SecretString;

use super::StructValidator;

/// Validates the session configuration and fills in defaults in place.
pub fn validate_session(configuration: &mut SessionConfiguration, validator: &mut StructValidator) {
    if configuration.name.is_empty() {
        tracing::debug!(name = DEFAULT_SESSION_CONFIGURATION.name, "default session name");
        configuration.name = DEFAULT_SESSION_CONFIGURATION.name.to_string();
    }

    match configuration.backend() {
        CacheBackend::Local => tracing::trace!("no redis configured"),
        CacheBackend::Direct(redis) => validate_redis(&configuration.secret, redis, validator),
        CacheBackend::Sentinel { name, .. } => {
            tracing::trace!(sentinel = name, "redis sentinel");
            validate_redis_sentinel(&configuration.secret, validator)
        }
    }

    validate_duration(
        &mut configuration.expiration,
        DEFAULT_SESSION_CONFIGURATION.expiration,
        DurationField::Expiration,
        validator,
    );
    validate_duration(
        &mut configuration.inactivity,
        DEFAULT_SESSION_CONFIGURATION.inactivity,
        DurationField::Inactivity,
        validator,
    );
    validate_duration(
        &mut configuration.remember_me_duration,
        DEFAULT_SESSION_CONFIGURATION.remember_me_duration,
        DurationField::RememberMeDuration,
        validator,
    );

    if configuration.domain.is_empty() {
        validator.push(ValidationError::DomainMissing);
    }

    if configuration.domain.contains('*') {
        validator.push(ValidationError::DomainWildcard);
    }
}

fn validate_duration(
    value: &mut String,
    default: &str,
    field: DurationField,
    validator: &mut StructValidator,
) {
    if value.is_empty() {
        tracing::debug!(field = %field, value = default, "default duration");
        *value = default.to_string();
    } else if let Err(source) = parse_duration_string(value) {
        validator.push(ValidationError::DurationParse { field, source });
    }
}

fn validate_redis(secret: &SecretString, redis: &RedisConfiguration, validator: &mut StructValidator) {
    if secret.is_empty() {
        validator.push(ValidationError::SecretRequired {
            provider: Provider::Redis,
        });
    }

    if !redis.is_socket() && redis.port == 0 {
        validator.push(ValidationError::PortZero);
    } else if redis.port <= -1 || redis.port > 65535 {
        validator.push(ValidationError::PortRange {
            provider: Provider::Redis,
        });
    }
}

fn validate_redis_sentinel(secret: &SecretString, validator: &mut StructValidator) {
    if secret.is_empty() {
        validator.push(ValidationError::SecretRequired {
            provider: Provider::RedisSentinel,
        });
    }
}
