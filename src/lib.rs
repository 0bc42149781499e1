pub mod model;
pub mod utils;
pub mod validator;

use model::config::{SessionConfig, SessionConfiguration};
use model::validation::Warning;
use validator::{session::validate_session, StructValidator};

/// Outcome of validating one configuration file.
#[derive(Debug)]
pub struct Report {
    pub session: SessionConfiguration,
    pub validator: StructValidator,
}

impl Report {
    /// Runtime timings, available only when no errors were collected.
    pub fn session_config(&self) -> Option<SessionConfig> {
        if self.validator.has_errors() {
            return None;
        }
        SessionConfig::try_from(&self.session).ok()
    }
}

/// Loads the file, records unknown keys as warnings and runs the session
/// validator over what was loaded.
pub fn check_file(path: &std::path::Path) -> Result<Report, model::loader::LoadError> {
    let loaded = model::loader::load_from_path(path)?;
    Ok(check(loaded.session, loaded.unknown_keys))
}

pub fn check(mut session: SessionConfiguration, unknown_keys: Vec<String>) -> Report {
    let mut validator = StructValidator::new();
    for key in unknown_keys {
        validator.push_warning(Warning::UnknownKey(key));
    }
    validate_session(&mut session, &mut validator);
    Report { session, validator }
}
