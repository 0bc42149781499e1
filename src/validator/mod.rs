pub mod session;

use crate::model::validation::{ValidationError, Warning};

/// Collects every problem found in a configuration pass.
///
/// Validators only ever push; the caller decides afterwards whether the
/// collected errors are fatal.
#[derive(Debug, Default)]
pub struct StructValidator {
    errors: Vec<ValidationError>,
    warnings: Vec<Warning>,
}

impl StructValidator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, err: ValidationError) {
        self.errors.push(err);
    }

    pub fn push_warning(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }
}
