// File: form-guard/core/src/config.rs
// Purpose: Guard configuration (selectors, class name, message, markers)

use serde::{Deserialize, Serialize};

use crate::error::{GuardError, Result};
use crate::required::{RequiredFieldValidator, REQUIRED_FIELDS_MESSAGE};
use crate::uppercase::{UppercaseNormalizer, NAME_MARKERS};

/// Page-level configuration.
///
/// Every key is optional; missing keys fall back to the defaults below.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardConfig {
    /// Forms that get a submit interceptor
    #[serde(default = "default_form_selector")]
    pub form_selector: String,

    /// Fields checked on submit, relative to each form
    #[serde(default = "default_required_selector")]
    pub required_selector: String,

    /// Inputs that get the uppercase reaction on blur
    #[serde(default = "default_text_input_selector")]
    pub text_input_selector: String,

    /// Class toggled on blank required fields
    #[serde(default = "default_invalid_class")]
    pub invalid_class: String,

    #[serde(default = "default_message")]
    pub message: String,

    #[serde(default = "default_uppercase_markers")]
    pub uppercase_markers: Vec<String>,
}

fn default_form_selector() -> String {
    "form".to_string()
}

fn default_required_selector() -> String {
    "[required]".to_string()
}

fn default_text_input_selector() -> String {
    r#"input[type="text"]"#.to_string()
}

fn default_invalid_class() -> String {
    "is-invalid".to_string()
}

fn default_message() -> String {
    REQUIRED_FIELDS_MESSAGE.to_string()
}

fn default_uppercase_markers() -> Vec<String> {
    NAME_MARKERS.iter().map(|m| m.to_string()).collect()
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            form_selector: default_form_selector(),
            required_selector: default_required_selector(),
            text_input_selector: default_text_input_selector(),
            invalid_class: default_invalid_class(),
            message: default_message(),
            uppercase_markers: default_uppercase_markers(),
        }
    }
}

impl GuardConfig {
    /// Parse a JSON document (e.g. a `data-form-guard` attribute).
    ///
    /// Values are checked by [`validate`](Self::validate) when the guard is built.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reject values that would silently disable a behavior
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("formSelector", &self.form_selector),
            ("requiredSelector", &self.required_selector),
            ("textInputSelector", &self.text_input_selector),
            ("invalidClass", &self.invalid_class),
            ("message", &self.message),
        ];

        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(GuardError::InvalidConfig(format!("{} must not be empty", key)));
            }
        }

        // classList.add throws on whitespace inside a token
        if self.invalid_class.chars().any(char::is_whitespace) {
            return Err(GuardError::InvalidConfig(format!(
                "invalidClass must be a single class name, got '{}'",
                self.invalid_class
            )));
        }

        Ok(())
    }

    pub fn validator(&self) -> RequiredFieldValidator {
        RequiredFieldValidator::new(self.message.clone())
    }

    pub fn normalizer(&self) -> UppercaseNormalizer {
        UppercaseNormalizer::new(self.uppercase_markers.iter().cloned())
    }
}
