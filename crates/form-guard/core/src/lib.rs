//! form-guard core
//!
//! DOM-independent rules behind the browser form guard: the required-field
//! check run on submit and the uppercase normalization run on blur.
//! The WASM crate adapts DOM elements to [`FormField`] and calls into here.

pub mod config;
pub mod error;
pub mod field;
pub mod notify;
pub mod required;
pub mod uppercase;

pub use config::GuardConfig;
pub use error::{GuardError, Result};
pub use field::{FormField, MemoryField};
pub use notify::Notifier;
pub use required::{is_blank, RequiredFieldValidator, SubmitOutcome, REQUIRED_FIELDS_MESSAGE};
pub use uppercase::{UppercaseNormalizer, NAME_MARKERS};
