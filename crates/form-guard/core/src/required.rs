//! Required-field check run on every submission attempt

use crate::field::FormField;
use crate::notify::Notifier;

/// Notification shown when at least one required field is blank
pub const REQUIRED_FIELDS_MESSAGE: &str = "Por favor complete todos los campos obligatorios.";

/// A value is blank when nothing but whitespace is left after trimming
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Result of evaluating one submission attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every required field has content; let the submission through
    Proceed,
    /// At least one required field is blank; the submission must be cancelled
    Blocked {
        message: String,
        /// Names of the blank required fields, in document order
        invalid_fields: Vec<String>,
    },
}

impl SubmitOutcome {
    pub fn is_blocked(&self) -> bool {
        matches!(self, SubmitOutcome::Blocked { .. })
    }
}

/// Checks that every required field of a form has a non-blank value.
///
/// Each call is a full re-evaluation: blank required fields get their
/// validity flag set, filled ones get it cleared. Fields that are not
/// required are never read or touched.
#[derive(Debug, Clone)]
pub struct RequiredFieldValidator {
    message: String,
}

impl Default for RequiredFieldValidator {
    fn default() -> Self {
        Self::new(REQUIRED_FIELDS_MESSAGE)
    }
}

impl RequiredFieldValidator {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Evaluate one submission attempt over the form's fields
    pub fn check<'a, F, I>(&self, fields: I) -> SubmitOutcome
    where
        F: FormField + ?Sized + 'a,
        I: IntoIterator<Item = &'a mut F>,
    {
        let mut invalid_fields = Vec::new();

        for field in fields {
            if !field.is_required() {
                continue;
            }

            if is_blank(&field.value()) {
                field.set_invalid(true);
                invalid_fields.push(field.name());
            } else {
                field.set_invalid(false);
            }
        }

        if invalid_fields.is_empty() {
            tracing::debug!("required fields present, submission proceeds");
            SubmitOutcome::Proceed
        } else {
            tracing::debug!(?invalid_fields, "blank required fields, submission blocked");
            SubmitOutcome::Blocked {
                message: self.message.clone(),
                invalid_fields,
            }
        }
    }

    /// [`check`](Self::check); when blocked, run `cancel` and then show the
    /// message through `notifier`.
    ///
    /// Returns `true` when the submission may proceed.
    pub fn check_and_notify<'a, F, I, N, C>(&self, fields: I, notifier: &N, cancel: C) -> bool
    where
        F: FormField + ?Sized + 'a,
        I: IntoIterator<Item = &'a mut F>,
        N: Notifier + ?Sized,
        C: FnOnce(),
    {
        match self.check(fields) {
            SubmitOutcome::Proceed => true,
            SubmitOutcome::Blocked { message, .. } => {
                cancel();
                notifier.notify(&message);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::MemoryField;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingNotifier {
        messages: RefCell<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    fn registration_form() -> Vec<MemoryField> {
        vec![
            MemoryField::required("primer_nombre", "Juan"),
            MemoryField::required("primer_apellido", "Perez"),
            MemoryField::new("segundo_nombre", ""),
        ]
    }

    #[test]
    fn test_blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank("   "));
        assert!(is_blank("\t\n "));
        assert!(!is_blank(" a "));
        assert!(!is_blank("0"));
    }

    #[test]
    fn test_all_required_filled_proceeds() {
        let mut fields = registration_form();
        let outcome = RequiredFieldValidator::default().check(fields.iter_mut());

        assert_eq!(outcome, SubmitOutcome::Proceed);
        assert!(fields.iter().all(|f| !f.invalid));
    }

    #[test]
    fn test_blank_and_whitespace_fields_block() {
        let mut fields = vec![
            MemoryField::required("ci", ""),
            MemoryField::required("primer_nombre", "Juan"),
            MemoryField::required("primer_apellido", "   "),
        ];
        let outcome = RequiredFieldValidator::default().check(fields.iter_mut());

        assert_eq!(
            outcome,
            SubmitOutcome::Blocked {
                message: REQUIRED_FIELDS_MESSAGE.to_string(),
                invalid_fields: vec!["ci".to_string(), "primer_apellido".to_string()],
            }
        );
        assert!(fields[0].invalid);
        assert!(!fields[1].invalid);
        assert!(fields[2].invalid);
    }

    #[test]
    fn test_optional_fields_never_flagged() {
        let mut fields = vec![
            MemoryField::new("segundo_nombre", ""),
            MemoryField {
                invalid: true,
                ..MemoryField::new("tercer_nombre", "")
            },
        ];
        let outcome = RequiredFieldValidator::default().check(fields.iter_mut());

        assert_eq!(outcome, SubmitOutcome::Proceed);
        assert!(!fields[0].invalid);
        // untouched, even though the flag is stale
        assert!(fields[1].invalid);
    }

    #[test]
    fn test_resubmit_without_changes_blocks_again() {
        let validator = RequiredFieldValidator::default();
        let mut fields = vec![MemoryField::required("ci", " ")];

        assert!(validator.check(fields.iter_mut()).is_blocked());
        assert!(validator.check(fields.iter_mut()).is_blocked());
        assert!(fields[0].invalid);
    }

    #[test]
    fn test_fixed_field_is_cleared_on_next_attempt() {
        let validator = RequiredFieldValidator::default();
        let mut fields = vec![
            MemoryField::required("ci", ""),
            MemoryField::required("primer_nombre", "Juan"),
        ];

        assert!(validator.check(fields.iter_mut()).is_blocked());
        assert!(fields[0].invalid);

        fields[0].value = "1234567".to_string();
        assert_eq!(validator.check(fields.iter_mut()), SubmitOutcome::Proceed);
        assert!(!fields[0].invalid);
    }

    #[test]
    fn test_empty_form_proceeds() {
        let mut fields: Vec<MemoryField> = Vec::new();
        assert_eq!(
            RequiredFieldValidator::default().check(fields.iter_mut()),
            SubmitOutcome::Proceed
        );
    }

    #[test]
    fn test_notifier_called_once_only_when_blocked() {
        let validator = RequiredFieldValidator::default();
        let notifier = RecordingNotifier::default();

        let mut ok = registration_form();
        assert!(validator.check_and_notify(ok.iter_mut(), &notifier, || {
            notifier.messages.borrow_mut().push("cancel".to_string())
        }));
        assert!(notifier.messages.borrow().is_empty());

        let mut bad = vec![
            MemoryField::required("ci", ""),
            MemoryField::required("password", ""),
        ];
        assert!(!validator.check_and_notify(bad.iter_mut(), &notifier, || {
            notifier.messages.borrow_mut().push("cancel".to_string())
        }));
        // cancelled before the message is shown
        assert_eq!(
            *notifier.messages.borrow(),
            vec![
                "cancel".to_string(),
                "Por favor complete todos los campos obligatorios.".to_string()
            ]
        );
    }

    #[test]
    fn test_check_and_notify_through_trait_object() {
        let validator = RequiredFieldValidator::default();
        let recording = RecordingNotifier::default();
        let notifier: &dyn Notifier = &recording;
        let mut fields = vec![MemoryField::required("ci", "")];
        let mut cancelled = false;

        assert!(!validator.check_and_notify(fields.iter_mut(), notifier, || cancelled = true));
        assert!(cancelled);
        assert_eq!(recording.messages.borrow().len(), 1);
    }

    #[test]
    fn test_custom_message() {
        let validator = RequiredFieldValidator::new("Please fill in all required fields.");
        let mut fields = vec![MemoryField::required("ci", "")];

        match validator.check(fields.iter_mut()) {
            SubmitOutcome::Blocked { message, .. } => {
                assert_eq!(message, "Please fill in all required fields.")
            }
            SubmitOutcome::Proceed => panic!("expected blocked outcome"),
        }
    }
}
