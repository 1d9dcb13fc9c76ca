//! Field abstraction shared by the validator and the normalizer

/// A single form control as seen by the guard.
///
/// The browser binding implements this over DOM elements; [`MemoryField`]
/// is an owned implementation for tests and non-DOM hosts.
pub trait FormField {
    /// The `name` identifier (empty when the control has none)
    fn name(&self) -> String;

    /// Current text value
    fn value(&self) -> String;

    fn set_value(&mut self, value: &str);

    /// Whether the control is declared mandatory for submission
    fn is_required(&self) -> bool;

    /// Set or clear the visual validity flag
    fn set_invalid(&mut self, invalid: bool);
}

/// In-memory form field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryField {
    pub name: String,
    pub value: String,
    pub required: bool,
    pub invalid: bool,
}

impl MemoryField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    /// Same as [`MemoryField::new`] with the required marker set
    pub fn required(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            required: true,
            ..Self::new(name, value)
        }
    }
}

impl FormField for MemoryField {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    fn is_required(&self) -> bool {
        self.required
    }

    fn set_invalid(&mut self, invalid: bool) {
        self.invalid = invalid;
    }
}
