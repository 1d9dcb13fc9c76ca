//! Uppercase normalization applied when a name field loses focus

use crate::field::FormField;

/// Name substrings that mark a first-name / last-name field
pub const NAME_MARKERS: [&str; 2] = ["nombre", "apellido"];

/// Upper-cases the value of fields whose name contains one of the markers.
///
/// Matching is case-sensitive and unanchored: `primer_nombre`,
/// `nombre_completo` and `apellido2` all qualify, `Nombre` does not.
/// Case conversion is [`str::to_uppercase`], the locale-independent
/// Unicode default mapping (`"josé"` becomes `"JOSÉ"`, `"ß"` becomes `"SS"`).
#[derive(Debug, Clone)]
pub struct UppercaseNormalizer {
    markers: Vec<String>,
}

impl Default for UppercaseNormalizer {
    fn default() -> Self {
        Self::new(NAME_MARKERS)
    }
}

impl UppercaseNormalizer {
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            markers: markers.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether a field with this name gets upper-cased
    pub fn applies_to(&self, name: &str) -> bool {
        self.markers
            .iter()
            .any(|marker| !marker.is_empty() && name.contains(marker.as_str()))
    }

    /// The value the field should hold after losing focus
    pub fn normalize_value(&self, name: &str, value: &str) -> String {
        if self.applies_to(name) {
            value.to_uppercase()
        } else {
            value.to_string()
        }
    }

    /// Apply the rule to a field in place.
    ///
    /// Returns `true` when the value was rewritten.
    pub fn normalize<F: FormField + ?Sized>(&self, field: &mut F) -> bool {
        let name = field.name();
        if !self.applies_to(&name) {
            return false;
        }

        let value = field.value();
        let upper = value.to_uppercase();
        if upper == value {
            return false;
        }

        field.set_value(&upper);
        tracing::debug!(field = %name, "value upper-cased");
        true
    }
}
