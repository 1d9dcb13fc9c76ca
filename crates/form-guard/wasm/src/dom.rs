//! DOM elements as [`FormField`]s

use form_guard_core::{FormField, GuardError};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{console, Element, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement, NodeList};

/// Form controls that carry a `value` property
enum Control {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
    Select(HtmlSelectElement),
}

/// A form control wrapped for the core rules.
///
/// The validity flag is a CSS class on the element; the required marker is
/// decided by whoever selected the element.
pub struct DomField<'a> {
    element: Element,
    control: Control,
    required: bool,
    invalid_class: &'a str,
}

impl<'a> DomField<'a> {
    /// Returns `None` for elements that are not form controls
    pub fn from_element(element: Element, required: bool, invalid_class: &'a str) -> Option<Self> {
        let control = if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            Control::Input(input.clone())
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            Control::TextArea(area.clone())
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            Control::Select(select.clone())
        } else {
            return None;
        };

        Some(Self {
            element,
            control,
            required,
            invalid_class,
        })
    }
}

impl FormField for DomField<'_> {
    fn name(&self) -> String {
        match &self.control {
            Control::Input(input) => input.name(),
            Control::TextArea(area) => area.name(),
            Control::Select(select) => select.name(),
        }
    }

    fn value(&self) -> String {
        match &self.control {
            Control::Input(input) => input.value(),
            Control::TextArea(area) => area.value(),
            Control::Select(select) => select.value(),
        }
    }

    fn set_value(&mut self, value: &str) {
        match &self.control {
            Control::Input(input) => input.set_value(value),
            Control::TextArea(area) => area.set_value(value),
            Control::Select(select) => select.set_value(value),
        }
    }

    fn is_required(&self) -> bool {
        self.required
    }

    fn set_invalid(&mut self, invalid: bool) {
        let classes = self.element.class_list();
        let result = if invalid {
            classes.add_1(self.invalid_class)
        } else {
            classes.remove_1(self.invalid_class)
        };

        if let Err(err) = result {
            console::warn_1(&format!("form-guard: could not toggle class: {}", describe(&err)).into());
        }
    }
}

/// Elements of a `querySelectorAll` result, in document order
pub fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// `root.querySelectorAll(selector)`; fails on a malformed selector
pub fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>, GuardError> {
    root.query_selector_all(selector)
        .map(|list| elements(&list))
        .map_err(|err| GuardError::Dom(format!("querySelectorAll('{}'): {}", selector, describe(&err))))
}

/// Best-effort text for a thrown JS value
pub fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
