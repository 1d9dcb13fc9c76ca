//! form-guard WASM
//!
//! Browser bindings for the form guard. On load it binds every form to the
//! required-field check and every text input to the uppercase rule for
//! name fields. Configuration comes from a `data-form-guard` JSON attribute
//! on `<html>`, or from the object passed to `install`.

use std::rc::Rc;

use form_guard_core::{GuardConfig, GuardError, REQUIRED_FIELDS_MESSAGE};
use wasm_bindgen::prelude::*;

pub mod bind;
pub mod dom;
#[cfg(feature = "console-log")]
pub mod logging;

pub use bind::{
    evaluate_form, install_when_ready, install_within, page_config, AlertNotifier, Installed,
    CONFIG_ATTR, INSTALLED_ATTR,
};
pub use dom::DomField;

/// Set the panic hook and, with `autostart`, install using the page configuration
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console-log")]
    logging::init();

    #[cfg(feature = "autostart")]
    autostart();
}

#[cfg(feature = "autostart")]
fn autostart() {
    let result = bind::document()
        .and_then(|document| page_config(&document))
        .and_then(|config| install_when_ready(config, Rc::new(AlertNotifier)));

    if let Err(err) = result {
        bind::report(&err);
    }
}

fn to_js(err: GuardError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Deserialize an optional config object; `undefined`/`null` give the defaults
fn parse_config(config: JsValue) -> Result<GuardConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(GuardConfig::default());
    }

    serde_wasm_bindgen::from_value(config)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))
}

/// Install the guard on the page.
///
/// Returns `false` when the page is already guarded (e.g. by autostart),
/// in which case nothing new is bound.
///
/// # Example (JavaScript)
/// ```javascript
/// install({ invalidClass: 'has-error', uppercaseMarkers: ['nombre'] });
/// ```
#[wasm_bindgen(js_name = install)]
pub fn install_js(config: JsValue) -> Result<bool, JsValue> {
    let config = parse_config(config)?;
    install_when_ready(config, Rc::new(AlertNotifier)).map_err(to_js)
}

/// Run the required-field check on one form without showing any alert.
///
/// Toggles the invalid class like a real submission would and returns
/// whether the form may be submitted.
#[wasm_bindgen(js_name = checkForm)]
pub fn check_form_js(form: web_sys::Element, config: JsValue) -> Result<bool, JsValue> {
    let config = parse_config(config)?;
    config.validate().map_err(to_js)?;
    let outcome = evaluate_form(&form, &config, &config.validator()).map_err(to_js)?;
    Ok(!outcome.is_blocked())
}

/// The value a text field with this name holds after losing focus
#[wasm_bindgen(js_name = normalizeValue)]
pub fn normalize_value_js(name: &str, value: &str, config: JsValue) -> Result<String, JsValue> {
    let config = parse_config(config)?;
    Ok(config.normalizer().normalize_value(name, value))
}

#[wasm_bindgen(js_name = requiredFieldsMessage)]
pub fn required_fields_message_js() -> String {
    REQUIRED_FIELDS_MESSAGE.to_string()
}
