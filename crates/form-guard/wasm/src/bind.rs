//! Listener registration: submit interceptors on forms, blur reactions on text inputs

use std::rc::Rc;

use form_guard_core::{
    GuardConfig, GuardError, Notifier, RequiredFieldValidator, SubmitOutcome, UppercaseNormalizer,
};
use wasm_bindgen::prelude::*;
use web_sys::{console, Document, Element, Event};

use crate::dom::{describe, query_all, DomField};

/// Set on `<html>` by the first page-level installation
pub const INSTALLED_ATTR: &str = "data-form-guard-installed";

/// Page configuration attribute on `<html>`
pub const CONFIG_ATTR: &str = "data-form-guard";

/// Shows the message with `window.alert`
pub struct AlertNotifier;

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.alert_with_message(message) {
                console::error_1(&format!("form-guard: alert failed: {}", describe(&err)).into());
            }
        }
    }
}

/// What one installation bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Installed {
    pub forms: usize,
    pub text_inputs: usize,
}

/// Everything a handler needs, shared by all handlers of one installation
struct Guard {
    config: GuardConfig,
    validator: RequiredFieldValidator,
    normalizer: UppercaseNormalizer,
    notifier: Rc<dyn Notifier>,
}

impl Guard {
    fn new(config: GuardConfig, notifier: Rc<dyn Notifier>) -> Result<Rc<Self>, GuardError> {
        config.validate()?;
        Ok(Rc::new(Self {
            validator: config.validator(),
            normalizer: config.normalizer(),
            config,
            notifier,
        }))
    }
}

pub fn document() -> Result<Document, GuardError> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| GuardError::Dom("no document available".to_string()))
}

fn document_root(document: &Document) -> Result<Element, GuardError> {
    document
        .document_element()
        .ok_or_else(|| GuardError::Dom("document has no root element".to_string()))
}

/// Required controls of one form, wrapped for the core rules
fn required_fields<'a>(form: &Element, config: &'a GuardConfig) -> Result<Vec<DomField<'a>>, GuardError> {
    Ok(query_all(form, &config.required_selector)?
        .into_iter()
        .filter_map(|element| DomField::from_element(element, true, &config.invalid_class))
        .collect())
}

/// Run the required-field pass over one form, toggling validity classes.
///
/// Does not notify; the caller decides what to do with a blocked outcome.
pub fn evaluate_form(
    form: &Element,
    config: &GuardConfig,
    validator: &RequiredFieldValidator,
) -> Result<SubmitOutcome, GuardError> {
    let mut fields = required_fields(form, config)?;
    Ok(validator.check(fields.iter_mut()))
}

/// Bind every form and text input currently under `root`.
///
/// This is a snapshot: elements added later are not covered.
pub fn install_within(
    root: &Element,
    config: GuardConfig,
    notifier: Rc<dyn Notifier>,
) -> Result<Installed, GuardError> {
    let guard = Guard::new(config, notifier)?;
    bind_root(root, &guard)
}

/// Install on the whole document once its structure is parsed.
///
/// Waits for `DOMContentLoaded` while the document is still loading; the
/// module may also finish loading after that event, in which case the
/// installation runs right away. Returns `false` when the page already
/// has an installation.
pub fn install_when_ready(config: GuardConfig, notifier: Rc<dyn Notifier>) -> Result<bool, GuardError> {
    let document = document()?;
    let root = document_root(&document)?;
    if root.has_attribute(INSTALLED_ATTR) {
        console::debug_1(&"form-guard: already installed".into());
        return Ok(false);
    }

    let guard = Guard::new(config, notifier)?;
    root.set_attribute(INSTALLED_ATTR, "")
        .map_err(|err| dom_error("setAttribute", &err))?;

    if document.ready_state() != "loading" {
        bind_root(&root, &guard)?;
        return Ok(true);
    }

    let on_ready = Closure::once_into_js(move || {
        if let Err(err) = bind_root(&root, &guard) {
            report(&err);
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        .map_err(|err| dom_error("addEventListener(DOMContentLoaded)", &err))?;
    Ok(true)
}

/// Page configuration from the `data-form-guard` attribute on `<html>`
pub fn page_config(document: &Document) -> Result<GuardConfig, GuardError> {
    match document
        .document_element()
        .and_then(|root| root.get_attribute(CONFIG_ATTR))
    {
        Some(json) => GuardConfig::from_json(&json),
        None => Ok(GuardConfig::default()),
    }
}

pub fn report(err: &GuardError) {
    console::error_1(&format!("form-guard: {}", err).into());
}

fn bind_root(root: &Element, guard: &Rc<Guard>) -> Result<Installed, GuardError> {
    let forms = query_all(root, &guard.config.form_selector)?;
    for form in &forms {
        bind_form(form, guard)?;
    }

    let inputs = query_all(root, &guard.config.text_input_selector)?;
    for input in &inputs {
        bind_text_input(input, guard)?;
    }

    let installed = Installed {
        forms: forms.len(),
        text_inputs: inputs.len(),
    };
    console::debug_1(
        &format!(
            "form-guard: bound {} form(s), {} text input(s)",
            installed.forms, installed.text_inputs
        )
        .into(),
    );
    Ok(installed)
}

fn bind_form(form: &Element, guard: &Rc<Guard>) -> Result<(), GuardError> {
    // surface a malformed required selector at install time
    query_all(form, &guard.config.required_selector)?;

    let target = form.clone();
    let guard = Rc::clone(guard);
    let handler = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        match required_fields(&target, &guard.config) {
            Ok(mut fields) => {
                guard
                    .validator
                    .check_and_notify(fields.iter_mut(), &*guard.notifier, || event.prevent_default());
            }
            Err(err) => report(&err),
        }
    });

    form.add_event_listener_with_callback("submit", handler.as_ref().unchecked_ref())
        .map_err(|err| dom_error("addEventListener(submit)", &err))?;
    handler.forget();
    Ok(())
}

fn bind_text_input(input: &Element, guard: &Rc<Guard>) -> Result<(), GuardError> {
    let target = input.clone();
    let guard = Rc::clone(guard);
    let handler = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        if let Some(mut field) = DomField::from_element(target.clone(), false, &guard.config.invalid_class) {
            guard.normalizer.normalize(&mut field);
        }
    });

    input
        .add_event_listener_with_callback("blur", handler.as_ref().unchecked_ref())
        .map_err(|err| dom_error("addEventListener(blur)", &err))?;
    handler.forget();
    Ok(())
}

fn dom_error(call: &str, err: &JsValue) -> GuardError {
    GuardError::Dom(format!("{}: {}", call, describe(err)))
}
