use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlInputElement, Window};

use crate::model::Effect;
use crate::util::{cerror, clog};

/// Everything a handler may touch on the page.
pub trait Host {
    /// Current text of an input element; empty when it is absent.
    fn input_value(&self, id: &str) -> String;
    fn alert(&self, message: &str);
    fn log(&self, message: &str);
    fn set_text(&self, id: &str, text: &str);

    fn apply(&self, effect: &Effect) {
        match effect {
            Effect::Alert(msg) => self.alert(msg),
            Effect::Log(msg) => self.log(msg),
            Effect::SetText { target, text } => self.set_text(target, text),
        }
    }
}

/// The live page.
pub struct DomHost {
    window: Window,
    document: Document,
}

impl DomHost {
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }
}

impl Host for DomHost {
    fn input_value(&self, id: &str) -> String {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default()
    }

    fn alert(&self, message: &str) {
        if let Err(err) = self.window.alert_with_message(message) {
            cerror(&dropped_alert(&err, message));
        }
    }

    fn log(&self, message: &str) {
        clog(message);
    }

    fn set_text(&self, id: &str, text: &str) {
        match self.document.get_element_by_id(id) {
            Some(el) => el.set_inner_html(text),
            None => cerror(&format!("output element #{id} missing, dropped: {text}")),
        }
    }
}

pub(crate) fn dropped_alert(err: &JsValue, message: &str) -> String {
    format!("alert failed ({err:?}), dropped: {message}")
}

#[cfg(test)]
pub mod recording {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::Host;
    use crate::model::Effect;

    /// In-memory page: fixed input values, every effect recorded.
    #[derive(Default)]
    pub struct RecordingHost {
        pub inputs: HashMap<&'static str, String>,
        pub effects: RefCell<Vec<Effect>>,
        pub texts: RefCell<HashMap<String, String>>,
    }

    impl RecordingHost {
        pub fn with_inputs(inputs: &[(&'static str, &str)]) -> Self {
            Self {
                inputs: inputs.iter().map(|(k, v)| (*k, v.to_string())).collect(),
                ..Default::default()
            }
        }

        pub fn set_input(&mut self, id: &'static str, value: &str) {
            self.inputs.insert(id, value.to_string());
        }

        pub fn text(&self, id: &str) -> Option<String> {
            self.texts.borrow().get(id).cloned()
        }

        pub fn take(&self) -> Vec<Effect> {
            std::mem::take(&mut *self.effects.borrow_mut())
        }
    }

    impl Host for RecordingHost {
        fn input_value(&self, id: &str) -> String {
            self.inputs.get(id).cloned().unwrap_or_default()
        }

        fn alert(&self, message: &str) {
            self.effects
                .borrow_mut()
                .push(Effect::Alert(message.to_string()));
        }

        fn log(&self, message: &str) {
            self.effects.borrow_mut().push(Effect::Log(message.to_string()));
        }

        fn set_text(&self, id: &str, text: &str) {
            self.texts
                .borrow_mut()
                .insert(id.to_string(), text.to_string());
        }
    }
}
