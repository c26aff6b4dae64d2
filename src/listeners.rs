use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, KeyboardEvent};

use crate::bindings::{BINDINGS, Binding, dispatch};
use crate::config::Profile;
use crate::error::BindError;
use crate::host::{DomHost, Host};

type EventCallback = Closure<dyn FnMut(web_sys::Event)>;

/// Attached listeners. Closures live as long as this value; call
/// [`Listeners::detach`] before dropping it.
#[derive(Default)]
pub struct Listeners {
    attached: Vec<(Element, &'static str, EventCallback)>,
}

impl Listeners {
    fn attach<H: Host + 'static>(
        &mut self,
        document: &Document,
        binding: &Binding,
        host: Rc<H>,
        profile: Rc<Profile>,
    ) -> Result<(), BindError> {
        let target = document
            .get_element_by_id(binding.element_id)
            .ok_or(BindError::MissingElement(binding.element_id))?;
        let event_name = binding.event.dom_name();
        let handler = binding.handler;
        let callback = Closure::wrap(Box::new(move |e: web_sys::Event| {
            // clicks carry no key
            let key = e.dyn_ref::<KeyboardEvent>().map(|k| k.key());
            dispatch(&*host, handler, &profile, key.as_deref());
        }) as Box<dyn FnMut(_)>);
        target
            .add_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref())
            .map_err(|_| BindError::Listener {
                id: binding.element_id,
                event: event_name,
            })?;
        self.attached.push((target, event_name, callback));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.attached.len()
    }

    pub fn detach(self) {
        for (target, event_name, callback) in &self.attached {
            let _ = target
                .remove_event_listener_with_callback(event_name, callback.as_ref().unchecked_ref());
        }
    }
}

/// Wires every entry of the binding table to `document`, running handlers
/// against `host`. On failure nothing stays attached.
pub fn bind_document<H: Host + 'static>(
    document: &Document,
    host: Rc<H>,
    profile: Rc<Profile>,
) -> Result<Listeners, BindError> {
    let mut listeners = Listeners::default();
    for binding in BINDINGS {
        if let Err(err) = listeners.attach(document, binding, host.clone(), profile.clone()) {
            listeners.detach();
            return Err(err);
        }
    }
    Ok(listeners)
}

/// Binds the current page to the live DOM host.
pub fn register_page(profile: Profile) -> Result<Listeners, BindError> {
    let window = web_sys::window().ok_or(BindError::NoWindow)?;
    let document = window.document().ok_or(BindError::NoDocument)?;
    let host = Rc::new(DomHost::new(window, document.clone()));
    bind_document(&document, host, Rc::new(profile))
}
