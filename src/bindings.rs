//! Which element/event pair runs which handler, and how a handler runs
//! against a host.

use crate::config::Profile;
use crate::host::Host;
use crate::ids;
use crate::model::{self, Effect, Operation, Scale};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    KeyDown,
}

impl EventKind {
    pub fn dom_name(self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::KeyDown => "keydown",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handler {
    Greeting,
    Calculate(Operation),
    Convert(Scale),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Binding {
    pub element_id: &'static str,
    pub event: EventKind,
    pub handler: Handler,
}

const fn click(element_id: &'static str, handler: Handler) -> Binding {
    Binding {
        element_id,
        event: EventKind::Click,
        handler,
    }
}

const fn keydown(element_id: &'static str, handler: Handler) -> Binding {
    Binding {
        element_id,
        event: EventKind::KeyDown,
        handler,
    }
}

pub const BINDINGS: &[Binding] = &[
    click(ids::ALERT_BUTTON, Handler::Greeting),
    click(ids::ADD, Handler::Calculate(Operation::Add)),
    click(ids::SUBTRACT, Handler::Calculate(Operation::Subtract)),
    click(ids::MULTIPLY, Handler::Calculate(Operation::Multiply)),
    click(ids::DIVIDE, Handler::Calculate(Operation::Divide)),
    keydown(ids::FAHRENHEIT, Handler::Convert(Scale::Fahrenheit)),
    keydown(ids::CELSIUS, Handler::Convert(Scale::Celsius)),
];

/// Reads the handler's inputs from `host` and computes its effects.
/// `key` is the pressed key for keydown events, `None` for clicks.
pub fn effects_for<H: Host + ?Sized>(
    host: &H,
    handler: Handler,
    profile: &Profile,
    key: Option<&str>,
) -> Vec<Effect> {
    match handler {
        Handler::Greeting => model::greet(&host.input_value(ids::FAV_NUM), profile),
        Handler::Calculate(op) => model::calculate(
            op,
            &host.input_value(ids::NUM1),
            &host.input_value(ids::NUM2),
        ),
        Handler::Convert(scale) => match key {
            Some(key) => model::convert_on_key(scale, key, &host.input_value(scale.element_id())),
            None => Vec::new(),
        },
    }
}

/// Runs one handler to completion against `host`.
pub fn dispatch<H: Host + ?Sized>(
    host: &H,
    handler: Handler,
    profile: &Profile,
    key: Option<&str>,
) {
    for effect in effects_for(host, handler, profile, key) {
        host.apply(&effect);
    }
}
