use super::{
    calculator_panel::CalculatorPanel, greeting_panel::GreetingPanel,
    temperature_panel::TemperaturePanel,
};
use crate::config::Profile;
use crate::listeners::register_page;
use crate::util::{cerror, clog};
use yew::prelude::*;

/// Renders the page once, then hands its elements to the binding table.
/// The app keeps no state, so handler writes into the page are never re-rendered away.
#[function_component(App)]
pub fn app() -> Html {
    use_effect_with((), move |_| {
        let listeners = match register_page(Profile::load()) {
            Ok(listeners) => {
                clog(&format!("page ready: {} listeners bound", listeners.len()));
                Some(listeners)
            }
            Err(err) => {
                cerror(&format!("page left inert: {err}"));
                None
            }
        };
        move || {
            if let Some(listeners) = listeners {
                listeners.detach();
            }
        }
    });

    html! {
        <div id="root" style="max-width:640px; margin:24px auto; display:flex; flex-direction:column; gap:18px; font-family:sans-serif;">
            <GreetingPanel />
            <CalculatorPanel />
            <TemperaturePanel />
        </div>
    }
}
