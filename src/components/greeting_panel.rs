use crate::ids;
use yew::prelude::*;

#[function_component]
pub fn GreetingPanel() -> Html {
    html! {
        <section style="border:1px solid #30363d; border-radius:8px; padding:10px 14px;">
            <h2 style="margin:0 0 8px 0; font-size:18px;">{"Greeting"}</h2>
            <label style="display:flex; align-items:center; gap:8px;">
                <span>{"Favorite number"}</span>
                <input id={ids::FAV_NUM} type="text" />
            </label>
            <button id={ids::ALERT_BUTTON} style="margin-top:8px;">{"Say hello"}</button>
            <p id={ids::OUTPUT}></p>
        </section>
    }
}
