use crate::ids;
use yew::prelude::*;

#[function_component]
pub fn TemperaturePanel() -> Html {
    let row_style = "display:flex; align-items:center; gap:8px; margin:4px 0;";
    html! {
        <section style="border:1px solid #30363d; border-radius:8px; padding:10px 14px;">
            <h2 style="margin:0 0 8px 0; font-size:18px;">{"Temperature"}</h2>
            <label style={row_style}>
                <span style="min-width:90px;">{"Fahrenheit"}</span>
                <input id={ids::FAHRENHEIT} type="text" />
            </label>
            <label style={row_style}>
                <span style="min-width:90px;">{"Celsius"}</span>
                <input id={ids::CELSIUS} type="text" />
            </label>
            <div style="font-size:11px; opacity:0.7;">{"Press Enter to convert"}</div>
        </section>
    }
}
