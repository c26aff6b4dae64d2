use crate::ids;
use crate::model::Operation;
use yew::prelude::*;

fn symbol(op: Operation) -> &'static str {
    match op {
        Operation::Add => "+",
        Operation::Subtract => "−",
        Operation::Multiply => "×",
        Operation::Divide => "÷",
    }
}

#[function_component]
pub fn CalculatorPanel() -> Html {
    let input_style = "width:120px;";
    html! {
        <section style="border:1px solid #30363d; border-radius:8px; padding:10px 14px;">
            <h2 style="margin:0 0 8px 0; font-size:18px;">{"Calculator"}</h2>
            <div style="display:flex; gap:8px;">
                <input id={ids::NUM1} type="text" style={input_style} />
                <input id={ids::NUM2} type="text" style={input_style} />
            </div>
            <div style="display:flex; gap:6px; margin-top:8px;">
                { for Operation::ALL.iter().map(|op| html! {
                    <button id={op.element_id()} title={op.label()}>{ symbol(*op) }</button>
                }) }
            </div>
            <p id={ids::RESULT_VALUE} style="font-variant-numeric:tabular-nums;"></p>
        </section>
    }
}
