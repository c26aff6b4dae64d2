mod bindings;
mod components;
mod config;
mod error;
mod host;
mod ids;
mod listeners;
mod model;
mod numeric;
mod util;

use components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
