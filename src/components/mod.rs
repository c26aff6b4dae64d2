pub mod app;
pub mod calculator_panel;
pub mod greeting_panel;
pub mod temperature_panel;
