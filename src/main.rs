mod components;
mod config;
mod error;
mod input;
mod state;

use components::app::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("pinch zoom text starting");
    yew::Renderer::<App>::new().render();
}
