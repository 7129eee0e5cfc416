mod app;
mod errors;
mod pages;
mod routes;
mod services;
mod shared;

use app::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<App>::new().render();
}
