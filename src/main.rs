use takkeh_landing::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("starting takkeh landing page");
    yew::Renderer::<App>::new().render();
}
