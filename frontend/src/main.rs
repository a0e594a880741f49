use firesafe_site::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    log::info!("Starting {}", firesafe_site::content::COMPANY_NAME);
    yew::Renderer::<App>::new().render();
}
