mod app;
mod appheader;
mod inputs;
mod material;
mod notification_bell;
mod preferences;
mod settings_page;

fn main() {
    console_log::init_with_level(log::Level::Debug).expect("Unable to init logger");
    yew::Renderer::<app::App>::new().render();
}
