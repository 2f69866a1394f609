use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;
use dioxus_logger::tracing::{info, Level};

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("launching signup form in a desktop window");

    let window = WindowBuilder::new()
        .with_title("Create Account")
        .with_resizable(true);
    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(Root);
}

#[component]
fn Root() -> Element {
    ui::App()
}
