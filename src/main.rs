use log::info;
use yew::prelude::*;

mod config;
mod hooks;
mod motion {
    pub mod error;
    pub mod easing;
    pub mod value;
    pub mod keyframes;
    pub mod spring;
    pub mod progress;
    pub mod looping;
    pub mod drivers;
    pub mod interaction;
}
mod components {
    pub mod icons;
    pub mod background;
    pub mod scroll_section;
    pub mod connecting_line;
    pub mod cta_button;
    pub mod bobbing;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component(App)]
pub fn app() -> Html {
    info!("Rendering Landing page");
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if console_log::init_with_level(config::log_level()).is_err() {
        gloo_console::error!("error initializing log");
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
