use std::rc::Rc;

use yew::prelude::*;
use log::{error, info};

mod config;
mod contact_form;
mod content;
mod error;
mod animation {
    pub mod count_up;
    pub mod point_cloud;
    pub mod visibility;
}
mod components {
    pub mod count_up;
    pub mod fade_in;
    pub mod host;
    pub mod section_header;
    pub mod viewport;
    pub mod wireframe_mesh;
}
mod pages {
    pub mod contact;
    pub mod faq;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod landing;
    pub mod marquee;
    pub mod pricing;
    pub mod services;
    pub mod work;
}

use content::SiteContent;
use pages::landing::Landing;

#[derive(Properties, PartialEq)]
struct AppProps {
    content: Rc<SiteContent>,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    info!("Rendering landing page");
    html! {
        <main>
            <Landing content={props.content.clone()} />
        </main>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", err));
    }

    info!("Starting application");
    match SiteContent::embedded() {
        Ok(content) => {
            yew::Renderer::<App>::with_props(AppProps { content: Rc::new(content) }).render();
        }
        Err(err) => error!("Site content rejected, nothing to render: {}", err),
    }
}
