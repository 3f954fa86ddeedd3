use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod effects {
    pub mod anchor;
    pub mod button;
    pub mod capture;
    pub mod contact;
    pub mod modal;
    pub mod motion;
    pub mod reveal;
    pub mod sparkle;
}
mod components {
    pub mod back_to_top;
    pub mod contact_form;
    pub mod email_capture;
    pub mod header;
    pub mod hero;
    pub mod loader;
    pub mod luxury_button;
    pub mod material_modal;
    pub mod reveal;
    pub mod sparkle_trail;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
