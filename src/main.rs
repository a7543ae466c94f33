use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod error;
mod hooks;
mod reveal;
mod utils {
    pub mod scroll;
    pub mod throttle;
}
mod effects {
    pub mod animations;
    pub mod parallax;
    pub mod visibility;
}
mod contact {
    pub mod form;
    pub mod submission;
    pub mod validation;
}
mod components {
    pub mod cards;
    pub mod header;
    pub mod notification;
    pub mod scroll;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use components::notification::ToastProvider;
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
            <ToastProvider>
                <Switch<Route> render={switch} />
            </ToastProvider>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
