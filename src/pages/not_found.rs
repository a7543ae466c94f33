use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="not-found">
            <h1>{"404"}</h1>
            <p>{"This page drifted out of orbit."}</p>
            <Link<Route> to={Route::Home} classes="btn btn-primary">
                {"Back to the homepage"}
            </Link<Route>>
        </section>
    }
}
