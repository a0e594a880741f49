pub mod components;
pub mod config;
pub mod content;
pub mod dom;
pub mod error;
pub mod nav;
pub mod pages;
pub mod responsive;
pub mod scene;
pub mod stats;

use nav::{use_section_tracking, NavProvider, Navbar};
use pages::{About, Contact, Hero, Services};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(Landing)]
pub fn landing() -> Html {
    use_section_tracking();

    html! {
        <main class="landing-page">
            <Hero />
            <About />
            <Services />
            <Contact />
        </main>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Landing /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <NavProvider>
                <Navbar />
                <Switch<Route> render={switch} />
            </NavProvider>
        </BrowserRouter>
    }
}
