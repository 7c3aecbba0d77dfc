use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::not_found::NotFound;
use crate::pages::temperatures::TemperaturesPage;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/index.html")]
    Index,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    log::debug!("Routing to: {:?}", routes);
    match routes {
        Route::Home | Route::Index => {
            log::trace!("Rendering Temperatures page");
            html! { <TemperaturesPage /> }
        }
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <NotFound /> }
        }
    }
}
