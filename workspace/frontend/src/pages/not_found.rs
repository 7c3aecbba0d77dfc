use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-md">
                    <h1 class="text-5xl font-bold">{"404"}</h1>
                    <p class="py-6">{"This page does not exist."}</p>
                    <Link<Route> to={Route::Home} classes="btn btn-primary">
                        {"Back to the chart"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
