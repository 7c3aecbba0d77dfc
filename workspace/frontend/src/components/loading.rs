use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    pub text: String,
}

/// Busy indicator shown while a request is in flight.
#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div id="loading-spinner" class="flex flex-col justify-center items-center py-12 gap-4">
            <span class="loading loading-spinner loading-lg text-primary"></span>
            <p class="text-sm text-gray-500">{&props.text}</p>
        </div>
    }
}
