use common::{run_fetch, ViewState};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::api_client::ApiClient;

/// Page state plus a callback that runs one fetch for a selection value.
#[hook]
pub fn use_temperature_fetch() -> (UseStateHandle<ViewState>, Callback<String>) {
    let view_state = use_state(ViewState::default);

    let fetch = {
        let view_state = view_state.clone();

        use_callback((), move |selection: String, _| {
            let view_state = view_state.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let client = ApiClient::from_settings();
                run_fetch(&client, &selection, |state| view_state.set(state)).await;
            });
        })
    };

    (view_state, fetch)
}

/// Calls `on_resize` on every `resize` event of the window while the
/// calling component is mounted.
#[hook]
pub fn use_window_resize(on_resize: Callback<()>) {
    use_effect_with((), move |_| {
        let window = web_sys::window();
        let listener = Closure::<dyn Fn()>::new(move || on_resize.emit(()));

        if let Some(window) = &window {
            if let Err(err) = window
                .add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
            {
                log::warn!("Could not listen for window resize: {:?}", err);
            }
        }

        move || {
            if let Some(window) = window {
                if let Err(err) = window
                    .remove_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
                {
                    log::warn!("Could not stop listening for window resize: {:?}", err);
                }
            }
        }
    });
}
