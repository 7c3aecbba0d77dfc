use yew::prelude::*;

use crate::components::city_select::CitySelect;
use crate::components::loading::Loading;
use crate::components::message_box::MessageBox;
use crate::components::temperature_chart::TemperatureChart;
use crate::hooks::use_temperature_fetch;

/// City picker, fetch trigger and the chart area. Everything visible is
/// derived from the current `ViewState` through its layout.
#[function_component(TemperaturesPage)]
pub fn temperatures_page() -> Html {
    let selection = use_state(String::new);
    let (view_state, fetch) = use_temperature_fetch();
    let layout = view_state.layout();

    let on_select = {
        let selection = selection.clone();
        Callback::from(move |value: String| selection.set(value))
    };

    let on_fetch = {
        let selection = selection.clone();
        Callback::from(move |_: MouseEvent| {
            log::debug!("User requested temperatures for selection: {:?}", *selection);
            fetch.emit((*selection).clone());
        })
    };

    html! {
        <div class="min-h-screen bg-base-200 py-10 px-4">
            <div class="card bg-base-100 shadow-xl max-w-4xl mx-auto">
                <div class="card-body gap-6">
                    <div>
                        <h1 class="card-title text-3xl">{"Daily temperatures"}</h1>
                        <p class="text-sm text-gray-500">
                            {"Daily mean temperature reported for the selected city."}
                        </p>
                    </div>

                    <div class="flex flex-col sm:flex-row gap-4 sm:items-end">
                        <CitySelect value={(*selection).clone()} on_change={on_select} />
                        <button
                            id="fetch-button"
                            class="btn btn-primary"
                            disabled={!layout.trigger_enabled}
                            onclick={on_fetch}
                        >
                            <i class="fas fa-chart-bar"></i>
                            {" Show chart"}
                        </button>
                    </div>

                    <div class="min-h-[400px]">
                        {if layout.show_spinner {
                            html! { <Loading text="Loading temperatures..." /> }
                        } else {
                            html! {}
                        }}
                        {if let Some(message) = layout.message.clone() {
                            html! { <MessageBox message={message} /> }
                        } else {
                            html! {}
                        }}
                        <TemperatureChart
                            series={view_state.series().cloned()}
                            visible={layout.show_chart}
                        />
                    </div>
                </div>
            </div>
        </div>
    }
}
