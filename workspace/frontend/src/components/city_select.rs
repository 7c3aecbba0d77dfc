use common::CITIES;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CitySelectProps {
    /// Current selection value, empty when nothing is chosen
    pub value: String,
    pub on_change: Callback<String>,
}

/// Dropdown with one option per catalogue city, valued `"lat,lon"`.
#[function_component(CitySelect)]
pub fn city_select(props: &CitySelectProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(target) = e.target_dyn_into::<web_sys::HtmlSelectElement>() {
                let value = target.value();
                log::debug!("City selection changed to: {:?}", value);
                on_change.emit(value);
            }
        })
    };

    html! {
        <label class="form-control w-full sm:max-w-xs">
            <div class="label">
                <span class="label-text">{"City"}</span>
            </div>
            <select id="city-select" class="select select-bordered w-full" {onchange}>
                <option value="" selected={props.value.is_empty()}>{"Select a city"}</option>
                { for CITIES.iter().map(|city| {
                    let value = city.option_value();
                    let selected = props.value == value;
                    html! {
                        <option value={value} selected={selected}>{city.name}</option>
                    }
                })}
            </select>
        </label>
    }
}
