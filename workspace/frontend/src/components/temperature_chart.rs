use common::{ChartData, TemperatureSeries, DEGREE_SUFFIX, SERIES_LABEL};
use plotly::color::Rgba;
use plotly::common::{Line, Marker};
use plotly::Bar;
use serde_json::{json, Value};
use wasm_bindgen::prelude::*;
use yew::prelude::*;

use crate::hooks::use_window_resize;

pub const CHART_SURFACE_ID: &str = "temperature-chart";

const X_AXIS_TITLE: &str = "Date";
const Y_AXIS_TITLE: &str = "Temperature (°C)";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = Plotly, js_name = newPlot)]
    fn new_plot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = Plotly)]
    fn react(div_id: &str, data: JsValue, layout: JsValue, config: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch, js_namespace = ["Plotly", "Plots"], js_name = resize)]
    fn resize_plot(div_id: &str) -> Result<JsValue, JsValue>;
}

/// The page's single Plotly chart. Created once, then only updated or resized.
struct ChartHandle {
    surface_id: &'static str,
    created: bool,
}

impl ChartHandle {
    fn new(surface_id: &'static str) -> Self {
        Self {
            surface_id,
            created: false,
        }
    }

    fn create(&mut self) {
        if self.created {
            return;
        }

        log::debug!("Creating chart on #{}", self.surface_id);
        let result = payload(&ChartData::empty()).and_then(|(data, layout, config)| {
            new_plot(self.surface_id, data, layout, config).map_err(|e| format!("{:?}", e))
        });

        match result {
            Ok(_) => self.created = true,
            Err(err) => log::error!("Failed to create chart: {}", err),
        }
    }

    fn update(&self, data: &ChartData) {
        if !self.created {
            log::debug!("Chart update skipped, chart not created");
            return;
        }

        log::trace!("Updating chart with {} bars", data.values.len());
        let result = payload(data).and_then(|(data, layout, config)| {
            react(self.surface_id, data, layout, config).map_err(|e| format!("{:?}", e))
        });

        if let Err(err) = result {
            log::error!("Failed to update chart: {}", err);
            return;
        }
        // The surface may have been hidden until this render.
        self.resize();
    }

    fn resize(&self) {
        if !self.created {
            return;
        }

        if let Err(err) = resize_plot(self.surface_id) {
            log::warn!("Failed to resize chart: {:?}", err);
        }
    }
}

fn payload(data: &ChartData) -> Result<(JsValue, JsValue, JsValue), String> {
    Ok((
        to_js(&chart_traces(data))?,
        to_js(&chart_layout(data))?,
        to_js(&chart_config())?,
    ))
}

fn to_js(value: &Value) -> Result<JsValue, String> {
    let json = serde_json::to_string(value).map_err(|e| e.to_string())?;
    js_sys::JSON::parse(&json).map_err(|e| format!("{:?}", e))
}

pub(crate) fn chart_traces(data: &ChartData) -> Value {
    let trace = Bar::new(data.labels.clone(), data.values.clone())
        .name(SERIES_LABEL)
        .marker(
            Marker::new()
                .color(Rgba::new(59, 130, 246, 0.7))
                .line(Line::new().color(Rgba::new(59, 130, 246, 1.0)).width(1.0)),
        )
        .hover_text_array(data.hover_text.clone())
        .hover_template("%{hovertext}<extra></extra>");

    json!([trace])
}

pub(crate) fn chart_layout(data: &ChartData) -> Value {
    json!({
        "autosize": true,
        "margin": {"t": 40, "r": 20, "l": 70, "b": 60},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "font": {"family": "Inter, sans-serif", "color": "#374151"},
        "showlegend": true,
        "legend": {"orientation": "h", "x": 0, "y": 1.15, "font": {"size": 14}},
        "barcornerradius": 8,
        "xaxis": {
            "title": {"text": X_AXIS_TITLE, "font": {"size": 16}},
            "type": "category",
            "tickmode": "array",
            "tickvals": data.labels,
            "ticktext": data.tick_text,
            "tickfont": {"color": "#4b5563"},
            "showgrid": false
        },
        "yaxis": {
            "title": {"text": Y_AXIS_TITLE, "font": {"size": 16}},
            "ticksuffix": DEGREE_SUFFIX,
            "tickfont": {"color": "#4b5563"},
            "gridcolor": "#e5e7eb",
            "zeroline": false
        },
        "transition": {"duration": 1000, "easing": "cubic-out"}
    })
}

pub(crate) fn chart_config() -> Value {
    json!({"responsive": true, "displayModeBar": false})
}

#[derive(Properties, PartialEq)]
pub struct TemperatureChartProps {
    #[prop_or_default]
    pub series: Option<TemperatureSeries>,
    pub visible: bool,
}

#[function_component(TemperatureChart)]
pub fn temperature_chart(props: &TemperatureChartProps) -> Html {
    let chart = use_mut_ref(|| ChartHandle::new(CHART_SURFACE_ID));

    {
        let chart = chart.clone();
        use_effect_with((), move |_| {
            chart.borrow_mut().create();
            || ()
        });
    }

    {
        let chart = chart.clone();
        use_effect_with(props.series.clone(), move |series| {
            if let Some(series) = series {
                chart.borrow().update(&ChartData::from(series));
            }
            || ()
        });
    }

    {
        let chart = chart.clone();
        use_window_resize(Callback::from(move |_| chart.borrow().resize()));
    }

    html! {
        <div
            id={CHART_SURFACE_ID}
            class={classes!("w-full", "h-[400px]", (!props.visible).then_some("hidden"))}
        ></div>
    }
}
