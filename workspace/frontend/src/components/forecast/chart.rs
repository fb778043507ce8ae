use common::views::LoadPoint;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    pub fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

// Plotly wants plain objects, not ES Maps.
fn to_js(value: &serde_json::Value) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub points: Vec<LoadPoint>,
}

/// OPD / Emergency / ICU load as a line chart.
#[function_component(SurgeChart)]
pub fn surge_chart(props: &Props) -> Html {
    let chart_ref = use_node_ref();

    use_effect_with((chart_ref.clone(), props.points.clone()), move |(chart_ref, points)| {
        if let Some(element) = chart_ref.cast::<Element>() {
            let labels: Vec<&str> = points.iter().map(|p| p.label).collect();
            let values: Vec<u32> = points.iter().map(|p| p.value).collect();

            let trace = serde_json::json!([{
                "x": labels,
                "y": values,
                "type": "scatter",
                "mode": "lines+markers",
                "line": {"color": "#2563eb", "width": 3, "shape": "spline"},
                "name": "Patients"
            }]);

            let layout = serde_json::json!({
                "margin": {"t": 10, "r": 10, "l": 50, "b": 30},
                "paper_bgcolor": "rgba(0,0,0,0)",
                "plot_bgcolor": "rgba(0,0,0,0)",
                "xaxis": {"showgrid": false},
                "yaxis": {"showgrid": true, "gridcolor": "#eee", "rangemode": "tozero"}
            });

            let config = serde_json::json!({"responsive": true, "displayModeBar": false});

            let div_id = element.id();
            match (
                to_js(&trace),
                to_js(&layout),
                to_js(&config),
            ) {
                (Ok(data), Ok(layout), Ok(config)) if !div_id.is_empty() => {
                    newPlot(&div_id, data, layout, config);
                }
                _ => log::error!("Failed to prepare surge chart"),
            }
        }
        || ()
    });

    html! {
        <div ref={chart_ref} id="chart-surge-projection" class="chart-container" style="height: 300px;"></div>
    }
}
